use crate::{
    directive::FieldDocs,
    entity::EntityBuilder,
    naming::complete_name,
    unit::{Initializer, Interface, InterfaceMember, Property, SourceUnit, Variable},
};

pub(super) fn generate(builder: &EntityBuilder<'_>, unit: &mut SourceUnit) {
    unit.push(complete_interface(builder));
    unit.push(related_schema(builder));
}

// structural type of the entity plus its relations
fn complete_interface(builder: &EntityBuilder<'_>) -> Interface {
    let members = builder
        .entity
        .relation_fields()
        .map(|field| {
            let mut ty = complete_name(&field.ty);
            if field.is_list {
                ty.push_str("[]");
            }
            if field.is_optional() {
                ty.push_str(" | null");
            }

            InterfaceMember {
                name: field.name.clone(),
                optional: field.is_optional(),
                ty,
            }
        })
        .collect();

    Interface {
        name: complete_name(&builder.entity.name),
        exported: true,
        extends: vec![format!("z.infer<typeof {}>", builder.model_name())],
        members,
    }
}

// Lazily extends the base schema so sibling units may reference each other
// before either has finished initializing.
fn related_schema(builder: &EntityBuilder<'_>) -> Variable {
    let entity = builder.entity;
    let naming = builder.naming;
    let name = naming.related_name(&entity.name);

    let properties = entity
        .relation_fields()
        .map(|field| {
            let docs = FieldDocs::parse(field.documentation.as_deref());

            Property {
                docs: docs.lines.iter().map(ToString::to_string).collect(),
                name: field.name.clone(),
                value: builder
                    .mapper
                    .field_expr(field, &docs, |target| naming.related_name(target)),
            }
        })
        .collect();

    Variable::new(
        name.as_str(),
        Initializer::Object {
            open: format!("z.lazy(() => {}.extend(", builder.model_name()),
            properties,
            close: "))".to_string(),
        },
    )
    .exported()
    .with_docs([
        format!("{name} contains all relations on your model in addition to the scalars"),
        String::new(),
        "NOTE: Lazy required in case of potential circular dependencies within schema"
            .to_string(),
    ])
    .with_type(format!(
        "z.ZodSchema<{}>",
        complete_name(&entity.name)
    ))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{entity::synthesize, path::ModelPaths, unit::Initializer};
    use zodgen_config::{Config, RelationModel};
    use zodgen_schema::node::{Entity, Field};

    fn user() -> Entity {
        Entity::new(
            "User",
            vec![
                Field::scalar("id", "Int"),
                Field::relation("posts", "Post").list(),
                Field::relation("profile", "Profile").optional(),
                Field::relation("manager", "User")
                    .optional()
                    .documented("Reports to\n@z&.describe('manager')"),
            ],
        )
    }

    #[test]
    fn complete_interface_covers_relation_fields() {
        let unit = synthesize(&user(), &Config::default(), &ModelPaths::default());
        let complete = unit.interface("CompleteUser").unwrap();

        assert!(complete.exported);
        assert_eq!(complete.extends, ["z.infer<typeof UserModel>"]);

        let members: Vec<_> = complete
            .members
            .iter()
            .map(|m| (m.name.as_str(), m.optional, m.ty.as_str()))
            .collect();
        assert_eq!(
            members,
            [
                ("posts", false, "CompletePost[]"),
                ("profile", true, "CompleteProfile | null"),
                ("manager", true, "CompleteUser | null"),
            ]
        );
    }

    #[test]
    fn related_schema_is_lazy_and_typed() {
        let unit = synthesize(&user(), &Config::default(), &ModelPaths::default());
        let related = unit.variable("RelatedUserModel").unwrap();

        assert!(related.exported);
        assert_eq!(related.type_annotation.as_deref(), Some("z.ZodSchema<CompleteUser>"));
        assert_eq!(
            related.docs[0],
            "RelatedUserModel contains all relations on your model in addition to the scalars"
        );

        match &related.initializer {
            Initializer::Object { open, close, .. } => {
                assert_eq!(open, "z.lazy(() => UserModel.extend(");
                assert_eq!(close, "))");
            }
            Initializer::Expr(expr) => panic!("unexpected expression {expr}"),
        }
    }

    #[test]
    fn related_properties_point_at_related_schemas() {
        let unit = synthesize(&user(), &Config::default(), &ModelPaths::default());
        let init = &unit.variable("RelatedUserModel").unwrap().initializer;

        assert_eq!(init.property("posts").unwrap().value, "RelatedPostModel.array()");
        assert_eq!(
            init.property("profile").unwrap().value,
            "RelatedProfileModel.nullable()"
        );

        let manager = init.property("manager").unwrap();
        assert_eq!(manager.docs, ["Reports to"]);
        assert_eq!(
            manager.value,
            "RelatedUserModel.nullable().describe('manager')"
        );
        assert!(init.property("id").is_none());
    }

    #[test]
    fn default_naming_supersedes_the_base_name() {
        let config = Config {
            relation_model: RelationModel::DefaultNaming,
            ..Config::default()
        };
        let unit = synthesize(&user(), &config, &ModelPaths::default());

        let related = unit.variable("UserModel").unwrap();
        assert!(matches!(
            &related.initializer,
            Initializer::Object { open, .. } if open == "z.lazy(() => _UserModel.extend("
        ));
        assert_eq!(
            related.initializer.property("posts").unwrap().value,
            "PostModel.array()"
        );
        assert_eq!(
            unit.interface("CompleteUser").unwrap().extends,
            ["z.infer<typeof _UserModel>"]
        );
    }

    #[test]
    fn no_related_schema_without_relations_or_when_disabled() {
        let plain = Entity::new("Tag", vec![Field::scalar("label", "String")]);
        let unit = synthesize(&plain, &Config::default(), &ModelPaths::default());
        assert!(unit.interface("CompleteTag").is_none());

        let disabled = Config {
            relation_model: RelationModel::Disabled,
            ..Config::default()
        };
        let unit = synthesize(&user(), &disabled, &ModelPaths::default());
        assert!(unit.interface("CompleteUser").is_none());
        assert!(unit.variable("RelatedUserModel").is_none());
    }
}
