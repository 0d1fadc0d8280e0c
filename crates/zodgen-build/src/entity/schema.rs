use crate::{
    directive::FieldDocs,
    entity::EntityBuilder,
    mapper::DECIMAL_HELPER,
    unit::{Class, Initializer, Property, SourceUnit, Variable},
};
use zodgen_schema::node::Field;

const OBJECT_OPEN: &str = "z.object(";
const OBJECT_CLOSE: &str = ")";

// accepts a Decimal, a string or a number and yields a Decimal
const DECIMAL_HELPER_EXPR: &str = "z
  .instanceof(Decimal)
  .or(z.string())
  .or(z.number())
  .refine((value) => {
    try {
      return new Decimal(value)
    } catch (error) {
      return false
    }
  })
  .transform((value) => new Decimal(value))";

pub(super) fn type_helpers(builder: &EntityBuilder<'_>, unit: &mut SourceUnit) {
    if !builder.uses_decimal_helper() {
        return;
    }

    unit.push(
        Variable::new(
            DECIMAL_HELPER,
            Initializer::Expr(DECIMAL_HELPER_EXPR.to_string()),
        )
        .with_docs(["Helper schema for Decimal fields"]),
    );
}

pub(super) fn model_schema(builder: &EntityBuilder<'_>, unit: &mut SourceUnit) {
    let properties = builder
        .entity
        .value_fields()
        .map(|field| property(builder, field))
        .collect();

    unit.push(
        Variable::new(
            builder.model_name(),
            Initializer::Object {
                open: OBJECT_OPEN.to_string(),
                properties,
                close: OBJECT_CLOSE.to_string(),
            },
        )
        .exported(),
    );
}

pub(super) fn dto(builder: &EntityBuilder<'_>, unit: &mut SourceUnit) {
    unit.push(Class {
        name: builder.naming.dto_name(&builder.entity.name),
        exported: true,
        extends: Some(format!("createZodDto({})", builder.model_name())),
    });
}

// base schema property; relation fields never reach this
fn property(builder: &EntityBuilder<'_>, field: &Field) -> Property {
    let docs = FieldDocs::parse(field.documentation.as_deref());

    Property {
        docs: docs.lines.iter().map(ToString::to_string).collect(),
        name: field.name.clone(),
        value: builder.mapper.field_expr(field, &docs, str::to_string),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{entity::synthesize, path::ModelPaths, unit::Initializer};
    use zodgen_config::{Case, Config, RelationModel};
    use zodgen_schema::node::{Entity, Field};

    fn user() -> Entity {
        Entity::new(
            "User",
            vec![
                Field::scalar("id", "Int").documented("Primary key\n@z&.positive()"),
                Field::scalar("email", "String").documented("@z.string().email()"),
                Field::scalar("nickname", "String").optional(),
                Field::relation("posts", "Post").list(),
                Field::enumeration("role", "Role"),
            ],
        )
    }

    #[test]
    fn model_schema_holds_value_fields_in_order() {
        let unit = synthesize(&user(), &Config::default(), &ModelPaths::default());
        let model = unit.variable("UserModel").unwrap();

        assert!(model.exported);
        let names: Vec<_> = model
            .initializer
            .properties()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["id", "email", "nickname", "role"]);
    }

    #[test]
    fn properties_carry_docs_and_directives() {
        let unit = synthesize(&user(), &Config::default(), &ModelPaths::default());
        let init = &unit.variable("UserModel").unwrap().initializer;

        let id = init.property("id").unwrap();
        assert_eq!(id.docs, ["Primary key"]);
        assert_eq!(id.value, "z.number().int().positive()");

        let email = init.property("email").unwrap();
        assert!(email.docs.is_empty());
        assert_eq!(email.value, "z.string().email()");

        assert_eq!(init.property("nickname").unwrap().value, "z.string().nullable()");
        assert_eq!(init.property("role").unwrap().value, "z.nativeEnum(Role)");
    }

    #[test]
    fn model_schema_is_an_object_validator() {
        let unit = synthesize(&user(), &Config::default(), &ModelPaths::default());

        match &unit.variable("UserModel").unwrap().initializer {
            Initializer::Object { open, close, .. } => {
                assert_eq!(open, "z.object(");
                assert_eq!(close, ")");
            }
            Initializer::Expr(expr) => panic!("unexpected expression {expr}"),
        }
    }

    #[test]
    fn dto_extends_the_model_schema() {
        let config = Config {
            model_case: Case::Camel,
            dto_suffix: "Input".to_string(),
            ..Config::default()
        };
        let unit = synthesize(&user(), &config, &ModelPaths::default());
        let dto = unit.class("UserInput").unwrap();

        assert!(dto.exported);
        assert_eq!(dto.extends.as_deref(), Some("createZodDto(userModel)"));
    }

    #[test]
    fn dto_is_skipped_when_disabled() {
        let config = Config {
            generate_dto: false,
            ..Config::default()
        };
        let unit = synthesize(&user(), &config, &ModelPaths::default());

        assert!(unit.class("UserDto").is_none());
    }

    #[test]
    fn default_naming_prefixes_the_base_schema() {
        let config = Config {
            relation_model: RelationModel::DefaultNaming,
            ..Config::default()
        };
        let unit = synthesize(&user(), &config, &ModelPaths::default());

        assert!(unit.variable("_UserModel").is_some());
        assert_eq!(
            unit.class("UserDto").unwrap().extends.as_deref(),
            Some("createZodDto(_UserModel)")
        );
    }

    #[test]
    fn decimal_helper_precedes_the_model_schema() {
        let invoice = Entity::new(
            "Invoice",
            vec![
                Field::scalar("id", "Int"),
                Field::scalar("total", "Decimal"),
            ],
        );
        let config = Config {
            use_decimal_js: true,
            ..Config::default()
        };
        let unit = synthesize(&invoice, &config, &ModelPaths::default());

        let helper = unit.variable("decimalSchema").unwrap();
        assert!(!helper.exported);
        assert_eq!(helper.docs, ["Helper schema for Decimal fields"]);

        let position = |name: &str| {
            unit.declarations
                .iter()
                .position(|d| matches!(d, crate::unit::Declaration::Variable(v) if v.name == name))
        };
        assert!(position("decimalSchema") < position("InvoiceModel"));

        let total = unit.variable("InvoiceModel").unwrap().initializer.property("total");
        assert_eq!(total.unwrap().value, "decimalSchema");
    }

    #[test]
    fn decimal_helper_needs_the_toggle() {
        let invoice = Entity::new("Invoice", vec![Field::scalar("total", "Decimal")]);
        let unit = synthesize(&invoice, &Config::default(), &ModelPaths::default());

        assert!(unit.variable("decimalSchema").is_none());
        assert_eq!(
            unit.variable("InvoiceModel")
                .unwrap()
                .initializer
                .property("total")
                .unwrap()
                .value,
            "z.number()"
        );
    }
}
