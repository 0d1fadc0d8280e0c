use crate::{node::Model, prelude::*};
use std::collections::BTreeSet;

// Validate that relation and enum fields point at types declared in the model.
pub fn validate_references(model: &Model, errs: &mut ErrorTree) {
    let entities: BTreeSet<&str> = model.models.iter().map(|e| e.name.as_str()).collect();
    let enums: BTreeSet<&str> = model.enums.iter().map(|e| e.name.as_str()).collect();

    for entity in &model.models {
        let mut entity_errs = ErrorTree::new();

        for field in &entity.fields {
            let mut field_errs = ErrorTree::new();

            match field.kind {
                FieldKind::Relation if !entities.contains(field.ty.as_str()) => {
                    err!(
                        field_errs,
                        "relation target '{}' is not an entity in this model",
                        field.ty
                    );
                }
                FieldKind::Enum if !enums.contains(field.ty.as_str()) => {
                    err!(field_errs, "enum '{}' is not declared in this model", field.ty);
                }
                _ => {}
            }

            entity_errs.add_child(field.name.clone(), field_errs);
        }

        errs.add_child(entity.name.clone(), entity_errs);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_and_mutual_relations_resolve() {
        let model = Model::new(
            vec![
                Entity::new(
                    "Node",
                    vec![
                        Field::relation("parent", "Node").optional(),
                        Field::relation("children", "Node").list(),
                        Field::relation("owner", "Owner"),
                    ],
                ),
                Entity::new("Owner", vec![Field::relation("nodes", "Node").list()]),
            ],
            vec![],
        );

        let mut errs = ErrorTree::new();
        validate_references(&model, &mut errs);

        assert!(errs.is_empty(), "{errs}");
    }

    #[test]
    fn unresolved_targets_are_routed_to_the_field() {
        let model = Model::new(
            vec![Entity::new(
                "Post",
                vec![
                    Field::relation("author", "Person"),
                    Field::enumeration("status", "Status"),
                    Field::scalar("title", "Person"),
                ],
            )],
            vec![],
        );

        let mut errs = ErrorTree::new();
        validate_references(&model, &mut errs);

        let routes: Vec<_> = errs.flatten().into_iter().map(|(route, _)| route).collect();
        assert_eq!(routes, ["Post.author", "Post.status"]);
    }
}
