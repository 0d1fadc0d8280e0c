use crate::{node::Model, prelude::*};
use std::collections::{BTreeMap, BTreeSet};

/// Names must be non-empty and unique. Entity module names (lower-cased)
/// must also be unique because each one becomes its own source file.
pub fn validate_names(model: &Model, errs: &mut ErrorTree) {
    let mut modules: BTreeMap<String, &str> = BTreeMap::new();
    let mut types: BTreeSet<&str> = BTreeSet::new();

    for entity in &model.models {
        if entity.name.is_empty() {
            err!(errs, "entity name is empty");
            continue;
        }

        if !types.insert(&entity.name) {
            err!(errs, "duplicate entity name '{}'", entity.name);
        } else if let Some(prev) = modules.insert(entity.module_name(), &entity.name) {
            err!(
                errs,
                "entities '{prev}' and '{}' map to the same module '{}'",
                entity.name,
                entity.module_name()
            );
        }

        errs.add_child(entity.name.clone(), validate_field_names(entity));
    }

    for enumeration in &model.enums {
        if enumeration.name.is_empty() {
            err!(errs, "enum name is empty");
            continue;
        }

        if !types.insert(&enumeration.name) {
            err!(errs, "duplicate type name '{}'", enumeration.name);
        }

        let mut members = BTreeSet::new();
        let mut member_errs = ErrorTree::new();
        for member in enumeration.members() {
            if !members.insert(member) {
                err!(member_errs, "duplicate enum member '{member}'");
            }
        }
        errs.add_child(enumeration.name.clone(), member_errs);
    }
}

fn validate_field_names(entity: &Entity) -> ErrorTree {
    let mut errs = ErrorTree::new();
    let mut seen = BTreeSet::new();

    for field in &entity.fields {
        if field.name.is_empty() {
            err!(errs, "field name is empty");
        } else if !seen.insert(field.name.as_str()) {
            err!(errs, "duplicate field '{}'", field.name);
        }
    }

    errs
}

///
/// TESTS
///
