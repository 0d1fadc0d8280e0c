use crate::{
    entity::EntityBuilder,
    naming::complete_name,
    path::dot_slash,
    unit::{Import, Initializer, SourceUnit, Variable},
};
use std::collections::BTreeSet;

const ZOD_MODULE: &str = "zod";
const PRISMA_CLIENT_MODULE: &str = "@prisma/client";
const OPENAPI_MODULE: &str = "@anatine/zod-openapi";
const NESTJS_MODULE: &str = "@anatine/zod-nestjs";
const DECIMAL_MODULE: &str = "decimal.js";
const ENUMS_MODULE: &str = "enums";
const INDEX_MODULE: &str = "./index";

// namespace alias of the user-supplied imports module
const IMPORTS_ALIAS: &str = "imports";

pub(super) fn generate(builder: &EntityBuilder<'_>, unit: &mut SourceUnit) {
    let config = builder.config;

    unit.push(Import::namespace("z", ZOD_MODULE));

    if config.enable_openapi {
        unit.push(Import::named(["$Enums"], PRISMA_CLIENT_MODULE));
        unit.push(Import::named(["extendZodWithOpenApi"], OPENAPI_MODULE));
    }

    if config.generate_dto {
        unit.push(Import::named(["createZodDto"], NESTJS_MODULE));
    }

    if let Some(imports) = &config.imports {
        unit.push(Import::namespace(
            IMPORTS_ALIAS,
            builder.paths.import_specifier(imports),
        ));
    }

    if builder.uses_decimal_helper() {
        unit.push(Import::named(["Decimal"], DECIMAL_MODULE));
    }

    // with OpenAPI on, enum fields go through `$Enums` instead
    if !config.enable_openapi {
        let enums = enum_names(builder);
        if !enums.is_empty() {
            unit.push(Import::named(enums, dot_slash(ENUMS_MODULE)));
        }
    }

    if builder.needs_related_schema() {
        let siblings = sibling_names(builder);
        if !siblings.is_empty() {
            unit.push(Import::named(siblings, INDEX_MODULE));
        }
    }

    if config.enable_openapi {
        unit.push(Variable::new(
            "zodOpenApi",
            Initializer::Expr("extendZodWithOpenApi(z)".to_string()),
        ));
    }
}

// Distinct enum type names, first occurrence order.
fn enum_names(builder: &EntityBuilder<'_>) -> Vec<String> {
    let mut seen = BTreeSet::new();

    builder
        .entity
        .enum_fields()
        .filter(|f| seen.insert(f.ty.as_str()))
        .map(|f| f.ty.clone())
        .collect()
}

// `Complete<T>` and the related schema of every distinct non-self target.
fn sibling_names(builder: &EntityBuilder<'_>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::new();

    for field in builder.entity.relation_fields() {
        if field.ty == builder.entity.name {
            continue;
        }

        for name in [
            complete_name(&field.ty),
            builder.naming.related_name(&field.ty),
        ] {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }

    names
}

///
/// TESTS
///
