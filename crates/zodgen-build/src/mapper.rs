//! Field → validator expression mapping.

use crate::directive::FieldDocs;
use tracing::warn;
use zodgen_config::Config;
use zodgen_schema::prelude::*;

/// Expression for values the generator cannot validate.
pub const UNKNOWN_EXPR: &str = "z.unknown()";

/// Name of the per-file Decimal helper schema.
pub const DECIMAL_HELPER: &str = "decimalSchema";

const ARRAY_WRAPPER: &str = ".array()";
const NULLABLE_WRAPPER: &str = ".nullable()";

// Primitive type name → canonical expression. New primitives are added here.
const SCALAR_EXPRS: &[(&str, &str)] = &[
    ("String", "z.string()"),
    ("Int", "z.number().int()"),
    ("BigInt", "z.bigint()"),
    ("DateTime", "z.date()"),
    ("Float", "z.number()"),
    ("Decimal", "z.number()"),
    ("Json", "z.string()"),
    ("Boolean", "z.boolean()"),
    ("Bytes", "z.instanceof(Buffer)"),
];

/// Look up the expression for a primitive type name.
#[must_use]
pub fn scalar_expr(ty: &str) -> Option<&'static str> {
    SCALAR_EXPRS
        .iter()
        .find_map(|(name, expr)| (*name == ty).then_some(*expr))
}

///
/// TypeMapper
///

#[derive(Clone, Copy, Debug)]
pub struct TypeMapper<'a> {
    config: &'a Config,
}

impl<'a> TypeMapper<'a> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Expression for the field's declared kind, before any wrapping.
    ///
    /// `relation_schema` resolves a relation target to the symbol the field
    /// should reference, which lets related schemas point at each other.
    pub fn base_expr<F>(&self, field: &Field, relation_schema: F) -> String
    where
        F: Fn(&str) -> String,
    {
        match field.kind {
            FieldKind::Scalar if field.is_decimal() && self.config.use_decimal_js => {
                DECIMAL_HELPER.to_string()
            }
            FieldKind::Scalar => scalar_expr(&field.ty).map_or_else(
                || {
                    warn!(field = %field.name, ty = %field.ty, "unknown scalar type, emitting {UNKNOWN_EXPR}");
                    UNKNOWN_EXPR.to_string()
                },
                str::to_string,
            ),
            FieldKind::Enum if self.config.enable_openapi => {
                format!("z.nativeEnum($Enums.{})", field.ty)
            }
            FieldKind::Enum => format!("z.nativeEnum({})", field.ty),
            FieldKind::Relation => relation_schema(&field.ty),
            FieldKind::Unsupported => UNKNOWN_EXPR.to_string(),
        }
    }

    /// Apply collection then nullable wrapping to a mapped expression.
    #[must_use]
    pub fn wrap(&self, field: &Field, mut expr: String) -> String {
        if field.is_list {
            expr.push_str(ARRAY_WRAPPER);
        }
        if field.is_optional() && !(field.is_json() && self.config.prisma_json_nullability) {
            expr.push_str(NULLABLE_WRAPPER);
        }

        expr
    }

    /// Final property expression: the mapped-and-wrapped base, or the first
    /// replacement verbatim, followed by every append in document order.
    pub fn field_expr<F>(&self, field: &Field, docs: &FieldDocs<'_>, relation_schema: F) -> String
    where
        F: Fn(&str) -> String,
    {
        if docs.replace_count() > 1 {
            warn!(
                field = %field.name,
                count = docs.replace_count(),
                "multiple replacement directives, using the first"
            );
        }

        let mut expr = match docs.replacement() {
            Some(replacement) => replacement.to_string(),
            None => self.wrap(field, self.base_expr(field, relation_schema)),
        };

        for append in docs.appends() {
            expr.push_str(append);
        }

        expr
    }
}

///
/// TESTS
///
