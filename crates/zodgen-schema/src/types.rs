use crate::prelude::*;
use derive_more::Display;

/// Declared type name of Prisma `Json` scalars.
pub const JSON_TYPE: &str = "Json";

/// Declared type name of Prisma `Decimal` scalars.
pub const DECIMAL_TYPE: &str = "Decimal";

///
/// FieldKind
///
/// What a field's declared type name refers to. Relation fields arrive as
/// `object` from the schema parser; `relation` is accepted as well. Any other
/// tag deserializes to `Unsupported` and is generated as an unvalidated value.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    #[display("scalar")]
    Scalar,

    #[display("enum")]
    Enum,

    #[display("relation")]
    #[serde(rename = "object", alias = "relation")]
    Relation,

    #[display("unsupported")]
    #[serde(other)]
    Unsupported,
}

impl FieldKind {
    #[must_use]
    pub const fn is_relation(self) -> bool {
        matches!(self, Self::Relation)
    }

    #[must_use]
    pub const fn is_enum(self) -> bool {
        matches!(self, Self::Enum)
    }
}

///
/// TESTS
///
