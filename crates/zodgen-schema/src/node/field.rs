use crate::prelude::*;

///
/// Field
///
/// A named, typed member of an entity. `ty` holds the primitive name for
/// scalars, the enum name for enum fields and the target entity name for
/// relation fields.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub is_list: bool,

    #[serde(default = "required_default")]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

const fn required_default() -> bool {
    true
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            ty: ty.into(),
            is_list: false,
            is_required: true,
            documentation: None,
        }
    }

    #[must_use]
    pub fn scalar(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar, ty)
    }

    #[must_use]
    pub fn enumeration(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Enum, ty)
    }

    #[must_use]
    pub fn relation(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Relation, target)
    }

    #[must_use]
    pub const fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    #[must_use]
    pub fn documented(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    #[must_use]
    pub const fn is_relation(&self) -> bool {
        self.kind.is_relation()
    }

    #[must_use]
    pub const fn is_enum(&self) -> bool {
        self.kind.is_enum()
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        !self.is_required
    }

    // JSON absence is carried by the string-as-JSON convention, so callers
    // may exempt these fields from explicit null wrapping.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.ty == JSON_TYPE
    }

    #[must_use]
    pub fn is_decimal(&self) -> bool {
        self.ty == DECIMAL_TYPE
    }
}
