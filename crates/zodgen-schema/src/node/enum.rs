use crate::prelude::*;

///
/// Enum
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Enum {
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl Enum {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: members
                .into_iter()
                .map(|name| EnumValue { name: name.into() })
                .collect(),
        }
    }

    /// Member names in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.name.as_str())
    }
}

///
/// EnumValue
/// A member's wire value is its name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnumValue {
    pub name: String,
}
