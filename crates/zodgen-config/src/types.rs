use crate::ConfigError;
use derive_more::Display;
use std::str::FromStr;

///
/// RelationModel
///
/// `DefaultNaming` keeps relation schemas but lets them take over the plain
/// model name; the base schema is then exported under an underscore prefix.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum RelationModel {
    #[default]
    #[display("true")]
    Enabled,

    #[display("false")]
    Disabled,

    #[display("default")]
    DefaultNaming,
}

impl RelationModel {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    #[must_use]
    pub const fn is_default_naming(self) -> bool {
        matches!(self, Self::DefaultNaming)
    }
}

impl FromStr for RelationModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Self::Enabled),
            "false" => Ok(Self::Disabled),
            "default" => Ok(Self::DefaultNaming),
            _ => Err(ConfigError::InvalidRelationModel {
                value: s.to_string(),
            }),
        }
    }
}

///
/// Case
///
/// Casing applied to the entity name before a suffix is appended. Only the
/// first character is touched; the rest of the name is kept as written.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Case {
    #[default]
    #[display("PascalCase")]
    Pascal,

    #[display("camelCase")]
    Camel,
}

impl Case {
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Pascal => name.to_string(),
            Self::Camel => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl FromStr for Case {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            _ => Err(()),
        }
    }
}

///
/// TESTS
///
