//! Generator configuration.
//!
//! Options arrive as a flat string map (the shape of a Prisma `generator`
//! block) or as a TOML document. Both paths go through the same validation,
//! which fills defaults and rejects malformed values. Unrecognized keys are
//! skipped with a warning.
//! A validated [`Config`] is immutable for the rest of the run.

mod options;
mod types;

pub use options::{keys, options_from_toml};
pub use types::{Case, RelationModel};

use std::collections::BTreeMap;
use thiserror::Error as ThisError;
use tracing::warn;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("option '{key}' expects 'true' or 'false', got '{value}'")]
    InvalidBool { key: String, value: String },

    #[error("option '{key}' expects 'PascalCase' or 'camelCase', got '{value}'")]
    InvalidCase { key: String, value: String },

    #[error("option 'relationModel' expects 'true', 'false' or 'default', got '{value}'")]
    InvalidRelationModel { value: String },

    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("option '{key}' must be a string or boolean, got {kind}")]
    UnsupportedValue { key: String, kind: &'static str },
}

///
/// Config
///
/// One resolved configuration record. Each generator stage consults only the
/// toggles that affect its own output.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub relation_model: RelationModel,
    pub generate_dto: bool,
    pub model_suffix: String,
    pub dto_suffix: String,
    pub model_case: Case,
    pub dto_case: Case,
    pub use_decimal_js: bool,
    pub imports: Option<String>,
    pub prisma_json_nullability: bool,
    pub enable_openapi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relation_model: RelationModel::Enabled,
            generate_dto: true,
            model_suffix: "Model".to_string(),
            dto_suffix: "Dto".to_string(),
            model_case: Case::Pascal,
            dto_case: Case::Pascal,
            use_decimal_js: false,
            imports: None,
            prisma_json_nullability: true,
            enable_openapi: false,
        }
    }
}

impl Config {
    /// Validate a raw option map, filling defaults for absent keys.
    pub fn from_options(options: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (key, value) in options {
            config.apply(key, value)?;
        }

        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Self::from_options(&options_from_toml(src)?)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            keys::RELATION_MODEL => self.relation_model = value.parse()?,
            keys::GENERATE_DTO => self.generate_dto = parse_bool(key, value)?,
            keys::MODEL_SUFFIX => self.model_suffix = value.to_string(),
            keys::DTO_SUFFIX => self.dto_suffix = value.to_string(),
            keys::MODEL_CASE => self.model_case = parse_case(key, value)?,
            keys::DTO_CASE => self.dto_case = parse_case(key, value)?,
            keys::USE_DECIMAL_JS => self.use_decimal_js = parse_bool(key, value)?,
            keys::IMPORTS => {
                self.imports = Some(value.to_string()).filter(|path| !path.is_empty());
            }
            keys::PRISMA_JSON_NULLABILITY => {
                self.prisma_json_nullability = parse_bool(key, value)?;
            }
            keys::ENABLE_OPENAPI => self.enable_openapi = parse_bool(key, value)?,
            // generator-block keys owned by the host tool
            keys::PROVIDER | keys::OUTPUT => {}
            _ => warn!(key, "ignoring unrecognized option"),
        }

        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_case(key: &str, value: &str) -> Result<Case, ConfigError> {
    value.parse().map_err(|()| ConfigError::InvalidCase {
        key: key.to_string(),
        value: value.to_string(),
    })
}

///
/// TESTS
///
