use crate::ConfigError;
use std::collections::BTreeMap;
use toml::{Table, Value};

///
/// keys
/// Recognized option names, spelled as they appear in a generator block.
///

pub mod keys {
    pub const RELATION_MODEL: &str = "relationModel";
    pub const GENERATE_DTO: &str = "generateDto";
    pub const MODEL_SUFFIX: &str = "modelSuffix";
    pub const DTO_SUFFIX: &str = "dtoSuffix";
    pub const MODEL_CASE: &str = "modelCase";
    pub const DTO_CASE: &str = "dtoCase";
    pub const USE_DECIMAL_JS: &str = "useDecimalJs";
    pub const IMPORTS: &str = "imports";
    pub const PRISMA_JSON_NULLABILITY: &str = "prismaJsonNullability";
    pub const ENABLE_OPENAPI: &str = "enableOpenAPI";

    pub const PROVIDER: &str = "provider";
    pub const OUTPUT: &str = "output";
}

/// Table holding the options when the document nests them.
const GENERATOR_TABLE: &str = "generator";

/// Flatten a TOML document into the raw option map.
///
/// Options live either at the top level or under a `[generator]` table.
/// Values may be strings or booleans; booleans are rendered as `true`/`false`
/// so they pass through the same validation as string options.
pub fn options_from_toml(src: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut table: Table = src.parse()?;

    let table = match table.remove(GENERATOR_TABLE) {
        Some(Value::Table(generator)) => generator,
        Some(other) => {
            return Err(ConfigError::UnsupportedValue {
                key: GENERATOR_TABLE.to_string(),
                kind: other.type_str(),
            });
        }
        None => table,
    };

    table
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            Value::Boolean(b) => Ok((key, b.to_string())),
            other => Err(ConfigError::UnsupportedValue {
                key,
                kind: other.type_str(),
            }),
        })
        .collect()
}

///
/// TESTS
///
