//! Resolved data model consumed by zodgen code generation.
//!
//! The model is a read-only snapshot of entities, their ordered fields and
//! the enums they reference. It is usually deserialized from a DMMF-shaped
//! JSON document produced by the schema parser.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{DECIMAL_TYPE, FieldKind, JSON_TYPE},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid model document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model validation failed:\n{0}")]
    Validation(error::ErrorTree),
}
