//! Zod schema and NestJS DTO source generation.
//!
//! A run turns a resolved [`Model`](zodgen_schema::node::Model) and a
//! validated [`Config`](zodgen_config::Config) into in-memory
//! [`SourceUnit`]s: one per entity, a barrel re-exporting them, and a shared
//! enum unit. Units are handed to a [`SourceSink`] which prints and persists
//! them.

pub mod aggregate;
pub mod directive;
pub mod emit;
pub mod entity;
pub mod generator;
pub mod mapper;
pub mod naming;
pub mod path;
pub mod unit;

pub use emit::{FsSink, MemorySink, Printer, SourceSink};
pub use entity::synthesize;
pub use generator::{GenerateReport, Generator, generate};
pub use path::ModelPaths;
pub use unit::SourceUnit;

use std::io;
use thiserror::Error as ThisError;
use zodgen_config::ConfigError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum BuildError {
    #[error(
        "Incorrect config provided. Please check the values you provided and try again.\n{0}"
    )]
    Config(#[from] ConfigError),

    #[error("failed to emit source unit '{unit}'")]
    Sink {
        unit: String,
        #[source]
        source: io::Error,
    },
}
