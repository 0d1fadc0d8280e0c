//! Printing and persistence of finished source units.

mod printer;
mod sink;

pub use printer::Printer;
pub use sink::{FsSink, MemorySink, SOURCE_EXTENSION, SourceSink};
