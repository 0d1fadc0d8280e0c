use crate::{emit::Printer, unit::SourceUnit};
use std::{fs, io, path::PathBuf};
use tracing::debug;

/// File extension of persisted units.
pub const SOURCE_EXTENSION: &str = "ts";

///
/// SourceSink
///
/// Receives each finished unit exactly once. Formatting and persistence are
/// the sink's concern; generation never reads a unit back.
///

pub trait SourceSink {
    fn accept(&mut self, unit: SourceUnit) -> io::Result<()>;
}

impl<S: SourceSink + ?Sized> SourceSink for &mut S {
    fn accept(&mut self, unit: SourceUnit) -> io::Result<()> {
        (**self).accept(unit)
    }
}

///
/// MemorySink
///
/// Keeps units in arrival order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemorySink {
    pub units: Vec<SourceUnit>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SourceUnit> {
        self.units.iter().find(|u| u.name == name)
    }

    /// Printed text of a named unit.
    #[must_use]
    pub fn render(&self, name: &str) -> Option<String> {
        self.get(name).map(Printer::print)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.name.as_str())
    }
}

impl SourceSink for MemorySink {
    fn accept(&mut self, unit: SourceUnit) -> io::Result<()> {
        self.units.push(unit);

        Ok(())
    }
}

///
/// FsSink
///
/// Prints each unit and writes it to `<root>/<name>.ts`, creating the root
/// directory on first use. Existing files are overwritten.
///

#[derive(Clone, Debug)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn unit_path(&self, name: &str) -> PathBuf {
        self.root.join(name).with_extension(SOURCE_EXTENSION)
    }
}

impl SourceSink for FsSink {
    fn accept(&mut self, unit: SourceUnit) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;

        let path = self.unit_path(&unit.name);
        fs::write(&path, Printer::print(&unit))?;
        debug!(path = %path.display(), "wrote source unit");

        Ok(())
    }
}

///
/// TESTS
///
