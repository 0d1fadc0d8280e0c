use crate::{
    BuildError,
    aggregate::{barrel, enums},
    emit::SourceSink,
    entity::synthesize,
    path::ModelPaths,
    unit::SourceUnit,
};
use std::collections::BTreeMap;
use tracing::info;
use zodgen_config::Config;
use zodgen_schema::node::Model;

/// Validate `options`, then synthesize every unit of `model` into `sink`.
///
/// Configuration is checked before anything else; an invalid option leaves
/// the sink untouched.
pub fn generate<S: SourceSink>(
    model: &Model,
    options: &BTreeMap<String, String>,
    paths: ModelPaths,
    sink: S,
) -> Result<GenerateReport, BuildError> {
    Generator::from_options(model, options, paths)?.run(sink)
}

///
/// GenerateReport
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerateReport {
    /// Names of the units handed to the sink, in emission order.
    pub units: Vec<String>,
}

///
/// Generator
///
/// One generation run: entity units in model order, then the barrel, then
/// the enum unit when the model declares enums.
///

#[derive(Clone, Debug)]
pub struct Generator<'a> {
    model: &'a Model,
    config: Config,
    paths: ModelPaths,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub const fn new(model: &'a Model, config: Config, paths: ModelPaths) -> Self {
        Self {
            model,
            config,
            paths,
        }
    }

    pub fn from_options(
        model: &'a Model,
        options: &BTreeMap<String, String>,
        paths: ModelPaths,
    ) -> Result<Self, BuildError> {
        let config = Config::from_options(options)?;

        Ok(Self::new(model, config, paths))
    }

    /// Every unit of the run, in emission order.
    #[must_use]
    pub fn units(&self) -> Vec<SourceUnit> {
        self.synthesize_all().collect()
    }

    /// Hand each unit to `sink` as soon as it is complete.
    pub fn run<S: SourceSink>(&self, mut sink: S) -> Result<GenerateReport, BuildError> {
        let mut report = GenerateReport::default();

        for unit in self.synthesize_all() {
            let name = unit.name.clone();
            sink.accept(unit).map_err(|source| BuildError::Sink {
                unit: name.clone(),
                source,
            })?;
            report.units.push(name);
        }

        info!(
            entities = self.model.models.len(),
            enums = self.model.enums.len(),
            units = report.units.len(),
            "generated source units"
        );

        Ok(report)
    }

    // Lazy so each unit reaches the sink before the next is built.
    fn synthesize_all(&self) -> impl Iterator<Item = SourceUnit> + '_ {
        let entities = self
            .model
            .models
            .iter()
            .map(|entity| synthesize(entity, &self.config, &self.paths));
        let aggregates = std::iter::once_with(|| barrel(&self.model.models))
            .chain(std::iter::once_with(|| enums(&self.model.enums)).flatten());

        entities.chain(aggregates)
    }
}

///
/// TESTS
///
