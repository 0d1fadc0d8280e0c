//! Per-entity source unit synthesis.

mod imports;
mod related;
mod schema;

use crate::{mapper::TypeMapper, naming::Naming, path::ModelPaths, unit::SourceUnit};
use tracing::debug;
use zodgen_config::Config;
use zodgen_schema::node::Entity;

/// Synthesize the source unit for one entity.
#[must_use]
pub fn synthesize(entity: &Entity, config: &Config, paths: &ModelPaths) -> SourceUnit {
    EntityBuilder::new(entity, config, paths).generate()
}

///
/// EntityBuilder
///

pub(crate) struct EntityBuilder<'a> {
    pub(crate) entity: &'a Entity,
    pub(crate) config: &'a Config,
    pub(crate) paths: &'a ModelPaths,
    pub(crate) naming: Naming<'a>,
    pub(crate) mapper: TypeMapper<'a>,
}

impl<'a> EntityBuilder<'a> {
    #[must_use]
    pub(crate) const fn new(entity: &'a Entity, config: &'a Config, paths: &'a ModelPaths) -> Self {
        Self {
            entity,
            config,
            paths,
            naming: Naming::new(config),
            mapper: TypeMapper::new(config),
        }
    }

    /// Imports, type helpers, base schema, DTO and related schema, in that
    /// order. Each toggle only decides its own section.
    #[must_use]
    pub(crate) fn generate(self) -> SourceUnit {
        let mut unit = SourceUnit::new(self.entity.module_name());

        imports::generate(&self, &mut unit);
        schema::type_helpers(&self, &mut unit);
        schema::model_schema(&self, &mut unit);

        if self.config.generate_dto {
            schema::dto(&self, &mut unit);
        }
        if self.needs_related_schema() {
            related::generate(&self, &mut unit);
        }

        debug!(
            entity = %self.entity.name,
            declarations = unit.declarations.len(),
            "synthesized entity unit"
        );

        unit
    }

    pub(crate) fn needs_related_schema(&self) -> bool {
        self.config.relation_model.is_enabled() && self.entity.has_relations()
    }

    pub(crate) fn uses_decimal_helper(&self) -> bool {
        self.config.use_decimal_js && self.entity.has_decimal()
    }

    pub(crate) fn model_name(&self) -> String {
        self.naming.model_name(&self.entity.name)
    }
}
