//! Units built from the whole model rather than a single entity.

use crate::{
    path::dot_slash,
    unit::{EnumDecl, EnumMember, ExportAll, SourceUnit},
};
use zodgen_schema::node::{Entity, Enum};

/// Logical name of the barrel unit.
pub const INDEX_UNIT: &str = "index";

/// Logical name of the shared enum unit.
pub const ENUMS_UNIT: &str = "enums";

/// Re-export every entity unit, in model order.
#[must_use]
pub fn barrel(entities: &[Entity]) -> SourceUnit {
    let mut unit = SourceUnit::new(INDEX_UNIT);

    for entity in entities {
        unit.push(ExportAll {
            module: dot_slash(&entity.module_name()),
        });
    }

    unit
}

/// Declare every enum with string members equal to their names. A model
/// without enums yields no unit at all.
#[must_use]
pub fn enums(enums: &[Enum]) -> Option<SourceUnit> {
    if enums.is_empty() {
        return None;
    }

    let mut unit = SourceUnit::new(ENUMS_UNIT);
    for decl in enums {
        unit.push(EnumDecl {
            name: decl.name.clone(),
            exported: true,
            members: decl
                .members()
                .map(|member| EnumMember {
                    name: member.to_string(),
                    value: member.to_string(),
                })
                .collect(),
        });
    }

    Some(unit)
}

///
/// TESTS
///
