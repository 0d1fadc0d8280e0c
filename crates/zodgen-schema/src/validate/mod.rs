//! Model validation for model providers.
//!
//! Code generation assumes a closed, internally consistent model. Providers
//! run these passes once, before handing the model over, so inconsistencies
//! surface as one aggregated report instead of broken generated output.

pub mod naming;
pub mod relation;

use crate::{Error, error::ErrorTree, node::Model};

/// Run every validation pass in a fixed order.
pub fn validate_model(model: &Model) -> Result<(), Error> {
    let mut errs = ErrorTree::new();

    // Phase 1: names must be present and unique.
    naming::validate_names(model, &mut errs);

    // Phase 2: every referenced type must resolve inside the model.
    relation::validate_references(model, &mut errs);

    errs.result().map_err(Error::Validation)
}

///
/// TESTS
///
