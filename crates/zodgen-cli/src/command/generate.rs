use crate::cli::GenerateArgs;
use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs,
    path::{self, Path},
};
use tracing::debug;
use zodgen_build::{FsSink, GenerateReport, ModelPaths, generate};
use zodgen_config::options_from_toml;
use zodgen_schema::{node::Model, validate::validate_model};

pub fn run(args: &GenerateArgs) -> Result<()> {
    let report = execute(args)?;

    println!(
        "generated {} source units in {}",
        report.units.len(),
        args.output.display()
    );

    Ok(())
}

fn execute(args: &GenerateArgs) -> Result<GenerateReport> {
    let model = load_model(&args.model)?;
    let options = collect_options(args)?;

    let paths = model_paths(args)?;
    debug!(?paths, "resolved generation paths");

    let report = generate(&model, &options, paths, FsSink::new(&args.output))?;

    Ok(report)
}

// both locations absolute so lexical relativization shares one base
fn model_paths(args: &GenerateArgs) -> Result<ModelPaths> {
    let schema_path = args.schema_path.as_deref().unwrap_or(args.model.as_path());
    let schema_path = path::absolute(schema_path)
        .with_context(|| format!("failed to resolve {}", schema_path.display()))?;
    let output_path = path::absolute(&args.output)
        .with_context(|| format!("failed to resolve {}", args.output.display()))?;

    Ok(ModelPaths::new(
        schema_path.to_string_lossy(),
        output_path.to_string_lossy(),
    ))
}

fn load_model(path: &Path) -> Result<Model> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read model from {}", path.display()))?;
    let model = Model::from_json(&json)
        .with_context(|| format!("failed to parse model from {}", path.display()))?;
    validate_model(&model)?;

    Ok(model)
}

// config file first, then command-line overrides
fn collect_options(args: &GenerateArgs) -> Result<BTreeMap<String, String>> {
    let mut options = match &args.config {
        Some(path) => {
            let src = fs::read_to_string(path)
                .with_context(|| format!("failed to read config from {}", path.display()))?;
            options_from_toml(&src)?
        }
        None => BTreeMap::new(),
    };

    options.extend(args.options.iter().cloned());

    Ok(options)
}

///
/// TESTS
///
