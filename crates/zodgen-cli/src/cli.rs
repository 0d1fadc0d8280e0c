use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

///
/// Cli
///
/// Generate Zod schemas and NestJS DTOs from a resolved Prisma data model.
///

#[derive(Debug, Parser)]
#[command(name = "zodgen", version, about)]
pub struct Cli {
    /// Log debug output, including one line per generated unit.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate source units into an output directory.
    Generate(GenerateArgs),

    /// Print the generator manifest as JSON.
    Manifest,
}

///
/// GenerateArgs
///

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// DMMF datamodel JSON describing the resolved schema.
    #[arg(long, env = "ZODGEN_MODEL")]
    pub model: PathBuf,

    /// TOML file of generator options, either flat or under `[generator]`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generator option override, applied after the config file.
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Directory receiving the generated units.
    #[arg(long, env = "ZODGEN_OUTPUT")]
    pub output: PathBuf,

    /// Schema file the custom imports option is relative to. Defaults to the
    /// model file.
    #[arg(long)]
    pub schema_path: Option<PathBuf>,
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing option name in '{raw}'"));
    }

    Ok((key.to_string(), value.trim().to_string()))
}

///
/// TESTS
///
