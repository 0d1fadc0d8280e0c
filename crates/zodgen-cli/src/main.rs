//! zodgen command-line entry point.

mod cli;
mod command;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    command::dispatch(cli.command)
}
