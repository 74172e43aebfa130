use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::commands::Command;
use crate::commands::Ged5Command;
use crate::exit::Exit;
use crate::logging;

/// Check and query GEDCOM 5.5 files.
#[derive(Parser)]
#[command(name = "ged5")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Ged5Command,

    #[command(flatten)]
    pub args: Args,
}

/// Parse CLI arguments and execute the chosen command
pub fn run<I, T>(args: I) -> Result<Exit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
        e.exit();
    });

    logging::init_tracing(&cli.args.global);
    cli.command.execute(&cli.args)
}
