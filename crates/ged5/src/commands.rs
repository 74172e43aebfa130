mod check;
mod find;
mod privacy;

use anyhow::Context;
use anyhow::Result;
use camino::Utf8Path;
use clap::Subcommand;
use ged5_conf::Settings;
use ged5_syntax::parse;
use ged5_syntax::Document;

use crate::args::Args;
use crate::exit::Exit;

pub trait Command {
    fn execute(&self, args: &Args) -> Result<Exit>;
}

#[derive(Debug, Subcommand)]
pub enum Ged5Command {
    /// Parse files and report the first error in each
    Check(self::check::Check),
    /// Print every node matching a dotted tag path
    Find(self::find::Find),
    /// Classify each individual as private or public
    Privacy(self::privacy::Privacy),
}

impl Command for Ged5Command {
    fn execute(&self, args: &Args) -> Result<Exit> {
        match self {
            Ged5Command::Check(command) => command.execute(args),
            Ged5Command::Find(command) => command.execute(args),
            Ged5Command::Privacy(command) => command.execute(args),
        }
    }
}

/// Settings for the current directory, with `--strict` applied on top.
fn load_settings(args: &Args) -> Result<Settings> {
    let project_root = std::env::current_dir().context("Failed to determine current directory")?;
    let mut settings = Settings::new(&project_root).context("Failed to load settings")?;
    if args.global.strict {
        settings.strict = true;
    }
    Ok(settings)
}

fn read_source(path: &Utf8Path) -> Result<String> {
    let bytes = std::fs::read(path).context("Failed to read file")?;
    String::from_utf8(bytes).context("File is not valid UTF-8")
}

fn load_document(path: &Utf8Path, strict: bool) -> Result<Document> {
    let source = read_source(path).with_context(|| format!("Failed to load {path}"))?;
    parse(&source, strict).with_context(|| format!("Failed to parse {path}"))
}
