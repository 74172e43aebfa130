use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;

use crate::args::Args;
use crate::commands::load_document;
use crate::commands::load_settings;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct Find {
    /// GEDCOM file to search.
    file: Utf8PathBuf,

    /// Dotted tag path from the top level, e.g. `INDI.BIRT.DATE`.
    path: String,
}

impl Command for Find {
    fn execute(&self, args: &Args) -> Result<Exit> {
        let settings = load_settings(args)?;
        let document = load_document(&self.file, settings.strict)?;

        let matches = document.find(&self.path);
        if matches.is_empty() {
            return Ok(Exit::error().with_message(format!("No nodes match '{}'.", self.path)));
        }
        for node in matches {
            println!("{}", node.render());
        }
        Ok(Exit::success())
    }
}
