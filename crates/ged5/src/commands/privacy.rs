use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use ged5_semantic::PrivacyPolicy;

use crate::args::Args;
use crate::commands::load_document;
use crate::commands::load_settings;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct Privacy {
    /// GEDCOM file to classify.
    file: Utf8PathBuf,

    /// Evaluate as of this year instead of the configured or current one.
    #[arg(long)]
    year: Option<i32>,
}

impl Command for Privacy {
    fn execute(&self, args: &Args) -> Result<Exit> {
        let mut settings = load_settings(args)?;
        if self.year.is_some() {
            settings.privacy.current_year = self.year;
        }
        let document = load_document(&self.file, settings.strict)?;
        let policy = PrivacyPolicy::from_settings(&settings.privacy);
        tracing::debug!(?policy, "classifying individuals");

        for individual in document.individuals() {
            let label = if policy.is_private(individual) {
                "private"
            } else {
                "public"
            };
            println!("{}\t{label}", individual.xref().unwrap_or("-"));
        }
        Ok(Exit::success())
    }
}
