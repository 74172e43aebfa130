use anyhow::Context;
use anyhow::Result;
use camino::Utf8Path;
use camino::Utf8PathBuf;
use clap::Parser;
use ged5_syntax::parse;
use ged5_syntax::ParseError;
use serde::Serialize;

use crate::args::Args;
use crate::commands::load_settings;
use crate::commands::read_source;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct Check {
    /// GEDCOM files to check.
    #[arg(required = true)]
    paths: Vec<Utf8PathBuf>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: Utf8PathBuf,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome {
    Valid { records: usize },
    Invalid { error: ParseError },
    Unreadable { message: String },
}

impl FileReport {
    fn is_valid(&self) -> bool {
        matches!(self.outcome, Outcome::Valid { .. })
    }

    fn render(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Valid { .. } => None,
            Outcome::Invalid { error } => Some(format!("{}:{}: {error}", self.path, error.line())),
            Outcome::Unreadable { message } => Some(format!("{}: {message}", self.path)),
        }
    }
}

impl Command for Check {
    fn execute(&self, args: &Args) -> Result<Exit> {
        let settings = load_settings(args)?;

        let reports: Vec<FileReport> = self
            .paths
            .iter()
            .map(|path| check_file(path, settings.strict))
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&reports).context("Failed to serialize report")?;
            println!("{json}");
        } else {
            for line in reports.iter().filter_map(FileReport::render) {
                println!("{line}");
            }
        }

        let total = reports.len();
        let failed = reports.iter().filter(|report| !report.is_valid()).count();
        let file_word = if total == 1 { "file" } else { "files" };

        if failed > 0 {
            Ok(Exit::error().with_message(format!("{failed} of {total} {file_word} failed.")))
        } else if args.global.quiet || self.json {
            Ok(Exit::success())
        } else {
            Ok(Exit::success().with_message(format!("Checked {total} {file_word}.")))
        }
    }
}

fn check_file(path: &Utf8Path, strict: bool) -> FileReport {
    let outcome = match read_source(path) {
        Err(err) => Outcome::Unreadable {
            message: format!("{err:#}"),
        },
        Ok(source) => match parse(&source, strict) {
            Ok(document) => Outcome::Valid {
                records: document.len(),
            },
            Err(error) => Outcome::Invalid { error },
        },
    };
    tracing::info!(%path, ?outcome, "checked");
    FileReport {
        path: path.to_owned(),
        outcome,
    }
}
