use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a line could not be tokenized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MalformedReason {
    /// The level field is not a base-10 non-negative integer.
    NotANumber,
    /// The level is a valid integer but does not fit in a `u32`.
    LevelOutOfRange,
    /// The line ends before a tag field.
    MissingTag,
    /// The document has no lines at all.
    EmptyDocument,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MalformedReason::NotANumber => "level is not a non-negative integer",
            MalformedReason::LevelOutOfRange => "level is too large",
            MalformedReason::MissingTag => "missing tag",
            MalformedReason::EmptyDocument => "document is empty",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum ParseError {
    #[error("Malformed line {line} ({reason}): {text:?}")]
    MalformedLine {
        line: usize,
        text: String,
        reason: MalformedReason,
    },

    #[error("Unknown tag '{tag}' on line {line}")]
    UnknownTag { line: usize, tag: String },

    #[error("Unexpected tag '{child}' under '{parent}' on line {line}")]
    UnexpectedTag {
        line: usize,
        child: String,
        parent: String,
    },

    #[error("Missing reference {xref} on line {line}")]
    MissingReference { line: usize, xref: String },
}

impl ParseError {
    pub(crate) fn malformed(line: usize, text: &str, reason: MalformedReason) -> Self {
        Self::MalformedLine {
            line,
            text: text.to_string(),
            reason,
        }
    }

    /// The 1-based source line the error points at.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. }
            | Self::UnknownTag { line, .. }
            | Self::UnexpectedTag { line, .. }
            | Self::MissingReference { line, .. } => *line,
        }
    }
}
