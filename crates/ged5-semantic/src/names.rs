//! Personal names, read from a `NAME`, `FONE` or `ROMN` node's typed pieces
//! or from the `NAME` value itself.

use ged5_syntax::structures::PersonalNamePieces;
use ged5_syntax::Fields;
use ged5_syntax::NodeId;
use ged5_syntax::NodeRef;
use serde::Serialize;

fn pieces<'a>(name: NodeRef<'a>) -> Option<&'a PersonalNamePieces> {
    match name.fields() {
        Fields::PersonalName(fields) => Some(&fields.pieces),
        Fields::NameVariant(fields) => Some(&fields.pieces),
        _ => None,
    }
}

fn join(name: NodeRef<'_>, slots: &[Option<NodeId>]) -> Option<String> {
    let words: Vec<&str> = slots
        .iter()
        .filter_map(|&slot| name.slot(slot)?.value())
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// `NPFX` then `GIVN`.
#[must_use]
pub fn given_names(name: NodeRef<'_>) -> Option<String> {
    let pieces = pieces(name)?;
    join(name, &[pieces.npfx, pieces.givn])
}

/// `SURN` then `SPFX`.
#[must_use]
pub fn family_name(name: NodeRef<'_>) -> Option<String> {
    let pieces = pieces(name)?;
    join(name, &[pieces.surn, pieces.spfx])
}

/// `NPFX GIVN SPFX SURN NSFX`.
#[must_use]
pub fn full_name(name: NodeRef<'_>) -> Option<String> {
    let pieces = pieces(name)?;
    join(
        name,
        &[pieces.npfx, pieces.givn, pieces.spfx, pieces.surn, pieces.nsfx],
    )
}

/// A `NAME` value split around its slash-delimited surname.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NameValue {
    pub given: Option<String>,
    pub surname: Option<String>,
    pub suffix: Option<String>,
}

impl NameValue {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let Some((given, rest)) = value.split_once('/') else {
            return NameValue {
                given: word(value),
                ..NameValue::default()
            };
        };
        let (surname, suffix) = rest.split_once('/').unwrap_or((rest, ""));
        NameValue {
            given: word(given),
            surname: word(surname),
            suffix: word(suffix),
        }
    }
}

fn word(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
