//! Line generators for the reusable sub-structures.
//!
//! Each generator returns the lines of a fully populated sub-structure
//! rooted at `level`. Recursive structures stop below level 6 so the
//! generated records stay finite.
#![allow(dead_code)]

fn at(level: u32, tag: &str) -> String {
    format!("{level} {tag}")
}

pub fn note_structure(level: u32) -> Vec<String> {
    if level > 5 {
        return Vec::new();
    }
    vec![
        at(level, "NOTE"),
        at(level + 1, "CONC"),
        at(level + 1, "CONT"),
        at(level + 1, "CONC"),
        at(level + 1, "CONT"),
    ]
}

pub fn place_structure(level: u32) -> Vec<String> {
    let mut lines = vec![
        at(level, "PLAC"),
        at(level + 1, "FORM"),
        at(level + 1, "FONE"),
        at(level + 2, "TYPE"),
        at(level + 1, "ROMN"),
        at(level + 2, "TYPE"),
        at(level + 1, "MAP"),
        at(level + 2, "LATI"),
        at(level + 2, "LONG"),
    ];
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines
}

pub fn address_structure(level: u32) -> Vec<String> {
    let mut lines = vec![at(level, "ADDR"), at(level + 1, "CONT")];
    for tag in ["ADR1", "ADR2", "ADR3", "CITY", "STAE", "POST", "CTRY"] {
        lines.push(at(level + 1, tag));
    }
    for tag in ["PHON", "EMAIL", "FAX", "WWW"] {
        for _ in 0..3 {
            lines.push(at(level, tag));
        }
    }
    lines
}

pub fn change_date(level: u32) -> Vec<String> {
    if level > 5 {
        return Vec::new();
    }
    let mut lines = vec![
        at(level, "CHAN"),
        at(level + 1, "DATE"),
        at(level + 2, "TIME"),
    ];
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines
}

pub fn multimedia_link(level: u32) -> Vec<String> {
    if level > 5 {
        return Vec::new();
    }
    let mut lines = vec![
        at(level, "OBJE"),
        at(level + 1, "FILE"),
        at(level + 2, "FORM"),
        at(level + 3, "TYPE"),
        at(level + 2, "TITL"),
        at(level + 1, "REFN"),
        at(level + 2, "TYPE"),
        at(level + 1, "RIN"),
    ];
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines.extend(source_citation(level + 1));
    lines.extend(source_citation(level + 1));
    lines.extend(change_date(level + 1));
    lines
}

pub fn source_citation(level: u32) -> Vec<String> {
    if level > 5 {
        return Vec::new();
    }
    let mut lines = vec![
        at(level, "SOUR"),
        at(level + 1, "PAGE"),
        at(level + 1, "EVEN"),
        at(level + 2, "ROLE"),
        at(level + 1, "DATA"),
        at(level + 2, "DATE"),
        at(level + 2, "TEXT"),
        at(level + 3, "CONC"),
        at(level + 3, "CONT"),
        at(level + 3, "CONC"),
        at(level + 3, "CONT"),
    ];
    lines.extend(multimedia_link(level + 1));
    lines.extend(multimedia_link(level + 1));
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines.push(at(level + 1, "QUAY"));
    lines
}

pub fn event_detail(level: u32) -> Vec<String> {
    let mut lines = vec![at(level, "TYPE"), at(level, "DATE")];
    lines.extend(place_structure(level));
    lines.extend(address_structure(level));
    for tag in ["AGNC", "RELI", "CAUS", "RESN"] {
        lines.push(at(level, tag));
    }
    lines.extend(note_structure(level));
    lines.extend(note_structure(level));
    lines.extend(source_citation(level));
    lines.extend(source_citation(level));
    lines.extend(multimedia_link(level));
    lines.extend(multimedia_link(level));
    lines
}

pub fn family_event_detail(level: u32) -> Vec<String> {
    let mut lines = vec![
        at(level, "HUSB"),
        at(level + 1, "AGE"),
        at(level, "WIFE"),
        at(level + 1, "AGE"),
    ];
    lines.extend(event_detail(level));
    lines
}

pub fn individual_event_detail(level: u32) -> Vec<String> {
    let mut lines = event_detail(level);
    lines.push(at(level, "AGE"));
    lines
}

pub fn family_event_structure(level: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for tag in [
        "ANUL", "CENS", "DIV", "DIVF", "ENGA", "MARB", "MARC", "MARR", "MARL", "MARS", "RESI",
        "EVEN",
    ] {
        lines.push(at(level, tag));
        lines.extend(family_event_detail(level + 1));
    }
    lines
}

pub fn individual_event_structure(level: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for tag in [
        "BIRT", "CHR", "DEAT", "BURI", "CREM", "ADOP", "BAPM", "BARM", "BASM", "BLES", "CHRA",
        "CONF", "FCOM", "ORDN", "NATU", "EMIG", "IMMI", "CENS", "PROB", "WILL", "GRAD", "RETI",
        "EVEN",
    ] {
        lines.push(at(level, tag));
        lines.extend(individual_event_detail(level + 1));
        match tag {
            "BIRT" | "CHR" => lines.push(at(level + 1, "FAMC")),
            "ADOP" => {
                lines.push(at(level + 1, "FAMC"));
                lines.push(at(level + 2, "ADOP"));
            }
            _ => {}
        }
    }
    lines
}

pub fn individual_attribute_structure(level: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for tag in [
        "CAST", "DSCR", "EDUC", "IDNO", "NATI", "NCHI", "NMR", "OCCU", "PROP", "RELI", "RESI",
        "SSN", "TITL", "FACT",
    ] {
        lines.push(at(level, tag));
        if tag == "DSCR" {
            lines.push(at(level + 1, "CONC"));
            lines.push(at(level + 1, "CONT"));
        }
        lines.extend(individual_event_detail(level + 1));
    }
    lines
}

fn ordinance(level: u32, tag: &str, famc: bool) -> Vec<String> {
    let mut lines = vec![
        at(level, tag),
        at(level + 1, "DATE"),
        at(level + 1, "TEMP"),
        at(level + 1, "PLAC"),
    ];
    if famc {
        lines.push(at(level + 1, "FAMC"));
    }
    lines.push(at(level + 1, "STAT"));
    lines.push(at(level + 2, "DATE"));
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines.extend(source_citation(level + 1));
    lines.extend(source_citation(level + 1));
    lines
}

pub fn lds_individual_ordinance(level: u32) -> Vec<String> {
    let mut lines = ordinance(level, "BAPL", false);
    lines.extend(ordinance(level, "CONL", false));
    lines.extend(ordinance(level, "ENDL", false));
    lines.extend(ordinance(level, "SLGC", true));
    lines
}

pub fn lds_spouse_sealing(level: u32) -> Vec<String> {
    ordinance(level, "SLGS", false)
}

pub fn personal_name_pieces(level: u32) -> Vec<String> {
    let mut lines: Vec<String> = ["NPFX", "GIVN", "NICK", "SPFX", "SURN", "NSFX"]
        .into_iter()
        .map(|tag| at(level, tag))
        .collect();
    lines.extend(note_structure(level));
    lines.extend(note_structure(level));
    lines.extend(source_citation(level));
    lines.extend(source_citation(level));
    lines
}

pub fn personal_name_structure(level: u32) -> Vec<String> {
    let mut lines = vec![at(level, "NAME"), at(level + 1, "TYPE")];
    lines.extend(personal_name_pieces(level + 1));
    for variant in ["FONE", "ROMN"] {
        lines.push(at(level + 1, variant));
        lines.push(at(level + 2, "TYPE"));
        lines.extend(personal_name_pieces(level + 2));
    }
    lines
}

pub fn child_to_family_link(level: u32) -> Vec<String> {
    let mut lines = vec![
        at(level, "FAMC"),
        at(level + 1, "PEDI"),
        at(level + 1, "STAT"),
    ];
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines
}

pub fn spouse_to_family_link(level: u32) -> Vec<String> {
    let mut lines = vec![at(level, "FAMS")];
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines
}

pub fn association_structure(level: u32) -> Vec<String> {
    let mut lines = vec![at(level, "ASSO"), at(level + 1, "RELA")];
    lines.extend(source_citation(level + 1));
    lines.extend(source_citation(level + 1));
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    lines
}

pub fn source_repository_citation(level: u32) -> Vec<String> {
    let mut lines = vec![at(level, "REPO")];
    lines.extend(note_structure(level + 1));
    lines.extend(note_structure(level + 1));
    for _ in 0..2 {
        lines.push(at(level + 1, "CALN"));
        lines.push(at(level + 2, "MEDI"));
    }
    lines
}

/// Joins literal lines and generated blocks into one source text.
macro_rules! ged {
    ($( $part:expr ),* $(,)?) => {{
        let mut lines: Vec<String> = Vec::new();
        $( $crate::common::Lines::extend_into($part, &mut lines); )*
        lines.join("\n")
    }};
}

pub trait Lines {
    fn extend_into(self, lines: &mut Vec<String>);
}

impl Lines for &str {
    fn extend_into(self, lines: &mut Vec<String>) {
        lines.push(self.to_string());
    }
}

impl Lines for Vec<String> {
    fn extend_into(self, lines: &mut Vec<String>) {
        lines.extend(self);
    }
}
