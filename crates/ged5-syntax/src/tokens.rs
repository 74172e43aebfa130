use serde::Serialize;

/// One tokenized line, borrowed from the source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    pub level: u32,
    pub xref: Option<&'a str>,
    pub tag: &'a str,
    pub value: Option<&'a str>,
}

/// True for `@...@` tokens of at least two characters.
#[must_use]
pub fn is_pointer(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('@') && text.ends_with('@')
}
