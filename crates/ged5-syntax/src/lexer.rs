use crate::error::MalformedReason;
use crate::error::ParseError;
use crate::tokens::is_pointer;
use crate::tokens::Line;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Every character that ends a line. `\r\n` counts as one terminator.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits a buffer into [`Line`]s.
///
/// Lines are separated by `\r\n` or any single character in `LINE_BREAKS`.
/// A terminator at the very end of the buffer does not produce a trailing
/// empty line, but an empty line anywhere else is reported as malformed.
pub struct Lexer<'a> {
    source: &'a str,
    current: usize,
    number: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            current: 0,
            number: 0,
        }
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        if self.is_at_end() {
            return None;
        }

        let rest = &self.source[self.current..];
        let (text, consumed) = match rest.find(LINE_BREAKS) {
            Some(end) => {
                let width = if rest[end..].starts_with("\r\n") {
                    2
                } else {
                    rest[end..].chars().next().map_or(1, char::len_utf8)
                };
                (&rest[..end], end + width)
            }
            None => (rest, rest.len()),
        };

        self.current += consumed;
        self.number += 1;
        Some(text)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Line<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = self.next_raw()?;
        if self.number == 1 {
            text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        }
        Some(tokenize(self.number, text))
    }
}

/// Tokenizes a single line of text.
pub fn tokenize(number: usize, text: &str) -> Result<Line<'_>, ParseError> {
    let body = text.trim_start();

    let (level, rest) = split_field(body);
    if level.is_empty() || !level.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed(number, text, MalformedReason::NotANumber));
    }
    let level = level
        .parse::<u32>()
        .map_err(|_| ParseError::malformed(number, text, MalformedReason::LevelOutOfRange))?;

    let (mut tag, mut rest) = split_field(rest.unwrap_or_default());
    let mut xref = None;
    if is_pointer(tag) {
        xref = Some(tag);
        (tag, rest) = split_field(rest.unwrap_or_default());
    }
    if tag.is_empty() {
        return Err(ParseError::malformed(number, text, MalformedReason::MissingTag));
    }

    Ok(Line {
        number,
        level,
        xref,
        tag,
        value: rest,
    })
}

/// Splits off everything up to the first space. The remainder is `None` when
/// there was no space at all.
fn split_field(text: &str) -> (&str, Option<&str>) {
    match text.split_once(' ') {
        Some((field, rest)) => (field, Some(rest)),
        None => (text, None),
    }
}
