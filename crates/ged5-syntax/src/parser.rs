use crate::document::Document;
use crate::error::MalformedReason;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::node::Node;
use crate::node::NodeId;
use crate::tags::Kind;
use crate::tags::Tag;
use crate::tokens::Line;

/// Builds a [`Document`] from source text.
///
/// The builder keeps a stack of open nodes. Each line closes every open
/// node at the same or a deeper level, then becomes a child of whatever is
/// left on top, or a top-level record when the stack is empty.
pub struct Parser<'a> {
    source: &'a str,
    strict: bool,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(source: &'a str, strict: bool) -> Self {
        Parser { source, strict }
    }

    pub fn parse(self) -> Result<Document, ParseError> {
        let mut document = Document::new();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut count = 0usize;

        for line in Lexer::new(self.source) {
            let line = line?;
            count += 1;

            while let Some(&top) = stack.last() {
                if document.nodes[top.index()].level < line.level {
                    break;
                }
                stack.pop();
            }

            let node = Node::new(
                line.number,
                line.level,
                line.xref,
                self.kind(&line)?,
                line.value,
            );
            let attached = document.attach(stack.last().copied(), node, self.strict)?;
            stack.push(attached.id);
        }

        if count == 0 && self.strict {
            return Err(ParseError::malformed(1, "", MalformedReason::EmptyDocument));
        }

        document.resolve(self.strict)?;

        tracing::debug!(
            lines = count,
            records = document.len(),
            strict = self.strict,
            "parsed document"
        );
        Ok(document)
    }

    fn kind(&self, line: &Line<'_>) -> Result<Kind, ParseError> {
        match Tag::lookup(line.tag) {
            Some(tag) => Ok(Kind::Known(tag)),
            None if self.strict => Err(ParseError::UnknownTag {
                line: line.number,
                tag: line.tag.to_string(),
            }),
            None => {
                tracing::debug!("line {}: keeping unknown tag '{}'", line.number, line.tag);
                Ok(Kind::Unrecognized(line.tag.to_string()))
            }
        }
    }
}

/// Parses a whole document.
pub fn parse(source: &str, strict: bool) -> Result<Document, ParseError> {
    Parser::new(source, strict).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::NodeRef;

    fn tags(node: NodeRef<'_>) -> Vec<&str> {
        node.children().map(NodeRef::tag_name).collect()
    }

    #[test]
    fn test_siblings_and_children() {
        let document = parse(
            "0 HEAD\n1 SOUR APP\n2 VERS 1.0\n1 CHAR UTF-8\n0 @I1@ INDI\n1 NAME Bob\n0 TRLR",
            true,
        )
        .unwrap();
        assert_eq!(document.len(), 3);
        let head = document.get(0).unwrap();
        assert_eq!(tags(head), ["SOUR", "CHAR"]);
        assert_eq!(tags(head.child(0).unwrap()), ["VERS"]);
        assert_eq!(document.get(1).unwrap().xref(), Some("@I1@"));
        assert_eq!(document.records().trlr.len(), 1);
    }

    #[test]
    fn test_single_line_document() {
        let document = parse("0 TRLR", true).unwrap();
        assert_eq!(document.len(), 1);
        assert!(document.get(0).unwrap().is_empty());
    }

    #[test]
    fn test_skipped_level_nests_under_nearest_shallower_node() {
        let document = parse("0 @I1@ INDI\n2 NAME Bob\n1 SEX M", true).unwrap();
        let indi = document.get(0).unwrap();
        assert_eq!(tags(indi), ["NAME", "SEX"]);
        assert_eq!(indi.child(0).unwrap().level(), 2);
    }

    #[test]
    fn test_empty_document() {
        let err = parse("", true).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: 1,
                text: String::new(),
                reason: MalformedReason::EmptyDocument,
            }
        );
        assert!(parse("", false).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_tag() {
        let err = parse("0 @I1@ INDI\n1 _UID 1234", true).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownTag {
                line: 2,
                tag: "_UID".to_string(),
            }
        );

        let document = parse("0 @I1@ INDI\n1 _UID 1234", false).unwrap();
        let uid = document.find_first("INDI._UID").unwrap();
        assert_eq!(uid.kind(), &Kind::Unrecognized("_UID".to_string()));
        assert_eq!(uid.value(), Some("1234"));
    }

    #[test]
    fn test_unexpected_tag_reports_line_and_parent() {
        let err = parse("0 HEAD\n1 CHAR UTF-8\n2 SEX M", true).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedTag {
                line: 3,
                child: "SEX".to_string(),
                parent: "CHAR".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_line_is_fatal_in_both_modes() {
        for strict in [true, false] {
            let err = parse("0 HEAD\nX CHAR UTF-8", strict).unwrap_err();
            assert!(matches!(err, ParseError::MalformedLine { line: 2, .. }));
        }
    }

    #[test]
    fn test_byte_order_mark() {
        let document = parse("\u{feff}0 HEAD\r\n0 TRLR\r\n", true).unwrap();
        assert_eq!(document.render(), "0 HEAD\n0 TRLR");
    }
}
