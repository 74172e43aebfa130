use std::mem;

use crate::document::Document;
use crate::error::ParseError;
use crate::node::Reference;

impl Document {
    /// Resolves every pointer-shaped value recorded while attaching.
    ///
    /// A pointer whose identifier is not declared anywhere fails in strict
    /// mode and otherwise stays [`Reference::Unresolved`]. The pending list
    /// is drained, so a second call only sees nodes attached since.
    pub fn resolve(&mut self, strict: bool) -> Result<(), ParseError> {
        let pending = mem::take(&mut self.pending);
        let mut dangling = 0usize;

        for id in &pending {
            let node = &mut self.nodes[id.index()];
            let Some(Reference::Unresolved(xref)) = &node.reference else {
                continue;
            };

            match self.index.get(xref) {
                Some(&target) => node.reference = Some(Reference::Resolved(target)),
                None if strict => {
                    return Err(ParseError::MissingReference {
                        line: node.line,
                        xref: xref.clone(),
                    });
                }
                None => {
                    tracing::debug!("line {}: leaving {} unresolved", node.line, xref);
                    dangling += 1;
                }
            }
        }

        tracing::debug!(
            references = pending.len(),
            dangling,
            "resolved cross-references"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::document::Target;
    use crate::parser::parse;

    use super::*;

    const LINKED: &str = "0 @I1@ INDI\n1 FAMS @F1@\n0 @F1@ FAM\n1 HUSB @I1@";

    #[test]
    fn test_forward_and_backward_references() {
        for strict in [true, false] {
            let document = parse(LINKED, strict).unwrap();
            let indi = document.lookup("@I1@").unwrap();
            let fam = document.lookup("@F1@").unwrap();
            assert_eq!(indi.find_first("FAMS").unwrap().target(), Some(fam));
            assert_eq!(fam.find_first("HUSB").unwrap().target(), Some(indi));
        }
    }

    #[test]
    fn test_missing_reference() {
        let source = "0 @I1@ INDI\n1 FAMC @F9@";
        let err = parse(source, true).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingReference {
                line: 2,
                xref: "@F9@".to_string(),
            }
        );

        let document = parse(source, false).unwrap();
        let famc = document.find_first("INDI.FAMC").unwrap();
        assert_eq!(famc.reference(), Some(Target::Unresolved("@F9@")));
        assert_eq!(famc.target(), None);
    }

    #[test]
    fn test_redeclared_identifier_keeps_the_later_record() {
        let source = "0 @I1@ INDI\n1 NAME First\n0 @I1@ INDI\n1 NAME Second\n0 @F1@ FAM\n1 HUSB @I1@";
        let document = parse(source, true).unwrap();
        assert_eq!(document.len(), 3);
        assert_eq!(document.individuals().count(), 2);

        let indi = document.lookup("@I1@").unwrap();
        assert_eq!(indi.line(), 3);
        assert_eq!(indi.find_first("NAME").unwrap().value(), Some("Second"));

        let husb = document.find_first("FAM.HUSB").unwrap();
        assert_eq!(husb.target(), Some(indi));
        assert_eq!(husb.target().unwrap().line(), 3);
    }

    #[test]
    fn test_non_pointer_values_have_no_reference() {
        let document = parse("0 @I1@ INDI\n1 NAME Bob /Smith/\n1 NOTE see @I1@ here", true).unwrap();
        for node in document.get(0).unwrap().children() {
            assert_eq!(node.reference(), None, "{node}");
        }
    }

    #[test]
    fn test_pending_list_is_consumed() {
        let mut document = parse(LINKED, true).unwrap();
        assert!(document.pending.is_empty());
        assert!(document.resolve(true).is_ok());
    }
}
