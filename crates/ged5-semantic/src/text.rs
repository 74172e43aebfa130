use ged5_syntax::NodeRef;
use ged5_syntax::Tag;

/// Reflows a node's value with its `CONT` and `CONC` children.
///
/// `CONT` starts a new line and `CONC` continues the last one. A node with
/// no value and no continuations has no lines.
#[must_use]
pub fn text_lines(node: NodeRef<'_>) -> Vec<String> {
    let mut lines: Vec<String> = node.value().map(str::to_string).into_iter().collect();
    for child in node.children() {
        let value = child.value().unwrap_or_default();
        match child.tag() {
            Some(Tag::Cont) => lines.push(value.to_string()),
            Some(Tag::Conc) => match lines.last_mut() {
                Some(last) => last.push_str(value),
                None => lines.push(value.to_string()),
            },
            _ => {}
        }
    }
    lines
}

#[must_use]
pub fn text(node: NodeRef<'_>) -> String {
    text_lines(node).join("\n")
}
