use serde::Serialize;

use crate::fields::Fields;
use crate::tags::Kind;
use crate::tags::Tag;
use crate::tokens::is_pointer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a pointer-shaped value leads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Reference {
    Resolved(NodeId),
    Unresolved(String),
}

/// One line of the document plus its place in the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub line: usize,
    pub level: u32,
    pub xref: Option<String>,
    pub kind: Kind,
    pub value: Option<String>,
    pub reference: Option<Reference>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub fields: Fields,
}

impl Node {
    /// A detached node. A pointer-shaped value starts out as an unresolved
    /// reference.
    #[must_use]
    pub fn new(line: usize, level: u32, xref: Option<&str>, kind: Kind, value: Option<&str>) -> Self {
        let reference = value
            .filter(|value| is_pointer(value))
            .map(|value| Reference::Unresolved(value.to_string()));
        Node {
            line,
            level,
            xref: xref.map(str::to_string),
            fields: Fields::for_kind(&kind),
            kind,
            value: value.map(str::to_string),
            reference,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Shorthand for a known tag without identifier, used when building
    /// trees by hand.
    #[must_use]
    pub fn tagged(level: u32, tag: Tag, value: Option<&str>) -> Self {
        Self::new(0, level, None, Kind::Known(tag), value)
    }

    #[must_use]
    pub fn tag(&self) -> Option<Tag> {
        self.kind.tag()
    }
}
