use std::fmt;
use std::ptr;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::ParseError;
use crate::fields::Fields;
use crate::fields::Records;
use crate::node::Node;
use crate::node::NodeId;
use crate::node::Reference;
use crate::structures::Structure;
use crate::tags::Kind;
use crate::tags::Tag;

/// Parent name reported when the document root rejects a record.
pub const DOCUMENT_PARENT: &str = "<document>";

/// A parsed tree.
///
/// Nodes live in one arena and refer to each other by [`NodeId`]; parents,
/// children and resolved references are all ids into the same table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    pub(crate) roots: Vec<NodeId>,
    pub(crate) records: Records,
    pub(crate) index: FxHashMap<String, NodeId>,
    pub(crate) pending: Vec<NodeId>,
}

/// Outcome of [`Document::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Attached {
    pub id: NodeId,
    /// Whether the parent stored the node in a typed slot. Unaccepted
    /// nodes are still part of the tree.
    pub accepted: bool,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `node` as the last child of `parent`, or as a top-level
    /// record when `parent` is `None`.
    ///
    /// In strict mode a child the parent has no slot for is rejected before
    /// anything is added. Otherwise it is attached untyped.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an id from this document.
    pub fn attach(
        &mut self,
        parent: Option<NodeId>,
        mut node: Node,
        strict: bool,
    ) -> Result<Attached, ParseError> {
        let accepted = match (parent, node.tag()) {
            (_, None) => false,
            (Some(parent), Some(tag)) => self.nodes[parent.index()].fields.accepts(tag),
            (None, Some(tag)) => self.records.accepts(tag),
        };

        if !accepted && strict {
            return Err(ParseError::UnexpectedTag {
                line: node.line,
                child: node.kind.to_string(),
                parent: self.parent_name(parent),
            });
        }

        let id = NodeId::new(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        let tag = node.tag();
        node.parent = parent;

        if let Some(xref) = &node.xref {
            if let Some(previous) = self.index.insert(xref.clone(), id) {
                tracing::debug!(%xref, ?previous, "identifier redeclared, keeping the later node");
            }
        }
        if node.reference.is_some() {
            self.pending.push(id);
        }

        tracing::trace!(line = node.line, kind = %node.kind, accepted, "attach");
        if !accepted {
            tracing::debug!(
                "line {}: '{}' attached under '{}' without a typed slot",
                node.line,
                node.kind,
                self.parent_name(parent)
            );
        }

        self.nodes.push(node);

        match parent {
            Some(parent) => {
                let parent = &mut self.nodes[parent.index()];
                parent.children.push(id);
                if let (true, Some(tag)) = (accepted, tag) {
                    parent.fields.store(tag, id);
                }
            }
            None => {
                self.roots.push(id);
                if let (true, Some(tag)) = (accepted, tag) {
                    self.records.store(tag, id);
                }
            }
        }

        Ok(Attached { id, accepted })
    }

    fn parent_name(&self, parent: Option<NodeId>) -> String {
        match parent {
            Some(parent) => self.nodes[parent.index()].kind.to_string(),
            None => DOCUMENT_PARENT.to_string(),
        }
    }

    /// Number of top-level records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The `index`th top-level record.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<NodeRef<'_>> {
        self.roots.get(index).map(|&id| NodeRef::new(self, id))
    }

    /// Top-level records in file order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.roots.iter().map(move |&id| NodeRef::new(self, id))
    }

    /// Any node of the tree by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Every node in source order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node that declared `xref`, at any depth.
    #[must_use]
    pub fn lookup(&self, xref: &str) -> Option<NodeRef<'_>> {
        self.index.get(xref).map(|&id| NodeRef::new(self, id))
    }

    /// Descends from the top-level records along a dot-separated tag path.
    #[must_use]
    pub fn find(&self, path: &str) -> Vec<NodeRef<'_>> {
        descend(self, &self.roots, path)
    }

    #[must_use]
    pub fn find_first(&self, path: &str) -> Option<NodeRef<'_>> {
        self.find(path).into_iter().next()
    }

    /// The typed top-level records.
    #[must_use]
    pub fn records(&self) -> &Records {
        &self.records
    }

    #[must_use]
    pub fn header(&self) -> Option<NodeRef<'_>> {
        self.records.head.first().map(|&id| NodeRef::new(self, id))
    }

    #[must_use]
    pub fn submission(&self) -> Option<NodeRef<'_>> {
        self.records.subn.first().map(|&id| NodeRef::new(self, id))
    }

    pub fn individuals(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.each(&self.records.indi)
    }

    pub fn families(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.each(&self.records.fam)
    }

    pub fn sources(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.each(&self.records.sour)
    }

    pub fn notes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.each(&self.records.note)
    }

    pub fn repositories(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.each(&self.records.repo)
    }

    pub fn objects(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.each(&self.records.obje)
    }

    pub fn submitters(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.each(&self.records.subm)
    }

    fn each<'a>(&'a self, ids: &'a [NodeId]) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        ids.iter().map(move |&id| NodeRef::new(self, id))
    }

    /// The document as text, one record subtree after another.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in self.iter() {
            if !out.is_empty() {
                out.push('\n');
            }
            record.render_into(&mut out);
        }
        out
    }
}

fn descend<'a>(document: &'a Document, start: &[NodeId], path: &str) -> Vec<NodeRef<'a>> {
    let is = |id: NodeId, segment: &str| document.nodes[id.index()].kind.as_str() == segment;
    let mut segments = path.split('.');
    let first = segments.next().unwrap_or_default();

    let mut found: Vec<NodeId> = start.iter().copied().filter(|&id| is(id, first)).collect();
    for segment in segments {
        found = found
            .iter()
            .flat_map(|id| document.nodes[id.index()].children.iter().copied())
            .filter(|&id| is(id, segment))
            .collect();
    }

    found
        .into_iter()
        .map(|id| NodeRef::new(document, id))
        .collect()
}

/// Where a node's reference points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    Node(NodeRef<'a>),
    Unresolved(&'a str),
}

/// A borrowed view of one node in its document.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    document: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn new(document: &'a Document, id: NodeId) -> Self {
        NodeRef { document, id }
    }

    fn raw(self) -> &'a Node {
        &self.document.nodes[self.id.index()]
    }

    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn document(self) -> &'a Document {
        self.document
    }

    #[must_use]
    pub fn node(self) -> &'a Node {
        self.raw()
    }

    #[must_use]
    pub fn line(self) -> usize {
        self.raw().line
    }

    #[must_use]
    pub fn level(self) -> u32 {
        self.raw().level
    }

    #[must_use]
    pub fn xref(self) -> Option<&'a str> {
        self.raw().xref.as_deref()
    }

    #[must_use]
    pub fn kind(self) -> &'a Kind {
        &self.raw().kind
    }

    #[must_use]
    pub fn tag(self) -> Option<Tag> {
        self.raw().kind.tag()
    }

    /// The tag text, known or not.
    #[must_use]
    pub fn tag_name(self) -> &'a str {
        self.raw().kind.as_str()
    }

    #[must_use]
    pub fn value(self) -> Option<&'a str> {
        self.raw().value.as_deref()
    }

    #[must_use]
    pub fn fields(self) -> &'a Fields {
        &self.raw().fields
    }

    /// Resolves an id taken from this node's [`Fields`].
    #[must_use]
    pub fn slot(self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        id.and_then(|id| self.document.node(id))
    }

    #[must_use]
    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.raw().parent.map(|id| NodeRef::new(self.document, id))
    }

    /// Children in file order, typed or not.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let document = self.document;
        self.raw()
            .children
            .iter()
            .map(move |&id| NodeRef::new(document, id))
    }

    #[must_use]
    pub fn child(self, index: usize) -> Option<NodeRef<'a>> {
        self.raw()
            .children
            .get(index)
            .map(|&id| NodeRef::new(self.document, id))
    }

    /// Number of children.
    #[must_use]
    pub fn len(self) -> usize {
        self.raw().children.len()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.raw().children.is_empty()
    }

    #[must_use]
    pub fn reference(self) -> Option<Target<'a>> {
        match self.raw().reference.as_ref()? {
            Reference::Resolved(id) => Some(Target::Node(NodeRef::new(self.document, *id))),
            Reference::Unresolved(xref) => Some(Target::Unresolved(xref)),
        }
    }

    /// The node this one points at, once resolved.
    #[must_use]
    pub fn target(self) -> Option<NodeRef<'a>> {
        match self.reference()? {
            Target::Node(node) => Some(node),
            Target::Unresolved(_) => None,
        }
    }

    #[must_use]
    pub fn find(self, path: &str) -> Vec<NodeRef<'a>> {
        descend(self.document, &self.raw().children, path)
    }

    #[must_use]
    pub fn find_first(self, path: &str) -> Option<NodeRef<'a>> {
        self.find(path).into_iter().next()
    }

    /// This node and its subtree as text.
    #[must_use]
    pub fn render(self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(self, out: &mut String) {
        let mut stack = vec![self];
        let mut first = true;
        while let Some(node) = stack.pop() {
            if !first {
                out.push('\n');
            }
            first = false;
            out.push_str(&node.to_string());
            stack.extend(node.children().collect::<Vec<_>>().into_iter().rev());
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.raw();
        write!(f, "{}", node.level)?;
        if let Some(xref) = &node.xref {
            write!(f, " {xref}")?;
        }
        write!(f, " {}", node.kind)?;
        if let Some(value) = &node.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("line", &self.to_string())
            .finish()
    }
}
