//! Simple in-memory tree implementation of `DocNode` used in tests and quick prototypes.
//!
//! Focus:
//! - Ergonomic builder for quick tree creation
//! - Immutable once built; parent links are set exactly once
//! - O(1) identifier lookup on document nodes (index built with the document)
//!
//! Example:
//! ```
//! use docpath::simple_node::{doc, elem, text};
//! use docpath::DocNode;
//!
//! // <root id="r"><child>Hello</child><child world="yes"/></root>
//! let document = doc()
//!     .child(
//!         elem("root")
//!             .attr("id", "r")
//!             .child(elem("child").child(text("Hello")))
//!             .child(elem("child").attr("world", "yes")),
//!     )
//!     .build();
//!
//! let root = document.element_by_id("r").unwrap();
//! assert_eq!(root.name().as_deref(), Some("root"));
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.text_content(), "Hello");
//! ```
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use tracing::warn;

use crate::model::{DocNode, NodeKind};

pub(crate) struct Inner {
    kind: NodeKind,
    name: Option<String>,
    value: Option<String>, // text / comment / PI content
    attributes: Vec<(String, String)>,
    parent: OnceLock<Weak<Inner>>,
    children: Vec<SimpleNode>,
    ids: Option<HashMap<String, SimpleNode>>, // document nodes only
}

/// A simple Arc-backed node implementation.
#[derive(Clone)]
pub struct SimpleNode(pub(crate) Arc<Inner>);

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SimpleNode {}
impl std::hash::Hash for SimpleNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleNode")
            .field("kind", &self.0.kind)
            .field("name", &self.0.name)
            .field("value", &self.0.value)
            .finish_non_exhaustive()
    }
}

impl SimpleNode {
    pub fn document() -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Document, None, None)
    }
    pub fn element(name: &str) -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Element, Some(name.to_string()), None)
    }
    pub fn text(value: &str) -> SimpleNode {
        SimpleNodeBuilder::new(NodeKind::Text, None, Some(value.to_string())).build()
    }
    pub fn comment(value: &str) -> SimpleNode {
        SimpleNodeBuilder::new(NodeKind::Comment, None, Some(value.to_string())).build()
    }
    pub fn pi(target: &str, data: &str) -> SimpleNode {
        SimpleNodeBuilder::new(NodeKind::ProcessingInstruction, Some(target.to_string()), Some(data.to_string()))
            .build()
    }

    /// Concatenated text of all descendant text nodes (the node's own value for text nodes).
    pub fn text_content(&self) -> String {
        fn dfs(n: &SimpleNode, out: &mut String) {
            if n.0.kind == NodeKind::Text
                && let Some(v) = &n.0.value
            {
                out.push_str(v);
            }
            for c in &n.0.children {
                dfs(c, out);
            }
        }
        match self.0.kind {
            NodeKind::Element | NodeKind::Document => {
                let mut out = String::new();
                dfs(self, &mut out);
                out
            }
            _ => self.0.value.clone().unwrap_or_default(),
        }
    }
}

pub struct SimpleNodeBuilder {
    kind: NodeKind,
    name: Option<String>,
    value: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<SimpleNode>,
}

impl SimpleNodeBuilder {
    fn new(kind: NodeKind, name: Option<String>, value: Option<String>) -> Self {
        Self { kind, name, value, attributes: Vec::new(), children: Vec::new() }
    }

    pub fn child(mut self, child: impl Into<SimpleNodeOrBuilder>) -> Self {
        self.children.push(child.into().into_node());
        self
    }
    pub fn children<I: IntoIterator<Item = SimpleNodeOrBuilder>>(mut self, it: I) -> Self {
        self.children.extend(it.into_iter().map(SimpleNodeOrBuilder::into_node));
        self
    }
    /// Set an attribute; a repeated name replaces the earlier value.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn build(self) -> SimpleNode {
        let ids = (self.kind == NodeKind::Document).then(|| index_ids(&self.children));
        let node = SimpleNode(Arc::new(Inner {
            kind: self.kind,
            name: self.name,
            value: self.value,
            attributes: self.attributes,
            parent: OnceLock::new(),
            children: self.children,
            ids,
        }));
        for c in &node.0.children {
            if c.0.parent.set(Arc::downgrade(&node.0)).is_err() {
                warn!(child = ?c, "node already attached to a parent; keeping the first parent");
            }
        }
        node
    }
}

// First element in document order wins for a repeated id.
fn index_ids(children: &[SimpleNode]) -> HashMap<String, SimpleNode> {
    fn walk(n: &SimpleNode, ids: &mut HashMap<String, SimpleNode>) {
        if n.0.kind == NodeKind::Element
            && let Some(id) = n.attribute("id")
        {
            ids.entry(id).or_insert_with(|| n.clone());
        }
        for c in &n.0.children {
            walk(c, ids);
        }
    }
    let mut ids = HashMap::new();
    for c in children {
        walk(c, &mut ids);
    }
    ids
}

pub enum SimpleNodeOrBuilder {
    Built(SimpleNode),
    Builder(SimpleNodeBuilder),
}

impl SimpleNodeOrBuilder {
    fn into_node(self) -> SimpleNode {
        match self {
            SimpleNodeOrBuilder::Built(n) => n,
            SimpleNodeOrBuilder::Builder(b) => b.build(),
        }
    }
}

impl From<SimpleNode> for SimpleNodeOrBuilder {
    fn from(n: SimpleNode) -> Self {
        SimpleNodeOrBuilder::Built(n)
    }
}
impl From<SimpleNodeBuilder> for SimpleNodeOrBuilder {
    fn from(b: SimpleNodeBuilder) -> Self {
        SimpleNodeOrBuilder::Builder(b)
    }
}

// Convenience helper functions for concise test code
pub fn elem(name: &str) -> SimpleNodeBuilder {
    SimpleNode::element(name)
}
pub fn text(v: &str) -> SimpleNode {
    SimpleNode::text(v)
}
pub fn comment(v: &str) -> SimpleNode {
    SimpleNode::comment(v)
}
pub fn doc() -> SimpleNodeBuilder {
    SimpleNode::document()
}

impl DocNode for SimpleNode {
    fn kind(&self) -> NodeKind {
        self.0.kind
    }
    fn name(&self) -> Option<String> {
        self.0.name.clone()
    }
    fn parent(&self) -> Option<Self> {
        self.0.parent.get().and_then(Weak::upgrade).map(SimpleNode)
    }
    fn children(&self) -> Vec<Self> {
        self.0.children.clone()
    }
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone())
    }
    fn has_name(&self, name: &str) -> bool {
        self.0.name.as_deref() == Some(name)
    }
    fn element_by_id(&self, id: &str) -> Option<Self> {
        self.0.ids.as_ref()?.get(id).cloned()
    }
}
