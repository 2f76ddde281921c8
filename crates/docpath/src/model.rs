#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Text,
    Comment,
    ProcessingInstruction,
}

/// Read-only view of a node in an already materialized document tree.
///
/// Adapters only have to provide the structural accessors; sibling links,
/// descendant enumeration and identifier lookup have defaults derived from
/// `parent()`/`children()` that adapters with native support should override.
///
/// Properties the engine relies on:
/// - `children()` returns nodes in document order.
/// - Equality is node identity, not structural equality.
/// - Identifier lookup is only consulted on nodes for which `supports_id_lookup()`
///   returns true (whole-document roots).
pub trait DocNode: Clone + Eq + core::fmt::Debug {
    fn kind(&self) -> NodeKind;
    /// Qualified tag name as written in the source (`w:p`), `None` for unnamed nodes.
    fn name(&self) -> Option<String>;
    fn parent(&self) -> Option<Self>;
    fn children(&self) -> Vec<Self>;
    fn attribute(&self, name: &str) -> Option<String>;

    fn has_name(&self, name: &str) -> bool {
        self.name().as_deref() == Some(name)
    }

    fn previous_sibling(&self) -> Option<Self> {
        let siblings = self.parent()?.children();
        let pos = siblings.iter().position(|n| n == self)?;
        pos.checked_sub(1).and_then(|i| siblings.get(i).cloned())
    }

    fn next_sibling(&self) -> Option<Self> {
        let siblings = self.parent()?.children();
        let pos = siblings.iter().position(|n| n == self)?;
        siblings.get(pos + 1).cloned()
    }

    /// All descendants in pre-order (document order), excluding `self`.
    fn descendants(&self) -> Vec<Self> {
        fn walk<N: DocNode>(n: &N, out: &mut Vec<N>) {
            for c in n.children() {
                out.push(c.clone());
                walk(&c, out);
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Element descendants with the given name, or every element descendant for `None`.
    fn descendants_named(&self, name: Option<&str>) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|n| n.kind() == NodeKind::Element)
            .filter(|n| name.is_none_or(|name| n.has_name(name)))
            .collect()
    }

    /// Descendants of any kind whose name is one of `names`.
    fn descendants_named_any(&self, names: &[&str]) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|n| n.name().is_some_and(|name| names.contains(&name.as_str())))
            .collect()
    }

    fn supports_id_lookup(&self) -> bool {
        self.kind() == NodeKind::Document
    }

    /// Linear fallback; only meaningful when `supports_id_lookup()` holds.
    fn element_by_id(&self, id: &str) -> Option<Self> {
        self.descendants()
            .into_iter()
            .find(|n| n.kind() == NodeKind::Element && n.attribute("id").as_deref() == Some(id))
    }
}
