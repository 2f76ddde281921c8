use tracing::trace;

use crate::engine::resolve::descend;
use crate::model::DocNode;
use crate::parser::ast::Selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn sibling<N: DocNode>(self, node: &N) -> Option<N> {
        match self {
            Direction::Previous => node.previous_sibling(),
            Direction::Next => node.next_sibling(),
        }
    }
}

/// Nearest node named `name` in `direction` from `node`.
///
/// Search order: each sibling in turn (the sibling itself, then the first
/// matching descendant of its subtree in document order); once the siblings are
/// exhausted the search continues from the parent, so aunts/uncles come next,
/// then the grandparent's siblings, up to the root.
pub fn nearest<N: DocNode>(node: &N, name: &str, direction: Direction) -> Option<N> {
    let selector = Selector::named(name);
    let mut origin = node.clone();
    loop {
        let mut cursor = direction.sibling(&origin);
        while let Some(sibling) = cursor {
            if sibling.has_name(name) {
                return Some(sibling);
            }
            if let Some(found) = descend(std::slice::from_ref(&sibling), &selector).into_iter().next() {
                return Some(found);
            }
            cursor = direction.sibling(&sibling);
        }
        origin = origin.parent()?;
        trace!(?origin, name, "sibling search moves up");
    }
}

/// Every successive `nearest` match, stopping after `until` (included) or when
/// nothing further matches. Starting at `until` yields just `[node]`.
pub fn all_until<N: DocNode>(node: &N, name: &str, direction: Direction, until: Option<&N>) -> Vec<N> {
    if until == Some(node) {
        return vec![node.clone()];
    }
    let mut found = Vec::new();
    let mut current = node.clone();
    while let Some(next) = nearest(&current, name, direction) {
        let done = until == Some(&next);
        found.push(next.clone());
        if done {
            break;
        }
        current = next;
    }
    found
}
