//! Path-text entry points composing the parser, the resolver and the sibling navigator.
use crate::engine::{Direction, all_until, nearest, resolve_all, resolve_first};
use crate::error::Error;
use crate::model::DocNode;
use crate::parser::parse;

/// All nodes below `root` matching `path`. The path is fully parsed before the
/// tree is touched.
pub fn select_all<N: DocNode>(root: &N, path: &str) -> Result<Vec<N>, Error> {
    let path = parse(path)?;
    resolve_all(root, &path)
}

pub fn select_first<N: DocNode>(root: &N, path: &str) -> Result<Option<N>, Error> {
    let path = parse(path)?;
    resolve_first(root, &path)
}

pub fn previous<N: DocNode>(node: &N, name: &str) -> Option<N> {
    nearest(node, name, Direction::Previous)
}

pub fn next<N: DocNode>(node: &N, name: &str) -> Option<N> {
    nearest(node, name, Direction::Next)
}

pub fn all_previous<N: DocNode>(node: &N, name: &str, until: Option<&N>) -> Vec<N> {
    all_until(node, name, Direction::Previous, until)
}

pub fn all_next<N: DocNode>(node: &N, name: &str, until: Option<&N>) -> Vec<N> {
    all_until(node, name, Direction::Next, until)
}
