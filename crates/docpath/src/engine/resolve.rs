use tracing::{debug, trace};

use crate::error::Error;
use crate::model::DocNode;
use crate::parser::ast::{NodeNames, Path, Selector};

/// Resolve `path` below `root`, returning every match in order.
///
/// A multi-segment path is resolved in two passes: the last segment alone
/// (unanchored) anywhere below `root`, and the literal chain walk over all
/// segments. The result is the first pass filtered to nodes also reached by the
/// chain, keeping the first pass's order. This keeps terminal alternation and
/// attribute-only segments in document order and free of duplicates.
pub fn resolve_all<N: DocNode>(root: &N, path: &Path) -> Result<Vec<N>, Error> {
    let selectors = path.selectors();
    let Some((last, init)) = selectors.split_last() else {
        return Ok(vec![root.clone()]);
    };
    if init.is_empty() {
        return step(vec![root.clone()], last);
    }

    let anywhere = step(vec![root.clone()], &last.unanchored())?;
    let chained = selectors
        .iter()
        .try_fold(vec![root.clone()], |current, selector| step(current, selector))?;
    trace!(anywhere = anywhere.len(), chained = chained.len(), "two-phase intersection");

    Ok(anywhere.into_iter().filter(|n| chained.contains(n)).collect())
}

pub fn resolve_first<N: DocNode>(root: &N, path: &Path) -> Result<Option<N>, Error> {
    Ok(resolve_all(root, path)?.into_iter().next())
}

/// Apply a single segment to the current match set.
pub(crate) fn step<N: DocNode>(current: Vec<N>, selector: &Selector) -> Result<Vec<N>, Error> {
    if selector.is_id {
        return lookup_id(current, selector);
    }
    Ok(descend(&current, selector))
}

fn lookup_id<N: DocNode>(current: Vec<N>, selector: &Selector) -> Result<Vec<N>, Error> {
    let Some(id) = selector.names.single() else {
        return Ok(Vec::new());
    };
    for node in current {
        if !node.supports_id_lookup() {
            debug!(?node, id, "id selector evaluated against a non-document node");
            return Err(Error::NotADocumentRoot);
        }
        if let Some(found) = node.element_by_id(id) {
            return Ok(vec![found]);
        }
    }
    Ok(Vec::new())
}

/// Non-id segment step: gather, filter by attribute, then pick by index.
pub(crate) fn descend<N: DocNode>(current: &[N], selector: &Selector) -> Vec<N> {
    let mut nodes: Vec<N> = Vec::new();
    for node in current {
        match (&selector.names, selector.is_direct_child) {
            (names, true) => {
                nodes.extend(node.children().into_iter().filter(|c| names.matches(c.name().as_deref())));
            }
            (NodeNames::OneOf(names), false) => {
                let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
                nodes.extend(node.descendants_named_any(&names));
            }
            (names, false) => nodes.extend(node.descendants_named(names.single())),
        }
    }

    if let Some(attr) = &selector.attribute {
        nodes.retain(|n| match (&attr.value, n.attribute(&attr.name)) {
            (Some(want), Some(have)) => *want == have,
            (None, Some(_)) => true,
            (_, None) => false,
        });
    }

    if let Some(index) = selector.index {
        nodes = nodes.into_iter().nth(index).into_iter().collect();
    }

    trace!(segment = %selector, matched = nodes.len(), "segment step");
    nodes
}
