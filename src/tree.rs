//! Tree Utilities
//!
//! Immutable rewrites over the navigation tree. Every function returns a
//! new tree; nodes that are not affected are cloned unchanged.

use crate::models::NavNode;

/// Flip the `expanded` flag of the node with `id`.
///
/// Leaf nodes are left alone, so toggling a leaf returns an identical tree.
pub fn toggle_node(nodes: &[NavNode], id: &str) -> Vec<NavNode> {
    nodes
        .iter()
        .map(|node| {
            let mut next = node.clone();
            if node.id == id {
                if node.has_children() {
                    next.expanded = !node.expanded;
                }
            } else if node.has_children() {
                next.children = toggle_node(&node.children, id);
            }
            next
        })
        .collect()
}

/// Recompute `active` for the whole tree against `route`.
///
/// Only the first node in depth-first (authored) order whose `href`
/// equals `route` is marked; ancestors are not marked or expanded.
pub fn mark_active(nodes: &[NavNode], route: &str) -> Vec<NavNode> {
    fn walk(nodes: &[NavNode], route: &str, found: &mut bool) -> Vec<NavNode> {
        nodes
            .iter()
            .map(|node| {
                let mut next = node.clone();
                next.active = !*found && node.href.as_deref() == Some(route);
                if next.active {
                    *found = true;
                }
                next.children = walk(&node.children, route, found);
                next
            })
            .collect()
    }

    let mut found = false;
    walk(nodes, route, &mut found)
}

/// Depth-first lookup by id
pub fn find_node<'a>(nodes: &'a [NavNode], id: &str) -> Option<&'a NavNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Id of the active node, if any
pub fn active_id(nodes: &[NavNode]) -> Option<&str> {
    for node in nodes {
        if node.active {
            return Some(&node.id);
        }
        if let Some(id) = active_id(&node.children) {
            return Some(id);
        }
    }
    None
}

/// Ids that occur more than once, in first-repeat order
pub fn duplicate_ids(nodes: &[NavNode]) -> Vec<String> {
    fn collect<'a>(nodes: &'a [NavNode], seen: &mut Vec<&'a str>, dupes: &mut Vec<String>) {
        for node in nodes {
            if seen.contains(&node.id.as_str()) {
                if !dupes.contains(&node.id) {
                    dupes.push(node.id.clone());
                }
            } else {
                seen.push(&node.id);
            }
            collect(&node.children, seen, dupes);
        }
    }

    let mut seen = Vec::new();
    let mut dupes = Vec::new();
    collect(nodes, &mut seen, &mut dupes);
    dupes
}
