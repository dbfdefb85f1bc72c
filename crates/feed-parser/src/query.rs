// crates/feed-parser/src/query.rs
//! Child lookup by tag name
//!
//! Indices count every child, text nodes included, so they can be compared
//! against positions in [`Element::children`]. Only element children match.

use crate::tree::{Element, Node};
use std::collections::HashMap;

/// Returns the index of the first child element tagged `tag`.
///
/// Scans in document order; `None` when nothing matches or `element` is childless.
pub fn find_child(element: &Element, tag: &str) -> Option<usize> {
    element
        .children
        .iter()
        .position(|child| matches!(child, Node::Element(e) if e.tag == tag))
}

/// Returns true if any child element is tagged `tag`
pub fn has_child(element: &Element, tag: &str) -> bool {
    find_child(element, tag).is_some()
}

/// First-match index of every child tag, built in one pass
#[derive(Debug, Clone, Default)]
pub struct ChildIndex<'a> {
    first: HashMap<&'a str, usize>,
}

impl<'a> ChildIndex<'a> {
    /// Indexes the direct children of `element`
    pub fn build(element: &'a Element) -> Self {
        let mut first = HashMap::new();
        for (index, child) in element.children.iter().enumerate() {
            if let Node::Element(e) = child {
                first.entry(e.tag.as_str()).or_insert(index);
            }
        }
        Self { first }
    }

    /// Same answer as [`find_child`] on the indexed element
    pub fn find(&self, tag: &str) -> Option<usize> {
        self.first.get(tag).copied()
    }

    /// Same answer as [`has_child`] on the indexed element
    pub fn contains(&self, tag: &str) -> bool {
        self.first.contains_key(tag)
    }
}
