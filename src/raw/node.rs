use super::handle::Handle;
use crate::entry::Entry;

/// A tree node: one entry and links to the subtrees it owns.
///
/// Each child handle is held by exactly one parent, so ownership stays hierarchical and the
/// tree cannot form a cycle.
#[derive(Clone)]
pub(crate) struct Node {
    entry: Entry,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl Node {
    /// Creates a leaf holding `entry`.
    pub(crate) fn new(entry: Entry) -> Self {
        Self {
            entry,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn entry(&self) -> &Entry {
        &self.entry
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub(crate) fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Attaches `child` as the left subtree. The slot must be empty.
    pub(crate) fn set_left(&mut self, child: Handle) {
        debug_assert!(self.left.is_none(), "`Node::set_left()` - left child already present!");
        self.left = Some(child);
    }

    /// Attaches `child` as the right subtree. The slot must be empty.
    pub(crate) fn set_right(&mut self, child: Handle) {
        debug_assert!(self.right.is_none(), "`Node::set_right()` - right child already present!");
        self.right = Some(child);
    }
}
