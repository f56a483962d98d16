use core::cmp::Ordering;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use crate::entry::Entry;
use crate::error::{Error, Result};

/// The core binary search tree backing `Bst`.
#[derive(Clone)]
pub(crate) struct RawBst {
    /// Arena storing all tree nodes.
    nodes: Arena<Node>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of nodes reachable from `root`.
    len: usize,
}

/// Pending nodes during an in-order walk. Sized for a balanced tree of a few billion keys;
/// deeper (skewed) trees spill to the heap.
type Stack = SmallVec<[Handle; 32]>;

impl RawBst {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of entries in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no entries.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the node capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Searches for `key` and returns the handle of the node holding it.
    pub(crate) fn search(&self, key: &str) -> Option<Handle> {
        let mut current = self.root?;

        loop {
            let node = self.nodes.get(current);
            current = match key.cmp(node.entry().key()) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left()?,
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Returns the stored entry for `key`.
    pub(crate) fn retrieve(&self, key: &str) -> Result<&Entry> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        match self.search(key) {
            Some(handle) => Ok(self.nodes.get(handle).entry()),
            None => Err(Error::KeyNotFound { key: key.into() }),
        }
    }

    /// Inserts `entry` as a new leaf.
    ///
    /// The insertion point is found before anything is allocated, so a duplicate key or an
    /// allocation failure leaves the tree exactly as it was.
    pub(crate) fn insert(&mut self, entry: Entry) -> Result<()> {
        let Some(mut current) = self.root else {
            let handle = self.nodes.try_alloc(Node::new(entry))?;
            self.root = Some(handle);
            self.len = 1;
            return Ok(());
        };

        loop {
            let node = self.nodes.get(current);
            match entry.cmp(node.entry()) {
                Ordering::Equal => {
                    let (key, _) = entry.into_parts();
                    return Err(Error::DuplicateKey { key });
                }
                Ordering::Less => {
                    if let Some(left) = node.left() {
                        current = left;
                    } else {
                        let handle = self.nodes.try_alloc(Node::new(entry))?;
                        self.nodes.get_mut(current).set_left(handle);
                        break;
                    }
                }
                Ordering::Greater => {
                    if let Some(right) = node.right() {
                        current = right;
                    } else {
                        let handle = self.nodes.try_alloc(Node::new(entry))?;
                        self.nodes.get_mut(current).set_right(handle);
                        break;
                    }
                }
            }
        }

        self.len += 1;
        Ok(())
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut height = 0;
        let mut pending: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        pending.push((root, 1));

        while let Some((handle, depth)) = pending.pop() {
            let node = self.nodes.get(handle);
            if !node.has_left() && !node.has_right() {
                height = height.max(depth);
                continue;
            }
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Returns a lazy in-order walk over the tree.
    pub(crate) fn in_order(&self) -> InOrder<'_> {
        let mut walk = InOrder {
            nodes: &self.nodes,
            stack: Stack::new(),
            remaining: self.len,
        };
        walk.descend_left(self.root);
        walk
    }
}

/// In-order walk using an explicit stack of the ancestors still to be visited.
#[derive(Clone)]
pub(crate) struct InOrder<'a> {
    nodes: &'a Arena<Node>,
    stack: Stack,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    /// Pushes `from` and its chain of left descendants.
    fn descend_left(&mut self, mut from: Option<Handle>) {
        while let Some(handle) = from {
            self.stack.push(handle);
            from = self.nodes.get(handle).left();
        }
    }

    pub(crate) fn next_entry(&mut self) -> Option<&'a Entry> {
        let handle = self.stack.pop()?;
        let node = self.nodes.get(handle);
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(node.entry())
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }
}
