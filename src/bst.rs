use core::fmt;
use core::iter::FusedIterator;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::raw::{InOrder, RawBst};

mod capacity;

/// An ordered collection of [`Entry`] values with unique keys, backed by a
/// [binary search tree].
///
/// Entries are ordered by key (see [`Entry`] for the exact comparison). Each node holds one
/// entry and owns its left subtree of strictly smaller keys and its right subtree of strictly
/// larger keys. The tree is *not* rebalanced: inserting keys in random order gives an
/// expected depth of O(log n), while inserting them already sorted degenerates into a list
/// of depth n.
///
/// There is no removal and no in-place update. Once stored, an entry is fixed for the life of
/// the tree.
///
/// # Examples
///
/// ```
/// use dict_tree::{Bst, Entry, Error};
///
/// let mut tree = Bst::new();
/// for key in ["5", "3", "8", "1", "4"] {
///     tree.insert(Entry::new(key, "")).unwrap();
/// }
///
/// assert_eq!(tree.element_count(), 5);
///
/// let keys: Vec<&str> = tree.iter().map(Entry::key).collect();
/// assert_eq!(keys, ["1", "3", "4", "5", "8"]);
///
/// assert!(matches!(tree.insert(Entry::from_key("3")), Err(Error::DuplicateKey { .. })));
/// assert!(matches!(tree.retrieve("7"), Err(Error::KeyNotFound { .. })));
/// ```
///
/// Cloning a tree copies every node; the copy and the original evolve independently:
///
/// ```
/// use dict_tree::{Bst, Entry};
///
/// let mut original = Bst::new();
/// original.insert(Entry::new("a", "1")).unwrap();
///
/// let mut copy = original.clone();
/// copy.insert(Entry::new("b", "2")).unwrap();
///
/// assert_eq!(original.element_count(), 1);
/// assert_eq!(copy.element_count(), 2);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
pub struct Bst {
    raw: RawBst,
}

/// A lazy, in-order iterator over the entries of a [`Bst`].
///
/// This `struct` is created by the [`iter`] method on [`Bst`]. See its documentation for more.
///
/// [`iter`]: Bst::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    inner: InOrder<'a>,
}

impl Bst {
    /// Makes a new, empty `Bst`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Bst {
        Bst { raw: RawBst::new() }
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of entries in the tree. Same as [`element_count`](Bst::element_count).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Inserts `entry` into the tree.
    ///
    /// The first entry becomes the root. Later entries descend from the root, going left at
    /// every node with a larger key and right at every node with a smaller key, and are
    /// attached at the first empty child slot.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateKey`] if an entry with the same key is already stored. The tree is
    ///   left unchanged and the stored value is kept.
    /// - [`Error::Allocation`] if storage for the new node cannot be acquired.
    ///
    /// # Complexity
    ///
    /// O(depth): expected O(log n) for random insertion order, O(n) for sorted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use dict_tree::{Bst, Entry};
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(Entry::new("cat", "chat")).unwrap();
    /// assert!(tree.insert(Entry::new("cat", "chatte")).is_err());
    /// assert_eq!(tree.retrieve("cat").unwrap().value(), "chat");
    /// ```
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        self.raw.insert(entry)
    }

    /// Returns the stored entry whose key equals `key`.
    ///
    /// The returned reference points at the entry inside the tree; nothing is copied.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCollection`] if the tree has no entries.
    /// - [`Error::KeyNotFound`] if no stored entry has this key. The error owns a copy of
    ///   `key`, so a miss allocates. Use [`contains_key`](Bst::contains_key) to probe without
    ///   allocating.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use dict_tree::{Bst, Entry, Error};
    ///
    /// let mut tree = Bst::new();
    /// assert!(matches!(tree.retrieve("dog"), Err(Error::EmptyCollection)));
    ///
    /// tree.insert(Entry::new("dog", "chien")).unwrap();
    /// assert_eq!(tree.retrieve("dog").unwrap().value(), "chien");
    /// assert!(matches!(tree.retrieve("fish"), Err(Error::KeyNotFound { .. })));
    /// ```
    pub fn retrieve(&self, key: &str) -> Result<&Entry> {
        self.raw.retrieve(key)
    }

    /// Returns `true` if an entry with this key is stored. Never allocates.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.raw.search(key).is_some()
    }

    /// Calls `visit` once for every entry, in ascending key order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the tree has no entries; `visit` is not called.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use dict_tree::{Bst, Entry};
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(Entry::new("dog", "chien")).unwrap();
    /// tree.insert(Entry::new("cat", "chat")).unwrap();
    ///
    /// let mut out = String::new();
    /// tree.traverse_in_order(|entry| out.push_str(&format!("{entry}\n"))).unwrap();
    /// assert_eq!(out, "cat:chat\ndog:chien\n");
    /// ```
    pub fn traverse_in_order<'a, F>(&'a self, mut visit: F) -> Result<()>
    where
        F: FnMut(&'a Entry),
    {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }

        for entry in self {
            visit(entry);
        }
        Ok(())
    }

    /// Gets an iterator over the entries of the tree, in ascending key order.
    ///
    /// Unlike [`traverse_in_order`](Bst::traverse_in_order), iterating an empty tree is not an
    /// error; the iterator is simply empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dict_tree::{Bst, Entry};
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(Entry::new("b", "2")).unwrap();
    /// tree.insert(Entry::new("a", "1")).unwrap();
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next().map(Entry::key), Some("a"));
    /// assert_eq!(iter.next().map(Entry::key), Some("b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.raw.in_order(),
        }
    }

    /// Returns the number of entries on the longest path from the root to a leaf.
    ///
    /// This is an inspection helper; it is `0` for an empty tree and equals
    /// [`element_count`](Bst::element_count) when keys were inserted in sorted order.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }
}

impl Clone for Bst {
    fn clone(&self) -> Self {
        Bst { raw: self.raw.clone() }
    }
}

/// Two trees are equal when they hold the same keys with the same values.
impl PartialEq for Bst {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.key() == b.key() && a.value() == b.value())
    }
}

impl Eq for Bst {}

impl fmt::Debug for Bst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|entry| (entry.key(), entry.value()))).finish()
    }
}

impl Default for Bst {
    fn default() -> Self {
        Bst::new()
    }
}

impl<'a> IntoIterator for &'a Bst {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        self.inner.next_entry()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
