//! A key/value dictionary that delegates to a [`Bst`].

use crate::bst::{Bst, Iter};
use crate::entry::Entry;
use crate::error::Result;

/// A dictionary of unique string keys.
///
/// Every method forwards to the underlying [`Bst`] and returns its errors unchanged; see the
/// corresponding `Bst` method for details.
///
/// # Examples
///
/// ```
/// use dict_tree::{Dictionary, Entry};
///
/// let mut dict = Dictionary::new();
/// dict.put(Entry::new("dog", "chien")).unwrap();
/// assert_eq!(dict.element_count(), 1);
/// assert_eq!(dict.get("dog").unwrap().value(), "chien");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Bst,
}

impl Dictionary {
    /// Makes a new, empty `Dictionary`.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Bst::new() }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.entries.element_count()
    }

    /// Stores `entry`. See [`Bst::insert`].
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`](crate::Error::DuplicateKey) or
    /// [`Error::Allocation`](crate::Error::Allocation).
    pub fn put(&mut self, entry: Entry) -> Result<()> {
        self.entries.insert(entry)
    }

    /// Looks up `key`. See [`Bst::retrieve`].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`](crate::Error::EmptyCollection) or
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound).
    pub fn get(&self, key: &str) -> Result<&Entry> {
        self.entries.retrieve(key)
    }

    /// Calls `visit` for every entry in ascending key order. See [`Bst::traverse_in_order`].
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`](crate::Error::EmptyCollection).
    pub fn display_content<'a, F>(&'a self, visit: F) -> Result<()>
    where
        F: FnMut(&'a Entry),
    {
        self.entries.traverse_in_order(visit)
    }

    /// Gets an iterator over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::vec::Vec;

    #[test]
    fn empty_dictionary_reports_empty_collection() {
        let dict = Dictionary::new();
        assert_eq!(dict.element_count(), 0);
        assert!(matches!(dict.get("cat"), Err(Error::EmptyCollection)));
        assert!(matches!(dict.display_content(|_| {}), Err(Error::EmptyCollection)));
        assert_eq!(dict.iter().count(), 0);
    }

    #[test]
    fn forwards_to_tree() {
        let mut dict = Dictionary::default();
        dict.put(Entry::new("dog", "chien")).unwrap();
        dict.put(Entry::new("cat", "chat")).unwrap();

        assert!(matches!(dict.put(Entry::new("cat", "chatte")), Err(Error::DuplicateKey { .. })));
        assert_eq!(dict.element_count(), 2);

        let mut visited = Vec::new();
        dict.display_content(|entry| visited.push(entry.clone())).unwrap();
        let keys: Vec<&str> = visited.iter().map(Entry::key).collect();
        assert_eq!(keys, ["cat", "dog"]);
        assert_eq!(visited[0].value(), "chat");
    }
}
