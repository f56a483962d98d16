use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A key/value pair stored in a [`Bst`](crate::Bst).
///
/// Equality, ordering and hashing look at the key only, so an entry built with
/// [`Entry::from_key`] can stand in for a stored entry during lookups. Keys are compared
/// with `Ord for str` (byte-wise UTF-8, case-sensitive).
///
/// Entries are immutable once constructed.
///
/// # Examples
///
/// ```
/// use dict_tree::Entry;
///
/// let stored = Entry::new("cat", "chat");
/// let probe = Entry::from_key("cat");
///
/// assert_eq!(stored, probe);
/// assert!(Entry::from_key("Cat") < probe);
/// assert_eq!(stored.to_string(), "cat:chat");
/// ```
#[derive(Clone)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// Creates an entry from a key and its value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an entry with an empty value, used to probe for `key`.
    #[must_use]
    pub fn from_key(key: impl Into<String>) -> Self {
        Self::new(key, String::new())
    }

    /// Returns the key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value. Empty for probe entries.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the entry, returning `(key, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("key", &self.key).field("value", &self.value).finish()
    }
}

/// Formats as `key:value`, the seed-file line format.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Entry {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}
