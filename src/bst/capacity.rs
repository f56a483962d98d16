use super::Bst;
use crate::raw::RawBst;

impl Bst {
    /// Creates an empty tree with room for at least `capacity` entries before node storage
    /// has to grow.
    ///
    /// `capacity` is a hint. If the storage cannot be reserved, this still returns an empty
    /// tree without panicking, and [`insert`](Bst::insert) later reports
    /// [`Error::Allocation`](crate::Error::Allocation) if growing fails there too.
    ///
    /// # Examples
    ///
    /// ```
    /// use dict_tree::Bst;
    ///
    /// let tree = Bst::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1), plus one allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Bst {
            raw: RawBst::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the tree can hold before node storage has to grow.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
