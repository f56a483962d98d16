use alloc::vec::Vec;

use super::handle::Handle;
use crate::error::AllocationError;

/// Append-only slot storage addressed by [`Handle`].
///
/// Slots are never freed individually; the whole arena is released at once on drop, which
/// keeps teardown iterative no matter how the tree above it is shaped.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Reserves room for `capacity` slots if the allocator allows it.
    ///
    /// The capacity is only a hint. A reservation that fails is dropped here, and the arena
    /// grows on demand in `try_alloc`, which reports the failure.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        let _ = slots.try_reserve_exact(capacity.min(Handle::MAX + 1));
        Self { slots }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Stores `element` in a new slot.
    ///
    /// Fails instead of aborting when the allocator cannot grow the slot vector or every
    /// handle is in use. On failure `element` is dropped and the arena is unchanged.
    pub(crate) fn try_alloc(&mut self, element: T) -> Result<Handle, AllocationError> {
        let handle = Handle::try_from_index(self.slots.len())
            .ok_or(AllocationError::Exhausted { max: Handle::MAX + 1 })?;
        self.slots.try_reserve(1)?;
        self.slots.push(element);
        Ok(handle)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.to_index()]
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert!(arena.capacity() >= 10);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn oversized_capacity_hint_does_not_panic() {
        // `Handle::MAX + 1` slots of this size overflow `isize`, so the reservation must fail.
        let arena: Arena<[u64; 1 << 40]> = Arena::with_capacity(usize::MAX);
        assert_eq!(arena.capacity(), 0);
        assert_eq!(arena.len(), 0);

        let mut small: Arena<u32> = Arena::with_capacity(usize::MAX);
        assert!(small.capacity() > Handle::MAX);
        small.try_alloc(7).unwrap();
    }

    #[test]
    fn arena_reports_exhaustion() {
        let mut arena: Arena<u8> = Arena::new();
        for _ in 0..=Handle::MAX {
            arena.try_alloc(0).unwrap();
        }
        assert_eq!(arena.len(), Handle::MAX + 1);

        let err = arena.try_alloc(1).unwrap_err();
        assert!(matches!(err, AllocationError::Exhausted { max } if max == Handle::MAX + 1));
        assert_eq!(arena.len(), Handle::MAX + 1);
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.try_alloc(value).unwrap();
                        model.push((handle, value));
                    }
                    Operation::Get(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let handle = model[index].0;
                        prop_assert_eq!(*arena.get(handle), model[index].1);
                    }
                    Operation::GetMut(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let handle = model[index].0;
                        *arena.get_mut(handle) = value;
                        model[index].1 = value;
                    }
                }

                prop_assert_eq!(arena.len(), model.len());

                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Get(usize),
        GetMut(usize, u32),
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => any::<usize>().prop_map(Operation::Get),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::GetMut(which, value)),
        ]
    }
}
