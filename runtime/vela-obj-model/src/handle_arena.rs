use crate::{Handle, next_gen};

struct Slot<T> {
    generation: u16,
    value: Option<T>,
}

/// Slot arena addressed by generational [`Handle`]s. Freed slots go on a
/// free list and come back with a bumped generation, so stale handles to a
/// reused slot resolve to `None` instead of the new occupant.
pub struct HandleArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> HandleArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn insert(&mut self, value: T) -> Handle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = next_gen(slot.generation);
            slot.value = Some(value);
            return Handle::encode(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            value: Some(value),
        });
        Handle::encode(index, 1)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        let (index, generation) = handle.decode()?;
        let slot = self.slots.get(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let (index, generation) = handle.decode()?;
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.value.as_mut()
    }

    /// Frees the slot and returns its value. The generation is bumped at
    /// the next reuse, not here, so double-remove is a plain `None`.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let (index, generation) = handle.decode()?;
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.value.take()?;
        self.free.push(index);
        Some(value)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }
}

impl<T> Default for HandleArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_resolve() {
        let mut arena = HandleArena::new();
        let h = arena.insert("a");
        assert_eq!(arena.get(h), Some(&"a"));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_remove_invalidates() {
        let mut arena = HandleArena::new();
        let h = arena.insert(1);
        assert_eq!(arena.remove(h), Some(1));
        assert_eq!(arena.get(h), None);
        assert_eq!(arena.remove(h), None);
    }

    #[test]
    fn test_reuse_bumps_generation() {
        let mut arena = HandleArena::new();
        let old = arena.insert(1);
        arena.remove(old);
        let new = arena.insert(2);
        // Same slot, different generation: the stale handle stays dead.
        assert_ne!(old, new);
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&2));
    }

    #[test]
    fn test_null_never_resolves() {
        let arena: HandleArena<i32> = HandleArena::new();
        assert_eq!(arena.get(Handle::NULL), None);
    }

    proptest! {
        #[test]
        fn prop_inserted_values_resolve(values in prop::collection::vec(any::<u64>(), 1..64)) {
            let mut arena = HandleArena::new();
            let handles: Vec<_> = values.iter().map(|&v| arena.insert(v)).collect();
            for (h, v) in handles.iter().zip(values.iter()) {
                prop_assert_eq!(arena.get(*h), Some(v));
            }
            prop_assert_eq!(arena.len(), values.len());
        }

        #[test]
        fn prop_removed_handles_stay_dead(
            values in prop::collection::vec(any::<u64>(), 2..32),
            churn in 1usize..16,
        ) {
            let mut arena = HandleArena::new();
            let handles: Vec<_> = values.iter().map(|&v| arena.insert(v)).collect();
            let victim = handles[values.len() / 2];
            arena.remove(victim);
            for i in 0..churn {
                let h = arena.insert(i as u64);
                prop_assert_ne!(h, victim);
            }
            prop_assert_eq!(arena.get(victim), None);
        }
    }
}
