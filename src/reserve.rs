/// Capacity request for a reserving construction.
///
/// Consumed by [`GrowVec::with_reserve`](crate::GrowVec::with_reserve) to
/// build a vector with the requested capacity and a length of zero. A
/// separate request type keeps "reserve capacity `n`" unmistakable from
/// "construct `n` default elements"
/// ([`GrowVec::with_len`](crate::GrowVec::with_len)).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reserve {
    capacity: usize,
}

impl Reserve {
    /// Creates a request for `capacity` slots.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the requested capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl std::fmt::Debug for Reserve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reserve({})", self.capacity)
    }
}
