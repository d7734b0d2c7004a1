/// Sole-ownership handle to a contiguous heap block of `T` slots.
///
/// An `OwnedBuf` either owns a block sized exactly to the construction
/// request, or holds no allocation at all (the state of [`empty`](OwnedBuf::empty)
/// and of zero-length [`new`](OwnedBuf::new)). Every slot of an owned block
/// holds an initialized `T`; destructors run when the buffer is dropped.
///
/// Ownership is unique: the block moves with the handle, can be exchanged
/// with [`swap`](OwnedBuf::swap), handed to the caller with
/// [`release`](OwnedBuf::release), and duplicated only through [`Clone`].
pub struct OwnedBuf<T> {
    slots: Option<Box<[T]>>,
}

impl<T> OwnedBuf<T> {
    /// Creates a buffer holding no allocation.
    #[must_use]
    pub const fn empty() -> Self {
        Self { slots: None }
    }

    /// Allocates `len` default-initialized slots.
    ///
    /// A `len` of zero holds no allocation; that is the empty state, not an
    /// error.
    #[must_use]
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        if len == 0 {
            return Self::empty();
        }
        Self {
            slots: Some((0..len).map(|_| T::default()).collect()),
        }
    }

    /// Takes ownership of an already-allocated block. Never allocates.
    ///
    /// An empty block normalizes to the no-allocation state.
    #[must_use]
    pub fn from_boxed(block: Box<[T]>) -> Self {
        if block.is_empty() {
            Self::empty()
        } else {
            Self { slots: Some(block) }
        }
    }

    /// Hands the owned block to the caller and resets this buffer to the
    /// no-allocation state.
    ///
    /// Returns `None` if nothing is held, including on every call after the
    /// first.
    #[must_use]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.slots.take()
    }

    /// Returns the allocation size in slots (zero when nothing is held).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns `true` if no allocation is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_none()
    }

    /// Returns `true` if an allocation is held.
    #[must_use]
    pub const fn is_allocated(&self) -> bool {
        self.slots.is_some()
    }

    /// Returns all slots as a slice (empty when nothing is held).
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_deref().unwrap_or(&[])
    }

    /// Returns all slots as a mutable slice (empty when nothing is held).
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.slots.as_deref_mut().unwrap_or(&mut [])
    }

    /// Returns a reference to slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be within the allocation (`index < self.len()`).
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees index < len.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be within the allocation (`index < self.len()`).
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees index < len.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Exchanges ownership with `other` in O(1). No allocation.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }
}

impl<T: Clone> Clone for OwnedBuf<T> {
    /// Deep-copies the source at its current allocation size.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for OwnedBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OwnedBuf({})", self.len())
    }
}
