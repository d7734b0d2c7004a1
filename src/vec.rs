use crate::{Error, OwnedBuf, Reserve};

/// Growable vector with explicit capacity control.
///
/// Stores values contiguously in an [`OwnedBuf<T>`], tracking a logical
/// length separately from the physical capacity. Elements at indices
/// `[0, len)` are the vector's values; slots at `[len, capacity)` are
/// initialized storage waiting to be reused. Growth allocates a full
/// replacement buffer, moves the elements across, and swaps it in, so a
/// vector is never left partially grown.
///
/// Any operation that reallocates ([`push`](GrowVec::push),
/// [`resize`](GrowVec::resize), [`reserve`](GrowVec::reserve),
/// [`insert`](GrowVec::insert)) or shifts elements
/// ([`insert`](GrowVec::insert), [`remove`](GrowVec::remove)) invalidates
/// previously observed positions and references; the borrow checker enforces
/// this.
///
/// # Example
///
/// ```
/// use grow_vec::GrowVec;
///
/// let mut v = GrowVec::from([1, 2, 3]);
/// v.push(4);
/// assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(v.remove(1), 2);
/// assert_eq!(v.as_slice(), &[1, 3, 4]);
/// ```
pub struct GrowVec<T> {
    buf: OwnedBuf<T>,
    // Invariant: len <= buf.len(). Capacity IS the buffer's allocation size.
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty vector with no allocation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: OwnedBuf::empty(),
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// Returns the elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[..self.len]
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.as_slice().get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, len })
    }

    /// Returns a reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](GrowVec::len).
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees index < len <= capacity.
        unsafe { self.buf.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without a
    /// bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](GrowVec::len).
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees index < len <= capacity.
        unsafe { self.buf.get_unchecked_mut(index) }
    }

    /// Sets the length to zero. O(1).
    ///
    /// Capacity and allocation are untouched; the slots keep their values
    /// as storage until overwritten.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges contents with `other` in O(1). No allocation, no element
    /// moves.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default> GrowVec<T> {
    /// Creates a vector of `len` default-valued elements, with capacity
    /// equal to `len`.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: OwnedBuf::new(len),
            len,
        }
    }

    /// Creates an empty vector with the requested capacity pre-allocated.
    ///
    /// All reserved slots are default-initialized up front; the length is
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use grow_vec::{GrowVec, Reserve};
    ///
    /// let v: GrowVec<u8> = GrowVec::with_reserve(Reserve::new(4));
    /// assert_eq!((v.len(), v.capacity()), (0, 4));
    /// ```
    #[must_use]
    pub fn with_reserve(request: Reserve) -> Self {
        Self {
            buf: OwnedBuf::new(request.capacity()),
            len: 0,
        }
    }

    /// Resizes the vector to `new_len` elements.
    ///
    /// Shrinking truncates in O(1). Growing within capacity advances the
    /// length in place, re-exposing the slots' stored values. Growing beyond
    /// capacity reallocates to `max(new_len, 2 * capacity)` and moves the
    /// existing elements across; the `max` also covers growth from capacity
    /// zero.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            self.grow(new_len.max(self.capacity().saturating_mul(2)));
        }
        self.len = new_len;
    }

    /// Reallocates to exactly `new_capacity` slots if that exceeds the
    /// current capacity; no-op otherwise. The length never changes.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.grow(new_capacity);
        }
    }

    /// Appends an element. Amortized O(1) via doubling growth.
    pub fn push(&mut self, value: T) {
        let prev = self.len;
        self.resize(prev + 1);
        self.as_mut_slice()[prev] = value;
    }

    /// Inserts an element at `index`, shifting everything after it one slot
    /// to the right. O(n).
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insert index {index} out of bounds for length {}",
            self.len,
        );
        let prev = self.len;
        self.resize(prev + 1);
        let slice = self.as_mut_slice();
        slice[index..].rotate_right(1);
        slice[index] = value;
    }

    /// Removes and returns the last element, or `None` if the vector is
    /// empty. O(1). Does not shrink capacity.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.buf.as_mut_slice()[self.len]))
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left. Relative order is preserved. O(n).
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {index} out of bounds for length {}",
            self.len,
        );
        self.as_mut_slice()[index..].rotate_left(1);
        self.len -= 1;
        std::mem::take(&mut self.buf.as_mut_slice()[self.len])
    }

    /// Replaces the buffer with one of `new_capacity` slots, moving the
    /// elements across. The old buffer is dropped only after the new one is
    /// fully built.
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.capacity());
        debug!("grow: {} -> {} slots", self.capacity(), new_capacity);
        let mut replacement = OwnedBuf::new(new_capacity);
        let len = self.len;
        for (src, dst) in self.buf.as_mut_slice()[..len]
            .iter_mut()
            .zip(replacement.as_mut_slice())
        {
            *dst = std::mem::take(src);
        }
        self.buf.swap(&mut replacement);
    }
}

impl<T: Clone> GrowVec<T> {
    /// Creates a vector of `len` clones of `value`, with capacity equal to
    /// `len`.
    #[must_use]
    pub fn from_elem(value: T, len: usize) -> Self {
        Self {
            buf: OwnedBuf::from_boxed(std::iter::repeat_n(value, len).collect()),
            len,
        }
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Copies the elements into a buffer sized exactly to the source length.
    ///
    /// Reserve headroom is deliberately not cloned: the copy's capacity
    /// equals the source's length.
    fn clone(&self) -> Self {
        Self {
            buf: OwnedBuf::from_boxed(self.as_slice().into()),
            len: self.len,
        }
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        let block: Box<[T]> = Box::new(values);
        Self {
            buf: OwnedBuf::from_boxed(block),
            len: N,
        }
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> Self {
        Self {
            buf: OwnedBuf::from_boxed(values.into()),
            len: values.len(),
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let block: Box<[T]> = iter.into_iter().collect();
        let len = block.len();
        Self {
            buf: OwnedBuf::from_boxed(block),
            len,
        }
    }
}

impl<T: Default> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> std::ops::Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> std::ops::IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        let mut items = self.buf.release().map_or_else(Vec::new, Vec::from);
        items.truncate(len);
        items.into_iter()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    /// Lexicographic order over the elements; a strict prefix sorts first.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
