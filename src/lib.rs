//! Growable vector with explicit capacity control.
//!
//! `grow-vec` provides [`GrowVec<T>`], a contiguous vector that separates
//! logical length from physical capacity, built on [`OwnedBuf<T>`], a
//! move-only owning handle to a heap block of element slots.
//!
//! # Types
//!
//! - [`GrowVec<T>`] — growable vector: doubling growth, positional
//!   insert/remove, O(1) clear and swap
//! - [`OwnedBuf<T>`] — sole-ownership heap buffer: release, swap, deep copy
//! - [`Reserve`] — capacity request consumed by [`GrowVec::with_reserve`]
//! - [`Error`] — recoverable error for checked element access
//!
//! # Key properties
//!
//! - **Doubling growth**: capacity follows 0 → 1 → 2 → 4 → 8 … under
//!   repeated [`push`](GrowVec::push); a replacement buffer is fully built
//!   before the old one is discarded
//! - **Unique ownership**: the backing block is never shared; it is
//!   transferred by move or [`swap`](GrowVec::swap), duplicated only by
//!   [`Clone`]
//! - **Eager slots**: every allocated slot holds an initialized `T`; slots
//!   past the logical length are storage, not values
//!
//! # Example
//!
//! ```
//! use grow_vec::{GrowVec, Reserve};
//!
//! let mut v: GrowVec<i32> = GrowVec::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//!
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4); // 0 → 1 → 2 → 4
//!
//! v.insert(1, 9);
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//! assert_eq!(v.remove(0), 1);
//! assert_eq!(v.as_slice(), &[9, 2, 3]);
//!
//! let reserved: GrowVec<String> = GrowVec::with_reserve(Reserve::new(8));
//! assert_eq!(reserved.len(), 0);
//! assert_eq!(reserved.capacity(), 8);
//! ```

#![deny(missing_docs)]

#[macro_use]
mod logging;

mod buf;
mod error;
mod reserve;
mod vec;

pub use buf::OwnedBuf;
pub use error::Error;
pub use reserve::Reserve;
pub use vec::GrowVec;

#[cfg(test)]
mod tests;
