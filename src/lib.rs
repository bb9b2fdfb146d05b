//! # tricursor
//!
//! A sorted container of distinct integers with three traversal orders over
//! the same data.
//!
//! ## Overview
//!
//! [`Container`] stores its elements in ascending order and keeps the prime
//! elements in a second sorted sequence alongside. Three cursor kinds walk
//! that data:
//!
//! - [`AscendingIterator`]: every element, smallest first
//! - [`SideCrossIterator`]: first, last, second, second-to-last, ...
//! - [`PrimeIterator`]: only the prime elements, smallest first
//!
//! All cursors share the [`TraversalCursor`] contract (begin, end,
//! dereference, advance, and fallible comparisons). The [`Cursor`] enum holds
//! a cursor of any kind and rejects comparisons across kinds.
//!
//! Cursors borrow their container, so the borrow checker forbids mutating a
//! container while any cursor over it is alive.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Container`]
//!
//! ## Example
//!
//! ```rust
//! use tricursor::prelude::*;
//!
//! let mut container = Container::new();
//! for value in 1..=7 {
//!     container.insert(value);
//! }
//!
//! let side_cross: Vec<i32> = container.begin_side_cross().collect();
//! assert_eq!(side_cross, vec![1, 7, 2, 6, 3, 5, 4]);
//!
//! let mut cursor = container.begin_prime();
//! assert_eq!(cursor.dereference()?, 2);
//! cursor.advance()?;
//! assert_eq!(cursor.dereference()?, 3);
//! # Ok::<(), ContainerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use tricursor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::Container;
    pub use crate::cursor::{
        AscendingIterator, Cursor, CursorKind, PrimeIterator, SideCrossIterator, TraversalCursor,
    };
    pub use crate::error::ContainerError;
    pub use crate::primality::is_prime;
}

pub mod container;
pub mod cursor;
pub mod error;
pub mod primality;

pub use container::Container;
pub use cursor::{
    AscendingIterator, Cursor, CursorKind, PrimeIterator, SideCrossIterator, TraversalCursor,
};
pub use error::{ContainerError, Result};
pub use primality::is_prime;
