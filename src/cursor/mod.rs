//! Cursors over a [`Container`].
//!
//! Three traversal orders are provided over the same container:
//!
//! - [`AscendingIterator`]: every element, smallest first
//! - [`SideCrossIterator`]: alternately from the front and the back, converging
//!   on the middle (`1, 5, 2, 4, 3` for `1..=5`)
//! - [`PrimeIterator`]: only the prime elements, smallest first
//!
//! Every cursor kind implements [`TraversalCursor`], the shared
//! begin/end/dereference/advance/compare contract. Code that needs to hold a
//! cursor of any kind uses the [`Cursor`] sum type, whose comparisons reject
//! mismatched kinds with [`ContainerError::VariantMismatch`] instead of
//! comparing unrelated state.
//!
//! Cursors also implement [`Iterator`], yielding the current value and then
//! advancing, so the usual adapters work on them directly.
//!
//! # Examples
//!
//! Explicit begin/end loop:
//!
//! ```rust
//! use tricursor::{Container, TraversalCursor};
//!
//! let container: Container = (1..=5).collect();
//!
//! let mut cursor = container.begin_side_cross();
//! let end = container.end_side_cross();
//! let mut visited = Vec::new();
//! while cursor.try_ne(&end)? {
//!     visited.push(cursor.dereference()?);
//!     cursor.advance()?;
//! }
//! assert_eq!(visited, vec![1, 5, 2, 4, 3]);
//! # Ok::<(), tricursor::ContainerError>(())
//! ```
//!
//! Kind-erased handles:
//!
//! ```rust
//! use tricursor::{Container, ContainerError, Cursor, CursorKind};
//!
//! let container: Container = (1..=7).collect();
//! let ascending = Cursor::from(container.begin_ascending());
//! let prime = Cursor::from(container.begin_prime());
//!
//! assert_eq!(
//!     ascending.try_eq(&prime),
//!     Err(ContainerError::VariantMismatch {
//!         left: CursorKind::Ascending,
//!         right: CursorKind::Prime,
//!     })
//! );
//! ```

mod ascending;
mod prime;
mod side_cross;

pub use ascending::AscendingIterator;
pub use prime::PrimeIterator;
pub use side_cross::SideCrossIterator;

use crate::container::Container;
use crate::error::{ContainerError, Result};

/// The traversal order of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    /// Every element in ascending order.
    Ascending,
    /// Alternating front and back elements, converging on the middle.
    SideCross,
    /// Prime elements in ascending order.
    Prime,
}

impl std::fmt::Display for CursorKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ascending => "AscendingIterator",
            Self::SideCross => "SideCrossIterator",
            Self::Prime => "PrimeIterator",
        };
        formatter.write_str(name)
    }
}

/// The contract shared by every cursor kind.
///
/// A cursor is bound to one [`Container`] for its whole lifetime. Operations
/// that combine two cursors fail with [`ContainerError::ContainerMismatch`]
/// when the cursors are bound to different containers, even if those
/// containers hold the same values.
///
/// `dereference` and `advance` fail with [`ContainerError::OutOfBounds`] once
/// the cursor has reached its end; neither modifies the cursor on failure.
pub trait TraversalCursor<'a>: Clone {
    /// The traversal order implemented by this cursor type.
    const KIND: CursorKind;

    /// Returns the container this cursor is bound to.
    fn container(&self) -> &'a Container;

    /// Returns a cursor at the start of the traversal, bound to the same container.
    #[must_use]
    fn begin(&self) -> Self;

    /// Returns the past-the-end cursor, bound to the same container.
    #[must_use]
    fn end(&self) -> Self;

    /// Returns `true` if the cursor has no current value.
    fn is_exhausted(&self) -> bool;

    /// Returns the value under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfBounds`] if the cursor is exhausted.
    fn dereference(&self) -> Result<i32>;

    /// Moves the cursor one step forward.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfBounds`] if the step would move past
    /// the end.
    fn advance(&mut self) -> Result<&mut Self>;

    /// Returns `true` if both cursors are at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ContainerMismatch`] if the cursors are bound
    /// to different containers.
    fn try_eq(&self, other: &Self) -> Result<bool>;

    /// Negation of [`try_eq`](Self::try_eq).
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ContainerMismatch`] if the cursors are bound
    /// to different containers.
    fn try_ne(&self, other: &Self) -> Result<bool> {
        self.try_eq(other).map(|equal| !equal)
    }

    /// Returns `true` if this cursor is ahead of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ContainerMismatch`] if the cursors are bound
    /// to different containers.
    fn try_gt(&self, other: &Self) -> Result<bool>;

    /// Returns `true` if this cursor is behind `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ContainerMismatch`] if the cursors are bound
    /// to different containers.
    fn try_lt(&self, other: &Self) -> Result<bool>;

    /// Moves this cursor to the position of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ContainerMismatch`] if the cursors are bound
    /// to different containers; this cursor is left unchanged.
    fn assign(&mut self, other: &Self) -> Result<()> {
        ensure_same_container(Self::KIND, "assign", self.container(), other.container())?;
        *self = other.clone();
        Ok(())
    }
}

/// Fails unless both references point at the same container instance.
pub(crate) fn ensure_same_container(
    kind: CursorKind,
    operation: &'static str,
    left: &Container,
    right: &Container,
) -> Result<()> {
    if std::ptr::eq(left, right) {
        Ok(())
    } else {
        tracing::trace!(%kind, operation, "rejected cursors bound to different containers");
        Err(ContainerError::ContainerMismatch { kind, operation })
    }
}

pub(crate) fn out_of_bounds(
    kind: CursorKind,
    operation: &'static str,
    position: usize,
    length: usize,
) -> ContainerError {
    tracing::trace!(%kind, operation, position, length, "rejected out-of-bounds cursor access");
    ContainerError::OutOfBounds {
        kind,
        operation,
        position,
        length,
    }
}

/// Reads `sequence[index]` on behalf of an index-based cursor.
pub(crate) fn dereference_index(kind: CursorKind, sequence: &[i32], index: usize) -> Result<i32> {
    sequence
        .get(index)
        .copied()
        .ok_or_else(|| out_of_bounds(kind, "dereference", index, sequence.len()))
}

/// Returns `index + 1`, which may equal but never exceed `length`.
pub(crate) fn advance_index(kind: CursorKind, index: usize, length: usize) -> Result<usize> {
    if index < length {
        Ok(index + 1)
    } else {
        Err(out_of_bounds(kind, "advance", index, length))
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A cursor of any kind.
///
/// Operations on two `Cursor`s first check that both have the same
/// [`CursorKind`] and fail with [`ContainerError::VariantMismatch`]
/// otherwise; matching kinds delegate to the concrete cursor.
#[derive(Debug, Clone)]
pub enum Cursor<'a> {
    /// An [`AscendingIterator`].
    Ascending(AscendingIterator<'a>),
    /// A [`SideCrossIterator`].
    SideCross(SideCrossIterator<'a>),
    /// A [`PrimeIterator`].
    Prime(PrimeIterator<'a>),
}

macro_rules! dispatch {
    ($cursor:expr, $inner:ident => $body:expr) => {
        match $cursor {
            Cursor::Ascending($inner) => $body,
            Cursor::SideCross($inner) => $body,
            Cursor::Prime($inner) => $body,
        }
    };
}

macro_rules! dispatch_pair {
    ($left:expr, $right:expr, ($l:ident, $r:ident) => $body:expr) => {
        match ($left, $right) {
            (Cursor::Ascending($l), Cursor::Ascending($r)) => $body,
            (Cursor::SideCross($l), Cursor::SideCross($r)) => $body,
            (Cursor::Prime($l), Cursor::Prime($r)) => $body,
            (left, right) => Err(variant_mismatch(left.kind(), right.kind())),
        }
    };
}

fn variant_mismatch(left: CursorKind, right: CursorKind) -> ContainerError {
    tracing::trace!(%left, %right, "rejected cursors of different kinds");
    ContainerError::VariantMismatch { left, right }
}

impl<'a> Cursor<'a> {
    /// Returns the traversal order of this cursor.
    #[must_use]
    pub const fn kind(&self) -> CursorKind {
        match self {
            Self::Ascending(_) => CursorKind::Ascending,
            Self::SideCross(_) => CursorKind::SideCross,
            Self::Prime(_) => CursorKind::Prime,
        }
    }

    /// Returns the container this cursor is bound to.
    #[must_use]
    pub fn container(&self) -> &'a Container {
        dispatch!(self, cursor => cursor.container())
    }

    /// Returns a cursor of the same kind at the start of the traversal.
    #[must_use]
    pub fn begin(&self) -> Self {
        dispatch!(self, cursor => Self::from(cursor.begin()))
    }

    /// Returns a past-the-end cursor of the same kind.
    #[must_use]
    pub fn end(&self) -> Self {
        dispatch!(self, cursor => Self::from(cursor.end()))
    }

    /// Returns `true` if the cursor has no current value.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        dispatch!(self, cursor => cursor.is_exhausted())
    }

    /// Returns the value under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfBounds`] if the cursor is exhausted.
    pub fn dereference(&self) -> Result<i32> {
        dispatch!(self, cursor => cursor.dereference())
    }

    /// Moves the cursor one step forward.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::OutOfBounds`] if the step would move past
    /// the end.
    pub fn advance(&mut self) -> Result<&mut Self> {
        dispatch!(self, cursor => cursor.advance().map(|_| ()))?;
        Ok(self)
    }

    /// Returns `true` if both cursors are at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::VariantMismatch`] if the kinds differ, or
    /// [`ContainerError::ContainerMismatch`] if the containers differ.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        dispatch_pair!(self, other, (left, right) => left.try_eq(right))
    }

    /// Negation of [`try_eq`](Self::try_eq).
    ///
    /// # Errors
    ///
    /// Same as [`try_eq`](Self::try_eq).
    pub fn try_ne(&self, other: &Self) -> Result<bool> {
        dispatch_pair!(self, other, (left, right) => left.try_ne(right))
    }

    /// Returns `true` if this cursor is ahead of `other`.
    ///
    /// # Errors
    ///
    /// Same as [`try_eq`](Self::try_eq).
    pub fn try_gt(&self, other: &Self) -> Result<bool> {
        dispatch_pair!(self, other, (left, right) => left.try_gt(right))
    }

    /// Returns `true` if this cursor is behind `other`.
    ///
    /// # Errors
    ///
    /// Same as [`try_eq`](Self::try_eq).
    pub fn try_lt(&self, other: &Self) -> Result<bool> {
        dispatch_pair!(self, other, (left, right) => left.try_lt(right))
    }

    /// Moves this cursor to the position of `other`.
    ///
    /// # Errors
    ///
    /// Same as [`try_eq`](Self::try_eq); this cursor is left unchanged.
    pub fn assign(&mut self, other: &Self) -> Result<()> {
        dispatch_pair!(self, other, (left, right) => left.assign(right))
    }
}

impl<'a> From<AscendingIterator<'a>> for Cursor<'a> {
    fn from(cursor: AscendingIterator<'a>) -> Self {
        Self::Ascending(cursor)
    }
}

impl<'a> From<SideCrossIterator<'a>> for Cursor<'a> {
    fn from(cursor: SideCrossIterator<'a>) -> Self {
        Self::SideCross(cursor)
    }
}

impl<'a> From<PrimeIterator<'a>> for Cursor<'a> {
    fn from(cursor: PrimeIterator<'a>) -> Self {
        Self::Prime(cursor)
    }
}

impl Iterator for Cursor<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        dispatch!(self, cursor => cursor.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        dispatch!(self, cursor => cursor.size_hint())
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl std::iter::FusedIterator for Cursor<'_> {}

static_assertions::assert_impl_all!(Cursor<'static>: Clone, Send, Sync, ExactSizeIterator);
