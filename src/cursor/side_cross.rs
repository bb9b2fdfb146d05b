//! Side-to-center traversal.
//!
//! The cursor keeps one index at each end of the sorted elements and reads
//! from them alternately, moving the index it just read inward:
//!
//! ```text
//! elements:  1   2   3   4   5
//! step 0:    ^front          ^back     yields 1, front += 1
//! step 1:        ^front      ^back     yields 5, back  -= 1
//! step 2:        ^front  ^back         yields 2, front += 1
//! step 3:            ^f  ^b            yields 4, back  -= 1
//! step 4:            ^fb               yields 3, front += 1
//! end:               ^b  ^f            front > back
//! ```

use super::{CursorKind, TraversalCursor, ensure_same_container, out_of_bounds};
use crate::container::Container;
use crate::error::Result;

/// A cursor that visits the elements of a [`Container`] alternately from the
/// front and the back, converging on the middle.
///
/// For the elements `1, 2, 3, 4, 5` the visiting order is `1, 5, 2, 4, 3`.
///
/// # Ordering
///
/// The ordering of two side-cross cursors measures progress toward the
/// middle rather than a single position:
///
/// - `a.try_gt(&b)` holds when `min(front, back)` of `a` is larger than that of `b`.
/// - `a.try_lt(&b)` holds when `max(front, back)` of `a` is smaller than that of `b`.
///
/// The two relations are not complements of each other. For example, two cursors
/// can have equal minima but different maxima.
/// Equality compares both indices and ignores the step count.
///
/// # Examples
///
/// ```rust
/// use tricursor::Container;
///
/// let container: Container = (1..=6).collect();
/// let visited: Vec<i32> = container.begin_side_cross().collect();
/// assert_eq!(visited, vec![1, 6, 2, 5, 3, 4]);
/// ```
#[derive(Clone)]
pub struct SideCrossIterator<'a> {
    container: &'a Container,
    front: usize,
    back: usize,
    steps: usize,
}

impl<'a> SideCrossIterator<'a> {
    /// Creates a cursor at the first element of `container`.
    ///
    /// For an empty container both indices are 0, which equals the end sentinel.
    #[must_use]
    pub fn new(container: &'a Container) -> Self {
        Self::at(container, 0, container.size().saturating_sub(1))
    }

    /// Creates a cursor with explicit front and back indices and a step count of 0.
    ///
    /// A back index at or beyond `container.size()` produces an exhausted cursor.
    #[must_use]
    pub const fn at(container: &'a Container, front: usize, back: usize) -> Self {
        Self {
            container,
            front,
            back,
            steps: 0,
        }
    }

    /// Returns the front index.
    #[must_use]
    pub const fn front_index(&self) -> usize {
        self.front
    }

    /// Returns the back index.
    #[must_use]
    pub const fn back_index(&self) -> usize {
        self.back
    }

    /// Returns how many times the cursor has advanced.
    ///
    /// An even count reads from the front next, an odd count from the back.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    const fn reads_front(&self) -> bool {
        self.steps % 2 == 0
    }

    const fn current_index(&self) -> usize {
        if self.reads_front() { self.front } else { self.back }
    }

    /// Moves the index that was just read inward. The caller checks exhaustion.
    fn step(&mut self) {
        if self.reads_front() {
            self.front += 1;
        } else {
            self.back -= 1;
        }
        self.steps += 1;
    }
}

impl<'a> TraversalCursor<'a> for SideCrossIterator<'a> {
    const KIND: CursorKind = CursorKind::SideCross;

    fn container(&self) -> &'a Container {
        self.container
    }

    fn begin(&self) -> Self {
        Self::new(self.container)
    }

    fn end(&self) -> Self {
        let size = self.container.size();
        let middle = size.div_ceil(2);
        Self {
            container: self.container,
            front: middle,
            back: middle.saturating_sub(1),
            steps: size,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.front > self.back || self.back >= self.container.size()
    }

    fn dereference(&self) -> Result<i32> {
        let index = self.current_index();
        let elements = self.container.elements();
        if self.is_exhausted() {
            return Err(out_of_bounds(Self::KIND, "dereference", index, elements.len()));
        }
        Ok(elements[index])
    }

    fn advance(&mut self) -> Result<&mut Self> {
        if self.is_exhausted() {
            return Err(out_of_bounds(
                Self::KIND,
                "advance",
                self.current_index(),
                self.container.size(),
            ));
        }
        self.step();
        Ok(self)
    }

    fn try_eq(&self, other: &Self) -> Result<bool> {
        ensure_same_container(Self::KIND, "try_eq", self.container, other.container)?;
        Ok(self.front == other.front && self.back == other.back)
    }

    fn try_gt(&self, other: &Self) -> Result<bool> {
        ensure_same_container(Self::KIND, "try_gt", self.container, other.container)?;
        Ok(self.front.min(self.back) > other.front.min(other.back))
    }

    fn try_lt(&self, other: &Self) -> Result<bool> {
        ensure_same_container(Self::KIND, "try_lt", self.container, other.container)?;
        Ok(self.front.max(self.back) < other.front.max(other.back))
    }
}

impl Iterator for SideCrossIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.dereference().ok()?;
        self.step();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.is_exhausted() {
            0
        } else {
            self.back - self.front + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SideCrossIterator<'_> {}

impl std::iter::FusedIterator for SideCrossIterator<'_> {}

impl std::fmt::Debug for SideCrossIterator<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SideCrossIterator")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("steps", &self.steps)
            .field("length", &self.container.size())
            .finish()
    }
}
