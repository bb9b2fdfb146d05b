//! Ascending traversal over every element.

use super::{CursorKind, TraversalCursor, advance_index, dereference_index, ensure_same_container};
use crate::container::Container;
use crate::error::Result;

/// A cursor that visits every element of a [`Container`] in ascending order.
///
/// The cursor position is an index in `[0, size]`; `size` is the
/// past-the-end position returned by [`end`](TraversalCursor::end).
///
/// # Examples
///
/// ```rust
/// use tricursor::{Container, TraversalCursor};
///
/// let container: Container = [7, 2, 5, 3].into_iter().collect();
/// let mut cursor = container.begin_ascending();
///
/// assert_eq!(cursor.dereference()?, 2);
/// cursor.advance()?.advance()?;
/// assert_eq!(cursor.dereference()?, 5);
/// # Ok::<(), tricursor::ContainerError>(())
/// ```
#[derive(Clone)]
pub struct AscendingIterator<'a> {
    container: &'a Container,
    index: usize,
}

impl<'a> AscendingIterator<'a> {
    /// Creates a cursor at the first element of `container`.
    #[must_use]
    pub const fn new(container: &'a Container) -> Self {
        Self::at(container, 0)
    }

    /// Creates a cursor at an explicit index.
    ///
    /// Indices greater than `container.size()` produce a cursor that fails
    /// every `dereference` and `advance`.
    #[must_use]
    pub const fn at(container: &'a Container, index: usize) -> Self {
        Self { container, index }
    }

    /// Returns the current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    fn remaining(&self) -> usize {
        self.container.size().saturating_sub(self.index)
    }
}

impl<'a> TraversalCursor<'a> for AscendingIterator<'a> {
    const KIND: CursorKind = CursorKind::Ascending;

    fn container(&self) -> &'a Container {
        self.container
    }

    fn begin(&self) -> Self {
        Self::at(self.container, 0)
    }

    fn end(&self) -> Self {
        Self::at(self.container, self.container.size())
    }

    fn is_exhausted(&self) -> bool {
        self.index >= self.container.size()
    }

    fn dereference(&self) -> Result<i32> {
        dereference_index(Self::KIND, self.container.elements(), self.index)
    }

    fn advance(&mut self) -> Result<&mut Self> {
        self.index = advance_index(Self::KIND, self.index, self.container.size())?;
        Ok(self)
    }

    fn try_eq(&self, other: &Self) -> Result<bool> {
        ensure_same_container(Self::KIND, "try_eq", self.container, other.container)?;
        Ok(self.index == other.index)
    }

    fn try_gt(&self, other: &Self) -> Result<bool> {
        ensure_same_container(Self::KIND, "try_gt", self.container, other.container)?;
        Ok(self.index > other.index)
    }

    fn try_lt(&self, other: &Self) -> Result<bool> {
        ensure_same_container(Self::KIND, "try_lt", self.container, other.container)?;
        Ok(self.index < other.index)
    }
}

impl Iterator for AscendingIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.dereference().ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AscendingIterator<'_> {}

impl std::iter::FusedIterator for AscendingIterator<'_> {}

impl std::fmt::Debug for AscendingIterator<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AscendingIterator")
            .field("index", &self.index)
            .field("length", &self.container.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContainerError;
    use rstest::rstest;

    #[rstest]
    fn test_begin_and_end_positions() {
        let container: Container = [2, 3, 5, 7].into_iter().collect();
        let cursor = container.begin_ascending();
        assert_eq!(cursor.begin().index(), 0);
        assert_eq!(cursor.end().index(), 4);
    }

    #[rstest]
    fn test_advance_past_end_is_rejected_without_moving() {
        let container: Container = [1].into_iter().collect();
        let mut cursor = container.begin_ascending();
        cursor.advance().unwrap();
        assert_eq!(cursor.index(), 1);

        assert_eq!(
            cursor.advance().map(|cursor| cursor.index()),
            Err(ContainerError::OutOfBounds {
                kind: CursorKind::Ascending,
                operation: "advance",
                position: 1,
                length: 1,
            })
        );
        assert_eq!(cursor.index(), 1);
    }

    #[rstest]
    fn test_cursor_beyond_end_reports_empty_size_hint() {
        let container: Container = [1, 2].into_iter().collect();
        let cursor = AscendingIterator::at(&container, 5);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
        assert!(cursor.is_exhausted());
    }

    #[rstest]
    fn test_debug_omits_container_contents() {
        let container: Container = [10, 20].into_iter().collect();
        let cursor = container.begin_ascending();
        assert_eq!(
            format!("{cursor:?}"),
            "AscendingIterator { index: 0, length: 2 }"
        );
    }
}
