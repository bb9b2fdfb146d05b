//! Ascending traversal over the prime elements only.

use super::{CursorKind, TraversalCursor, advance_index, dereference_index, ensure_same_container};
use crate::container::Container;
use crate::error::Result;

/// A cursor that visits the prime elements of a [`Container`] in ascending
/// order, skipping every non-prime element.
///
/// The cursor position is an index into the container's prime subset, in
/// `[0, prime_count]`.
///
/// # Examples
///
/// ```rust
/// use tricursor::Container;
///
/// let container: Container = (1..=10).collect();
/// let primes: Vec<i32> = container.begin_prime().collect();
/// assert_eq!(primes, vec![2, 3, 5, 7]);
/// ```
#[derive(Clone)]
pub struct PrimeIterator<'a> {
    container: &'a Container,
    index: usize,
}

impl<'a> PrimeIterator<'a> {
    /// Creates a cursor at the smallest prime element of `container`.
    #[must_use]
    pub const fn new(container: &'a Container) -> Self {
        Self::at(container, 0)
    }

    /// Creates a cursor at an explicit index into the prime subset.
    #[must_use]
    pub const fn at(container: &'a Container, index: usize) -> Self {
        Self { container, index }
    }

    /// Returns the current index into the prime subset.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    fn primes(&self) -> &'a [i32] {
        self.container.primes()
    }
}

impl<'a> TraversalCursor<'a> for PrimeIterator<'a> {
    const KIND: CursorKind = CursorKind::Prime;

    fn container(&self) -> &'a Container {
        self.container
    }

    fn begin(&self) -> Self {
        Self::at(self.container, 0)
    }

    fn end(&self) -> Self {
        Self::at(self.container, self.primes().len())
    }

    fn is_exhausted(&self) -> bool {
        self.index >= self.primes().len()
    }

    fn dereference(&self) -> Result<i32> {
        dereference_index(Self::KIND, self.primes(), self.index)
    }

    fn advance(&mut self) -> Result<&mut Self> {
        self.index = advance_index(Self::KIND, self.index, self.primes().len())?;
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

impl Iterator for PrimeIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.dereference().ok()?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.primes().len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PrimeIterator<'_> {}

impl std::iter::FusedIterator for PrimeIterator<'_> {}

impl std::fmt::Debug for PrimeIterator<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrimeIterator")
            .field("index", &self.index)
            .field("prime_count", &self.primes().len())
            .finish()
    }
}
