//! Sorted integer container with a prime subset.
//!
//! [`Container`] keeps two sorted, duplicate-free sequences side by side:
//! every inserted element, and the subset of those elements that are prime.
//! Both sequences are maintained eagerly on every mutation so that the three
//! cursor kinds can walk them by index.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `insert`    | O(n)       |
//! | `remove`    | O(n)       |
//! | `contains`  | O(log n)   |
//! | `size`      | O(1)       |
//! | `elements`  | O(1)       |
//!
//! `insert` and `remove` locate the position by binary search and then shift
//! the tail of the vector, hence the linear cost.
//!
//! # Examples
//!
//! ```rust
//! use tricursor::Container;
//!
//! let mut container = Container::new();
//! for value in [7, 1, 4, 2] {
//!     container.insert(value);
//! }
//!
//! assert_eq!(container.elements(), &[1, 2, 4, 7]);
//!
//! let ascending: Vec<i32> = container.begin_ascending().collect();
//! let side_cross: Vec<i32> = container.begin_side_cross().collect();
//! let primes: Vec<i32> = container.begin_prime().collect();
//!
//! assert_eq!(ascending, vec![1, 2, 4, 7]);
//! assert_eq!(side_cross, vec![1, 7, 2, 4]);
//! assert_eq!(primes, vec![2, 7]);
//! ```

use crate::cursor::{AscendingIterator, PrimeIterator, SideCrossIterator, TraversalCursor};
use crate::error::{ContainerError, Result};
use crate::primality::is_prime;

/// A container of distinct integers, kept in ascending order, together with
/// the ordered subset of its prime elements.
///
/// Cursors obtained from a container borrow it immutably, so the container
/// cannot be mutated while any cursor over it is alive.
///
/// # Examples
///
/// ```rust
/// use tricursor::Container;
///
/// let container: Container = [5, 3, 9, 3].into_iter().collect();
/// assert_eq!(container.size(), 3);
/// assert_eq!(container.elements(), &[3, 5, 9]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    elements: Vec<i32>,
    primes: Vec<i32>,
}

/// Inserts `value` into a sorted vector unless it is already present.
fn insert_sorted(sequence: &mut Vec<i32>, value: i32) -> bool {
    match sequence.binary_search(&value) {
        Ok(_) => false,
        Err(position) => {
            sequence.insert(position, value);
            true
        }
    }
}

/// Removes `value` from a sorted vector if it is present.
fn remove_sorted(sequence: &mut Vec<i32>, value: i32) -> bool {
    match sequence.binary_search(&value) {
        Ok(position) => {
            sequence.remove(position);
            true
        }
        Err(_) => false,
    }
}

impl Container {
    /// Creates a new empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricursor::Container;
    ///
    /// let container = Container::new();
    /// assert!(container.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            primes: Vec::new(),
        }
    }

    /// Inserts `value`, keeping both sequences sorted.
    ///
    /// Inserting a value that is already present has no effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricursor::Container;
    ///
    /// let mut container = Container::new();
    /// container.insert(3);
    /// container.insert(3);
    /// assert_eq!(container.size(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) {
        if is_prime(value) {
            insert_sorted(&mut self.primes, value);
        }
        if insert_sorted(&mut self.elements, value) {
            tracing::debug!(value, size = self.elements.len(), "inserted element");
        }
    }

    /// Removes `value` from the container.
    ///
    /// The prime subset is cleaned up first, then the element itself is
    /// removed from the main sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NoSuchElement`] if `value` is not in the
    /// container. The container is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricursor::{Container, ContainerError};
    ///
    /// let mut container: Container = [1, 2, 3].into_iter().collect();
    /// assert_eq!(container.remove(2), Ok(()));
    /// assert_eq!(container.elements(), &[1, 3]);
    /// assert_eq!(container.remove(2), Err(ContainerError::NoSuchElement { value: 2 }));
    /// ```
    pub fn remove(&mut self, value: i32) -> Result<()> {
        if is_prime(value) {
            remove_sorted(&mut self.primes, value);
        }
        if remove_sorted(&mut self.elements, value) {
            tracing::debug!(value, size = self.elements.len(), "removed element");
            Ok(())
        } else {
            tracing::debug!(value, "remove rejected: no such element");
            Err(ContainerError::NoSuchElement { value })
        }
    }

    /// Returns the number of elements in the container.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the container.
    ///
    /// Alias of [`size`](Self::size).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if `value` is in the container.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.elements.binary_search(&value).is_ok()
    }

    /// Returns all elements in ascending order.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[i32] {
        &self.elements
    }

    /// Returns the prime elements in ascending order.
    #[inline]
    pub(crate) fn primes(&self) -> &[i32] {
        &self.primes
    }

    /// Returns an ascending cursor at the first element.
    #[must_use]
    pub fn begin_ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    /// Returns an ascending cursor one past the last element.
    #[must_use]
    pub fn end_ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self).end()
    }

    /// Returns a side-cross cursor at the first element.
    #[must_use]
    pub fn begin_side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    /// Returns a side-cross cursor at the crossed-over sentinel.
    #[must_use]
    pub fn end_side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self).end()
    }

    /// Returns a prime cursor at the smallest prime element.
    #[must_use]
    pub fn begin_prime(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }

    /// Returns a prime cursor one past the largest prime element.
    #[must_use]
    pub fn end_prime(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self).end()
    }
}

impl FromIterator<i32> for Container {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl Extend<i32> for Container {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = i32;
    type IntoIter = AscendingIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_ascending()
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Container[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ContainerVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ContainerVisitor {
    type Value = Container;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut container = Container::new();
        while let Some(element) = seq.next_element::<i32>()? {
            container.insert(element);
        }
        Ok(container)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Container {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ContainerVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
