//! Error types for the container and its cursors.
//!
//! Every variant of [`ContainerError`] describes a broken usage contract
//! rather than a transient condition: removing a value that was never
//! inserted, stepping a cursor past its end, or comparing cursors that do not
//! belong together. Operations fail fast and leave their receiver unchanged.

use crate::cursor::CursorKind;

/// A specialized `Result` type for container and cursor operations.
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Represents the errors that can occur when working with a
/// [`Container`](crate::Container) and its cursors.
///
/// # Examples
///
/// ```rust
/// use tricursor::{Container, ContainerError};
///
/// let mut container = Container::new();
/// container.insert(7);
///
/// assert_eq!(
///     container.remove(8),
///     Err(ContainerError::NoSuchElement { value: 8 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContainerError {
    /// `remove` was called with a value that is not in the container.
    NoSuchElement {
        /// The value that was requested.
        value: i32,
    },
    /// A cursor was dereferenced or advanced while at or past its end.
    OutOfBounds {
        /// The kind of cursor that was misused.
        kind: CursorKind,
        /// The rejected operation (`"dereference"` or `"advance"`).
        operation: &'static str,
        /// The cursor position at the time of the call.
        position: usize,
        /// The length of the sequence the cursor walks.
        length: usize,
    },
    /// Two cursors of different traversal kinds were combined.
    VariantMismatch {
        /// The kind of the receiving cursor.
        left: CursorKind,
        /// The kind of the argument cursor.
        right: CursorKind,
    },
    /// Two cursors bound to different containers were combined.
    ContainerMismatch {
        /// The kind of both cursors.
        kind: CursorKind,
        /// The rejected operation.
        operation: &'static str,
    },
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchElement { value } => {
                write!(formatter, "no such element: {value}")
            }
            Self::OutOfBounds {
                kind,
                operation,
                position,
                length,
            } => write!(
                formatter,
                "{kind}::{operation}: position {position} is out of bounds for length {length}"
            ),
            Self::VariantMismatch { left, right } => {
                write!(formatter, "cannot combine {left} with {right}")
            }
            Self::ContainerMismatch { kind, operation } => write!(
                formatter,
                "{kind}::{operation}: cursors are bound to different containers"
            ),
        }
    }
}

impl std::error::Error for ContainerError {}
