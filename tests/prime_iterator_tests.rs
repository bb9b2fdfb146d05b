//! Integration tests for PrimeIterator.

use rstest::{fixture, rstest};
use tricursor::{Container, ContainerError, CursorKind, PrimeIterator, TraversalCursor};

#[fixture]
fn one_to_seven() -> Container {
    (1..=7).collect()
}

#[rstest]
fn test_only_primes_are_visited(one_to_seven: Container) {
    let mut cursor = one_to_seven.begin_prime();
    let end = one_to_seven.end_prime();
    let mut visited = Vec::new();
    while cursor.try_ne(&end).unwrap() {
        visited.push(cursor.dereference().unwrap());
        cursor.advance().unwrap();
    }
    assert_eq!(visited, vec![2, 3, 5, 7]);
}

#[rstest]
fn test_end_index_is_prime_count(one_to_seven: Container) {
    assert_eq!(one_to_seven.end_prime().index(), 4);
    assert_eq!(one_to_seven.begin_prime().len(), 4);
}

#[rstest]
fn test_advance_past_end_fails(one_to_seven: Container) {
    let mut cursor = one_to_seven.end_prime();
    assert_eq!(
        cursor.advance().map(|cursor| cursor.index()),
        Err(ContainerError::OutOfBounds {
            kind: CursorKind::Prime,
            operation: "advance",
            position: 4,
            length: 4,
        })
    );
}

#[rstest]
fn test_ordering_follows_index(one_to_seven: Container) {
    let low = PrimeIterator::at(&one_to_seven, 0);
    let high = PrimeIterator::at(&one_to_seven, 2);
    assert_eq!(low.try_lt(&high), Ok(true));
    assert_eq!(high.try_gt(&low), Ok(true));
    assert_eq!(high.try_lt(&low), Ok(false));
}

#[rstest]
fn test_large_primes_are_visited() {
    let container: Container = [i32::MAX, 7919, 7920, 1_000_000].into_iter().collect();
    let primes: Vec<i32> = container.begin_prime().collect();
    assert_eq!(primes, vec![7919, i32::MAX]);
}

#[rstest]
fn test_foreign_container_is_rejected(one_to_seven: Container) {
    let other = one_to_seven.clone();
    assert_eq!(
        one_to_seven.begin_prime().try_eq(&other.begin_prime()),
        Err(ContainerError::ContainerMismatch {
            kind: CursorKind::Prime,
            operation: "try_eq",
        })
    );
}

#[rstest]
fn test_begin_from_any_position(one_to_seven: Container) {
    let cursor = PrimeIterator::at(&one_to_seven, 3);
    assert_eq!(cursor.dereference(), Ok(7));
    assert_eq!(cursor.begin().dereference(), Ok(2));
    assert!(cursor.end().is_exhausted());
}
