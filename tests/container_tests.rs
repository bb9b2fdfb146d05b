//! Integration tests for Container.
//!
//! Covers insertion, removal, and the relationship between the element
//! sequence and its prime subset as observed through the public API.

use rstest::{fixture, rstest};
use tricursor::{Container, ContainerError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn mixed() -> Container {
    init_tracing();
    [10, 3, 7, 1, 4, 2].into_iter().collect()
}

#[rstest]
fn test_new_container_is_empty() {
    let container = Container::new();
    assert!(container.is_empty());
    assert_eq!(container.size(), 0);
    assert_eq!(container, Container::default());
}

#[rstest]
fn test_insert_out_of_order_is_sorted(mixed: Container) {
    assert_eq!(mixed.elements(), &[1, 2, 3, 4, 7, 10]);
    assert_eq!(mixed.size(), 6);
    assert_eq!(mixed.len(), 6);
}

#[rstest]
fn test_insert_duplicate_is_noop(mut mixed: Container) {
    let before = mixed.clone();
    mixed.insert(7);
    mixed.insert(10);
    assert_eq!(mixed, before);
}

#[rstest]
fn test_insert_negative_and_zero() {
    let mut container = Container::new();
    container.insert(0);
    container.insert(-3);
    container.insert(i32::MIN);
    assert_eq!(container.elements(), &[i32::MIN, -3, 0]);
    assert_eq!(container.begin_prime().count(), 0);
}

#[rstest]
#[case(7)]
#[case(4)]
#[case(1)]
fn test_insert_then_remove_restores_state(mut mixed: Container, #[case] value: i32) {
    let before = mixed.clone();
    let added = 1000 + value;
    mixed.insert(added);
    assert_eq!(mixed.remove(added), Ok(()));
    assert_eq!(mixed, before);
}

#[rstest]
fn test_remove_prime_drops_it_from_prime_traversal(mut mixed: Container) {
    assert_eq!(mixed.remove(3), Ok(()));
    let primes: Vec<i32> = mixed.begin_prime().collect();
    assert_eq!(primes, vec![2, 7]);
    assert!(!mixed.contains(3));
}

#[rstest]
fn test_remove_composite_keeps_primes(mut mixed: Container) {
    assert_eq!(mixed.remove(10), Ok(()));
    let primes: Vec<i32> = mixed.begin_prime().collect();
    assert_eq!(primes, vec![2, 3, 7]);
    assert_eq!(mixed.elements(), &[1, 2, 3, 4, 7]);
}

#[rstest]
#[case(5)]
#[case(6)]
#[case(-1)]
fn test_remove_missing_fails_and_leaves_container_unchanged(
    mut mixed: Container,
    #[case] value: i32,
) {
    let before = mixed.clone();
    assert_eq!(mixed.remove(value), Err(ContainerError::NoSuchElement { value }));
    assert_eq!(mixed, before);
}

#[rstest]
fn test_remove_twice_fails_second_time(mut mixed: Container) {
    assert_eq!(mixed.remove(2), Ok(()));
    assert_eq!(mixed.remove(2), Err(ContainerError::NoSuchElement { value: 2 }));
}

#[rstest]
fn test_remove_everything_empties_container(mut mixed: Container) {
    let values = mixed.elements().to_vec();
    for value in values {
        mixed.remove(value).unwrap();
    }
    assert!(mixed.is_empty());
    assert_eq!(mixed.begin_prime().count(), 0);
}

#[rstest]
fn test_error_message_for_missing_element() {
    let mut container = Container::new();
    let error = container.remove(9).unwrap_err();
    assert_eq!(error.to_string(), "no such element: 9");
}

#[rstest]
fn test_collect_and_extend_agree() {
    let collected: Container = [5, 1, 5, 3].into_iter().collect();
    let mut extended = Container::new();
    extended.extend([3, 5, 1]);
    assert_eq!(collected, extended);
}

#[rstest]
fn test_for_loop_over_reference_is_ascending(mixed: Container) {
    let mut visited = Vec::new();
    for value in &mixed {
        visited.push(value);
    }
    assert_eq!(visited, mixed.elements());
}

#[rstest]
fn test_display(mixed: Container) {
    assert_eq!(mixed.to_string(), "Container[1, 2, 3, 4, 7, 10]");
}
