//! Primality testing for container elements.
//!
//! [`is_prime`] decides which elements of a [`Container`](crate::Container)
//! also belong to its prime subset.

/// Returns `true` if `number` is prime.
///
/// Values less than or equal to 1 are never prime. Multiples of 2 and 3 are
/// rejected up front; the remaining candidates are trial-divided by numbers of
/// the form `6k - 1` and `6k + 1` up to the square root of `number`.
///
/// # Complexity
///
/// O(sqrt(n))
///
/// # Examples
///
/// ```rust
/// use tricursor::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(13));
/// assert!(!is_prime(1));
/// assert!(!is_prime(49));
/// ```
#[must_use]
pub const fn is_prime(number: i32) -> bool {
    if number <= 1 {
        return false;
    }
    if number <= 3 {
        return true;
    }
    if number % 2 == 0 || number % 3 == 0 {
        return false;
    }

    // Widened so that `divisor * divisor` cannot overflow near i32::MAX.
    let number = number as i64;
    let mut divisor: i64 = 5;
    while divisor * divisor <= number {
        if number % divisor == 0 || number % (divisor + 2) == 0 {
            return false;
        }
        divisor += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(i32::MIN)]
    #[case(-7)]
    #[case(-1)]
    #[case(0)]
    #[case(1)]
    fn test_non_positive_and_one_are_not_prime(#[case] number: i32) {
        assert!(!is_prime(number));
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    #[case(11)]
    #[case(13)]
    #[case(97)]
    #[case(7919)]
    fn test_primes_are_detected(#[case] number: i32) {
        assert!(is_prime(number));
    }

    #[rstest]
    #[case(4)]
    #[case(6)]
    #[case(8)]
    #[case(9)]
    #[case(10)]
    #[case(25)]
    #[case(35)]
    #[case(49)]
    #[case(121)]
    fn test_composites_are_rejected(#[case] number: i32) {
        assert!(!is_prime(number));
    }

    #[rstest]
    fn test_largest_i32_is_prime() {
        // 2^31 - 1 is a Mersenne prime.
        assert!(is_prime(i32::MAX));
        assert!(!is_prime(i32::MAX - 1));
    }

    #[rstest]
    fn test_agrees_with_naive_trial_division() {
        fn naive(number: i32) -> bool {
            number > 1 && (2..number).all(|divisor| number % divisor != 0)
        }

        for number in -10..=1000 {
            assert_eq!(is_prime(number), naive(number), "mismatch at {number}");
        }
    }
}
