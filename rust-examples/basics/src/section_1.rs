//! Section 1: Math Operations
//!
//! Guarded integer arithmetic. Every function checks its domain first and
//! reports out-of-range input as a [`DomainError`] instead of a sentinel.
//!
//! Multiplication wraps on overflow (two's complement), so large inputs give
//! a wrapped result rather than a panic.

use basics_common::{DomainError, Result};
use tracing::debug;

/// Iterative factorial `1 * 2 * ... * n`.
///
/// # Examples
/// ```
/// use basics::section_1::factorial;
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<i64> {
    if n < 0 {
        let err = DomainError::NegativeFactorial(n);
        debug!(input = err.input(), %err, "factorial rejected input");
        return Err(err);
    }
    Ok((1..=n).fold(1i64, i64::wrapping_mul))
}

/// Primality by trial division up to `sqrt(n)`.
///
/// # Examples
/// ```
/// use basics::section_1::is_prime;
/// assert_eq!(is_prime(17), Ok(true));
/// assert_eq!(is_prime(20), Ok(false));
/// assert!(is_prime(1).is_err());
/// ```
pub fn is_prime(n: i64) -> Result<bool> {
    if n < 2 {
        let err = DomainError::PrimeBelowTwo(n);
        debug!(input = err.input(), %err, "prime check rejected input");
        return Err(err);
    }
    // i <= n / i avoids overflowing i * i near i64::MAX
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return Ok(false);
        }
        i += 1;
    }
    Ok(true)
}

/// `base` raised to `exponent` by repeated multiplication.
///
/// # Examples
/// ```
/// use basics::section_1::power;
/// assert_eq!(power(2, 8), Ok(256));
/// assert_eq!(power(-3, 0), Ok(1));
/// ```
pub fn power(base: i64, exponent: i64) -> Result<i64> {
    if exponent < 0 {
        let err = DomainError::NegativeExponent(exponent);
        debug!(base, input = err.input(), %err, "power rejected input");
        return Err(err);
    }
    Ok((0..exponent).fold(1i64, |acc, _| acc.wrapping_mul(base)))
}

/// Prints the math section of the tour.
pub fn demonstrate_math() {
    println!("\n=== Math Operations ===");

    for n in [0, 5, 10, -1] {
        match factorial(n) {
            Ok(value) => println!("factorial({n}) = {value}"),
            Err(e) => println!("factorial({n}) failed: {e}"),
        }
    }

    for n in [17, 20, 1] {
        match is_prime(n) {
            Ok(prime) => println!("is_prime({n}) = {prime}"),
            Err(e) => println!("is_prime({n}) failed: {e}"),
        }
    }

    for (base, exponent) in [(2, 8), (5, 0), (2, -1)] {
        match power(base, exponent) {
            Ok(value) => println!("power({base}, {exponent}) = {value}"),
            Err(e) => println!("power({base}, {exponent}) failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 1; "zero")]
    #[test_case(1, 1; "one")]
    #[test_case(5, 120; "five")]
    #[test_case(10, 3_628_800; "ten")]
    #[test_case(20, 2_432_902_008_176_640_000; "twenty fits in i64")]
    fn test_factorial(n: i64, expected: i64) {
        assert_eq!(factorial(n), Ok(expected));
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(factorial(-1), Err(DomainError::NegativeFactorial(-1)));
        assert_eq!(factorial(i64::MIN), Err(DomainError::NegativeFactorial(i64::MIN)));
    }

    #[test]
    fn test_factorial_wraps_instead_of_panicking() {
        let expected = (1..=21i64).fold(1i64, i64::wrapping_mul);
        assert_eq!(factorial(21), Ok(expected));
    }

    #[test]
    fn test_primes() {
        let primes: Vec<i64> = (2..50).filter(|&n| is_prime(n) == Ok(true)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test_case(17, true)]
    #[test_case(20, false)]
    #[test_case(2, true)]
    #[test_case(4, false)]
    #[test_case(49, false; "square of a prime")]
    #[test_case(7919, true; "thousandth prime")]
    fn test_is_prime(n: i64, expected: bool) {
        assert_eq!(is_prime(n), Ok(expected));
    }

    #[test]
    fn test_is_prime_large() {
        assert_eq!(is_prime(i64::MAX), Ok(false));
        assert_eq!(is_prime(2_147_483_647), Ok(true));
    }

    #[test_case(1; "one")]
    #[test_case(0; "zero")]
    #[test_case(-5; "negative")]
    fn test_is_prime_below_two(n: i64) {
        assert_eq!(is_prime(n), Err(DomainError::PrimeBelowTwo(n)));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2, 8), Ok(256));
        assert_eq!(power(3, 4), Ok(81));
        assert_eq!(power(-2, 3), Ok(-8));
        assert_eq!(power(0, 0), Ok(1));
        assert_eq!(power(7, 0), Ok(1));
        assert_eq!(power(i64::MIN, 0), Ok(1));
    }

    #[test]
    fn test_power_negative_exponent() {
        assert_eq!(power(2, -1), Err(DomainError::NegativeExponent(-1)));
    }

    #[test]
    fn test_power_wraps() {
        assert_eq!(power(2, 64), Ok(0));
        assert_eq!(power(2, 63), Ok(i64::MIN));
    }
}
