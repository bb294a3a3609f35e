//! Calculation core
//!
//! Pure arithmetic over 32-bit operands plus a bounded random draw. Every
//! call logs its method name, inputs and outcome.
//!
//! Integer operations wrap on overflow (two's complement), so they never fail.

use calc_types::prelude::CalculationError;
use rand::Rng;
use tracing::{debug, error};

pub fn add(value1: i32, value2: i32) -> i32 {
    let result = value1.wrapping_add(value2);
    debug!(method = "add", value1, value2, result, "calculation completed");
    result
}

pub fn subtract(value1: i32, value2: i32) -> i32 {
    let result = value1.wrapping_sub(value2);
    debug!(method = "subtract", value1, value2, result, "calculation completed");
    result
}

pub fn multiply(value1: i32, value2: i32) -> i32 {
    let result = value1.wrapping_mul(value2);
    debug!(method = "multiply", value1, value2, result, "calculation completed");
    result
}

/// Floating-point quotient of `value1 / value2`.
pub fn divide(value1: i32, value2: i32) -> Result<f64, CalculationError> {
    if value2 == 0 {
        let err = CalculationError::DivisionByZero;
        error!(method = "divide", value1, value2, error = %err, "calculation failed");
        return Err(err);
    }

    let result = f64::from(value1) / f64::from(value2);
    debug!(method = "divide", value1, value2, result, "calculation completed");
    Ok(result)
}

/// Random integer in `[min, max)` from the thread-local generator.
pub fn random_in_range(min: i32, max: i32) -> Result<i32, CalculationError> {
    random_in_range_with(&mut rand::thread_rng(), min, max)
}

/// Same as [`random_in_range`] but draws from `rng`.
///
/// An empty range (`min == max`) yields `min`. An inverted range is an error.
pub fn random_in_range_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: i32,
    max: i32,
) -> Result<i32, CalculationError> {
    if min > max {
        let err = CalculationError::InvalidRange { min, max };
        error!(method = "random_in_range", min, max, error = %err, "calculation failed");
        return Err(err);
    }

    let result = if min == max { min } else { rng.gen_range(min..max) };
    debug!(method = "random_in_range", min, max, result, "calculation completed");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-2, 3), 1);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(2, 3), -1);
        assert_eq!(subtract(10, -5), 15);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(4, -3), -12);
        assert_eq!(multiply(0, i32::MAX), 0);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn test_divide_exact() {
        assert_eq!(divide(9, 3), Ok(3.0));
    }

    #[test]
    fn test_divide_keeps_fraction() {
        assert_eq!(divide(7, 2), Ok(3.5));
        assert_eq!(divide(-1, 4), Ok(-0.25));
    }

    #[test]
    fn test_divide_min_by_minus_one() {
        assert_eq!(divide(i32::MIN, -1), Ok(2147483648.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10, 0), Err(CalculationError::DivisionByZero));
        assert_eq!(divide(0, 0), Err(CalculationError::DivisionByZero));
    }

    #[test]
    fn test_random_default_range() {
        for _ in 0..1_000 {
            let v = random_in_range(0, 100).unwrap();
            assert!((0..100).contains(&v));
        }
    }

    #[test]
    fn test_random_single_value_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(random_in_range_with(&mut rng, 5, 6), Ok(5));
        }
    }

    #[test]
    fn test_random_empty_range_returns_min() {
        assert_eq!(random_in_range(42, 42), Ok(42));
    }

    #[test]
    fn test_random_inverted_range() {
        assert_eq!(
            random_in_range(10, 5),
            Err(CalculationError::InvalidRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn test_random_full_i32_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let v = random_in_range_with(&mut rng, i32::MIN, i32::MAX).unwrap();
            assert!(v < i32::MAX);
        }
    }
}
