//! Single-purpose numeric steps that either produce a value or nothing.
//!
//! Each step emits one `debug` event when it runs, which makes short-circuiting in a
//! [`crate::maybe`] chain observable from a subscriber.

use tracing::debug;

use crate::maybe::FallibleNumber;

/// `numerator / denominator`, absent when the denominator is zero.
pub fn divide(numerator: f64, denominator: f64) -> FallibleNumber {
    debug!(numerator, denominator, "running divide");
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Principal square root, absent for negative input.
pub fn square_root(x: f64) -> FallibleNumber {
    debug!(x, "running square_root");
    if x < 0.0 {
        None
    } else {
        Some(x.sqrt())
    }
}

/// Never fails.
pub fn double_value(x: f64) -> FallibleNumber {
    debug!(x, "running double_value");
    Some(2.0 * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_zero_is_absent() {
        assert_eq!(divide(10.0, 0.0), None);
        assert_eq!(divide(10.0, 4.0), Some(2.5));
    }

    #[test]
    fn negative_root_is_absent() {
        assert_eq!(square_root(-1.0), None);
        assert_eq!(square_root(9.0), Some(3.0));
        assert_eq!(square_root(0.0), Some(0.0));
    }

    #[test]
    fn double_is_total() {
        assert_eq!(double_value(-3.5), Some(-7.0));
    }
}
