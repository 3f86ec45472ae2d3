//! Maybe-style chaining over `Option`.
//!
//! Absence is the only failure signal: a `None` carries no reason, so a failed divide and a
//! failed square root look the same to the caller.
//!
//! ```rust
//! use fp_idioms::maybe::{chain, Maybe};
//! use fp_idioms::steps::{divide, double_value, square_root};
//!
//! let r = divide(10.0, 5.0).then_try(square_root).then_try(double_value);
//! assert!((r.unwrap() - 2.0 * 2f64.sqrt()).abs() < 1e-12);
//!
//! let root_then_double = chain(square_root, double_value);
//! assert_eq!(divide(10.0, 0.0).then_try(&root_then_double), None);
//! ```

/// A numeric result that is either present or absent.
pub type FallibleNumber = Option<f64>;

/// Lift a plain value into a present result.
#[inline]
pub fn pure<T>(value: T) -> Option<T> {
    Some(value)
}

/// Monadic bind. `f` runs only when `m` holds a value.
#[inline]
pub fn bind<A, B>(m: Option<A>, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
    match m {
        Some(value) => f(value),
        None => None,
    }
}

/// Compose two fallible steps left to right. The result is itself a fallible step, so
/// `chain(chain(f, g), h)` extends a pipeline by one more stage.
pub fn chain<A, B, C>(
    f: impl Fn(A) -> Option<B>,
    g: impl Fn(B) -> Option<C>,
) -> impl Fn(A) -> Option<C> {
    move |a| bind(f(a), &g)
}

/// Method form of [`bind`] so pipelines read in the order they run.
pub trait Maybe<A> {
    fn then_try<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<B>;
}

impl<A> Maybe<A> for Option<A> {
    #[inline]
    fn then_try<B>(self, f: impl FnOnce(A) -> Option<B>) -> Option<B> {
        bind(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn absent_input_skips_step() {
        let calls = Cell::new(0);
        let out = bind(None::<f64>, |x| {
            calls.set(calls.get() + 1);
            Some(x)
        });

        assert_eq!(out, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn present_input_feeds_step() {
        assert_eq!(bind(Some(4.0), |x: f64| Some(x + 1.0)), Some(5.0));
    }

    #[test]
    fn chain_of_three_short_circuits_at_first_absence() {
        let reached_last = Cell::new(false);
        let pipeline = chain(
            chain(|x: f64| Some(x - 1.0), |x: f64| if x > 0.0 { Some(x) } else { None }),
            |x: f64| {
                reached_last.set(true);
                Some(x * 10.0)
            },
        );

        assert_eq!(pipeline(1.0), None);
        assert!(!reached_last.get());
        assert_eq!(pipeline(3.0), Some(20.0));
        assert!(reached_last.get());
    }

    #[test]
    fn pure_is_identity_for_then_try() {
        assert_eq!(Some(2.5).then_try(pure), Some(2.5));
        assert_eq!(None::<f64>.then_try(pure), None);
    }
}
