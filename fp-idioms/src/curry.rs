//! Curried function builders. Each call returns a new closure owned by the caller; there are no
//! shared pre-built instances.
//!
//! ```rust
//! use fp_idioms::curry::{add, compute_tip, mult};
//!
//! let inc = add(1);
//! let triple = mult(3.0);
//! let avg_tip = compute_tip(15.0);
//!
//! assert_eq!(inc(7), 8);
//! assert_eq!(triple(2.5), 7.5);
//! assert!((avg_tip(100.0) - 15.0).abs() < 1e-9);
//! ```

use std::ops::{Add, Mul};

pub fn add<T: Add<Output = T> + Copy>(first: T) -> impl Fn(T) -> T {
    move |second| first + second
}

pub fn mult<T: Mul<Output = T> + Copy>(first: T) -> impl Fn(T) -> T {
    move |second| first * second
}

/// Tip on a subtotal at a fixed percentage.
pub fn compute_tip(tip_percent: f64) -> impl Fn(f64) -> f64 {
    move |subtotal| (tip_percent / 100.0) * subtotal
}

/// Turn any two-argument function into a chain of one-argument functions.
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    move |a| {
        let f = f.clone();
        let partial: Box<dyn Fn(B) -> C> = Box::new(move |b| f(a.clone(), b));
        partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_adders_are_independent() {
        let add2 = add(2.0);
        let add3 = add(3.0);
        assert_eq!(add2(7.0), 9.0);
        assert_eq!(add3(7.0), 10.0);
        assert_eq!(add(3)(3), 6);
    }

    #[test]
    fn tips() {
        assert!((compute_tip(10.0)(45.0) - 4.5).abs() < 1e-9);
        assert!((compute_tip(20.0)(45.0) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn curry_matches_uncurried() {
        let pow = curry(|base: i64, exp: u32| base.pow(exp));
        let two_to = pow(2);
        assert_eq!(two_to(10), 1024);
        assert_eq!(pow(3)(3), 27);
    }
}
