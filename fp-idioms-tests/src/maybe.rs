use fp_idioms::maybe::FallibleNumber;
use fp_idioms::steps::{divide, double_value, square_root};
use proptest::prelude::*;

#[cfg(test)]
use crate::capture::record;
#[cfg(test)]
use fp_idioms::maybe::{bind, chain, pure, Maybe};

/// A fallible step picked by a strategy, so the chain laws can be checked over arbitrary
/// pipelines rather than a fixed handful.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Root,
    Double,
    DivideBy(f64),
    Negate,
}

impl Step {
    pub fn run(self, x: f64) -> FallibleNumber {
        match self {
            Step::Root => square_root(x),
            Step::Double => double_value(x),
            Step::DivideBy(d) => divide(x, d),
            Step::Negate => Some(-x),
        }
    }
}

pub fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Root),
        Just(Step::Double),
        Just(Step::Negate),
        Just(Step::DivideBy(0.0)),
        (-5.0..5.0f64).prop_map(Step::DivideBy),
    ]
}

#[test]
fn divide_by_zero_never_reaches_square_root() {
    let (log, _guard) = record();

    let out = divide(10.0, 0.0).then_try(square_root);

    assert_eq!(out, None);
    assert_eq!(log.messages(), vec!["running divide"]);
}

#[test]
fn negative_quotient_fails_at_square_root() {
    let (log, _guard) = record();

    let out = divide(-10.0, 5.0).then_try(square_root);

    assert_eq!(out, None);
    assert_eq!(log.messages(), vec!["running divide", "running square_root"]);
}

#[test]
fn full_pipeline_succeeds() {
    let (log, _guard) = record();

    let pipeline = chain(chain(|n: f64| divide(n, 5.0), square_root), double_value);
    let out = pipeline(10.0).expect("every step succeeds");

    assert!((out - 2.0 * 2f64.sqrt()).abs() < 1e-12);
    assert_eq!(
        log.messages(),
        vec!["running divide", "running square_root", "running double_value"]
    );
}

#[test]
fn failure_midway_skips_the_rest() {
    let (log, _guard) = record();

    let pipeline = chain(chain(|n: f64| divide(n, 5.0), square_root), double_value);

    assert_eq!(pipeline(-10.0), None);
    assert_eq!(log.count("running double_value"), 0);
}

#[test]
fn step_fields_are_logged() {
    let (log, _guard) = record();
    let _ = divide(3.0, 4.0);

    let events = log.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("numerator"), Some("3.0"));
    assert_eq!(events[0].field("denominator"), Some("4.0"));
    assert!(events[0].target.starts_with("fp_idioms"));
}

#[cfg(test)]
proptest! {
    #[test]
    fn chaining_is_associative(
        x in -1e3..1e3f64,
        f in arb_step(),
        g in arb_step(),
        h in arb_step(),
    ) {
        let (f, g, h) = (
            move |v: f64| f.run(v),
            move |v: f64| g.run(v),
            move |v: f64| h.run(v),
        );
        let left = chain(chain(f, g), h);
        let right = chain(f, chain(g, h));
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn pure_is_a_left_identity(x in -1e3..1e3f64, f in arb_step()) {
        prop_assert_eq!(bind(pure(x), |v| f.run(v)), f.run(x));
    }

    #[test]
    fn pure_is_a_right_identity(x in -1e3..1e3f64, f in arb_step()) {
        let m = f.run(x);
        prop_assert_eq!(bind(m, pure), m);
    }

    #[test]
    fn absence_absorbs_any_step(f in arb_step()) {
        prop_assert_eq!(None::<f64>.then_try(|v| f.run(v)), None);
    }
}
