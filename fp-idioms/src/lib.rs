//! Functional-programming idioms in plain Rust: closed sum types with exhaustive matching,
//! Maybe-style chaining over `Option`, a memoized lazy sequence, list recursion over a
//! stack-safe frame machine, and curried function builders.

pub mod curry;
mod frame;
pub mod lazy;
pub mod list;
pub mod maybe;
mod recursive;
pub mod shape;
pub mod steps;

pub use frame::{
    expand_and_collapse, try_expand_and_collapse, ListFrame, MappableFrame, PartiallyApplied,
};
pub use lazy::FibonacciCache;
pub use list::{
    checked_sum_list, inc_list, inc_list_mapped, sum_list, sum_list_fold, sum_list_tail,
};
pub use maybe::{bind, chain, pure, FallibleNumber, Maybe};
pub use recursive::Collapsible;
pub use shape::{area, Shape, ShapeKind};
pub use steps::{divide, double_value, square_root};

#[cfg(feature = "subscriber")]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and only the first call has any effect.
/// Enable step and cache diagnostics with `RUST_LOG=fp_idioms=debug`.
#[cfg(feature = "subscriber")]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
