#[cfg(test)]
use crate::capture::record;
#[cfg(test)]
use fp_idioms::lazy::FibonacciCache;
#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
const COMPUTED: &str = "computed fibonacci term";

/// Largest index whose term fits in a `u64`.
pub const MAX_INDEX: usize = 93;

/// Reference terms by plain iteration, independent of the cache.
pub fn fib_terms(upto: usize) -> Vec<u64> {
    let mut terms = vec![0u64, 1];
    while terms.len() <= upto {
        let n = terms.len();
        terms.push(terms[n - 1] + terms[n - 2]);
    }
    terms.truncate(upto + 1);
    terms
}

#[test]
fn later_query_does_not_recompute_earlier_term() {
    let (log, _guard) = record();
    let mut cache = FibonacciCache::new();

    assert_eq!(cache.get(10), 55);
    assert_eq!(log.count(COMPUTED), 9);

    log.clear();
    assert_eq!(cache.get(4), 3);
    assert!(log.is_empty());

    assert_eq!(cache.terms(), &fib_terms(10)[..]);
}

#[test]
fn repeated_query_is_idempotent() {
    let mut cache = FibonacciCache::new();
    let first = cache.get(20);
    let snapshot = cache.terms().to_vec();

    let (log, _guard) = record();
    for _ in 0..5 {
        assert_eq!(cache.get(20), first);
    }

    assert!(log.is_empty());
    assert_eq!(cache.terms(), &snapshot[..]);
}

#[test]
fn seed_terms_need_no_work() {
    let (log, _guard) = record();
    let mut cache = FibonacciCache::new();

    assert_eq!(cache.get(0), 0);
    assert_eq!(cache.get(1), 1);
    assert!(log.is_empty());
    assert_eq!(cache.len(), 2);
}

#[test]
fn each_append_logs_its_index_and_term() {
    let (log, _guard) = record();
    let mut cache = FibonacciCache::new();
    cache.get(5);

    let logged: Vec<(String, String)> = log
        .events()
        .iter()
        .map(|e| {
            (
                e.field("index").unwrap_or_default().to_string(),
                e.field("term").unwrap_or_default().to_string(),
            )
        })
        .collect();

    let expected: Vec<(String, String)> = [(2, 1), (3, 2), (4, 3), (5, 5)]
        .iter()
        .map(|(i, t)| (i.to_string(), t.to_string()))
        .collect();
    assert_eq!(logged, expected);
}

#[test]
fn largest_representable_term() {
    let mut cache = FibonacciCache::new();
    assert_eq!(cache.get(MAX_INDEX), 12_200_160_415_121_876_738);
}

#[test]
fn iterator_extends_then_reuses() {
    let mut cache = FibonacciCache::new();
    let from_iter: Vec<u64> = cache.iter().take(12).collect();
    assert_eq!(from_iter, fib_terms(11));

    let (log, _guard) = record();
    let again: Vec<u64> = cache.iter().take(12).collect();
    assert_eq!(again, from_iter);
    assert!(log.is_empty());
}

#[cfg(test)]
proptest! {
    #[test]
    fn query_order_does_not_matter(
        queries in prop::collection::vec(0..=MAX_INDEX, 1..20),
    ) {
        let (log, _guard) = record();
        let mut cache = FibonacciCache::new();
        let reference = fib_terms(MAX_INDEX);

        for &i in &queries {
            prop_assert_eq!(cache.get(i), reference[i]);
        }

        let highest = queries.iter().copied().max().unwrap_or(0).max(1);
        prop_assert_eq!(cache.terms(), &reference[..=highest]);
        // every term past the seeds computed exactly once
        prop_assert_eq!(log.count(COMPUTED), highest - 1);
    }
}
