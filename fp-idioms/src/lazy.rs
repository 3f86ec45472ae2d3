//! Memoized Fibonacci terms, computed on demand.

use tracing::debug;

/// An append-only cache of Fibonacci terms, seeded with `F(0) = 0` and `F(1) = 1`.
///
/// Each term is computed at most once. Querying an index that is already cached does no work;
/// querying past the end appends terms one at a time until the index is reached. Terms past
/// `F(93)` overflow `u64` and are out of range.
#[derive(Debug, Clone)]
pub struct FibonacciCache {
    terms: Vec<u64>,
}

impl Default for FibonacciCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciCache {
    pub fn new() -> Self {
        Self { terms: vec![0, 1] }
    }

    /// The term at `index`, extending the cache as needed.
    pub fn get(&mut self, index: usize) -> u64 {
        while self.terms.len() <= index {
            self.push_next();
        }
        self.terms[index]
    }

    /// Number of cached terms. Never less than two.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    // seeded, so never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_cached(&self, index: usize) -> bool {
        index < self.terms.len()
    }

    /// All terms computed so far, in index order.
    pub fn terms(&self) -> &[u64] {
        &self.terms
    }

    /// Iterate over the sequence from `F(0)`, reading cached terms and extending the cache
    /// once the iterator runs past its end. The iterator never ends on its own.
    pub fn iter(&mut self) -> Terms<'_> {
        Terms {
            cache: self,
            next: 0,
        }
    }

    fn push_next(&mut self) {
        let n = self.terms.len();
        let term = self.terms[n - 1] + self.terms[n - 2];
        self.terms.push(term);
        debug!(index = n, term, "computed fibonacci term");
    }
}

/// Iterator returned by [`FibonacciCache::iter`].
#[derive(Debug)]
pub struct Terms<'a> {
    cache: &'a mut FibonacciCache,
    next: usize,
}

impl<'a> Iterator for Terms<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let term = self.cache.get(self.next);
        self.next += 1;
        Some(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_two_terms() {
        let cache = FibonacciCache::new();
        assert_eq!(cache.terms(), &[0, 1]);
        assert!(cache.is_cached(1));
        assert!(!cache.is_cached(2));
    }

    #[test]
    fn grows_only_to_requested_index() {
        let mut cache = FibonacciCache::new();
        assert_eq!(cache.get(10), 55);
        assert_eq!(cache.len(), 11);
        assert_eq!(cache.get(4), 3);
        assert_eq!(cache.len(), 11);
    }

    #[test]
    fn iter_shares_the_cache() {
        let mut cache = FibonacciCache::new();
        let first: Vec<u64> = cache.iter().take(8).collect();
        assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13]);
        assert_eq!(cache.len(), 8);
    }
}
