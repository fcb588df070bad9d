//! Take combinator - a counter gating pulls from upstream.

use crate::gate::Budget;
use crate::seq::trait_def::Seq;

/// Take combinator - yields at most `n` elements.
///
/// The upstream is never pulled past the `n`-th element, so `take` is the
/// safe way to bound an infinite source.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let xs = repeat(1).take(3);
/// assert_eq!(xs.to_vec(), vec![1, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Take<S> {
    inner: S,
    budget: Budget,
}

impl<S> Take<S> {
    pub(crate) fn new(inner: S, n: i64) -> Self {
        Take {
            inner,
            budget: Budget::new(n),
        }
    }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if !self.budget.spend() {
            return None;
        }
        let value = self.inner.next();
        if value.is_none() {
            // Upstream ran dry first; keep the exhaustion terminal without touching it again.
            self.budget = Budget::new(0);
        }
        value
    }
}
