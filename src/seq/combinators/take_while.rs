//! TakeWhile combinator - yields while a predicate holds, then stops for good.

use crate::gate::{Counter, WhileGate};
use crate::seq::trait_def::Seq;

/// TakeWhile combinator - short-circuits at the first failing element.
///
/// Elements are yielded while `p(x, index)` holds. The first element that
/// fails is dropped, the sequence becomes exhausted, and the upstream is
/// never pulled again. Elements after the first failure are not yielded
/// even if the predicate would accept them.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let xs = of(vec![1, 2, 7, 3, 4]).take_while(|x| *x < 5);
/// assert_eq!(xs.to_vec(), vec![1, 2]);
/// ```
pub struct TakeWhile<S, P> {
    inner: S,
    p: P,
    gate: WhileGate,
    index: Counter,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(inner: S, p: P) -> Self {
        TakeWhile {
            inner,
            p,
            gate: WhileGate::new(),
            index: Counter::new(),
        }
    }
}

impl<S, P> std::fmt::Debug for TakeWhile<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile")
            .field("inner", &"<seq>")
            .field("p", &"<predicate>")
            .field("closed", &self.gate.is_closed())
            .finish()
    }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.gate.is_closed() {
            return None;
        }
        let Some(x) = self.inner.next() else {
            self.gate.admit(false);
            return None;
        };
        let i = self.index.tick();
        if self.gate.admit((self.p)(&x, i)) {
            Some(x)
        } else {
            None
        }
    }
}
