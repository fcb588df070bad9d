//! Append combinator - one trailing element after the upstream runs dry.

use crate::seq::trait_def::Seq;

/// Append combinator - forwards the upstream, then yields one extra value.
///
/// The appended value is emitted exactly once, even when the upstream was
/// empty to begin with. After that the sequence is exhausted and the
/// upstream is not pulled again.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// assert_eq!(of(vec![1, 2]).append(3).to_vec(), vec![1, 2, 3]);
/// assert_eq!(empty().append(3).to_vec(), vec![3]);
/// ```
#[derive(Debug, Clone)]
pub struct Append<S, T> {
    inner: S,
    tail: Option<T>,
    done: bool,
}

impl<S, T> Append<S, T> {
    pub(crate) fn new(inner: S, tail: T) -> Self {
        Append {
            inner,
            tail: Some(tail),
            done: false,
        }
    }
}

impl<S> Seq for Append<S, S::Item>
where
    S: Seq,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return self.tail.take();
        }
        match self.inner.next() {
            Some(x) => Some(x),
            None => {
                self.done = true;
                self.tail.take()
            }
        }
    }
}
