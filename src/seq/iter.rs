//! Bridge from `Seq` to `std::iter::Iterator`.

use crate::seq::trait_def::Seq;

/// Iterator adapter over a sequence. Created by
/// [`SeqExt::into_iterator`](crate::seq::SeqExt::into_iterator).
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let total: i64 = range(1, 4).into_iterator().sum();
/// assert_eq!(total, 6);
/// ```
#[derive(Debug, Clone)]
pub struct SeqIter<S> {
    seq: S,
}

impl<S> SeqIter<S> {
    pub(crate) fn new(seq: S) -> Self {
        SeqIter { seq }
    }

    /// Recover the wrapped sequence, keeping its current position.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Seq> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.seq.next()
    }
}
