//! BoxedSeq - type-erased sequence for opt-in boxing.
//!
//! Use `BoxedSeq` when you need to:
//! - Return different sequence types from a bind closure or match arms
//! - Store different sequence types in a collection
//! - Build recursive sequence definitions

use crate::seq::trait_def::Seq;

/// A type-erased sequence.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let xs = range(0, 4).bind(|x| {
///     if x % 2 == 0 {
///         of(vec![x, x]).boxed()
///     } else {
///         empty().boxed()
///     }
/// });
/// assert_eq!(xs.to_vec(), vec![0, 0, 2, 2]);
/// ```
pub struct BoxedSeq<'a, T> {
    inner: Box<dyn Seq<Item = T> + 'a>,
}

impl<'a, T> BoxedSeq<'a, T> {
    /// Box any sequence.
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + 'a,
    {
        BoxedSeq {
            inner: Box::new(seq),
        }
    }
}

impl<T> std::fmt::Debug for BoxedSeq<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedSeq").field("inner", &"<seq>").finish()
    }
}

impl<T> Seq for BoxedSeq<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
}
