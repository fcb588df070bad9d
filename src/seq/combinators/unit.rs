//! Unit and Empty - the single-element and zero-element sequences.

use std::marker::PhantomData;

use crate::seq::trait_def::Seq;

/// A sequence yielding one value once, then exhausted forever.
///
/// This is the monadic "return": it turns a plain value into a sequence so
/// that a transformation `A -> R` can be lifted into `A -> Seq<R>` and fed
/// to [`Bind`](super::Bind).
///
/// `Unit::empty()` is the same type with nothing in it, which lets a bind
/// closure choose between "one element" and "no element" without boxing.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let mut u = unit(7);
/// assert_eq!(u.next(), Some(7));
/// assert_eq!(u.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Unit<T> {
    value: Option<T>,
}

impl<T> Unit<T> {
    /// Create a sequence that yields `value` once.
    pub fn new(value: T) -> Self {
        Unit { value: Some(value) }
    }

    /// Create an already-exhausted `Unit`.
    pub fn empty() -> Self {
        Unit { value: None }
    }
}

impl<T> Seq for Unit<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.value.take()
    }
}

/// A sequence that is exhausted from the start.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let mut e = empty::<i32>();
/// assert_eq!(e.next(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Empty {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }
}
