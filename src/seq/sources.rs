//! Source constructors for the pull engine.
//!
//! Every call returns an independent, freshly-stateful sequence. Two
//! sequences built from the same backing data never share a cursor.

use std::collections::HashMap;
use std::hash::Hash;

use crate::seq::combinators::{Empty, FromFn, Unit};
use crate::seq::trait_def::Seq;

/// Wrap a value as a single-element sequence.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// assert_eq!(unit("x").to_vec(), vec!["x"]);
/// ```
pub fn unit<T>(value: T) -> Unit<T> {
    Unit::new(value)
}

/// Alias for [`unit`].
pub fn ret<T>(value: T) -> Unit<T> {
    Unit::new(value)
}

/// A sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// A sequence driven by a step closure. See [`FromFn`].
pub fn from_fn<T, F>(step: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn::new(step)
}

/// A sequence over any `IntoIterator`.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let xs = from_iter("abc".chars());
/// assert_eq!(xs.to_vec(), vec!['a', 'b', 'c']);
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iter.into_iter().fuse(),
    }
}

/// A sequence over owned values, in order.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// assert_eq!(of(vec![1, 2, 3]).to_vec(), vec![1, 2, 3]);
/// ```
pub fn of<T>(values: Vec<T>) -> FromIter<std::vec::IntoIter<T>> {
    from_iter(values)
}

/// Alias for [`of`].
pub fn from_vec<T>(values: Vec<T>) -> FromIter<std::vec::IntoIter<T>> {
    of(values)
}

/// A sequence over a borrowed slice, yielding clones.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let names = ["ada".to_string(), "bob".to_string()];
/// assert_eq!(from_slice(&names).to_vec(), names.to_vec());
/// ```
pub fn from_slice<T: Clone>(values: &[T]) -> FromIter<std::iter::Cloned<std::slice::Iter<'_, T>>> {
    from_iter(values.iter().cloned())
}

/// A sequence of `(key, value)` pairs drained from a map.
///
/// Pairs come out in the map's iteration order, which for `HashMap` is
/// unspecified.
pub fn from_map<K, V>(map: HashMap<K, V>) -> FromIter<std::collections::hash_map::IntoIter<K, V>>
where
    K: Eq + Hash,
{
    from_iter(map)
}

/// The half-open integer range `[start, end)`.
///
/// Empty when `start >= end`.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// assert_eq!(range(3, 6).to_vec(), vec![3, 4, 5]);
/// assert_eq!(range(6, 3).to_vec(), Vec::<i64>::new());
/// ```
pub fn range(start: i64, end: i64) -> Range {
    Range { next: start, end }
}

/// An infinite sequence of clones of `value`.
///
/// Only bounded consumers (`take`, `first`, `take_while`, ...) terminate on it.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// Sequence adapter over a fused std iterator. Created by [`from_iter`] and friends.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: std::iter::Fuse<I>,
}

impl<I: Iterator> Seq for FromIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

/// Half-open integer range. Created by [`range`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    next: i64,
    end: i64,
}

impl Seq for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.next >= self.end {
            return None;
        }
        let x = self.next;
        self.next += 1;
        Some(x)
    }
}

/// Infinite repetition of one value. Created by [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}
