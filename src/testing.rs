//! Testing utilities and helpers for Eddy
//!
//! This module provides probe sequences for asserting *how* a pipeline
//! drives its source (whether it pulls at all, and how many times), an
//! assertion macro for draining sequences, and property-based testing
//! support.
//!
//! # Examples
//!
//! ## Counting pulls
//!
//! ```rust
//! use eddy::seq::prelude::*;
//! use eddy::testing::Counting;
//!
//! let probe = Counting::new(range(0, 100));
//! let pulls = probe.pulls();
//!
//! assert_eq!(probe.take(2).to_vec(), vec![0, 1]);
//! assert_eq!(pulls.get(), 2);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use eddy::assert_seq_eq;
//! use eddy::seq::prelude::*;
//!
//! assert_seq_eq!(range(1, 4).select(|x| x * 2), [2, 4, 6]);
//! ```

use std::cell::Cell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::seq::Seq;

/// A sequence that panics the moment it is pulled.
///
/// Wrap a pipeline around it to check that building the pipeline does no
/// work until a terminal operator runs.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
/// use eddy::testing::Exploding;
///
/// // Constructing is fine...
/// let pipeline = Exploding::<i32>::new().select(|x| x + 1).take(3);
/// // ...pulling is not.
/// let result = std::panic::catch_unwind(move || pipeline.to_vec());
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Exploding<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Exploding<T> {
    /// Create the probe.
    pub fn new() -> Self {
        Exploding {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Exploding<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Seq for Exploding<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        panic!("pulled an exploding sequence");
    }
}

/// A pass-through sequence that counts how often it is pulled.
///
/// Every call to `next` counts, including the ones that report exhaustion.
/// The counter handle from [`Counting::pulls`] stays readable after the
/// probe itself has been moved into a pipeline.
#[derive(Debug)]
pub struct Counting<S> {
    inner: S,
    pulls: Rc<Cell<usize>>,
}

impl<S> Counting<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Counting {
            inner,
            pulls: Rc::new(Cell::new(0)),
        }
    }

    /// A handle onto the pull counter.
    pub fn pulls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.pulls)
    }
}

impl<S: Seq> Seq for Counting<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next()
    }
}

/// Assert that a sequence drains to the expected elements.
///
/// The right-hand side can be anything that converts into a `Vec` of the
/// sequence's item type (an array, a `Vec`, ...).
///
/// # Example
///
/// ```rust
/// use eddy::assert_seq_eq;
/// use eddy::seq::prelude::*;
///
/// assert_seq_eq!(of(vec!['a', 'b']), ['a', 'b']);
/// ```
#[macro_export]
macro_rules! assert_seq_eq {
    ($seq:expr, $expected:expr) => {
        $crate::testing::check_drained(
            $crate::seq::SeqExt::to_vec($seq),
            ::std::convert::Into::into($expected),
        )
    };
}

#[doc(hidden)]
pub fn check_drained<T: PartialEq + std::fmt::Debug>(actual: Vec<T>, expected: Vec<T>) {
    if actual != expected {
        panic!(
            "sequence mismatch\n  actual: {:?}\nexpected: {:?}",
            actual, expected
        );
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Maybe<T>
where
    T: Arbitrary + Clone + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(crate::Maybe::Nothing),
            3 => any_with::<T>(args).prop_map(crate::Maybe::Just),
        ]
        .boxed()
    }
}

/// A strategy producing pull sequences over up to `max_len` arbitrary elements.
///
/// Generated alongside the backing `Vec`, so a property can compare a
/// pipeline against the same query written with `std::iter`.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
/// use eddy::testing::seq_with_source;
/// use proptest::prelude::*;
///
/// proptest!(|((xs, seq) in seq_with_source::<u8>(16))| {
///     prop_assert_eq!(seq.select(|x| x / 2).to_vec(), xs.iter().map(|x| x / 2).collect::<Vec<_>>());
/// });
/// ```
#[cfg(feature = "proptest")]
pub fn seq_with_source<T>(
    max_len: usize,
) -> impl Strategy<Value = (Vec<T>, crate::seq::FromIter<std::vec::IntoIter<T>>)>
where
    T: Arbitrary + Clone + std::fmt::Debug + 'static,
{
    proptest::collection::vec(any::<T>(), 0..=max_len).prop_map(|xs| {
        let seq = crate::seq::of(xs.clone());
        (xs, seq)
    })
}
