//! Extension trait providing the query vocabulary for all sequences.
//!
//! The `SeqExt` trait is automatically implemented for every type that
//! implements `Seq`. Combinators are lazy: they only wrap the upstream and
//! never pull from it until a terminal operator asks. Terminal operators
//! (`to_vec`, `fold`, `all`, `first`, ...) drive the pipeline and return
//! ordinary values.
//!
//! Terminal operators other than the bounded ones (`first`, `first_while`,
//! `any_elem`, and anything behind a `take`) traverse the whole source and
//! do not return on an infinite one.

use crate::gate::{Counter, Countdown, SkipGate};
use crate::seq::boxed::BoxedSeq;
use crate::seq::combinators::{Append, Bind, Take, TakeWhile, Unit};
use crate::seq::iter::SeqIter;
use crate::seq::shared::Shared;
use crate::seq::trait_def::Seq;

/// Extension trait providing combinator and terminal methods for all sequences.
///
/// This trait is automatically implemented for all types that implement `Seq`.
/// You don't need to implement this trait yourself.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let evens = range(1, 10)
///     .filter(|x| x % 2 == 0)
///     .select(|x| x * x)
///     .to_vec();
/// assert_eq!(evens, vec![4, 16, 36, 64]);
/// ```
pub trait SeqExt: Seq {
    /// Map each element to a sub-sequence and concatenate the results in order.
    ///
    /// This is the monadic bind every other combinator is built from.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// let xs = of(vec![1, 2, 3]).bind(|x| range(0, x));
    /// assert_eq!(xs.to_vec(), vec![0, 0, 1, 0, 1, 2]);
    /// ```
    fn bind<R, F>(self, f: F) -> Bind<Self, F, R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
        R: Seq,
    {
        Bind::new(self, f)
    }

    /// Alias for [`bind`](SeqExt::bind).
    fn flat_map<R, F>(self, f: F) -> Bind<Self, F, R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
        R: Seq,
    {
        Bind::new(self, f)
    }

    /// Alias for [`bind`](SeqExt::bind), under its query name.
    fn select_many<R, F>(self, f: F) -> Bind<Self, F, R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
        R: Seq,
    {
        Bind::new(self, f)
    }

    /// Like [`select_many`](SeqExt::select_many), also passing each outer element's position.
    fn select_many_with_index<R, F>(self, mut f: F) -> impl Seq<Item = R::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, usize) -> R,
        R: Seq,
    {
        let mut index = Counter::new();
        Bind::new(self, move |x: Self::Item| f(x, index.tick()))
    }

    /// Transform each element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// assert_eq!(of(vec![1, 2, 3]).select(|x| x * x).to_vec(), vec![1, 4, 9]);
    /// ```
    #[doc(alias = "map")]
    fn select<R, F>(self, mut f: F) -> impl Seq<Item = R>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        self.select_with_index(move |x, _| f(x))
    }

    /// Transform each element together with its position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// let xs = of(vec![10, 20, 30]).select_with_index(|x, i| x + i as i32);
    /// assert_eq!(xs.to_vec(), vec![10, 21, 32]);
    /// ```
    fn select_with_index<R, F>(self, mut f: F) -> impl Seq<Item = R>
    where
        Self: Sized,
        F: FnMut(Self::Item, usize) -> R,
    {
        self.select_many_with_index(move |x, i| Unit::new(f(x, i)))
    }

    /// Keep only the elements satisfying a predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// assert_eq!(range(1, 10).filter(|x| x % 2 == 0).to_vec(), vec![2, 4, 6, 8]);
    /// ```
    #[doc(alias = "where")]
    fn filter<P>(self, mut p: P) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter_with_index(move |x, _| p(x))
    }

    /// Keep only the elements satisfying a position-aware predicate.
    fn filter_with_index<P>(self, mut p: P) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item, usize) -> bool,
    {
        self.select_many_with_index(move |x, i| {
            if p(&x, i) {
                Unit::new(x)
            } else {
                Unit::empty()
            }
        })
    }

    /// Yield at most `n` elements. `n <= 0` yields nothing. See [`Take`].
    fn take(self, n: i64) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Yield elements while `p` holds; stop for good at the first failure.
    ///
    /// See [`TakeWhile`].
    fn take_while<P>(self, mut p: P) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, move |x: &Self::Item, _: usize| p(x))
    }

    /// Position-aware [`take_while`](SeqExt::take_while).
    fn take_while_with_index<P>(self, p: P) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item, usize) -> bool,
    {
        TakeWhile::new(self, p)
    }

    /// Suppress the first `n` elements. `n <= 0` is the identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// let xs = range(1, 10).filter(|x| x % 2 == 0).skip(2);
    /// assert_eq!(xs.to_vec(), vec![6, 8]);
    /// ```
    fn skip(self, n: i64) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
    {
        let mut countdown = Countdown::new(n);
        Bind::new(self, move |x: Self::Item| {
            if countdown.pass() {
                Unit::new(x)
            } else {
                Unit::empty()
            }
        })
    }

    /// Suppress elements while `p` holds; the first failure lets everything after it through.
    fn skip_while<P>(self, mut p: P) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.skip_while_with_index(move |x, _| p(x))
    }

    /// Position-aware [`skip_while`](SeqExt::skip_while).
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// let xs = range(1, 10).skip_while_with_index(|x, i| *x + (i as i64) < 10);
    /// assert_eq!(xs.to_vec(), vec![6, 7, 8, 9]);
    /// ```
    fn skip_while_with_index<P>(self, mut p: P) -> impl Seq<Item = Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item, usize) -> bool,
    {
        let mut gate = SkipGate::new();
        self.select_many_with_index(move |x, i| {
            if gate.pass(|| p(&x, i)) {
                Unit::new(x)
            } else {
                Unit::empty()
            }
        })
    }

    /// Yield one more value after this sequence is exhausted. See [`Append`].
    fn append(self, value: Self::Item) -> Append<Self, Self::Item>
    where
        Self: Sized,
    {
        Append::new(self, value)
    }

    /// Share this sequence behind a clonable handle. See [`Shared`].
    fn shared(self) -> Shared<Self>
    where
        Self: Sized,
    {
        Shared::new(self)
    }

    /// Erase the concrete type. See [`BoxedSeq`].
    fn boxed<'a>(self) -> BoxedSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        BoxedSeq::new(self)
    }

    /// Adapt into a `std::iter::Iterator`.
    fn into_iterator(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }

    // Terminal operators

    /// Call `f` on every element, in order.
    fn iterate<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.iterate_with_index(move |x, _| f(x));
    }

    /// Call `f` on every element together with its position.
    fn iterate_with_index<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item, usize),
    {
        let mut index = Counter::new();
        while let Some(x) = self.next() {
            f(x, index.tick());
        }
    }

    /// Drain every remaining element into a `Vec`, in order.
    #[doc(alias = "to_slice")]
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        self.iterate(|x| out.push(x));
        out
    }

    /// Strict left fold over the whole sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// let r = of(vec![1, 4, 5]).fold(5, |acc, x| acc * 2 + x);
    /// assert_eq!(r, 57);
    /// ```
    fn fold<R, F>(mut self, init: R, mut f: F) -> R
    where
        Self: Sized,
        F: FnMut(R, Self::Item) -> R,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x);
        }
        acc
    }

    /// Fold, then project the final accumulator through `selector`.
    fn aggregate<B, R, F, G>(self, init: B, f: F, selector: G) -> R
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
        G: FnOnce(B) -> R,
    {
        selector(self.fold(init, f))
    }

    /// Fold seeded by the first element. `None` when the sequence is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::seq::prelude::*;
    ///
    /// assert_eq!(range(1, 5).reduce(|a, b| a + b), Some(10));
    /// assert_eq!(empty::<i64>().reduce(|a, b| a + b), None);
    /// ```
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// True if every element satisfies `p`. Stops at the first failure; true when empty.
    fn all<P>(mut self, mut p: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if !p(x) {
                return false;
            }
        }
        true
    }

    /// True if some element satisfies `p`. Stops at the first success; false when empty.
    fn any<P>(mut self, mut p: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if p(x) {
                return true;
            }
        }
        false
    }

    /// True if the sequence yields at least one element. Pulls at most once.
    fn any_elem(mut self) -> bool
    where
        Self: Sized,
    {
        self.next().is_some()
    }

    /// The first element, without forcing the rest.
    fn first(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.take(1).next()
    }

    /// The first element, provided it satisfies `p`.
    ///
    /// Built on the short-circuiting [`take_while`](SeqExt::take_while): when
    /// the very first element fails `p` the answer is `None`.
    fn first_while<P>(self, p: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.take_while(p).next()
    }

    /// The last element. Traverses the whole sequence.
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.last_while(|_| true)
    }

    /// The last element satisfying `p`. Traverses the whole sequence.
    fn last_while<P>(self, mut p: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut last = None;
        self.iterate(|x| {
            if p(&x) {
                last = Some(x);
            }
        });
        last
    }
}

impl<S: Seq> SeqExt for S {}
