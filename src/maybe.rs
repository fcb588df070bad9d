//! An optional single value with the same monadic vocabulary as sequences.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It offers `unit`,
//! `bind` and `map` with the same shape as the sequence primitives, so a
//! computation written against one reads the same against the other.
//!
//! It converts freely to and from `Option<T>`; use whichever reads better
//! at the call site.
//!
//! # Examples
//!
//! ```rust
//! use eddy::Maybe;
//!
//! let sum = Maybe::just(1).bind(|a| Maybe::just(2).bind(move |b| Maybe::just(a + b)));
//! assert_eq!(sum, Maybe::just(3));
//!
//! let none = Maybe::<i32>::nothing().bind(|a| Maybe::just(a + 1));
//! assert_eq!(none, Maybe::Nothing);
//! ```

use crate::seq::combinators::Unit;

/// A value that is present (`Just`) or absent (`Nothing`).
///
/// # Example
///
/// ```rust
/// use eddy::Maybe;
///
/// let doubled = Maybe::just(21).map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Just(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    /// Wrap a present value.
    pub fn just(value: T) -> Self {
        Maybe::Just(value)
    }

    /// The absent value.
    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Monadic return: alias for [`Maybe::just`].
    pub fn unit(value: T) -> Self {
        Maybe::Just(value)
    }

    /// Returns `true` for `Just`.
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Returns `true` for `Nothing`.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Chain a computation that may itself produce nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() };
    /// assert_eq!(Maybe::just(8).bind(half).bind(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(6).bind(half).bind(half), Maybe::Nothing);
    /// ```
    pub fn bind<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`Maybe::bind`].
    pub fn flat_map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        self.bind(f)
    }

    /// Transform the value, if present. Defined as `bind` followed by `unit`.
    pub fn map<R, F>(self, f: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        self.bind(|value| Maybe::unit(f(value)))
    }

    /// The value, or `default` when absent.
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Convert to `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Convert from `Option`.
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }

    /// View as a sequence of zero or one elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Maybe;
    /// use eddy::seq::prelude::*;
    ///
    /// let xs = of(vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)])
    ///     .bind(Maybe::into_seq);
    /// assert_eq!(xs.to_vec(), vec![1, 3]);
    /// ```
    pub fn into_seq(self) -> Unit<T> {
        match self {
            Maybe::Just(value) => Unit::new(value),
            Maybe::Nothing => Unit::empty(),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Maybe::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
