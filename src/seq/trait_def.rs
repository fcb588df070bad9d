//! Seq trait definition - the pull contract every operator programs against.
//!
//! A `Seq` is a lazy, ordered, single-pass producer. It does no work until
//! asked, and each call to [`Seq::next`] advances its internal state by
//! exactly one position.
//!
//! # Design Philosophy
//!
//! This trait follows the same pattern as `Iterator`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - Use `.boxed()` when you need type erasure
//!
//! # Shared Consumption
//!
//! Sequences are stateful. Lending a sequence by `&mut` hands out the *same*
//! state, so whatever one consumer drains is gone for the next:
//!
//! ```rust
//! use eddy::seq::prelude::*;
//!
//! let mut xs = of(vec![1, 2, 3]);
//! assert_eq!((&mut xs).to_vec(), vec![1, 2, 3]);
//! assert_eq!((&mut xs).to_vec(), Vec::<i32>::new());
//! ```

/// The core pull contract: produce the next element or report exhaustion.
///
/// `None` means "no more". Once a sequence has returned `None`, every
/// later call must return `None` as well.
///
/// There is no error channel. A producer that panics propagates the panic
/// out of the `next` call that triggered it.
///
/// # Example
///
/// ```rust
/// use eddy::seq::Seq;
///
/// struct Countdown(u32);
///
/// impl Seq for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Option<u32> {
///         if self.0 == 0 {
///             return None;
///         }
///         self.0 -= 1;
///         Some(self.0 + 1)
///     }
/// }
///
/// let mut c = Countdown(2);
/// assert_eq!(c.next(), Some(2));
/// assert_eq!(c.next(), Some(1));
/// assert_eq!(c.next(), None);
/// assert_eq!(c.next(), None);
/// ```
pub trait Seq {
    /// The type of element produced.
    type Item;

    /// Advance by one position and return the element, or `None` when exhausted.
    fn next(&mut self) -> Option<Self::Item>;
}

impl<S: Seq + ?Sized> Seq for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        (**self).next()
    }
}

impl<S: Seq + ?Sized> Seq for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        (**self).next()
    }
}
