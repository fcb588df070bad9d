//! Shared - a clonable handle onto one sequence's state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::seq::trait_def::Seq;

/// A clonable handle that shares a single sequence by reference.
///
/// Cloning a `Shared` does not copy the sequence. Every clone pulls from
/// the same cursor, so consumption through one handle is visible through
/// all of them. This is what a bind closure needs when it re-references a
/// single upstream for every outer element.
///
/// Not thread-safe; handles are `!Send`.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let xs = of(vec![1, 2, 3]).shared();
/// let mut a = xs.clone();
/// let b = xs.clone();
///
/// assert_eq!(a.next(), Some(1));
/// assert_eq!(b.to_vec(), vec![2, 3]);
/// assert_eq!(a.next(), None);
/// ```
pub struct Shared<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Shared<S> {
    /// Share `seq` behind a reference-counted handle.
    pub fn new(seq: S) -> Self {
        Shared {
            inner: Rc::new(RefCell::new(seq)),
        }
    }

    /// Number of live handles onto the same sequence.
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Shared {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> std::fmt::Debug for Shared<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shared")
            .field("inner", &"<seq>")
            .field("handles", &self.handles())
            .finish()
    }
}

impl<S: Seq> Seq for Shared<S> {
    type Item = S::Item;

    /// # Panics
    ///
    /// Panics if called re-entrantly from inside the shared sequence's own
    /// `next` (for example from a bind closure that pulls the same handle).
    fn next(&mut self) -> Option<S::Item> {
        self.inner.borrow_mut().next()
    }
}
