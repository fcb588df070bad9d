//! The query vocabulary for push sequences.
//!
//! Same names and observable semantics as [`SeqExt`](crate::seq::SeqExt);
//! the gating state comes from [`crate::gate`] in both engines. Every
//! combinator returns a new `Iter` whose stage inherits this one's
//! [`PushConfig`](crate::push::PushConfig), and every one that spawns a
//! worker must be called from within a Tokio runtime.

use crate::gate::{Budget, Counter, Countdown, SkipGate, WhileGate};
use crate::push::bind::{empty, unit};
use crate::push::iter::Iter;
use crate::push::worker;

impl<T: Send + 'static> Iter<T> {
    /// Like [`select_many`](Iter::select_many), also passing each outer element's position.
    pub fn select_many_with_index<R, F>(self, mut f: F) -> Iter<R>
    where
        R: Send + 'static,
        F: FnMut(T, usize) -> Iter<R> + Send + 'static,
    {
        let mut index = Counter::new();
        self.bind(move |x| f(x, index.tick()))
    }

    /// Transform each element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::push;
    ///
    /// # tokio_test::block_on(async {
    /// let xs = push::of(vec![1, 2, 3]).select(|x| x * x);
    /// assert_eq!(xs.to_vec().await, vec![1, 4, 9]);
    /// # });
    /// ```
    pub fn select<R, F>(self, mut f: F) -> Iter<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> R + Send + 'static,
    {
        self.select_with_index(move |x, _| f(x))
    }

    /// Transform each element together with its position.
    pub fn select_with_index<R, F>(self, mut f: F) -> Iter<R>
    where
        R: Send + 'static,
        F: FnMut(T, usize) -> R + Send + 'static,
    {
        self.select_many_with_index(move |x, i| unit(f(x, i)))
    }

    /// Keep only the elements satisfying a predicate.
    pub fn filter<P>(self, mut p: P) -> Iter<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.filter_with_index(move |x, _| p(x))
    }

    /// Keep only the elements satisfying a position-aware predicate.
    pub fn filter_with_index<P>(self, mut p: P) -> Iter<T>
    where
        P: FnMut(&T, usize) -> bool + Send + 'static,
    {
        self.select_many_with_index(move |x, i| if p(&x, i) { unit(x) } else { empty() })
    }

    /// Yield at most `n` elements. `n <= 0` yields nothing.
    ///
    /// The worker stops reading this sequence after the `n`-th element and
    /// drops it, which stops the upstream workers.
    pub fn take(self, n: i64) -> Iter<T> {
        let config = self.config();
        let mut upstream = self;
        let mut budget = Budget::new(n);
        worker::spawn(config, "take", move |mut out| async move {
            while budget.spend() {
                let Some(x) = out.pull(&mut upstream).await? else {
                    break;
                };
                if !out.emit(x).await {
                    break;
                }
            }
            Ok(())
        })
    }

    /// Yield elements while `p` holds; stop for good at the first failure.
    pub fn take_while<P>(self, mut p: P) -> Iter<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.take_while_with_index(move |x, _| p(x))
    }

    /// Position-aware [`take_while`](Iter::take_while).
    pub fn take_while_with_index<P>(self, mut p: P) -> Iter<T>
    where
        P: FnMut(&T, usize) -> bool + Send + 'static,
    {
        let config = self.config();
        let mut upstream = self;
        let mut gate = WhileGate::new();
        let mut index = Counter::new();
        worker::spawn(config, "take_while", move |mut out| async move {
            while let Some(x) = out.pull(&mut upstream).await? {
                if !gate.admit(p(&x, index.tick())) || !out.emit(x).await {
                    break;
                }
            }
            Ok(())
        })
    }

    /// Suppress the first `n` elements. `n <= 0` is the identity.
    pub fn skip(self, n: i64) -> Iter<T> {
        let mut countdown = Countdown::new(n);
        self.bind(move |x| if countdown.pass() { unit(x) } else { empty() })
    }

    /// Suppress elements while `p` holds; the first failure lets everything after it through.
    pub fn skip_while<P>(self, mut p: P) -> Iter<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.skip_while_with_index(move |x, _| p(x))
    }

    /// Position-aware [`skip_while`](Iter::skip_while).
    pub fn skip_while_with_index<P>(self, mut p: P) -> Iter<T>
    where
        P: FnMut(&T, usize) -> bool + Send + 'static,
    {
        let mut gate = SkipGate::new();
        self.select_many_with_index(move |x, i| {
            if gate.pass(|| p(&x, i)) {
                unit(x)
            } else {
                empty()
            }
        })
    }

    /// Forward this sequence, then yield `value` exactly once.
    pub fn append(self, value: T) -> Iter<T> {
        let config = self.config();
        let mut upstream = self;
        worker::spawn(config, "append", move |mut out| async move {
            while let Some(x) = out.pull(&mut upstream).await? {
                if !out.emit(x).await {
                    return Ok(());
                }
            }
            out.emit(value).await;
            Ok(())
        })
    }
}
