//! Unit and Bind for the push engine.

use crate::push::config::PushConfig;
use crate::push::iter::Iter;
use crate::push::worker;

/// A push sequence yielding `value` once. Preloaded; spawns no worker.
///
/// # Example
///
/// ```rust
/// use eddy::push;
///
/// # tokio_test::block_on(async {
/// let mut u = push::unit(5);
/// assert_eq!(u.next().await, Some(5));
/// assert_eq!(u.next().await, None);
/// # });
/// ```
pub fn unit<T>(value: T) -> Iter<T> {
    worker::preload(PushConfig::default(), vec![value])
}

/// Alias for [`unit`].
pub fn ret<T>(value: T) -> Iter<T> {
    unit(value)
}

/// A push sequence that is exhausted from the start. Spawns no worker.
pub fn empty<T>() -> Iter<T> {
    worker::preload(PushConfig::default(), Vec::new())
}

impl<T: Send + 'static> Iter<T> {
    /// Map each element to a sub-sequence and concatenate the results in order.
    ///
    /// One worker iterates this sequence; for each element it calls `f` and
    /// forwards every element of the returned sequence before moving on, so
    /// output order is depth-first. Each forward waits for room in the
    /// output channel, which holds the worker back to the consumer's pace.
    ///
    /// When the consumer drops the result, the worker stops and drops both
    /// this sequence and the inner sequence it was draining, which stops
    /// their workers too.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::push;
    ///
    /// # tokio_test::block_on(async {
    /// let xs = push::of(vec!['a', 'b', 'c']).bind(|x| push::of(vec![x, x]));
    /// assert_eq!(xs.to_vec().await, vec!['a', 'a', 'b', 'b', 'c', 'c']);
    /// # });
    /// ```
    pub fn bind<R, F>(self, mut f: F) -> Iter<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> Iter<R> + Send + 'static,
    {
        let config = self.config();
        let mut outer = self;
        worker::spawn(config, "bind", move |mut out| async move {
            while let Some(x) = out.pull(&mut outer).await? {
                let mut inner = f(x);
                while let Some(y) = out.pull(&mut inner).await? {
                    if !out.emit(y).await {
                        return Ok(());
                    }
                }
            }
            Ok(())
        })
    }

    /// Alias for [`bind`](Iter::bind).
    pub fn flat_map<R, F>(self, f: F) -> Iter<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> Iter<R> + Send + 'static,
    {
        self.bind(f)
    }

    /// Alias for [`bind`](Iter::bind), under its query name.
    pub fn select_many<R, F>(self, f: F) -> Iter<R>
    where
        R: Send + 'static,
        F: FnMut(T) -> Iter<R> + Send + 'static,
    {
        self.bind(f)
    }
}
