//! Source constructors for the push engine.
//!
//! Finite sources built from owned data are preloaded: the channel is sized
//! to the data, filled and closed immediately, and no worker is spawned.
//! Generating sources (`from_fn`, `range`, `repeat`, `from_iter`) run a
//! worker and must be created within a Tokio runtime.
//!
//! The free functions use [`PushConfig::default`]; the same constructors on
//! [`PushConfig`] start a pipeline with that configuration instead.

use std::collections::HashMap;
use std::hash::Hash;

use crate::push::config::PushConfig;
use crate::push::iter::Iter;
use crate::push::worker;

/// A push sequence over owned values, in order. Preloaded.
pub fn of<T>(values: Vec<T>) -> Iter<T> {
    PushConfig::default().of(values)
}

/// Alias for [`of`].
pub fn from_vec<T>(values: Vec<T>) -> Iter<T> {
    of(values)
}

/// A push sequence over a borrowed slice, yielding clones. Preloaded.
pub fn from_slice<T: Clone>(values: &[T]) -> Iter<T> {
    PushConfig::default().from_slice(values)
}

/// A push sequence over the entries of a map, in the map's iteration order.
pub fn from_map<K, V>(map: HashMap<K, V>) -> Iter<(K, V)>
where
    K: Eq + Hash,
{
    PushConfig::default().from_map(map)
}

/// A push sequence driven by a step closure running on a worker.
///
/// The worker calls `step` until it returns `None` or the consumer goes
/// away. A panic in `step` surfaces through [`Iter::try_next`].
///
/// # Example
///
/// ```rust
/// use eddy::push;
///
/// # tokio_test::block_on(async {
/// let mut n = 0;
/// let xs = push::from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// });
/// assert_eq!(xs.to_vec().await, vec![1, 2, 3]);
/// # });
/// ```
pub fn from_fn<T, F>(step: F) -> Iter<T>
where
    T: Send + 'static,
    F: FnMut() -> Option<T> + Send + 'static,
{
    PushConfig::default().from_fn(step)
}

/// A push sequence over any iterator, drained on a worker.
pub fn from_iter<I>(iter: I) -> Iter<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    PushConfig::default().from_iter(iter)
}

/// The integers `start..end`. Empty when `end <= start`.
pub fn range(start: i64, end: i64) -> Iter<i64> {
    PushConfig::default().range(start, end)
}

/// `value`, forever. Only useful downstream of `take` or a short-circuiting terminal.
pub fn repeat<T>(value: T) -> Iter<T>
where
    T: Clone + Send + 'static,
{
    PushConfig::default().repeat(value)
}

impl PushConfig {
    /// [`push::of`](crate::push::of) with this configuration.
    pub fn of<T>(&self, values: Vec<T>) -> Iter<T> {
        worker::preload(*self, values)
    }

    /// [`push::from_vec`](crate::push::from_vec) with this configuration.
    pub fn from_vec<T>(&self, values: Vec<T>) -> Iter<T> {
        self.of(values)
    }

    /// [`push::from_slice`](crate::push::from_slice) with this configuration.
    pub fn from_slice<T: Clone>(&self, values: &[T]) -> Iter<T> {
        self.of(values.to_vec())
    }

    /// [`push::from_map`](crate::push::from_map) with this configuration.
    pub fn from_map<K, V>(&self, map: HashMap<K, V>) -> Iter<(K, V)>
    where
        K: Eq + Hash,
    {
        self.of(map.into_iter().collect())
    }

    /// [`push::from_fn`](crate::push::from_fn) with this configuration.
    pub fn from_fn<T, F>(&self, mut step: F) -> Iter<T>
    where
        T: Send + 'static,
        F: FnMut() -> Option<T> + Send + 'static,
    {
        worker::spawn(*self, "from_fn", move |mut out| async move {
            while let Some(x) = step() {
                if !out.emit(x).await {
                    break;
                }
            }
            Ok(())
        })
    }

    /// [`push::from_iter`](crate::push::from_iter) with this configuration.
    pub fn from_iter<I>(&self, iter: I) -> Iter<I::Item>
    where
        I: IntoIterator,
        I::IntoIter: Send + 'static,
        I::Item: Send + 'static,
    {
        let mut iter = iter.into_iter();
        self.from_fn(move || iter.next())
    }

    /// [`push::range`](crate::push::range) with this configuration.
    pub fn range(&self, start: i64, end: i64) -> Iter<i64> {
        let mut next = start;
        self.from_fn(move || {
            if next >= end {
                return None;
            }
            let x = next;
            next += 1;
            Some(x)
        })
    }

    /// [`push::repeat`](crate::push::repeat) with this configuration.
    pub fn repeat<T>(&self, value: T) -> Iter<T>
    where
        T: Clone + Send + 'static,
    {
        self.from_fn(move || Some(value.clone()))
    }
}
