//! Terminal operators: drive a push sequence to a result.
//!
//! These read the `Iter` on the calling task. Short-circuiting operators
//! drop the sequence on return, which stops its workers.

use crate::gate::Counter;
use crate::push::error::PushError;
use crate::push::iter::Iter;

impl<T: Send + 'static> Iter<T> {
    /// Collect every element, in order.
    pub async fn to_vec(mut self) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(x) = self.next().await {
            out.push(x);
        }
        out
    }

    /// Alias for [`to_vec`](Iter::to_vec).
    pub async fn to_slice(self) -> Vec<T> {
        self.to_vec().await
    }

    /// Collect every element, or the fault that ended the pipeline.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::push;
    ///
    /// # tokio_test::block_on(async {
    /// let xs = push::range(0, 3).try_to_vec().await;
    /// assert_eq!(xs.unwrap(), vec![0, 1, 2]);
    /// # });
    /// ```
    pub async fn try_to_vec(mut self) -> Result<Vec<T>, PushError> {
        let mut out = Vec::new();
        while let Some(x) = self.try_next().await? {
            out.push(x);
        }
        Ok(out)
    }

    /// Call `f` on each element.
    pub async fn iterate<F>(self, mut f: F)
    where
        F: FnMut(T),
    {
        self.iterate_with_index(move |x, _| f(x)).await
    }

    /// Call `f` on each element and its position.
    pub async fn iterate_with_index<F>(mut self, mut f: F)
    where
        F: FnMut(T, usize),
    {
        let mut index = Counter::new();
        while let Some(x) = self.next().await {
            f(x, index.tick());
        }
    }

    /// Left fold from `seed`.
    pub async fn fold<A, F>(mut self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = seed;
        while let Some(x) = self.next().await {
            acc = f(acc, x);
        }
        acc
    }

    /// [`fold`](Iter::fold), then project the accumulator with `selector`.
    pub async fn aggregate<A, R, F, G>(self, seed: A, f: F, selector: G) -> R
    where
        F: FnMut(A, T) -> A,
        G: FnOnce(A) -> R,
    {
        selector(self.fold(seed, f).await)
    }

    /// Fold seeded with the first element; `None` for an empty sequence.
    pub async fn reduce<F>(mut self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let first = self.next().await?;
        Some(self.fold(first, f).await)
    }

    /// True when every element satisfies `p`. Stops at the first failure.
    pub async fn all<P>(mut self, mut p: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        while let Some(x) = self.next().await {
            if !p(x) {
                return false;
            }
        }
        true
    }

    /// True when some element satisfies `p`. Stops at the first success.
    pub async fn any<P>(mut self, mut p: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        while let Some(x) = self.next().await {
            if p(x) {
                return true;
            }
        }
        false
    }

    /// True when the sequence yields at least one element.
    pub async fn any_elem(mut self) -> bool {
        self.next().await.is_some()
    }

    /// The first element.
    pub async fn first(self) -> Option<T> {
        self.take(1).next().await
    }

    /// The first element satisfying `p`.
    ///
    /// Short-circuits like [`take_while`](Iter::take_while): `None` unless
    /// the very first element satisfies `p`.
    pub async fn first_while<P>(self, p: P) -> Option<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.take_while(p).next().await
    }

    /// The last element. Traverses the whole sequence.
    pub async fn last(self) -> Option<T> {
        self.last_while(|_| true).await
    }

    /// The last element satisfying `p`. Traverses the whole sequence.
    pub async fn last_while<P>(mut self, mut p: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut last = None;
        while let Some(x) = self.next().await {
            if p(&x) {
                last = Some(x);
            }
        }
        last
    }
}
