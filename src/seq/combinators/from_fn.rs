//! FromFn - a sequence driven by a step closure.

use crate::seq::trait_def::Seq;

/// A sequence whose elements come from calling a step closure.
///
/// The step is fused: after it first returns `None` it is never called
/// again, which keeps exhaustion terminal even for closures that would
/// happily resume.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let mut n = 0;
/// let xs = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// });
/// assert_eq!(xs.to_vec(), vec![1, 2, 3]);
/// ```
pub struct FromFn<F> {
    step: Option<F>,
}

impl<F> FromFn<F> {
    pub(crate) fn new(step: F) -> Self {
        FromFn { step: Some(step) }
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn")
            .field("step", &"<function>")
            .field("exhausted", &self.step.is_none())
            .finish()
    }
}

impl<T, F> Seq for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let step = self.step.as_mut()?;
        let value = step();
        if value.is_none() {
            self.step = None;
        }
        value
    }
}
