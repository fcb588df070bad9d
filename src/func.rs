//! Small function helpers for building pipelines point-free.

/// The identity function.
///
/// # Example
///
/// ```rust
/// use eddy::func::identity;
/// use eddy::seq::prelude::*;
///
/// assert_eq!(of(vec![1, 2]).select(identity).to_vec(), vec![1, 2]);
/// ```
pub fn identity<T>(x: T) -> T {
    x
}

/// A function that ignores its argument and always returns `value`.
///
/// # Example
///
/// ```rust
/// use eddy::func::constant;
/// use eddy::seq::prelude::*;
///
/// let xs = range(0, 3).select(constant::<i64, _>("k"));
/// assert_eq!(xs.to_vec(), vec!["k", "k", "k"]);
/// ```
pub fn constant<A, R: Clone>(value: R) -> impl Fn(A) -> R + Clone {
    move |_| value.clone()
}
