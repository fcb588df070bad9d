//! The push engine: lazy sequences produced by background workers.
//!
//! Each worker-backed stage of a pipeline is one tokio task writing into a
//! bounded channel; its consumer is an [`Iter`]. The vocabulary matches the
//! pull engine in [`crate::seq`] name for name, with the terminal operators
//! being `async`.
//!
//! ```rust
//! use eddy::push;
//!
//! # tokio_test::block_on(async {
//! let evens = push::range(0, 100)
//!     .filter(|x| x % 2 == 0)
//!     .skip(1)
//!     .take(3);
//! assert_eq!(evens.to_vec().await, vec![2, 4, 6]);
//! # });
//! ```
//!
//! # Backpressure
//!
//! A send waits until the consumer has made room, so no stage runs more
//! than its channel capacity ([`DEFAULT_CAPACITY`] unless configured through
//! [`PushConfig`]) ahead of the stage reading it.
//!
//! # Cancellation
//!
//! Dropping an `Iter` (or calling [`Iter::cancel`]) stops its worker, and
//! the worker drops whatever it was reading, so the stop travels all the
//! way upstream. Short-circuiting consumers such as `first` or `take` do
//! this automatically, even over an infinite source:
//!
//! ```rust
//! use eddy::push;
//!
//! # tokio_test::block_on(async {
//! let first_big = push::repeat(7).select(|x| x * 10).first().await;
//! assert_eq!(first_big, Some(70));
//! // The `repeat` and `select` workers have been told to stop.
//! # });
//! ```
//!
//! # Faults
//!
//! A panic in a worker (including one in a user closure) is surfaced as a
//! [`PushError`] by [`Iter::try_next`] and [`Iter::try_to_vec`]. Everything
//! else logs it and treats it as the end of the sequence.

mod bind;
mod combinators;
pub mod config;
pub mod error;
mod iter;
mod sources;
mod terminal;
mod worker;

pub use bind::{empty, ret, unit};
pub use config::{PushConfig, DEFAULT_CAPACITY};
pub use error::PushError;
pub use iter::Iter;
pub use sources::{from_fn, from_iter, from_map, from_slice, from_vec, of, range, repeat};

#[cfg(test)]
mod tests;
