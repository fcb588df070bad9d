//! # Eddy
//!
//! > *"Nothing moves until something pulls"*
//!
//! A lazy sequence algebra for Rust, built from two primitives: `unit`
//! (one value as a sequence) and `bind` (map each element to a sequence and
//! concatenate). Every query operator is derived from those two.
//!
//! ## Two Engines
//!
//! - [`seq`] **pulls**: a sequence is a nest of state objects driven on the
//!   consumer's call stack. No threads, no allocation unless you box.
//! - [`push`] **pushes** (feature `async`, on by default): every stage is a
//!   tokio worker feeding a bounded channel. Same vocabulary, `async`
//!   terminals, cancellation by drop.
//!
//! ## Quick Example
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! // Pairs (x, y) with x < y, lazily, stopping after three.
//! let pairs = range(1, 100)
//!     .bind(|x| range(x + 1, 100).select(move |y| (x, y)))
//!     .filter(|(x, y)| (x + y) % 5 == 0)
//!     .take(3);
//!
//! assert_eq!(pairs.to_vec(), vec![(1, 4), (1, 9), (1, 14)]);
//! ```
//!
//! The same query on the push engine:
//!
//! ```rust
//! use eddy::push;
//!
//! # tokio_test::block_on(async {
//! let pairs = push::range(1, 100)
//!     .bind(|x| push::range(x + 1, 100).select(move |y| (x, y)))
//!     .filter(|(x, y)| (x + y) % 5 == 0)
//!     .take(3);
//!
//! assert_eq!(pairs.to_vec().await, vec![(1, 4), (1, 9), (1, 14)]);
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod func;
pub mod gate;
pub mod maybe;
#[cfg(feature = "async")]
pub mod push;
pub mod seq;
pub mod testing;

// Re-exports
pub use maybe::Maybe;
pub use seq::{BoxedSeq, Seq, SeqExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::func::{constant, identity};
    pub use crate::maybe::Maybe;
    pub use crate::seq::prelude::*;
}
