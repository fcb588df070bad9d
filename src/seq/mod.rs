//! The pull engine: lazy sequences driven on the consumer's call stack.
//!
//! A sequence does no work until a consumer calls [`Seq::next`]. Each call
//! descends through the combinator wrappers, each of which pulls its
//! upstream as needed, bottoming out at a source. There is no concurrency,
//! no blocking and no hidden shared state.
//!
//! # Primitives
//!
//! Two operators carry the whole vocabulary:
//!
//! - [`unit`] injects one value as a sequence.
//! - [`SeqExt::bind`] maps each element to a sub-sequence and concatenates.
//!
//! `select`, `filter`, `skip`, `skip_while` and their indexed variants are
//! binds over `Unit`. `take`, `take_while` and `append` gate their upstream
//! directly since they must stop pulling it.
//!
//! # Zero-Cost by Default
//!
//! ```rust
//! use eddy::seq::prelude::*;
//!
//! // No allocation: the pipeline is a nest of concrete state objects.
//! let xs = range(1, 10)
//!     .filter(|x| x % 2 == 0)
//!     .take(3);
//! assert_eq!(xs.to_vec(), vec![2, 4, 6]);
//! ```
//!
//! # When to Use Boxing
//!
//! A bind closure must return one concrete type. When branches build
//! different sequences, box them:
//!
//! ```rust
//! use eddy::seq::prelude::*;
//!
//! fn expand(n: i64) -> BoxedSeq<'static, i64> {
//!     match n {
//!         0 => empty().boxed(),
//!         1 => unit(1).boxed(),
//!         n => range(0, n).boxed(),
//!     }
//! }
//!
//! assert_eq!(of(vec![0, 1, 3]).bind(expand).to_vec(), vec![1, 0, 1, 2]);
//! ```
//!
//! # Single Pass
//!
//! Sequences are stateful and never rewind. Lend one with `&mut` (or share
//! it with [`SeqExt::shared`]) and every consumer drains the same cursor.

pub mod boxed;
pub mod combinators;
pub mod ext;
pub mod iter;
pub mod prelude;
pub mod shared;
pub mod sources;
mod trait_def;

// Re-export core trait
pub use trait_def::Seq;

// Re-export extension trait
pub use ext::SeqExt;

// Re-export wrapper types
pub use boxed::BoxedSeq;
pub use iter::SeqIter;
pub use shared::Shared;

// Re-export all combinator types
pub use combinators::{Append, Bind, Empty, FromFn, Take, TakeWhile, Unit};

// Re-export constructors
pub use sources::{
    empty, from_fn, from_iter, from_map, from_slice, from_vec, of, range, repeat, ret, unit,
    FromIter, Range, Repeat,
};

#[cfg(test)]
mod tests;
