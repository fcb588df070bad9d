//! Prelude module for convenient imports.
//!
//! Re-exports the traits, the common wrapper types and every source
//! constructor of the pull engine.
//!
//! # Example
//!
//! ```rust
//! use eddy::seq::prelude::*;
//!
//! let total = range(1, 5).select(|x| x * 10).fold(0, |acc, x| acc + x);
//! assert_eq!(total, 100);
//! ```

// Traits
pub use crate::seq::ext::SeqExt;
pub use crate::seq::trait_def::Seq;

// Wrapper Types
pub use crate::seq::boxed::BoxedSeq;
pub use crate::seq::shared::Shared;

// Combinator Types (for advanced use, usually `impl Seq` suffices)
pub use crate::seq::combinators::{Append, Bind, Empty, FromFn, Take, TakeWhile, Unit};

// Constructors
pub use crate::seq::sources::{
    empty, from_fn, from_iter, from_map, from_slice, from_vec, of, range, repeat, ret, unit,
};
