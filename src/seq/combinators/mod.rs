//! Concrete sequence types returned by the pull combinators.
//!
//! `Unit` and `Bind` are the primitives. `Take`, `TakeWhile` and `Append`
//! gate the upstream directly because they must stop pulling it, which a
//! bind over the outer source cannot express. Everything else in
//! [`SeqExt`](crate::seq::SeqExt) is built from `Bind` and `Unit` and
//! returned as `impl Seq`.

mod append;
mod bind;
mod from_fn;
mod take;
mod take_while;
mod unit;

pub use append::Append;
pub use bind::Bind;
pub use from_fn::FromFn;
pub use take::Take;
pub use take_while::TakeWhile;
pub use unit::{Empty, Unit};
