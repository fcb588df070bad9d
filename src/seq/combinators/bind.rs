//! Bind combinator - maps each element to a sub-sequence and concatenates them.

use crate::seq::trait_def::Seq;

/// Where the flattening loop currently stands.
#[derive(Debug)]
enum State<R> {
    /// No active inner sequence; the next step pulls from the outer source.
    NeedOuter,
    /// Forwarding elements of the inner sequence built from the last outer element.
    Draining(R),
    /// The outer source reported exhaustion. Terminal.
    Exhausted,
}

/// Bind (flatMap) combinator - the primitive every derived combinator reduces to.
///
/// Produces `f(a)` concatenated for every `a` of the outer sequence, in
/// order: all of `f(a0)`, then all of `f(a1)`, and so on.
///
/// The flattening is an explicit loop over [`State`], never a recursive
/// call. When `f` returns an empty sequence for millions of consecutive
/// outer elements (a filter rejecting almost everything), the stack depth
/// stays constant.
///
/// # Example
///
/// ```rust
/// use eddy::seq::prelude::*;
///
/// let xs = of(vec!['a', 'b', 'c']).bind(|x| of(vec![x, x]));
/// assert_eq!(xs.to_vec(), vec!['a', 'a', 'b', 'b', 'c', 'c']);
/// ```
pub struct Bind<S, F, R> {
    outer: S,
    f: F,
    state: State<R>,
}

impl<S, F, R> Bind<S, F, R> {
    pub(crate) fn new(outer: S, f: F) -> Self {
        Bind {
            outer,
            f,
            state: State::NeedOuter,
        }
    }
}

impl<S, F, R> std::fmt::Debug for Bind<S, F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::NeedOuter => "need-outer",
            State::Draining(_) => "draining",
            State::Exhausted => "exhausted",
        };
        f.debug_struct("Bind")
            .field("outer", &"<seq>")
            .field("f", &"<function>")
            .field("state", &state)
            .finish()
    }
}

impl<S, F, R> Seq for Bind<S, F, R>
where
    S: Seq,
    F: FnMut(S::Item) -> R,
    R: Seq,
{
    type Item = R::Item;

    fn next(&mut self) -> Option<R::Item> {
        loop {
            match &mut self.state {
                State::Exhausted => return None,
                State::Draining(inner) => {
                    if let Some(value) = inner.next() {
                        return Some(value);
                    }
                    self.state = State::NeedOuter;
                }
                State::NeedOuter => match self.outer.next() {
                    Some(a) => self.state = State::Draining((self.f)(a)),
                    None => {
                        self.state = State::Exhausted;
                        return None;
                    }
                },
            }
        }
    }
}
