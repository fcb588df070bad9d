//! Small state machines shared by the pull and push engines.
//!
//! Both engines expose the same combinator vocabulary. The bookkeeping that
//! decides *whether* an element passes (how many are left to take, how many
//! remain to skip, whether a while-predicate has failed yet, which index the
//! next outer element gets) lives here once, so the two engines cannot drift
//! apart in their observable semantics.

/// Position counter for the `*_with_index` variants.
///
/// Advances once per *outer* element consumed, never per produced element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    next: usize,
}

impl Counter {
    /// A counter starting at index 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current index and advance.
    pub fn tick(&mut self) -> usize {
        let i = self.next;
        self.next += 1;
        i
    }
}

/// Budget for `take`: admits at most `n` pulls.
///
/// A non-positive budget is exhausted from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    remaining: u64,
}

impl Budget {
    /// A budget of `n` pulls; negative counts behave as zero.
    pub fn new(n: i64) -> Self {
        Self {
            remaining: u64::try_from(n).unwrap_or(0),
        }
    }

    /// Spend one unit. Returns `false` once the budget is used up.
    pub fn spend(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// True when no pulls remain.
    pub fn is_spent(&self) -> bool {
        self.remaining == 0
    }
}

/// Countdown for `skip`: suppresses the first `n` elements.
///
/// A non-positive count suppresses nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    /// Suppress the first `n` elements; negative counts behave as zero.
    pub fn new(n: i64) -> Self {
        Self {
            remaining: u64::try_from(n).unwrap_or(0),
        }
    }

    /// Returns `true` if the current element should be emitted.
    pub fn pass(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Gate for `take_while`: open until the predicate first fails, closed forever after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhileGate {
    open: bool,
}

impl Default for WhileGate {
    fn default() -> Self {
        Self { open: true }
    }
}

impl WhileGate {
    /// An open gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one predicate result. Returns `true` if the element is admitted.
    pub fn admit(&mut self, holds: bool) -> bool {
        self.open = self.open && holds;
        self.open
    }

    /// True once the gate has closed.
    pub fn is_closed(&self) -> bool {
        !self.open
    }
}

/// Gate for `skip_while`: suppresses until the predicate first fails, then passes everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipGate {
    passing: bool,
}

impl SkipGate {
    /// A gate that is still suppressing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the element should be emitted.
    ///
    /// `holds` is only consulted while the gate is still suppressing; pass
    /// a closure so the predicate is not evaluated afterwards.
    pub fn pass(&mut self, holds: impl FnOnce() -> bool) -> bool {
        if !self.passing && !holds() {
            self.passing = true;
        }
        self.passing
    }
}
