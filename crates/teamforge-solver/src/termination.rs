//! Move budget termination.

/// Caps the number of node expansions in one local search run.
///
/// Every attempted expansion consumes one unit, including those refused
/// after the budget ran out. The budget belongs to a single run and is
/// never shared between runs.
///
/// # Example
///
/// ```
/// use teamforge_solver::MoveBudget;
///
/// let mut budget = MoveBudget::new(2);
/// assert!(budget.try_consume());
/// assert!(budget.try_consume());
/// assert!(!budget.try_consume());
/// assert!(budget.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct MoveBudget {
    limit: u64,
    spent: u64,
}

impl MoveBudget {
    pub fn new(limit: u64) -> Self {
        Self { limit, spent: 0 }
    }

    /// Consumes one unit. Returns `false` once the limit is exceeded.
    pub fn try_consume(&mut self) -> bool {
        self.spent += 1;
        self.spent <= self.limit
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Units consumed, counting refused attempts.
    pub fn spent(&self) -> u64 {
        self.spent
    }

    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.spent)
    }

    pub fn is_exhausted(&self) -> bool {
        self.spent >= self.limit
    }
}
