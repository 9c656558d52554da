//! Conditions which the search polls between decisions to find out whether it should give up.
//!
//! When a condition fires the search unwinds to the root and the solver reports
//! [`SatisfactionResult::Unknown`](crate::results::SatisfactionResult::Unknown): neither a colouring
//! nor a proof that none exists was found in time.

pub(crate) mod combinator;
pub(crate) mod decision_budget;
pub(crate) mod indefinite;
pub(crate) mod time_budget;

pub use combinator::Combinator;
pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// Decides when the solver should stop searching, even if it has not reached a verdict.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the search tries a value for a variable.
    fn decision_has_been_made(&mut self) {}
}

/// `None` never stops the search; this makes optional limits from the command line easy to pass.
impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(condition) => condition.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.decision_has_been_made()
        }
    }
}
