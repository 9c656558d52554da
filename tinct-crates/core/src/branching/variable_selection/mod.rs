mod minimum_remaining_values;

pub use minimum_remaining_values::MinimumRemainingValues;

use super::SelectionContext;
use crate::engine::VariableId;

/// Chooses the variable which the search assigns next.
pub trait VariableSelector {
    /// Returns an unassigned variable, or [`None`] when every variable is assigned.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId>;
}
