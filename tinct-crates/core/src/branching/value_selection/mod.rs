mod least_constraining_value;

pub use least_constraining_value::LeastConstrainingValue;

use super::SelectionContext;
use crate::basic_types::Colour;
use crate::engine::VariableId;

/// Determines the order in which the colours of a variable are tried.
pub trait ValueSelector {
    /// Returns every value in the current domain of `variable`, in the order they should be tried.
    fn order_values(&mut self, context: &SelectionContext, variable: VariableId) -> Vec<Colour>;
}
