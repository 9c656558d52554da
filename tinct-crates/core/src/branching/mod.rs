//! Decides which variable the search assigns next and in which order its values are tried.
//!
//! The search asks a [`VariableSelector`] for the next unassigned variable and a
//! [`ValueSelector`] for the order of its remaining colours; both only see the state of the solver
//! through a [`SelectionContext`].
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

mod selection_context;

pub use selection_context::SelectionContext;
pub use tie_breaking::Direction;
pub use tie_breaking::InOrderTieBreaker;
pub use tie_breaking::TieBreaker;
pub use value_selection::LeastConstrainingValue;
pub use value_selection::ValueSelector;
pub use variable_selection::MinimumRemainingValues;
pub use variable_selection::VariableSelector;
