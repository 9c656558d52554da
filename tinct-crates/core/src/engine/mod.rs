pub(crate) mod assignment;
pub(crate) mod constraint_graph;
pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod domains;
pub(crate) mod solver_statistics;
pub(crate) mod termination;
mod variable_id;

pub(crate) use assignment::Assignment;
pub(crate) use constraint_graph::ConstraintGraph;
pub(crate) use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub(crate) use constraint_satisfaction_solver::SearchOutcome;
pub(crate) use domains::DomainStore;
pub use variable_id::VariableId;
