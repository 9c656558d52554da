mod outputs;
mod problem;
pub(crate) mod solver;

pub use problem::ColouringProblem;
pub use problem::ProblemError;
pub use solver::solve;
pub use solver::Solver;

pub mod results {
    //! The outcomes of solving with the [`Solver`].
    //!
    //! A [`SatisfactionResult`] is either a [`Solution`], a proof of infeasibility (with the
    //! [`InfeasibilityReason`]) or unknown when the search was stopped early.
    pub use crate::api::outputs::InfeasibilityReason;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::checker;
    pub use crate::basic_types::CheckerResult;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Conditions which tell the [`Solver`] to give up before it reaches a verdict.
    //!
    //! The [`TerminationCondition`] is polled before every decision. The most common one is the
    //! [`TimeBudget`]; conditions can be combined with a [`Combinator`].
    pub use crate::engine::termination::Combinator;
    pub use crate::engine::termination::DecisionBudget;
    pub use crate::engine::termination::Indefinite;
    pub use crate::engine::termination::TerminationCondition;
    pub use crate::engine::termination::TimeBudget;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! The vertex, colour and variable types of the [`Solver`].
    pub use crate::basic_types::Colour;
    pub use crate::basic_types::Vertex;
    pub use crate::engine::VariableId;
    #[cfg(doc)]
    use crate::Solver;
}
