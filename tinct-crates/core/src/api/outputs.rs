use thiserror::Error;

use super::problem::ProblemError;
use crate::basic_types::Solution;

/// The outcome of [`Solver::satisfy`](crate::Solver::satisfy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A proper colouring of every vertex.
    Satisfiable(Solution),
    /// No proper colouring exists, or the problem is malformed.
    Unsatisfiable(InfeasibilityReason),
    /// The termination condition fired before the solver reached a verdict.
    Unknown,
}

impl SatisfactionResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Why the solver concluded that a problem has no colouring.
///
/// Callers which only care about the verdict can treat all of these alike; the distinction is
/// there for logging and for tests.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InfeasibilityReason {
    #[error("invalid problem: {0}")]
    InvalidProblem(#[from] ProblemError),
    #[error("a single colour cannot satisfy {0} constraints")]
    SingleColour(usize),
    #[error("arc consistency at the root emptied a domain")]
    RootInconsistency,
    #[error("every branch of the search failed")]
    Exhausted,
}
