use log::debug;
use log::info;

use super::outputs::InfeasibilityReason;
use super::outputs::SatisfactionResult;
use super::problem::ColouringProblem;
use super::problem::ProblemError;
use crate::basic_types::checker;
use crate::basic_types::CheckerResult;
use crate::basic_types::Colour;
use crate::branching::InOrderTieBreaker;
use crate::branching::LeastConstrainingValue;
use crate::branching::MinimumRemainingValues;
use crate::engine::termination::TerminationCondition;
use crate::engine::ConstraintGraph;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::SearchOutcome;
use crate::engine::VariableId;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::tinct_assert_advanced;

type DefaultSolver = ConstraintSatisfactionSolver<
    MinimumRemainingValues<InOrderTieBreaker<VariableId, usize>>,
    LeastConstrainingValue,
>;

/// Solves a [`ColouringProblem`] with arc consistency and a depth-first search which assigns the
/// variable with the fewest remaining colours first and tries its least constraining colour first.
///
/// ```rust
/// # use tinct_core::ColouringProblem;
/// # use tinct_core::Solver;
/// # use tinct_core::results::SatisfactionResult;
/// # use tinct_core::termination::Indefinite;
/// let mut problem = ColouringProblem::default();
/// problem.set_colour_count(2);
/// problem.add_constraint(1, 2);
/// problem.add_constraint(2, 3);
///
/// let mut solver = Solver::new(&problem).expect("the problem is valid");
/// let SatisfactionResult::Satisfiable(solution) = solver.satisfy(&mut Indefinite) else {
///     panic!("a path is 2-colourable");
/// };
///
/// assert_eq!(solution.colour_of(1), Some(1));
/// assert_eq!(solution.colour_of(2), Some(2));
/// assert_eq!(solution.colour_of(3), Some(1));
/// ```
#[derive(Debug)]
pub struct Solver {
    problem: ColouringProblem,
    satisfaction_solver: DefaultSolver,
}

impl Solver {
    /// Validates `problem` and makes it arc consistent.
    ///
    /// Returns the reason when the problem is malformed or already infeasible before any search;
    /// the checks are done in this order:
    /// 1. the number of colours is missing;
    /// 2. the number of colours is smaller than one;
    /// 3. a vertex is constrained to differ from itself;
    /// 4. there is a single colour and at least one constraint;
    /// 5. arc consistency empties a domain.
    pub fn new(problem: &ColouringProblem) -> Result<Solver, InfeasibilityReason> {
        let colour_count = Self::validate(problem)?;

        let graph = ConstraintGraph::from_problem(problem);
        info!(
            "Colouring {} vertices and {} constraints with {colour_count} colours",
            graph.num_variables(),
            graph.num_edges()
        );

        let mut satisfaction_solver = ConstraintSatisfactionSolver::new(
            graph,
            colour_count,
            MinimumRemainingValues::new(),
            LeastConstrainingValue,
        );
        if satisfaction_solver.propagate_root().is_err() {
            debug!("Root propagation emptied a domain");
            return Err(InfeasibilityReason::RootInconsistency);
        }

        Ok(Solver {
            problem: problem.clone(),
            satisfaction_solver,
        })
    }

    fn validate(problem: &ColouringProblem) -> Result<Colour, InfeasibilityReason> {
        let colour_count = problem
            .colour_count()
            .ok_or(ProblemError::MissingColourCount)?;
        if colour_count < 1 {
            return Err(ProblemError::NonPositiveColourCount(colour_count).into());
        }

        if let Some(vertex) = problem.self_constraint() {
            return Err(ProblemError::SelfConstraint(vertex).into());
        }

        if colour_count == 1 && problem.num_constraints() > 0 {
            return Err(InfeasibilityReason::SingleColour(problem.num_constraints()));
        }

        Ok(Self::effective_colour_count(colour_count, problem.num_vertices()))
    }

    /// A colouring never needs more colours than there are vertices, so the domains only hold
    /// the first `min(colour_count, num_vertices)` colours.
    ///
    /// Values are tried smallest first and a colour beyond the vertex count is never picked, so
    /// this does not change the outcome or the colouring that is found.
    fn effective_colour_count(colour_count: i64, num_vertices: usize) -> Colour {
        let num_vertices = Colour::try_from(num_vertices.max(1)).unwrap_or(Colour::MAX);
        let effective = Colour::try_from(colour_count).map_or(num_vertices, |colour_count| {
            colour_count.min(num_vertices)
        });
        if i64::from(effective) < colour_count {
            debug!("Using {effective} of the {colour_count} colours, one per vertex");
        }
        effective
    }

    /// Searches for a colouring until one is found, none can exist, or `termination` fires.
    ///
    /// The solver returns to the root afterwards, so calling this again gives the same result.
    pub fn satisfy(&mut self, termination: &mut impl TerminationCondition) -> SatisfactionResult {
        match self.satisfaction_solver.search(termination) {
            SearchOutcome::Solved(solution) => {
                tinct_assert_advanced!(
                    checker(&self.problem, &solution) == CheckerResult::Ok,
                    "The search produced an improper colouring"
                );
                info!("Found a colouring using {} colours", solution.num_colours_used());
                SatisfactionResult::Satisfiable(solution)
            }
            SearchOutcome::Exhausted => {
                info!("The search space was exhausted");
                SatisfactionResult::Unsatisfiable(InfeasibilityReason::Exhausted)
            }
            SearchOutcome::Interrupted => SatisfactionResult::Unknown,
        }
    }

    pub fn problem(&self) -> &ColouringProblem {
        &self.problem
    }

    /// Logs the statistics of the solver, followed by the closing line if one is configured.
    pub fn log_statistics(&self) {
        log_statistic("num_variables", self.satisfaction_solver.num_variables());
        log_statistic("num_constraints", self.satisfaction_solver.num_edges());
        self.satisfaction_solver.log_statistics();
        log_statistic_postfix();
    }
}

/// Solves `problem` in one go; failures before the search are reported as
/// [`SatisfactionResult::Unsatisfiable`].
pub fn solve(
    problem: &ColouringProblem,
    termination: &mut impl TerminationCondition,
) -> SatisfactionResult {
    match Solver::new(problem) {
        Ok(mut solver) => solver.satisfy(termination),
        Err(reason) => {
            info!("No colouring exists: {reason}");
            SatisfactionResult::Unsatisfiable(reason)
        }
    }
}
