//! The depth-first search which extends a partial colouring one variable at a time, propagating
//! after every choice and undoing through the trail when a choice leads nowhere.
use std::time::Instant;

use log::debug;
use log::trace;
use log::warn;

use super::solver_statistics::SolverStatistics;
use super::termination::TerminationCondition;
use super::Assignment;
use super::ConstraintGraph;
use super::DomainStore;
use super::VariableId;
use crate::basic_types::Checkpoint;
use crate::basic_types::Colour;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Solution;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::propagation::Ac3Propagator;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::tinct_assert_moderate;
use crate::tinct_assert_simple;

/// How a call to [`ConstraintSatisfactionSolver::search`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// Every variable received a colour.
    Solved(Solution),
    /// Every branch was tried and undone; no colouring exists.
    Exhausted,
    /// The termination condition fired before a verdict was reached.
    Interrupted,
}

/// A variable on the search stack, with the values which have not been tried yet.
///
/// `checkpoint` is the trail position before any value of `variable` was tried; undoing to it
/// removes the effect of the value that is currently being explored.
#[derive(Debug)]
struct Frame {
    variable: VariableId,
    values: std::vec::IntoIter<Colour>,
    checkpoint: Checkpoint,
}

/// Searches for a colouring of a [`ConstraintGraph`] with the colours `1..=k`.
///
/// The search is a depth-first search over an explicit stack of [`Frame`]s rather than a
/// recursion, so its depth is not bounded by the call stack. At every level it:
/// 1. asks the variable selector for an unassigned variable;
/// 2. asks the value selector for the order of its remaining colours;
/// 3. for each colour, fixes the variable to it, propagates towards its neighbours and descends;
///    on failure everything recorded on the trail since the frame was pushed is undone.
///
/// Between two calls to [`ConstraintSatisfactionSolver::search`] the solver is back at the root:
/// the domains are those after the root propagation and nothing is assigned.
pub(crate) struct ConstraintSatisfactionSolver<VarSelector, ValSelector> {
    graph: ConstraintGraph,
    store: DomainStore,
    assignment: Assignment,
    propagator: Ac3Propagator,
    variable_selector: VarSelector,
    value_selector: ValSelector,
    frames: Vec<Frame>,
    counters: SolverStatistics,
}

impl<VarSelector, ValSelector> std::fmt::Debug
    for ConstraintSatisfactionSolver<VarSelector, ValSelector>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSatisfactionSolver")
            .field("graph", &self.graph)
            .field("store", &self.store)
            .field("assignment", &self.assignment)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl<VarSelector: VariableSelector, ValSelector: ValueSelector>
    ConstraintSatisfactionSolver<VarSelector, ValSelector>
{
    /// Creates a solver in which every variable of `graph` can take the colours
    /// `1..=colour_count`.
    pub(crate) fn new(
        graph: ConstraintGraph,
        colour_count: Colour,
        variable_selector: VarSelector,
        value_selector: ValSelector,
    ) -> Self {
        let store = DomainStore::new(graph.num_variables(), colour_count);
        let assignment = Assignment::new(graph.num_variables());

        ConstraintSatisfactionSolver {
            graph,
            store,
            assignment,
            propagator: Ac3Propagator::default(),
            variable_selector,
            value_selector,
            frames: Vec::new(),
            counters: SolverStatistics::default(),
        }
    }

    /// Makes every arc of the graph consistent before the search starts.
    ///
    /// A failure means that no colouring exists; the emptied domains are left as they are.
    pub(crate) fn propagate_root(&mut self) -> PropagationStatus {
        let status = self.propagator.propagate_all(&self.graph, &mut self.store);
        debug!("Root propagation removed {} values", self.store.num_removals());
        status
    }

    /// Runs the search until it finds a colouring, exhausts the search space, or `termination`
    /// fires.
    pub(crate) fn search(&mut self, termination: &mut impl TerminationCondition) -> SearchOutcome {
        tinct_assert_simple!(
            self.frames.is_empty() && self.assignment.num_assigned() == 0,
            "The search has to start at the root"
        );

        let start_time = Instant::now();
        let root = self.store.checkpoint();

        let outcome = self.explore(termination);

        // Drop everything the search did so that the next call starts from the root again.
        self.frames.clear();
        self.assignment.clear();
        self.store.undo_to(root);

        self.counters.time_spent_in_solver += start_time.elapsed().as_millis() as u64;
        debug!(
            "Search finished after {} decisions and {} backtracks",
            self.counters.num_decisions, self.counters.num_backtracks
        );

        outcome
    }

    fn explore(&mut self, termination: &mut impl TerminationCondition) -> SearchOutcome {
        if !self.push_next_frame() {
            return SearchOutcome::Solved(self.solution());
        }

        loop {
            let Some(frame) = self.frames.last_mut() else {
                return SearchOutcome::Exhausted;
            };
            let variable = frame.variable;
            let checkpoint = frame.checkpoint;

            let Some(value) = frame.values.next() else {
                // Every value of this variable failed, so the value chosen for the variable one
                // level up has to be retracted as well.
                let _ = self.frames.pop();
                self.counters.num_backtracks += 1;
                trace!("Backtracking from {variable}");

                if let Some(parent) = self.frames.last() {
                    let (parent_variable, parent_checkpoint) = (parent.variable, parent.checkpoint);
                    self.store.undo_to(parent_checkpoint);
                    self.assignment.unassign(parent_variable);
                }
                continue;
            };

            if termination.should_stop() {
                debug!("Search was interrupted by the termination condition");
                return SearchOutcome::Interrupted;
            }
            termination.decision_has_been_made();
            self.counters.num_decisions += 1;

            match self.try_value(variable, value) {
                Ok(()) => {
                    if !self.push_next_frame() {
                        tinct_assert_moderate!(self.assignment.is_complete());
                        return SearchOutcome::Solved(self.solution());
                    }
                }
                Err(inconsistency) => {
                    trace!("{variable} = {value} failed: {inconsistency:?}");
                    self.store.undo_to(checkpoint);
                    self.assignment.unassign(variable);
                }
            }
        }
    }

    /// Selects the next variable and pushes its frame; returns `false` when every variable is
    /// assigned.
    fn push_next_frame(&mut self) -> bool {
        let context = SelectionContext::new(&self.graph, &self.store, &self.assignment);
        let Some(variable) = self.variable_selector.select_variable(&context) else {
            return false;
        };
        let values = self.value_selector.order_values(&context, variable);

        self.frames.push(Frame {
            variable,
            values: values.into_iter(),
            checkpoint: self.store.checkpoint(),
        });
        true
    }

    /// Fixes `variable` to `value` and propagates the consequences.
    ///
    /// On failure the changes are left on the trail; the caller undoes them together with the
    /// assignment.
    fn try_value(&mut self, variable: VariableId, value: Colour) -> Result<(), Inconsistency> {
        self.assignment.assign(variable, value);

        let others = self
            .store
            .domain(variable)
            .iter()
            .filter(|&other| other != value)
            .collect::<Vec<_>>();
        for other in others {
            let _ = self.store.remove_value(variable, other)?;
        }

        self.propagator.propagate_assignment(&self.graph, &mut self.store, variable)?;

        // Propagation should rule this out; the check stays so that a gap in it cannot lead to
        // an improper colouring.
        if let Some(&neighbour) = self
            .graph
            .neighbours(variable)
            .iter()
            .find(|&&neighbour| self.assignment.value(neighbour) == Some(value))
        {
            self.counters.num_neighbour_conflicts += 1;
            warn!("{variable} = {value} conflicts with assigned neighbour {neighbour} after propagation");
            return Err(Inconsistency::AssignedNeighbour(neighbour));
        }

        Ok(())
    }

    fn solution(&self) -> Solution {
        self.assignment
            .iter()
            .map(|(variable, colour)| (self.graph.label(variable), colour))
            .collect()
    }

    pub(crate) fn num_variables(&self) -> usize {
        self.graph.num_variables()
    }

    pub(crate) fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    pub(crate) fn log_statistics(&self) {
        if should_log_statistics() {
            self.counters.log(StatisticLogger::default());
            self.propagator.log_statistics(StatisticLogger::new(["ac3"]));
        }
    }

    #[cfg(test)]
    pub(crate) fn statistics(&self) -> SolverStatistics {
        self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Vertex;
    use crate::branching::LeastConstrainingValue;
    use crate::branching::MinimumRemainingValues;
    use crate::engine::termination::DecisionBudget;
    use crate::engine::termination::Indefinite;
    use crate::ColouringProblem;

    fn solver(
        edges: &[(Vertex, Vertex)],
        colour_count: Colour,
    ) -> ConstraintSatisfactionSolver<
        MinimumRemainingValues<crate::branching::InOrderTieBreaker<VariableId, usize>>,
        LeastConstrainingValue,
    > {
        let mut problem = ColouringProblem::default();
        for &(u, v) in edges {
            problem.add_constraint(u, v);
        }
        ConstraintSatisfactionSolver::new(
            ConstraintGraph::from_problem(&problem),
            colour_count,
            MinimumRemainingValues::new(),
            LeastConstrainingValue,
        )
    }

    fn domains(solver: &ConstraintSatisfactionSolver<impl Sized, impl Sized>) -> Vec<Vec<Colour>> {
        solver
            .graph
            .variables()
            .map(|variable| solver.store.domain(variable).iter().collect())
            .collect()
    }

    #[test]
    fn triangle_with_three_colours_is_solved() {
        let mut solver = solver(&[(1, 2), (2, 3), (1, 3)], 3);
        assert_eq!(solver.propagate_root(), Ok(()));

        let SearchOutcome::Solved(solution) = solver.search(&mut Indefinite) else {
            panic!("expected a solution");
        };

        assert_eq!(
            solution.iter().collect::<Vec<_>>(),
            vec![(1, 1), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn triangle_with_two_colours_is_exhausted() {
        let mut solver = solver(&[(1, 2), (2, 3), (1, 3)], 2);
        assert_eq!(solver.propagate_root(), Ok(()));

        assert_eq!(solver.search(&mut Indefinite), SearchOutcome::Exhausted);
        // Both colours of the first variable fail during propagation.
        assert_eq!(solver.statistics().num_decisions, 2);
        assert_eq!(solver.statistics().num_backtracks, 1);
    }

    #[test]
    fn search_returns_to_the_root() {
        let mut solver = solver(&[(1, 2), (2, 3), (3, 4), (1, 4)], 2);
        assert_eq!(solver.propagate_root(), Ok(()));
        let root = domains(&solver);

        let outcome = solver.search(&mut Indefinite);

        assert!(matches!(outcome, SearchOutcome::Solved(_)));
        assert_eq!(domains(&solver), root);
        assert_eq!(solver.assignment.num_assigned(), 0);
        assert_eq!(solver.store.num_removals(), 0);
    }

    #[test]
    fn repeated_searches_give_the_same_solution() {
        let edges = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (1, 3)];
        let mut solver = solver(&edges, 3);
        assert_eq!(solver.propagate_root(), Ok(()));

        let first = solver.search(&mut Indefinite);
        let second = solver.search(&mut Indefinite);

        assert!(matches!(first, SearchOutcome::Solved(_)));
        assert_eq!(first, second);
    }

    #[test]
    fn exhausted_budget_interrupts_the_search() {
        let mut solver = solver(&[(1, 2), (2, 3)], 2);
        assert_eq!(solver.propagate_root(), Ok(()));

        let outcome = solver.search(&mut DecisionBudget::new(0));

        assert_eq!(outcome, SearchOutcome::Interrupted);
        assert_eq!(solver.assignment.num_assigned(), 0);
    }

    #[test]
    fn graph_without_variables_is_solved_immediately() {
        let mut solver = solver(&[], 1);

        let SearchOutcome::Solved(solution) = solver.search(&mut Indefinite) else {
            panic!("expected a solution");
        };

        assert!(solution.is_empty());
        assert_eq!(solver.statistics().num_decisions, 0);
    }

    #[test]
    fn odd_wheel_needs_four_colours() {
        // A hub adjacent to every vertex of a 5-cycle.
        let edges = [
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 1),
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
        ];

        let mut three = solver(&edges, 3);
        assert_eq!(three.propagate_root(), Ok(()));
        assert_eq!(three.search(&mut Indefinite), SearchOutcome::Exhausted);

        let mut four = solver(&edges, 4);
        assert_eq!(four.propagate_root(), Ok(()));
        assert!(matches!(
            four.search(&mut Indefinite),
            SearchOutcome::Solved(_)
        ));
    }
}
