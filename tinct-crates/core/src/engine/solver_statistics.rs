use crate::create_statistics_struct;

create_statistics_struct!(
    /// Counters of the search performed by the
    /// [`ConstraintSatisfactionSolver`](super::ConstraintSatisfactionSolver).
    SolverStatistics {
        /// The number of values which were tried for a variable.
        num_decisions: u64,
        /// The number of variables for which every value was tried without success.
        num_backtracks: u64,
        /// The number of times an assigned neighbour held the tried value after propagation
        /// succeeded.
        num_neighbour_conflicts: u64,
        /// The time spent searching, in milliseconds.
        time_spent_in_solver: u64,
    }
);
