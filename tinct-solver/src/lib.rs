//! # Tinct
//! The library side of the `tinct-solver` binary; it re-exports the solver from [`tinct_core`].
//!
//! ```rust
//! # use tinct_solver::solve;
//! # use tinct_solver::ColouringProblem;
//! # use tinct_solver::termination::Indefinite;
//! let mut square = ColouringProblem::default();
//! square.set_colour_count(2);
//! square.add_constraint(1, 2);
//! square.add_constraint(2, 3);
//! square.add_constraint(3, 4);
//! square.add_constraint(4, 1);
//!
//! let result = solve(&square, &mut Indefinite);
//! let solution = result.solution().expect("a 4-cycle is bipartite");
//! assert_eq!(solution.colour_of(1), solution.colour_of(3));
//! ```
pub use tinct_core::*;
