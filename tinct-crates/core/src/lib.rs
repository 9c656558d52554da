//! # Tinct
//! Tinct is a constraint solver for graph colouring: given a graph and a number of colours `k`, it
//! assigns every vertex one of the colours `1..=k` such that adjacent vertices differ, or proves
//! that this is impossible.
//!
//! The solver is deterministic and meant to be inspectable. It combines
//! - arc consistency (AC-3) on the "different colour" constraints;
//! - a depth-first search which picks the variable with the minimum remaining values and tries its
//!   least constraining value first;
//! - a trail which records every domain change so that backtracking restores the exact state.
//!
//! # Example
//! ```rust
//! # use tinct_core::solve;
//! # use tinct_core::ColouringProblem;
//! # use tinct_core::results::InfeasibilityReason;
//! # use tinct_core::results::SatisfactionResult;
//! # use tinct_core::termination::Indefinite;
//! let mut triangle = ColouringProblem::default();
//! triangle.add_constraint(1, 2);
//! triangle.add_constraint(2, 3);
//! triangle.add_constraint(1, 3);
//!
//! triangle.set_colour_count(2);
//! assert_eq!(
//!     solve(&triangle, &mut Indefinite),
//!     SatisfactionResult::Unsatisfiable(InfeasibilityReason::Exhausted)
//! );
//!
//! triangle.set_colour_count(3);
//! let result = solve(&triangle, &mut Indefinite);
//! let solution = result.solution().expect("three colours suffice");
//! assert_eq!(solution.num_colours_used(), 3);
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub mod branching;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod propagation;
pub mod statistics;

mod api;

pub use api::*;
