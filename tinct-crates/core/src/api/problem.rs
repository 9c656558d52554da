use std::collections::BTreeSet;

use thiserror::Error;

use crate::basic_types::Vertex;

/// A graph colouring problem: a number of colours and a set of "different colour" constraints
/// between pairs of vertices.
///
/// The problem is built up incrementally (typically by a parser) and is only validated when it is
/// handed to a [`Solver`](crate::Solver). This means that, for example, a self-constraint can be
/// recorded here and is reported as [`ProblemError::SelfConstraint`] later on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColouringProblem {
    colour_count: Option<i64>,
    vertices: BTreeSet<Vertex>,
    /// Normalised so that the smaller label comes first.
    constraints: BTreeSet<(Vertex, Vertex)>,
    /// The first constraint between a vertex and itself, if any.
    self_constraint: Option<Vertex>,
}

impl ColouringProblem {
    /// Sets the number of colours; the last call wins.
    pub fn set_colour_count(&mut self, colour_count: i64) {
        self.colour_count = Some(colour_count);
    }

    /// Adds a vertex which does not need to take part in any constraint.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        let _ = self.vertices.insert(vertex);
    }

    /// Requires `u` and `v` to receive different colours.
    ///
    /// Both endpoints become vertices of the problem. Adding the same pair twice (in either
    /// orientation) has no further effect.
    pub fn add_constraint(&mut self, u: Vertex, v: Vertex) {
        if u == v {
            let _ = self.self_constraint.get_or_insert(u);
            self.add_vertex(u);
            return;
        }

        self.add_vertex(u);
        self.add_vertex(v);
        let _ = self.constraints.insert((u.min(v), u.max(v)));
    }

    pub fn colour_count(&self) -> Option<i64> {
        self.colour_count
    }

    /// Iterates over the vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Iterates over the constraints as `(smaller, larger)` pairs, in ascending order.
    pub fn constraints(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.constraints.iter().copied()
    }

    pub fn self_constraint(&self) -> Option<Vertex> {
        self.self_constraint
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// The ways in which a [`ColouringProblem`] can be malformed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ProblemError {
    #[error("the number of colours was not specified")]
    MissingColourCount,
    #[error("the number of colours must be at least 1, got {0}")]
    NonPositiveColourCount(i64),
    #[error("vertex {0} is constrained to differ from itself")]
    SelfConstraint(Vertex),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_are_normalised_and_deduplicated() {
        let mut problem = ColouringProblem::default();
        problem.add_constraint(3, 1);
        problem.add_constraint(1, 3);

        assert_eq!(problem.constraints().collect::<Vec<_>>(), vec![(1, 3)]);
        assert_eq!(problem.vertices().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn first_self_constraint_is_remembered() {
        let mut problem = ColouringProblem::default();
        problem.add_constraint(1, 2);
        problem.add_constraint(4, 4);
        problem.add_constraint(2, 2);

        assert_eq!(problem.self_constraint(), Some(4));
        assert_eq!(problem.num_constraints(), 1);
        assert_eq!(problem.num_vertices(), 3);
    }

    #[test]
    fn last_colour_count_wins() {
        let mut problem = ColouringProblem::default();
        assert_eq!(problem.colour_count(), None);

        problem.set_colour_count(2);
        problem.set_colour_count(5);

        assert_eq!(problem.colour_count(), Some(5));
    }
}
