use std::collections::BTreeMap;
use std::collections::BTreeSet;

use super::Colour;
use super::Vertex;
use crate::ColouringProblem;

/// A colouring which assigns exactly one colour to every vertex of a problem.
///
/// Vertices are kept in ascending order, so iterating a solution is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    colours: BTreeMap<Vertex, Colour>,
}

impl Solution {
    /// Returns the colour assigned to `vertex`, if it is part of the solution.
    pub fn colour_of(&self, vertex: Vertex) -> Option<Colour> {
        self.colours.get(&vertex).copied()
    }

    /// Iterates over `(vertex, colour)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Colour)> + '_ {
        self.colours
            .iter()
            .map(|(&vertex, &colour)| (vertex, colour))
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Returns whether this is a proper colouring of `problem`; see [`checker`] for the details.
    pub fn is_proper_for(&self, problem: &ColouringProblem) -> bool {
        checker(problem, self) == CheckerResult::Ok
    }

    /// The number of distinct colours used by the solution.
    pub fn num_colours_used(&self) -> usize {
        self.colours.values().collect::<BTreeSet<_>>().len()
    }
}

impl FromIterator<(Vertex, Colour)> for Solution {
    fn from_iter<I: IntoIterator<Item = (Vertex, Colour)>>(iter: I) -> Self {
        Solution {
            colours: iter.into_iter().collect(),
        }
    }
}

/// The outcome of [`checker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckerResult {
    /// The solution is a proper colouring of the problem.
    Ok,
    /// The vertex has no colour in the solution.
    VertexNotColoured(Vertex),
    /// The vertex uses a colour outside of `1..=k` (or the problem declares no colours at all).
    ColourOutOfRange { vertex: Vertex, colour: Colour },
    /// Both endpoints of the constraint share a colour.
    ConflictingEdge(Vertex, Vertex),
}

/// Verifies that `solution` is a proper colouring of `problem`.
pub fn checker(problem: &ColouringProblem, solution: &Solution) -> CheckerResult {
    for vertex in problem.vertices() {
        let Some(colour) = solution.colour_of(vertex) else {
            return CheckerResult::VertexNotColoured(vertex);
        };

        let in_range = problem
            .colour_count()
            .is_some_and(|colour_count| colour >= 1 && i64::from(colour) <= colour_count);
        if !in_range {
            return CheckerResult::ColourOutOfRange { vertex, colour };
        }
    }

    problem
        .constraints()
        .find(|&(u, v)| solution.colour_of(u) == solution.colour_of(v))
        .map_or(CheckerResult::Ok, |(u, v)| CheckerResult::ConflictingEdge(u, v))
}
