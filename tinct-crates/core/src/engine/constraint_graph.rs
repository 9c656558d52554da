use fnv::FnvHashMap;

use super::VariableId;
use crate::basic_types::Vertex;
use crate::containers::KeyedVec;
use crate::ColouringProblem;

/// The vertices of a [`ColouringProblem`] as dense variables, together with their adjacency.
///
/// Variables are numbered in ascending order of their labels and every adjacency list is sorted,
/// so iterating the graph is deterministic and independent of the order in which the constraints
/// were stated.
#[derive(Clone, Debug, Default)]
pub(crate) struct ConstraintGraph {
    labels: KeyedVec<VariableId, Vertex>,
    adjacency: KeyedVec<VariableId, Vec<VariableId>>,
    num_edges: usize,
}

impl ConstraintGraph {
    /// Builds the graph of `problem`, ignoring any self-constraint.
    pub(crate) fn from_problem(problem: &ColouringProblem) -> ConstraintGraph {
        let mut labels = KeyedVec::default();
        let mut ids: FnvHashMap<Vertex, VariableId> = FnvHashMap::default();
        for vertex in problem.vertices() {
            let variable = labels.push(vertex);
            let _ = ids.insert(vertex, variable);
        }

        let mut adjacency: KeyedVec<VariableId, Vec<VariableId>> =
            KeyedVec::filled(labels.len(), Vec::new());
        let mut num_edges = 0;
        for (u, v) in problem.constraints() {
            let (u, v) = (ids[&u], ids[&v]);
            adjacency[u].push(v);
            adjacency[v].push(u);
            num_edges += 1;
        }

        for neighbours in adjacency.iter_mut() {
            neighbours.sort_unstable();
        }

        ConstraintGraph {
            labels,
            adjacency,
            num_edges,
        }
    }

    /// Iterates over the variables in ascending order.
    pub(crate) fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.labels.keys()
    }

    pub(crate) fn num_variables(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// The neighbours of `variable` in ascending order.
    pub(crate) fn neighbours(&self, variable: VariableId) -> &[VariableId] {
        &self.adjacency[variable]
    }

    pub(crate) fn label(&self, variable: VariableId) -> Vertex {
        self.labels[variable]
    }

    /// Both directed arcs of every edge.
    pub(crate) fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.adjacency
            .iter_with_keys()
            .flat_map(|(xi, neighbours)| neighbours.iter().map(move |&xj| (xi, xj)))
    }
}
