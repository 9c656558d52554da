use crate::basic_types::Colour;
use crate::engine::Assignment;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::engine::VariableId;

/// A read-only view on the solver for the selectors.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    graph: &'a ConstraintGraph,
    store: &'a DomainStore,
    assignment: &'a Assignment,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        graph: &'a ConstraintGraph,
        store: &'a DomainStore,
        assignment: &'a Assignment,
    ) -> Self {
        SelectionContext {
            graph,
            store,
            assignment,
        }
    }

    /// Iterates over all variables in ascending order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + 'a {
        self.graph.variables()
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assignment.is_assigned(variable)
    }

    pub fn domain_size(&self, variable: VariableId) -> usize {
        self.store.size(variable)
    }

    pub fn contains(&self, variable: VariableId, value: Colour) -> bool {
        self.store.contains(variable, value)
    }

    /// Iterates over the current domain of `variable` in ascending order.
    pub fn iterate_domain(&self, variable: VariableId) -> impl Iterator<Item = Colour> + 'a {
        self.store.domain(variable).iter()
    }

    pub fn neighbours(&self, variable: VariableId) -> &'a [VariableId] {
        self.graph.neighbours(variable)
    }
}
