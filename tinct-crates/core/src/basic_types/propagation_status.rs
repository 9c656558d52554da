use crate::engine::VariableId;

/// Signals that a removal left a domain without any value.
///
/// This is an ordinary outcome during search: the current branch is infeasible and the caller
/// unwinds it through the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain;

/// The result of running the propagator: either the domains are arc consistent, or some domain was
/// emptied.
pub(crate) type PropagationStatus = Result<(), EmptyDomain>;

/// The reason a tentative assignment was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Inconsistency {
    /// Propagation emptied the domain of some variable.
    EmptyDomain,
    /// An already assigned neighbour holds the same colour.
    AssignedNeighbour(VariableId),
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
