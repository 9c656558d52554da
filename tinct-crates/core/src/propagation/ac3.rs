use std::collections::VecDeque;

use log::trace;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::create_statistics_struct;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::engine::VariableId;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The directed arc `(xi, xj)`: the domain of `xi` has to be checked against the domain of `xj`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ConstraintArc {
    pub(crate) xi: VariableId,
    pub(crate) xj: VariableId,
}

create_statistics_struct!(
    /// Counters of the work done by [`Ac3Propagator`].
    Ac3Statistics {
        /// The number of arcs which were revised.
        num_revisions: u64,
        /// The number of values which were removed from a domain.
        num_removals: u64,
    }
);

/// Enforces arc consistency on the "different colour" constraints with the AC-3 algorithm.
///
/// For an inequality a value `x` of `xi` is supported by `xj` as long as `xj` can take any value
/// other than `x`; hence `x` loses its support exactly when the domain of `xj` is `{x}`. A revision
/// therefore removes at most one value.
///
/// The work queue is kept between calls to reuse its allocation; it is always empty when a call
/// returns.
#[derive(Clone, Debug, Default)]
pub(crate) struct Ac3Propagator {
    queue: VecDeque<ConstraintArc>,
    statistics: Ac3Statistics,
}

impl Ac3Propagator {
    /// Revises every arc of the graph.
    pub(crate) fn propagate_all(
        &mut self,
        graph: &ConstraintGraph,
        store: &mut DomainStore,
    ) -> PropagationStatus {
        let arcs = graph.arcs().map(|(xi, xj)| ConstraintArc { xi, xj });
        self.propagate(graph, store, arcs)
    }

    /// Revises the arcs pointing from the neighbours of `assigned` towards it, and whatever those
    /// revisions make necessary.
    pub(crate) fn propagate_assignment(
        &mut self,
        graph: &ConstraintGraph,
        store: &mut DomainStore,
        assigned: VariableId,
    ) -> PropagationStatus {
        let arcs = graph
            .neighbours(assigned)
            .iter()
            .map(|&neighbour| ConstraintArc {
                xi: neighbour,
                xj: assigned,
            });
        self.propagate(graph, store, arcs)
    }

    /// Revises `arcs` until the queue drains or a domain becomes empty.
    ///
    /// Every removal goes through the store, so the caller can undo the whole call with the
    /// checkpoint it took beforehand, also when it fails half-way.
    pub(crate) fn propagate(
        &mut self,
        graph: &ConstraintGraph,
        store: &mut DomainStore,
        arcs: impl IntoIterator<Item = ConstraintArc>,
    ) -> PropagationStatus {
        self.queue.clear();
        self.queue.extend(arcs);

        while let Some(arc) = self.queue.pop_front() {
            let revised = match self.revise(store, arc) {
                Ok(revised) => revised,
                Err(empty_domain) => {
                    trace!("Domain of {} was emptied by {}", arc.xi, arc.xj);
                    self.queue.clear();
                    return Err(empty_domain);
                }
            };

            if revised {
                self.queue.extend(
                    graph
                        .neighbours(arc.xi)
                        .iter()
                        .filter(|&&xk| xk != arc.xj)
                        .map(|&xk| ConstraintArc { xi: xk, xj: arc.xi }),
                );
            }
        }

        Ok(())
    }

    /// Removes the values of `arc.xi` without support in `arc.xj`; returns whether anything was
    /// removed.
    fn revise(&mut self, store: &mut DomainStore, arc: ConstraintArc) -> Result<bool, EmptyDomain> {
        self.statistics.num_revisions += 1;

        let Some(value) = store.fixed_value(arc.xj) else {
            return Ok(false);
        };

        let removed = store.remove_value(arc.xi, value)?;
        if removed {
            self.statistics.num_removals += 1;
        }
        Ok(removed)
    }

    pub(crate) fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }

    #[cfg(test)]
    pub(crate) fn statistics(&self) -> Ac3Statistics {
        self.statistics
    }
}
