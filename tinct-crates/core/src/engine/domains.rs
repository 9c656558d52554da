//! The domain store: the candidate colours of every variable, together with the trail which
//! records every removal so that it can be undone on backtrack.
//!
//! Removing a value through [`DomainStore::remove_value`] is the only way to shrink a domain and
//! [`DomainStore::undo_to`] is the only way to grow one; the two together guarantee that undoing to
//! a checkpoint restores the store exactly as it was when the checkpoint was taken.

use bit_set::BitSet;

use super::VariableId;
use crate::basic_types::Checkpoint;
use crate::basic_types::Colour;
use crate::basic_types::EmptyDomain;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::tinct_assert_advanced;
use crate::tinct_assert_simple;

/// The set of colours which are still possible for a single variable.
#[derive(Clone, Debug)]
pub(crate) struct Domain {
    values: BitSet,
    /// Cached cardinality of `values`; the variable selector asks for it for every variable at
    /// every decision.
    size: usize,
}

impl Domain {
    /// Creates the domain `1..=colour_count`.
    fn full(colour_count: Colour) -> Domain {
        let mut values = BitSet::with_capacity(colour_count as usize + 1);
        for colour in 1..=colour_count {
            let _ = values.insert(colour as usize);
        }

        Domain {
            values,
            size: colour_count as usize,
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn contains(&self, colour: Colour) -> bool {
        self.values.contains(colour as usize)
    }

    /// Returns the only remaining value, if the domain has exactly one.
    pub(crate) fn fixed_value(&self) -> Option<Colour> {
        if self.size == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterates over the remaining values in ascending order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.values.iter().map(|value| value as Colour)
    }

    fn remove(&mut self, colour: Colour) -> bool {
        let removed = self.values.remove(colour as usize);
        if removed {
            self.size -= 1;
        }
        tinct_assert_advanced!(self.size == self.values.len());
        removed
    }

    fn insert(&mut self, colour: Colour) -> bool {
        let inserted = self.values.insert(colour as usize);
        if inserted {
            self.size += 1;
        }
        tinct_assert_advanced!(self.size == self.values.len());
        inserted
    }
}

/// A value which was removed from the domain of `variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Removal {
    pub(crate) variable: VariableId,
    pub(crate) value: Colour,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct DomainStore {
    domains: KeyedVec<VariableId, Domain>,
    trail: Trail<Removal>,
}

impl DomainStore {
    /// Creates a store in which each of the `num_variables` variables has the domain
    /// `1..=colour_count`.
    pub(crate) fn new(num_variables: usize, colour_count: Colour) -> DomainStore {
        DomainStore {
            domains: KeyedVec::from_fn(num_variables, |_| Domain::full(colour_count)),
            trail: Trail::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn num_variables(&self) -> usize {
        self.domains.len()
    }

    pub(crate) fn domain(&self, variable: VariableId) -> &Domain {
        &self.domains[variable]
    }

    pub(crate) fn size(&self, variable: VariableId) -> usize {
        self.domains[variable].size()
    }

    pub(crate) fn contains(&self, variable: VariableId, value: Colour) -> bool {
        self.domains[variable].contains(value)
    }

    pub(crate) fn fixed_value(&self, variable: VariableId) -> Option<Colour> {
        self.domains[variable].fixed_value()
    }

    /// Removes `value` from the domain of `variable` and records the removal on the trail.
    ///
    /// Returns whether the value was present. Removing the last value still records the removal
    /// (so that it is undone with the rest of the branch) and reports [`EmptyDomain`].
    pub(crate) fn remove_value(
        &mut self,
        variable: VariableId,
        value: Colour,
    ) -> Result<bool, EmptyDomain> {
        let domain = &mut self.domains[variable];
        if !domain.remove(value) {
            return Ok(false);
        }

        self.trail.record(Removal { variable, value });

        if domain.is_empty() {
            Err(EmptyDomain)
        } else {
            Ok(true)
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        self.trail.checkpoint()
    }

    /// Re-inserts every value removed after `checkpoint`, newest first.
    pub(crate) fn undo_to(&mut self, checkpoint: Checkpoint) {
        for Removal { variable, value } in self.trail.undo_to(checkpoint) {
            let restored = self.domains[variable].insert(value);
            tinct_assert_simple!(
                restored,
                "The value {value} was on the trail of {variable} but still in its domain"
            );
        }
    }

    /// The number of removals which are currently on the trail.
    pub(crate) fn num_removals(&self) -> usize {
        self.trail.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::StorageKey;

    fn values(store: &DomainStore, variable: VariableId) -> Vec<Colour> {
        store.domain(variable).iter().collect()
    }

    fn snapshot(store: &DomainStore) -> Vec<Vec<Colour>> {
        (0..store.num_variables())
            .map(|index| values(store, VariableId::create_from_index(index)))
            .collect()
    }

    #[test]
    fn domains_start_with_every_colour() {
        let store = DomainStore::new(2, 3);

        assert_eq!(values(&store, VariableId::new(0)), vec![1, 2, 3]);
        assert_eq!(store.size(VariableId::new(1)), 3);
        assert_eq!(store.fixed_value(VariableId::new(0)), None);
    }

    #[test]
    fn removal_is_recorded_on_the_trail() {
        let mut store = DomainStore::new(1, 3);
        let x = VariableId::new(0);

        assert_eq!(store.remove_value(x, 2), Ok(true));
        assert_eq!(store.remove_value(x, 2), Ok(false));

        assert_eq!(values(&store, x), vec![1, 3]);
        assert_eq!(store.num_removals(), 1);
    }

    #[test]
    fn removing_the_last_value_reports_an_empty_domain() {
        let mut store = DomainStore::new(1, 2);
        let x = VariableId::new(0);

        assert_eq!(store.remove_value(x, 1), Ok(true));
        assert_eq!(store.fixed_value(x), Some(2));
        assert_eq!(store.remove_value(x, 2), Err(EmptyDomain));
        assert!(store.domain(x).is_empty());
        assert_eq!(store.num_removals(), 2);
    }

    #[test]
    fn undo_restores_every_domain_to_the_checkpoint() {
        let mut store = DomainStore::new(3, 4);
        let x = VariableId::new(0);
        let y = VariableId::new(1);
        let z = VariableId::new(2);

        let _ = store.remove_value(x, 4);
        let before = snapshot(&store);
        let checkpoint = store.checkpoint();

        let _ = store.remove_value(y, 1);
        let _ = store.remove_value(z, 2);
        let _ = store.remove_value(x, 1);
        let _ = store.remove_value(y, 3);
        let _ = store.remove_value(y, 2);

        store.undo_to(checkpoint);

        assert_eq!(snapshot(&store), before);
        assert_eq!(store.num_removals(), 1);
    }

    #[test]
    fn nested_checkpoints_are_undone_independently() {
        let mut store = DomainStore::new(2, 3);
        let x = VariableId::new(0);
        let y = VariableId::new(1);

        let outer = store.checkpoint();
        let _ = store.remove_value(x, 1);
        let after_outer = snapshot(&store);

        let inner = store.checkpoint();
        let _ = store.remove_value(y, 3);
        let _ = store.remove_value(x, 2);

        store.undo_to(inner);
        assert_eq!(snapshot(&store), after_outer);

        store.undo_to(outer);
        assert_eq!(values(&store, x), vec![1, 2, 3]);
        assert_eq!(values(&store, y), vec![1, 2, 3]);
    }
}
