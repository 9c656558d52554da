use super::VariableId;
use crate::basic_types::Colour;
use crate::containers::KeyedVec;
use crate::tinct_assert_simple;

/// The colours which the search has committed to so far.
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignment {
    values: KeyedVec<VariableId, Option<Colour>>,
    num_assigned: usize,
}

impl Assignment {
    pub(crate) fn new(num_variables: usize) -> Assignment {
        Assignment {
            values: KeyedVec::filled(num_variables, None),
            num_assigned: 0,
        }
    }

    pub(crate) fn assign(&mut self, variable: VariableId, value: Colour) {
        tinct_assert_simple!(
            self.values[variable].is_none(),
            "{variable} is assigned twice"
        );
        self.values[variable] = Some(value);
        self.num_assigned += 1;
    }

    pub(crate) fn unassign(&mut self, variable: VariableId) {
        tinct_assert_simple!(
            self.values[variable].is_some(),
            "{variable} is unassigned but it has no value"
        );
        self.values[variable] = None;
        self.num_assigned -= 1;
    }

    /// Forgets every value.
    pub(crate) fn clear(&mut self) {
        for value in self.values.iter_mut() {
            *value = None;
        }
        self.num_assigned = 0;
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<Colour> {
        self.values[variable]
    }

    pub(crate) fn is_assigned(&self, variable: VariableId) -> bool {
        self.values[variable].is_some()
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.num_assigned == self.values.len()
    }

    /// Iterates over the assigned variables and their values, in ascending variable order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (VariableId, Colour)> + '_ {
        self.values
            .iter_with_keys()
            .filter_map(|(variable, value)| value.map(|value| (variable, value)))
    }
}
