use super::ValueSelector;
use crate::basic_types::Colour;
use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// Tries first the colours which rule out the fewest options for the neighbours.
///
/// The cost of a colour is the number of unassigned neighbours whose current domain contains it.
/// This looks at the domains as they are now, not at the domains after propagating the choice.
/// Colours with the same cost are tried in ascending order.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeastConstrainingValue;

impl LeastConstrainingValue {
    fn elimination_count(context: &SelectionContext, variable: VariableId, value: Colour) -> usize {
        context
            .neighbours(variable)
            .iter()
            .filter(|&&neighbour| {
                !context.is_assigned(neighbour) && context.contains(neighbour, value)
            })
            .count()
    }
}

impl ValueSelector for LeastConstrainingValue {
    fn order_values(&mut self, context: &SelectionContext, variable: VariableId) -> Vec<Colour> {
        let mut values = context
            .iterate_domain(variable)
            .map(|value| (Self::elimination_count(context, variable, value), value))
            .collect::<Vec<_>>();
        values.sort_unstable();

        values.into_iter().map(|(_, value)| value).collect()
    }
}
