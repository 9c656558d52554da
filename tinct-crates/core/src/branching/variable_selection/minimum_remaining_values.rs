use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::engine::VariableId;
use crate::tinct_assert_eq_simple;

/// Selects the unassigned variable with the fewest remaining colours (the "fail first" principle).
///
/// Ties go to the tie-breaker, which by default keeps the smallest [`VariableId`]; as identifiers
/// follow the vertex labels this is also the smallest label.
#[derive(Debug)]
pub struct MinimumRemainingValues<TieBreaking> {
    tie_breaker: TieBreaking,
}

impl MinimumRemainingValues<InOrderTieBreaker<VariableId, usize>> {
    pub fn new() -> Self {
        MinimumRemainingValues {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Default for MinimumRemainingValues<InOrderTieBreaker<VariableId, usize>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> MinimumRemainingValues<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        tinct_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "MinimumRemainingValues needs a tie-breaker which looks for the minimum"
        );
        MinimumRemainingValues { tie_breaker }
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> VariableSelector
    for MinimumRemainingValues<TieBreaking>
{
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        context
            .variables()
            .filter(|&variable| !context.is_assigned(variable))
            .for_each(|variable| {
                self.tie_breaker
                    .consider(variable, context.domain_size(variable))
            });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Assignment;
    use crate::engine::ConstraintGraph;
    use crate::engine::DomainStore;
    use crate::ColouringProblem;

    fn path_of_three() -> ConstraintGraph {
        let mut problem = ColouringProblem::default();
        problem.add_constraint(1, 2);
        problem.add_constraint(2, 3);
        ConstraintGraph::from_problem(&problem)
    }

    #[test]
    fn equal_domains_select_the_smallest_identifier() {
        let graph = path_of_three();
        let store = DomainStore::new(3, 3);
        let assignment = Assignment::new(3);
        let context = SelectionContext::new(&graph, &store, &assignment);

        let selected = MinimumRemainingValues::new().select_variable(&context);

        assert_eq!(selected, Some(VariableId::new(0)));
    }

    #[test]
    fn smallest_domain_is_selected() {
        let graph = path_of_three();
        let mut store = DomainStore::new(3, 3);
        let _ = store.remove_value(VariableId::new(2), 1);
        let assignment = Assignment::new(3);
        let context = SelectionContext::new(&graph, &store, &assignment);

        let selected = MinimumRemainingValues::new().select_variable(&context);

        assert_eq!(selected, Some(VariableId::new(2)));
    }

    #[test]
    fn assigned_variables_are_skipped() {
        let graph = path_of_three();
        let mut store = DomainStore::new(3, 3);
        let _ = store.remove_value(VariableId::new(0), 2);
        let _ = store.remove_value(VariableId::new(0), 3);
        let mut assignment = Assignment::new(3);
        assignment.assign(VariableId::new(0), 1);
        let context = SelectionContext::new(&graph, &store, &assignment);

        let selected = MinimumRemainingValues::new().select_variable(&context);

        assert_eq!(selected, Some(VariableId::new(1)));
    }

    #[test]
    fn nothing_is_selected_when_everything_is_assigned() {
        let graph = path_of_three();
        let store = DomainStore::new(3, 1);
        let mut assignment = Assignment::new(3);
        for variable in graph.variables() {
            assignment.assign(variable, 1);
        }
        let context = SelectionContext::new(&graph, &store, &assignment);

        assert_eq!(MinimumRemainingValues::new().select_variable(&context), None);
    }
}
