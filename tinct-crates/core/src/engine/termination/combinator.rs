use super::TerminationCondition;

/// Stops the search as soon as either of two conditions does.
///
/// Every decision is reported to both conditions, so a [`DecisionBudget`](super::DecisionBudget)
/// keeps counting even when it is combined with another limit.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }

    fn decision_has_been_made(&mut self) {
        self.t1.decision_has_been_made();
        self.t2.decision_has_been_made();
    }
}

#[cfg(test)]
mod tests {
    use super::super::DecisionBudget;
    use super::super::Indefinite;
    use super::*;

    #[test]
    fn stops_when_one_side_stops() {
        let mut combined = Combinator::new(Indefinite, DecisionBudget::new(1));
        assert!(!combined.should_stop());

        combined.decision_has_been_made();
        assert!(combined.should_stop());
    }

    #[test]
    fn decisions_reach_both_sides() {
        let mut combined = Combinator::new(DecisionBudget::new(3), DecisionBudget::new(1));
        combined.decision_has_been_made();

        assert!(combined.should_stop());
    }
}
