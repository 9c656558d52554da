use super::Direction;
use super::TieBreaker;

/// Keeps the first variable it received with the best score.
///
/// Offering the variables in ascending order therefore breaks ties towards the smallest
/// identifier.
#[derive(Clone, Copy, Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    selected: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, score: Value) {
        let improves = match &self.selected {
            None => true,
            Some((_, best)) => match self.direction {
                Direction::Maximum => score > *best,
                Direction::Minimum => score < *best,
            },
        };

        if improves {
            self.selected = Some((variable, score));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
