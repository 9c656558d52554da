//! Tie-breakers pick one variable among those which a selector scores equally.
mod in_order_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;

/// Whether a tie-breaker looks for the smallest or the largest score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

/// Receives `(variable, score)` pairs one by one and selects the best variable among them.
pub trait TieBreaker<Var, Value> {
    /// Offers `variable` with the given `score`.
    fn consider(&mut self, variable: Var, score: Value);

    /// Returns the selected variable, or [`None`] if nothing was considered, and resets the
    /// tie-breaker for the next round.
    fn select(&mut self) -> Option<Var>;

    fn get_direction(&self) -> Direction;
}
