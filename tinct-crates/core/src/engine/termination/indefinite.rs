use super::TerminationCondition;

/// Lets the search run until it finds a colouring or proves that there is none.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
