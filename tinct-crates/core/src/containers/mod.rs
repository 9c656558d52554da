//! Containers which are indexed by the dense identifiers of the solver.
mod keyed_vec;

pub use keyed_vec::*;

/// A type which can be turned into a dense index (and back), so that it can key a [`KeyedVec`].
pub trait StorageKey {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl StorageKey for usize {
    fn index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}
