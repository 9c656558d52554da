mod propagation_status;
mod solution;
mod trail;

pub(crate) use propagation_status::*;
pub use solution::*;
pub(crate) use trail::*;

/// The label of a vertex as it appears in the problem definition.
pub type Vertex = i64;

/// A colour; a problem with `k` colours uses the colours `1..=k`.
pub type Colour = u32;
