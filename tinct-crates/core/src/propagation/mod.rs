//! Propagation narrows the domains of the variables by removing colours which cannot be part of
//! any solution that extends the current assignment.
mod ac3;

pub(crate) use ac3::Ac3Propagator;
