use std::fmt::Display;

use thiserror::Error;

use crate::parser::ParseError;

pub(crate) type TinctResult<T> = Result<T, TinctError>;

#[derive(Error, Debug)]
pub(crate) enum TinctError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The instance file {0} could not be read.")]
    InvalidInstanceFile(String),
    #[error("The instance could not be parsed, more details: {0}")]
    InvalidInstance(#[from] ParseError),
}

impl TinctError {
    pub(crate) fn invalid_instance(path: impl Display) -> Self {
        Self::InvalidInstanceFile(format!("{path}"))
    }
}
