use crate::equation::EquationError;
use crate::parser::parse::ParseError;
use crate::tac::TacError;

use thiserror::Error;

/// Any failure of a pipeline run. Each stage fails fast; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Equation(#[from] EquationError),
    #[error("{0}")]
    Tac(#[from] TacError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
