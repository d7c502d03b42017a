//! Errors of the movement crate.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MoveError {
    #[error("interpretation has no steps to evaluate")]
    EmptyInterpretation,

    #[error("progress {0} is not a finite number")]
    NonFiniteProgress(f32),
}

pub type MoveResult<T> = Result<T, MoveError>;
