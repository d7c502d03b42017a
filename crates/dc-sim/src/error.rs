//! Errors of the simulation layer.

use dc_core::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("entity {0} is already in transit")]
    AlreadyInTransit(EntityId),

    #[error("entity {0} is not in transit")]
    NotInTransit(EntityId),

    #[error(transparent)]
    Move(#[from] dc_move::MoveError),
}

pub type SimResult<T> = Result<T, SimError>;
