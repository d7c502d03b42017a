use dc_core::{Direction, GridPoint};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopoError {
    #[error("no node at {0}")]
    MissingNode(GridPoint),

    #[error("node at {at} has no anchor on its {face} face")]
    MissingAnchor { at: GridPoint, face: Direction },
}

pub type TopoResult<T> = Result<T, TopoError>;
