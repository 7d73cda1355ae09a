use horde_core::HordeError;
use horde_move::MoveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwarmError {
    #[error(transparent)]
    Config(#[from] HordeError),

    #[error("movement pass failed: {0}")]
    Move(#[from] MoveError),
}

pub type SwarmResult<T> = Result<T, SwarmError>;
