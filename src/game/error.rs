use super::state::Position;
use thiserror::Error;

/// Errors raised by the grid world and the code driving it
#[derive(Debug, Error)]
pub enum GridWorldError {
    /// `reset` was asked to start on the goal or on a barrier
    #[error("start position {position} cannot be a barrier or the goal")]
    InvalidStartPosition { position: Position },

    /// Action index outside 0..4
    #[error("invalid action {0}, must be 0, 1, 2 or 3")]
    InvalidAction(usize),

    /// `step` called after the episode already terminated
    #[error("episode already finished, call reset before stepping again")]
    EpisodeFinished,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridWorldError>;
