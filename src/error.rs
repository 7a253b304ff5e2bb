//! errors produced while building and running an arena
use thiserror::Error;

use crate::types::{Position, SnakeId};

/// Text that does not name an orientation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrientationError {
    /// the value is not one of up, down, left or right
    #[error("unsupported orientation {0:?}, allowed: up, down, left, right")]
    Unrecognized(String),
}

/// Failures while mutating a single snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnakeError {
    /// the tail does not sit one cell away from the segment before it, so there
    /// is no direction to grow in. A snake built by this crate never gets here.
    #[error("snake {id} has tail {tail:?} detached from {before:?}")]
    DetachedTail {
        /// the snake that was asked to grow
        id: SnakeId,
        /// the last body segment
        tail: Position,
        /// the segment (or head) in front of the tail
        before: Position,
    },
}

/// Failures while registering snakes in, or ticking, an arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// a snake with the same id is already in play
    #[error("you are trying to overwrite an existing snake, collision with id: {0}")]
    DuplicateSnake(SnakeId),
    /// width, height or step limit is zero
    #[error("invalid arena configuration: {0}")]
    InvalidConfig(&'static str),
    /// the arena was ticked with nobody in it
    #[error("can't tick an arena without any snakes")]
    NoSnakes,
}

/// Failures while loading a match from its configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// the json could not be decoded, including unknown orientations
    #[error("couldn't decode match config: {0}")]
    Decode(#[from] serde_json::Error),
    /// the decoded config does not describe a playable arena
    #[error(transparent)]
    Arena(#[from] ArenaError),
}
