//! Configuration for arenas and whole matches.
//!
//! A match is usually described in json:
//! ```
//! # use snakes_hunger_games::config::MatchConfig;
//! let config = MatchConfig::from_json(
//!     r#"{"width": 20, "height": 20, "snakes": [{"x": 5, "y": 5}, {"x": 5, "y": 4}]}"#,
//! ).expect("valid config");
//! assert_eq!(config.arena.step_limit, 20);
//! let arena = config.build().expect("playable arena");
//! assert_eq!(arena.snakes().len(), 2);
//! ```
use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::error::{ArenaError, ConfigError};
use crate::snake::Snake;
use crate::types::Orientation;

/// step limit used when none is given
pub const DEFAULT_STEP_LIMIT: u32 = 20;

fn default_step_limit() -> u32 {
    DEFAULT_STEP_LIMIT
}

/// Size of the board and how many ticks a match may last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u32,
    /// ticks after which the match ends without a winner
    #[serde(default = "default_step_limit")]
    pub step_limit: u32,
}

impl ArenaConfig {
    /// a board of the given size with the default step limit
    pub fn new(width: u32, height: u32) -> Self {
        ArenaConfig {
            width,
            height,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    #[allow(missing_docs)]
    pub fn with_step_limit(mut self, step_limit: u32) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// all three values have to be positive
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.width == 0 {
            return Err(ArenaError::InvalidConfig("width must be positive"));
        }
        if self.height == 0 {
            return Err(ArenaError::InvalidConfig("height must be positive"));
        }
        if self.step_limit == 0 {
            return Err(ArenaError::InvalidConfig("step limit must be positive"));
        }
        Ok(())
    }
}

/// Where a snake starts and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnakeConfig {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
    #[serde(default)]
    #[allow(missing_docs)]
    pub orientation: Orientation,
}

impl SnakeConfig {
    /// makes a snake with a fresh id
    pub fn build(&self) -> Snake {
        Snake::new(self.x, self.y, self.orientation)
    }
}

/// An arena together with the snakes registered in it, in registration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(flatten)]
    #[allow(missing_docs)]
    pub arena: ArenaConfig,
    #[serde(default)]
    #[allow(missing_docs)]
    pub snakes: Vec<SnakeConfig>,
}

impl MatchConfig {
    /// decodes a match, unknown orientations are rejected here
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// builds the arena and registers a freshly made snake per entry
    pub fn build(&self) -> Result<Arena, ConfigError> {
        let mut arena = Arena::from_config(self.arena)?;
        arena.add_snakes(self.snakes.iter().map(SnakeConfig::build))?;
        Ok(arena)
    }
}
