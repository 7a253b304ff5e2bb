//! The arena snakes hunt each other in.
//!
//! An arena owns the snakes still in play, in the order they were registered,
//! and keeps the eaten ones around for inspection once the match is done.
//! Board size is informational only, snakes are free to wander off the board.
mod tick;

use fxhash::FxHashMap;
use tracing::debug;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::snake::Snake;
use crate::types::{
    HeadGettableGame, LengthGettableGame, Position, SizeDeterminableGame, SnakeBodyGettableGame,
    SnakeIDGettableGame, SnakeId, TurnDeterminableGame, VictorDeterminableGame,
};

/// A match between snakes on a fixed size board
#[derive(Debug, Clone)]
pub struct Arena {
    width: u32,
    height: u32,
    step_limit: u32,
    steps: u32,
    snakes: Vec<Snake>,
    dead_snakes: FxHashMap<SnakeId, Snake>,
    winner: Option<SnakeId>,
}

impl Arena {
    /// an empty arena, every argument has to be positive
    pub fn new(width: u32, height: u32, step_limit: u32) -> Result<Self, ArenaError> {
        Self::from_config(ArenaConfig {
            width,
            height,
            step_limit,
        })
    }

    #[allow(missing_docs)]
    pub fn from_config(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Arena {
            width: config.width,
            height: config.height,
            step_limit: config.step_limit,
            steps: 0,
            snakes: vec![],
            dead_snakes: FxHashMap::default(),
            winner: None,
        })
    }

    /// registers a snake, refusing one whose id is in play or was eaten in
    /// this match
    pub fn add_snake(&mut self, snake: Snake) -> Result<(), ArenaError> {
        if self.snakes.iter().any(|s| s.id() == snake.id())
            || self.dead_snakes.contains_key(&snake.id())
        {
            return Err(ArenaError::DuplicateSnake(snake.id()));
        }
        debug!(snake = %snake.id(), head = ?snake.head_position(), "snake registered");
        self.snakes.push(snake);
        Ok(())
    }

    /// registers snakes in order, stopping at the first duplicate. Snakes
    /// before the duplicate stay registered.
    pub fn add_snakes(&mut self, snakes: impl IntoIterator<Item = Snake>) -> Result<(), ArenaError> {
        for snake in snakes {
            self.add_snake(snake)?;
        }
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[allow(missing_docs)]
    pub fn step_limit(&self) -> u32 {
        self.step_limit
    }

    /// ticks in which every snake moved
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// the snakes still in play, in registration order
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    /// a snake still in play
    pub fn snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id() == id)
    }

    /// a snake still in play, for turning it between ticks
    pub fn snake_mut(&mut self, id: SnakeId) -> Option<&mut Snake> {
        self.snakes.iter_mut().find(|s| s.id() == id)
    }

    /// the snakes that have been eaten
    pub fn eliminated(&self) -> impl Iterator<Item = &Snake> + '_ {
        self.dead_snakes.values()
    }

    /// an eaten snake, as it was when it got eaten
    pub fn eliminated_snake(&self, id: SnakeId) -> Option<&Snake> {
        self.dead_snakes.get(&id)
    }

    /// the last snake standing, set only once a tick has declared it
    pub fn winner(&self) -> Option<&Snake> {
        self.winner.and_then(|id| self.snake(id))
    }

    /// whether a position lies outside of the board. Nothing in the simulation
    /// acts on this.
    pub fn is_off_board(&self, position: Position) -> bool {
        position.x < 0
            || position.x >= self.width as i32
            || position.y < 0
            || position.y >= self.height as i32
    }

    fn any_snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snake(id).or_else(|| self.eliminated_snake(id))
    }
}

impl SnakeIDGettableGame for Arena {
    type SnakeIDType = SnakeId;

    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType> {
        self.snakes.iter().map(Snake::id).collect()
    }
}

impl VictorDeterminableGame for Arena {
    /// over once a tick declared a winner or the step limit is used up
    fn is_over(&self) -> bool {
        self.winner.is_some() || self.steps >= self.step_limit
    }

    fn get_winner(&self) -> Option<Self::SnakeIDType> {
        self.winner
    }
}

impl SizeDeterminableGame for Arena {
    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_height(&self) -> u32 {
        self.height
    }
}

impl TurnDeterminableGame for Arena {
    fn turn(&self) -> u64 {
        self.steps as u64
    }
}

impl HeadGettableGame for Arena {
    fn get_head_as_position(&self, snake_id: &Self::SnakeIDType) -> Option<Position> {
        self.any_snake(*snake_id).map(Snake::head_position)
    }
}

impl SnakeBodyGettableGame for Arena {
    fn get_snake_body_vec(&self, snake_id: &Self::SnakeIDType) -> Option<Vec<Position>> {
        self.any_snake(*snake_id).map(|s| {
            let mut positions = Vec::with_capacity(s.body_len() + 1);
            positions.push(s.head_position());
            positions.extend(s.body().map(|segment| segment.position()));
            positions
        })
    }
}

impl LengthGettableGame for Arena {
    fn get_length(&self, snake_id: &Self::SnakeIDType) -> Option<usize> {
        self.any_snake(*snake_id).map(Snake::body_len)
    }
}
