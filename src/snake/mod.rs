//! A single snake: its head, its body and the way it moves and grows.
//!
//! The body is kept head-adjacent first and tail last. A step pops the tail and
//! pushes a new neck where the head was, so a snake translates by one cell
//! without touching the rest of its body. Growth is a separate operation.
mod segment;

pub use segment::{BodySegment, SnakeHead};

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use itertools::Itertools;
use tracing::trace;

use crate::error::SnakeError;
use crate::types::{Orientation, Position, SnakeId};

static NEXT_SNAKE_ID: AtomicU64 = AtomicU64::new(0);

fn next_snake_id() -> SnakeId {
    SnakeId(NEXT_SNAKE_ID.fetch_add(1, Ordering::Relaxed))
}

/// A snake taking part in an arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    id: SnakeId,
    head: SnakeHead,
    body: VecDeque<BodySegment>,
}

impl Snake {
    /// makes a snake with a fresh id, its head at (x, y) and one body segment
    /// directly behind the head
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self::with_id(next_snake_id(), x, y, orientation)
    }

    /// like [Snake::new] but with a caller chosen id. Nothing checks the id is
    /// unique, the arena refuses duplicates on registration.
    pub fn with_id(id: SnakeId, x: i32, y: i32, orientation: Orientation) -> Self {
        let head = SnakeHead::new(Position::new(x, y), orientation);
        let mut body = VecDeque::with_capacity(2);
        body.push_back(BodySegment::new(head.behind()));
        Snake { id, head, body }
    }

    #[allow(missing_docs)]
    pub fn id(&self) -> SnakeId {
        self.id
    }

    #[allow(missing_docs)]
    pub fn head(&self) -> &SnakeHead {
        &self.head
    }

    #[allow(missing_docs)]
    pub fn head_position(&self) -> Position {
        self.head.position()
    }

    #[allow(missing_docs)]
    pub fn orientation(&self) -> Orientation {
        self.head.orientation()
    }

    /// the body segments, head-adjacent first
    pub fn body(&self) -> impl Iterator<Item = &BodySegment> + '_ {
        self.body.iter()
    }

    /// positions of the body segments, head-adjacent first
    pub fn body_positions(&self) -> Vec<Position> {
        self.body.iter().map(BodySegment::position).collect_vec()
    }

    /// number of body segments, the head is not counted
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// turns the head, it only matters from the next step on
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.head.set_orientation(orientation);
    }

    /// moves the whole snake one cell along the head's orientation, the body
    /// keeps its length
    pub fn step(&mut self) {
        let neck = self.head.position();
        self.body.pop_back();
        self.body.push_front(BodySegment::new(neck));
        let ahead = self.head.ahead();
        self.head.set_position(ahead);
        trace!(snake = %self.id, from = ?neck, to = ?ahead, "snake stepped");
    }

    /// appends a segment past the tail, continuing in the direction the body
    /// already trails off in. Returns the new body length.
    pub fn grow_up(&mut self) -> Result<usize, SnakeError> {
        let tail = self.tail();
        let before = self
            .body
            .iter()
            .rev()
            .nth(1)
            .map(BodySegment::position)
            .unwrap_or_else(|| self.head.position());
        let trailing = Orientation::from_vector(tail.sub_vec(before.to_vector()).to_vector())
            .ok_or(SnakeError::DetachedTail {
                id: self.id,
                tail,
                before,
            })?;
        self.body
            .push_back(BodySegment::new(tail.add_vec(trailing.to_vector())));
        trace!(snake = %self.id, length = self.body.len(), "snake grew");
        Ok(self.body.len())
    }

    /// is this snake's head on a body segment of `other`
    pub fn is_eating_another_snake(&self, other: &Snake) -> bool {
        let head = self.head.position();
        other.body.iter().any(|s| s.position() == head)
    }

    fn tail(&self) -> Position {
        self.body
            .back()
            .map(BodySegment::position)
            .expect("a snake body is never empty")
    }
}
