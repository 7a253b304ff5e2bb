use crate::types::{Orientation, Position};

/// One cell of a snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodySegment {
    position: Position,
}

impl BodySegment {
    #[allow(missing_docs)]
    pub fn new(position: Position) -> Self {
        BodySegment { position }
    }

    #[allow(missing_docs)]
    pub fn position(&self) -> Position {
        self.position
    }
}

/// The leading cell of a snake, it also knows which way the snake is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnakeHead {
    position: Position,
    orientation: Orientation,
}

impl SnakeHead {
    #[allow(missing_docs)]
    pub fn new(position: Position, orientation: Orientation) -> Self {
        SnakeHead {
            position,
            orientation,
        }
    }

    #[allow(missing_docs)]
    pub fn position(&self) -> Position {
        self.position
    }

    #[allow(missing_docs)]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[allow(missing_docs)]
    pub fn set_position(&mut self, position: Position) -> &mut Self {
        self.position = position;
        self
    }

    #[allow(missing_docs)]
    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    /// the cell this head moves into on its next step
    pub fn ahead(&self) -> Position {
        self.position.add_vec(self.orientation.to_vector())
    }

    /// the cell directly behind this head
    pub fn behind(&self) -> Position {
        self.position
            .add_vec(self.orientation.opposite().to_vector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ahead_and_behind() {
        let mut head = SnakeHead::new(Position::new(2, 2), Orientation::Left);
        assert_eq!(head.ahead(), Position::new(1, 2));
        assert_eq!(head.behind(), Position::new(3, 2));

        head.set_orientation(Orientation::Down)
            .set_position(Position::new(0, 0));
        assert_eq!(head.ahead(), Position::new(0, -1));
        assert_eq!(head.behind(), Position::new(0, 1));
    }
}
