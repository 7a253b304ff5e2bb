//! various types that are useful for working with a snake arena
use crate::error::OrientationError;
use serde::{Deserialize, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x position
    pub x: i64,
    /// y position
    pub y: i64,
}

/// A cell on the board. Nothing stops a position from lying off the board.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// the position reached by moving along `v`. Coordinates wrap around at
    /// the i32 limits, so a snake walking off `i32::MAX` comes back at `i32::MIN`.
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x.wrapping_add(v.x as i32),
            y: self.y.wrapping_add(v.y as i32),
        }
    }

    /// the position reached by moving against `v`, wrapping like [Position::add_vec]
    pub fn sub_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x.wrapping_sub(v.x as i32),
            y: self.y.wrapping_sub(v.y as i32),
        }
    }

    #[allow(missing_docs)]
    pub fn to_vector(&self) -> Vector {
        Vector {
            x: self.x as i64,
            y: self.y as i64,
        }
    }
}

/// The heading of a snake head, which decides where the head goes on the next step.
///
/// Parsing is case insensitive and also accepts `top` and `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Orientation {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Up
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Left => write!(f, "left"),
            Orientation::Right => write!(f, "right"),
            Orientation::Up => write!(f, "up"),
            Orientation::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Orientation {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "top" => Ok(Orientation::Up),
            "down" | "bottom" => Ok(Orientation::Down),
            "left" => Ok(Orientation::Left),
            "right" => Ok(Orientation::Right),
            _ => Err(OrientationError::Unrecognized(s.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = OrientationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Orientation {
    /// every orientation, in the same order as the enum
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    /// convert this orientation to the unit vector a head moves by each step
    pub fn to_vector(self) -> Vector {
        match self {
            Orientation::Left => Vector { x: -1, y: 0 },
            Orientation::Right => Vector { x: 1, y: 0 },
            Orientation::Up => Vector { x: 0, y: 1 },
            Orientation::Down => Vector { x: 0, y: -1 },
        }
    }

    /// the orientation whose unit vector is `vector`, if there is one
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: -1, y: 0 } => Some(Self::Left),
            Vector { x: 1, y: 0 } => Some(Self::Right),
            Vector { x: 0, y: 1 } => Some(Self::Up),
            Vector { x: 0, y: -1 } => Some(Self::Down),
            _ => None,
        }
    }

    /// the orientation pointing the other way. e.g. Up is opposite to Down
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }
}

/// token to represent a snake id. Ids are handed out once per process and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SnakeId(pub u64);

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SnakeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

/// Receives the eliminations that happen while an arena ticks
pub trait EliminationObserver: std::fmt::Debug {
    /// called once for every snake that gets eaten, with the eater first
    fn observe_elimination(&mut self, eater: SnakeId, eaten: SnakeId);
}

/// A game for which one can get the snake ids
pub trait SnakeIDGettableGame {
    #[allow(missing_docs)]
    type SnakeIDType: PartialEq + Debug + Serialize + Eq + Hash + Clone + Send;

    /// ids of the snakes still in play
    fn get_snake_ids(&self) -> Vec<Self::SnakeIDType>;
}

/// A game which can have it's winner determined
pub trait VictorDeterminableGame: std::fmt::Debug + SnakeIDGettableGame {
    #[allow(missing_docs)]
    fn is_over(&self) -> bool;

    /// get the winner for a given game, will return None when nobody won, or if the game is not over
    fn get_winner(&self) -> Option<Self::SnakeIDType>;
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;
}

/// a game for which the current turn is determinable
pub trait TurnDeterminableGame {
    #[allow(missing_docs)]
    fn turn(&self) -> u64;
}

/// A game for which the head of a snake can be got.
pub trait HeadGettableGame: SnakeIDGettableGame {
    /// get the head position for a given snake id
    fn get_head_as_position(&self, snake_id: &Self::SnakeIDType) -> Option<Position>;
}

/// A game where an entire snake body is gettable
pub trait SnakeBodyGettableGame: SnakeIDGettableGame {
    /// return a Vec of the positions for a given snake, in order from head to tail
    fn get_snake_body_vec(&self, snake_id: &Self::SnakeIDType) -> Option<Vec<Position>>;
}

/// A game for which the length of a snake can be got.
pub trait LengthGettableGame: SnakeIDGettableGame {
    /// get the number of body segments for a given snake, not counting the head
    fn get_length(&self, snake_id: &Self::SnakeIDType) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_vectors() {
        assert_eq!(Orientation::Up.to_vector(), Vector { x: 0, y: 1 });
        assert_eq!(Orientation::Right.to_vector(), Vector { x: 1, y: 0 });
        assert_eq!(Orientation::Left.to_vector(), Vector { x: -1, y: 0 });
        assert_eq!(Orientation::Down.to_vector(), Vector { x: 0, y: -1 });
    }

    #[test]
    fn test_orientation_from_vector() {
        for o in Orientation::ALL.iter() {
            assert_eq!(Orientation::from_vector(o.to_vector()), Some(*o));
            let back = Orientation::from_vector(o.opposite().to_vector());
            assert_eq!(back, Some(o.opposite()));
        }
        assert_eq!(Orientation::from_vector(Vector { x: 1, y: 1 }), None);
        assert_eq!(Orientation::from_vector(Vector { x: 0, y: 0 }), None);
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!("up".parse::<Orientation>(), Ok(Orientation::Up));
        assert_eq!("Right".parse::<Orientation>(), Ok(Orientation::Right));
        assert_eq!(" LEFT ".parse::<Orientation>(), Ok(Orientation::Left));
        assert_eq!("top".parse::<Orientation>(), Ok(Orientation::Up));
        assert_eq!("bottom".parse::<Orientation>(), Ok(Orientation::Down));
        assert_eq!(
            "sideways".parse::<Orientation>(),
            Err(OrientationError::Unrecognized("sideways".to_string()))
        );
    }

    #[test]
    fn test_orientation_display_parses_back() {
        for o in Orientation::ALL.iter() {
            assert_eq!(o.to_string().parse::<Orientation>(), Ok(*o));
        }
    }

    #[test]
    fn test_orientation_serde() {
        let o: Orientation = serde_json::from_str("\"Bottom\"").expect("valid orientation");
        assert_eq!(o, Orientation::Down);
        assert_eq!(
            serde_json::to_string(&Orientation::Left).expect("serializable"),
            "\"left\""
        );
        assert!(serde_json::from_str::<Orientation>("\"north\"").is_err());
    }

    #[test]
    fn test_position_math() {
        let p = Position::new(3, -2);
        assert_eq!(p.add_vec(Orientation::Up.to_vector()), Position::new(3, -1));
        assert_eq!(p.sub_vec(Orientation::Up.to_vector()), Position::new(3, -3));
        assert_eq!(
            p.add_vec(Position::new(-3, 2).to_vector()),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_position_wraps_at_i32_limits() {
        let edge = Position::new(i32::MAX, i32::MIN);
        assert_eq!(
            edge.add_vec(Orientation::Right.to_vector()),
            Position::new(i32::MIN, i32::MIN)
        );
        assert_eq!(
            edge.add_vec(Orientation::Down.to_vector()),
            Position::new(i32::MAX, i32::MAX)
        );
        assert_eq!(
            edge.sub_vec(Orientation::Left.to_vector()),
            Position::new(i32::MIN, i32::MIN)
        );
    }

    #[test]
    fn test_snake_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&SnakeId(7)).expect("serializable"), "7");
        assert_eq!(SnakeId(7).to_string(), "7");
    }
}
