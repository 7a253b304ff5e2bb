#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! A turn based hunger games for snakes.
//!
//! Snakes are registered in an [Arena] and move simultaneously, one cell per
//! tick, in the direction their head is facing. A snake whose head lands on the
//! body of a snake that already moved this tick eats it. The match ends when a
//! single snake is left, or without a winner once the step limit is used up.
//!
//! ```
//! use snakes_hunger_games::{observer::TracingObserver, types::Orientation, Arena, Snake};
//!
//! let mut arena = Arena::new(20, 20, 20).expect("valid arena");
//! arena
//!     .add_snakes(vec![
//!         Snake::new(5, 5, Orientation::Up),
//!         Snake::new(5, 4, Orientation::Up),
//!     ])
//!     .expect("fresh ids never collide");
//! let winner = arena.run(&mut TracingObserver).expect("arena has snakes");
//! assert!(winner.is_some());
//! ```
//!
//! Eliminations are reported through an [types::EliminationObserver], everything
//! else is read back from the arena between ticks.

pub mod arena;
pub mod config;
pub mod error;
pub mod observer;
pub mod snake;
pub mod types;

pub use arena::Arena;
pub use snake::Snake;
