//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or hardware
//! dependencies. It can be driven programmatically in tests and by the
//! real-time driver loop alike.

pub mod body;
pub mod config;
pub mod engine;
pub mod heading;
pub mod session;

// Re-export commonly used types
pub use body::{Position, SnakeBody, GRID_SIZE, SEGMENT_CAPACITY};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use heading::Heading;
pub use session::GameSession;
