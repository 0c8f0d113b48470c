use std::time::{Duration, Instant};

use super::body::{Position, SnakeBody};

/// Complete state of one game run.
///
/// Everything the driver loop reads or writes lives here, so a session can
/// be swapped out wholesale on reset and inspected freely in tests.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// The snake, including heading and score.
    pub snake: SnakeBody,
    /// Current fruit cell, never on the snake.
    pub fruit: Position,
    /// Latched when the snake fills its capacity; cleared only by reset.
    pub game_over: bool,
    /// Wall-clock time of the previous driver iteration, `None` before the
    /// first one.
    pub last_step: Option<Instant>,
    /// Time accumulated toward the next physics tick.
    pub since_tick: Duration,
}

impl GameSession {
    /// Assembles a fresh session around a snake and a fruit cell.
    pub fn new(snake: SnakeBody, fruit: Position) -> Self {
        Self {
            snake,
            fruit,
            game_over: false,
            last_step: None,
            since_tick: Duration::ZERO,
        }
    }
}
