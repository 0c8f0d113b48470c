use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    body::{Position, SnakeBody, GRID_SIZE},
    config::GameConfig,
    session::GameSession,
};

/// What happened during one physics tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate the fruit this tick
    pub ate_fruit: bool,
    /// Whether the game is over after this tick
    pub game_over: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a seeded RNG for reproducible fruit placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The engine's configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to its initial state
    pub fn reset(&mut self) -> GameSession {
        let snake = SnakeBody::new();
        let fruit = self.place_fruit(&snake);
        GameSession::new(snake, fruit)
    }

    /// Execute one physics tick: advance the snake, handle fruit and the
    /// capacity check
    pub fn tick(&mut self, session: &mut GameSession) -> TickOutcome {
        if session.game_over {
            return TickOutcome {
                ate_fruit: false,
                game_over: true,
            };
        }

        // Advance the head one cell along the current heading.
        let new_head = session.snake.advance_head(session.snake.heading.delta());

        // Growth is suppressed once the body is full; the capacity check
        // below ends the game either way.
        let ate_fruit = new_head == session.fruit;
        let grew = ate_fruit && !session.snake.is_full();

        // A tick that did not grow keeps the length constant, so the ring is
        // settled again before the fruit is replaced.
        if grew {
            session.snake.grow();
        } else {
            session.snake.retract_tail();
        }

        if ate_fruit {
            session.snake.score += 1;
            session.fruit = self.place_fruit(&session.snake);
        }

        if session.snake.is_full() {
            session.game_over = true;
        }

        TickOutcome {
            ate_fruit,
            game_over: session.game_over,
        }
    }

    /// Place the fruit at a random cell not occupied by the snake
    pub fn place_fruit(&mut self, snake: &SnakeBody) -> Position {
        loop {
            let row = self.rng.gen_range(0..GRID_SIZE as u8);
            let col = self.rng.gen_range(0..GRID_SIZE as u8);
            let cell = Position::new(row, col);

            if !snake.occupies(cell) {
                return cell;
            }
        }
    }
}
