use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Milliseconds that must accumulate before a physics tick fires
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom tick interval
    pub fn new(tick_interval_ms: u64) -> Self {
        Self { tick_interval_ms }
    }

    /// The tick interval as a [`Duration`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
