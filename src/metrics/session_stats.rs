use std::time::{Duration, Instant};

/// Running totals across the auto-resetting game sessions of one sitting.
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub runs: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            runs: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.runs += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed_time = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_game_over(10);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.runs, 1);

        stats.on_game_over(5);
        assert_eq!(stats.high_score, 10); // Should not decrease
        assert_eq!(stats.runs, 2);

        stats.on_game_over(15);
        assert_eq!(stats.high_score, 15); // Should update
        assert_eq!(stats.runs, 3);
    }
}
