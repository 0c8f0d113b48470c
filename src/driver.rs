use std::time::{Duration, Instant};

use crate::game::{GameEngine, GameSession};
use crate::input::{dispatch, RemoteReceiver};
use crate::matrix::{Frame, LinePort, MatrixScanner};

/// The device main loop, one iteration at a time.
///
/// Each step runs one scan pass over the current image, accumulates elapsed
/// wall-clock time toward the next physics tick, fires the tick once the
/// accumulator crosses the interval, and polls the remote. A step that finds
/// the game already over only swaps in a fresh session and returns, so every
/// game starts with a clean timing baseline.
///
/// Taking the step time as a parameter keeps the loop off the real clock in
/// tests.
pub struct GameDriver<P: LinePort, R: RemoteReceiver> {
    engine: GameEngine,
    session: GameSession,
    scanner: MatrixScanner<P>,
    receiver: R,
}

impl<P: LinePort, R: RemoteReceiver> GameDriver<P, R> {
    /// Builds a driver with a freshly reset session.
    pub fn new(mut engine: GameEngine, port: P, receiver: R) -> Self {
        let session = engine.reset();
        Self {
            engine,
            session,
            scanner: MatrixScanner::new(port),
            receiver,
        }
    }

    /// Runs one iteration at the current wall-clock time.
    pub fn step(&mut self) {
        self.step_at(Instant::now());
    }

    /// Runs one iteration as of `now`.
    ///
    /// `now` must not move backwards between calls; a stalled clock simply
    /// accumulates no tick time.
    pub fn step_at(&mut self, now: Instant) {
        if self.session.game_over {
            tracing::debug!(
                score = self.session.snake.score,
                "game over, starting a new session"
            );
            self.session = self.engine.reset();
            return;
        }

        self.scanner.frame(&Frame::compose(&self.session));

        if let Some(last) = self.session.last_step {
            self.session.since_tick += now.saturating_duration_since(last);
        }

        if self.session.since_tick > self.engine.config().tick_interval() {
            self.engine.tick(&mut self.session);
            self.session.since_tick = Duration::ZERO;
        }

        dispatch(&mut self.receiver, &mut self.session.snake);

        self.session.last_step = Some(now);
    }

    /// Blanks the panel.
    pub fn blank(&mut self) {
        self.scanner.clear();
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access to the current session.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Mutable access to the remote receiver.
    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.receiver
    }

    /// The underlying line port.
    pub fn port(&self) -> &P {
        self.scanner.port()
    }

    /// Mutable access to the underlying line port.
    pub fn port_mut(&mut self) -> &mut P {
        self.scanner.port_mut()
    }
}
