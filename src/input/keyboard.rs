use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::remote::{RemoteReceiver, CODE_DOWN, CODE_LEFT, CODE_RIGHT, CODE_UP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Steer as if the handset had sent this scan code.
    Remote(u32),
    Restart,
    Quit,
    None,
}

/// Translates terminal key events into handset scan codes.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Remote(CODE_UP),
            KeyCode::Down => KeyAction::Remote(CODE_DOWN),
            KeyCode::Left => KeyAction::Remote(CODE_LEFT),
            KeyCode::Right => KeyAction::Remote(CODE_RIGHT),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Remote(CODE_UP),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Remote(CODE_DOWN),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Remote(CODE_LEFT),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Remote(CODE_RIGHT),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard-fed stand-in for the hardware IR receiver.
///
/// Pressed buttons queue their scan codes; polls hand them out one at a
/// time. After yielding a code the receiver stays silent until re-armed,
/// matching the hold-until-resume behavior of the hardware decoder.
pub struct KeyRemote {
    queue: VecDeque<u32>,
    paused: bool,
}

impl KeyRemote {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            paused: false,
        }
    }

    /// Queues the scan code for a pressed button.
    pub fn press(&mut self, code: u32) {
        self.queue.push_back(code);
    }
}

impl Default for KeyRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteReceiver for KeyRemote {
    fn poll(&mut self) -> Option<u32> {
        if self.paused {
            return None;
        }
        let code = self.queue.pop_front()?;
        self.paused = true;
        Some(code)
    }

    fn resume(&mut self) {
        self.paused = false;
    }
}
