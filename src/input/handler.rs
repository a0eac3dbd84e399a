use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Intent};

/// Moves kept per frame; anything past this is mashing and gets dropped
pub const MAX_INTENTS_PER_FRAME: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Something for the game core
    Game(Intent),
    /// Leave the host loop
    Quit,
    None,
}

/// Maps terminal key presses to game intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Arrow keys or WASD
            KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Game(Direction::Up.into()),
            KeyCode::Down | KeyCode::Char('s' | 'S') => KeyAction::Game(Direction::Down.into()),
            KeyCode::Left | KeyCode::Char('a' | 'A') => KeyAction::Game(Direction::Left.into()),
            KeyCode::Right | KeyCode::Char('d' | 'D') => KeyAction::Game(Direction::Right.into()),

            KeyCode::Char('r' | 'R') => KeyAction::Game(Intent::Restart),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects intents between two frames
///
/// Key events arrive whenever the terminal delivers them; the game only looks
/// at input once per frame. Repeats of the same intent (held keys) collapse
/// into one entry.
#[derive(Debug, Default)]
pub struct IntentBuffer {
    pending: Vec<Intent>,
}

impl IntentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent; `Restart` is always kept, moves stop at the cap
    pub fn push(&mut self, intent: Intent) {
        if self.pending.last() == Some(&intent) {
            return;
        }
        if intent != Intent::Restart && self.pending.len() >= MAX_INTENTS_PER_FRAME {
            return;
        }
        self.pending.push(intent);
    }

    /// Hand over everything collected since the last frame
    pub fn take(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
