//! Keyboard handling: folds crossterm key events into per-tick [`Intents`].
//!
//! Terminals with keyboard enhancement send proper release events and keys
//! drop out immediately.  Classic terminals only send repeated presses, and
//! the first auto-repeat arrives several hundred milliseconds after the
//! initial press.  So a freshly pressed key counts as held for
//! `REPEAT_DELAY` frames; once repeats are flowing it stays held for
//! `HOLD_WINDOW` frames after each one.
//!
//! Fire, start and quit are edge-triggered: they fire once on the transition
//! from not-held to held, never on repeats.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::compute::Intents;

/// Frames a key stays held after a repeat event.
pub const HOLD_WINDOW: u64 = 8;

/// Frames a key stays held after its initial press, before any repeat.
/// Covers the OS auto-repeat delay (about 660 ms at 60 fps).
pub const REPEAT_DELAY: u64 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Action {
    Left,
    Right,
    Fire,
    Start,
    Quit,
}

fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::Right),
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Enter => Some(Action::Start),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Frames at which a held key went down and was last seen down.
#[derive(Clone, Copy, Debug)]
struct KeyFrames {
    pressed: u64,
    seen: u64,
}

#[derive(Debug, Default)]
pub struct InputTracker {
    key_frame: HashMap<Action, KeyFrames>,
    frame: u64,
    /// Edge-triggered intents collected since the last `intents()` call.
    edges: Intents,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame.  Call once per tick before feeding that tick's events.
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }

    fn is_held(&self, action: Action) -> bool {
        self.key_frame
            .get(&action)
            .map(|keys| {
                let window = if keys.seen == keys.pressed {
                    REPEAT_DELAY
                } else {
                    HOLD_WINDOW
                };
                self.frame.saturating_sub(keys.seen) <= window
            })
            .unwrap_or(false)
    }

    /// Feed one terminal event.  Non-key events are ignored.
    pub fn handle(&mut self, event: &Event) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            return;
        };
        let Some(action) = action_for(*code, *modifiers) else {
            return;
        };

        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat if self.is_held(action) => {
                if let Some(keys) = self.key_frame.get_mut(&action) {
                    keys.seen = self.frame;
                }
            }
            KeyEventKind::Press => {
                self.press(action);
                self.key_down(action);
            }
            KeyEventKind::Repeat => self.key_down(action),
            KeyEventKind::Release => {
                self.key_frame.remove(&action);
            }
        }
    }

    fn key_down(&mut self, action: Action) {
        let frames = KeyFrames {
            pressed: self.frame,
            seen: self.frame,
        };
        self.key_frame.insert(action, frames);
    }

    fn press(&mut self, action: Action) {
        match action {
            Action::Fire => self.edges.fire = true,
            Action::Start => self.edges.start = true,
            Action::Quit => self.edges.quit = true,
            Action::Left | Action::Right => {}
        }
    }

    /// Intents for the current frame.  Edge flags are consumed.
    pub fn intents(&mut self) -> Intents {
        let edges = std::mem::take(&mut self.edges);
        Intents {
            left: self.is_held(Action::Left),
            right: self.is_held(Action::Right),
            ..edges
        }
    }
}
