//! Keyboard input seam. The driver polls through [`KeySource`] once per
//! tick; the poll timeout doubles as the tick sleep.

use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
}

pub trait KeySource {
    /// Wait up to `timeout` for a key press. `None` means the tick elapsed
    /// with no input.
    fn poll_key(&mut self, timeout: Duration) -> Option<Key>;
}

/// Reads crossterm events from the real terminal. Only press events count;
/// release/repeat and non-key events are discarded.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self, timeout: Duration) -> Option<Key> {
        match event::poll(timeout) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                warn!("keyboard poll failed: {}", e);
                return None;
            }
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char(c) => Some(Key::Char(c)),
                KeyCode::Up => Some(Key::Up),
                KeyCode::Down => Some(Key::Down),
                KeyCode::Left => Some(Key::Left),
                _ => None,
            },
            Ok(_) => None,
            Err(e) => {
                warn!("keyboard read failed: {}", e);
                None
            }
        }
    }
}
