//! Shared UI model. The driver loop is the only writer; panels read it
//! during their paint callbacks.

use deck_core::player::StreamState;

/// What the audio engine last told us. Placeholder defaults until the first
/// update arrives.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    pub artist: String,
    pub title: String,
    pub stream: StreamState,
    /// 0..=100.
    pub buffer: u8,
}

/// The station the player is (or will be) tuned to.
#[derive(Debug, Clone)]
pub struct CurrentStation {
    pub url: String,
    /// Only meaningful while `bookmarked` is set.
    pub name: Option<String>,
    pub bookmarked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Main,
    Bookmarks,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub player: PlayerState,
    pub station: CurrentStation,
    pub mode: Mode,
}

impl UiState {
    pub fn new(station: CurrentStation) -> Self {
        Self {
            player: PlayerState::default(),
            station,
            mode: Mode::Main,
        }
    }
}
