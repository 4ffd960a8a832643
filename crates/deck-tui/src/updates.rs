//! External update entry points — the sole cross-thread boundary.
//!
//! Player callbacks (song / state / buffer) arrive from whatever thread the
//! audio engine uses; a [`UiHandle`] pushes them onto a single-consumer
//! queue that the driver loop drains at the top of each tick. Updates never
//! force an out-of-band redraw, so their visible latency is bounded by one
//! tick period.

use deck_core::player::StreamState;
use tokio::sync::mpsc;
use tracing::trace;

/// Song metadata delta. `None` title means "no change"; `None` artist
/// explicitly clears the artist.
#[derive(Debug, Clone, Default)]
pub struct SongChange {
    pub artist: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PlayerUpdate {
    Song(SongChange),
    State(StreamState),
    /// 0..=100; out-of-range values are clamped on application.
    Buffer(u8),
}

/// Cloneable sender half handed to the audio engine / event fabric.
#[derive(Debug, Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<PlayerUpdate>,
}

impl UiHandle {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PlayerUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn on_song_changed(&self, change: SongChange) {
        self.push(PlayerUpdate::Song(change));
    }

    pub fn on_state_changed(&self, state: StreamState) {
        self.push(PlayerUpdate::State(state));
    }

    pub fn on_buffer_changed(&self, buffer: u8) {
        self.push(PlayerUpdate::Buffer(buffer));
    }

    fn push(&self, update: PlayerUpdate) {
        // A closed receiver just means the UI already went away.
        if self.tx.send(update).is_err() {
            trace!("dropping player update, UI loop has exited");
        }
    }
}
