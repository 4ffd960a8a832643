//! Audio-player collaborator boundary.

use serde::{Deserialize, Serialize};

/// Playback state as reported by the audio engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamState {
    #[default]
    Stopped,
    Playing,
    Buffering,
    Paused,
}

impl std::fmt::Display for StreamState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StreamState::Stopped => "stopped",
            StreamState::Playing => "playing",
            StreamState::Buffering => "buffering",
            StreamState::Paused => "paused",
        };
        f.write_str(s)
    }
}

/// Best-effort playback control. Implementations report song/state/buffer
/// changes asynchronously through their own channel; neither call returns
/// anything the UI inspects.
pub trait AudioPlayer: Send + Sync {
    fn start(&self, url: &str);
    fn stop(&self);
}
