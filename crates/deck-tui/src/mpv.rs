//! Best-effort mpv-backed audio player.
//!
//! Spawns the configured mpv binary for a stream URL and kills the child on
//! stop or retune. There is no IPC channel, so state reports are coarse:
//! buffering on spawn attempt, playing once the child is up, stopped
//! otherwise — all pushed through the [`UiHandle`].

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use tracing::{info, warn};

use deck_core::config::PlayerConfig;
use deck_core::player::{AudioPlayer, StreamState};

use crate::updates::UiHandle;

pub struct MpvPlayer {
    config: PlayerConfig,
    handle: UiHandle,
    child: Mutex<Option<Child>>,
}

impl MpvPlayer {
    pub fn new(config: PlayerConfig, handle: UiHandle) -> Self {
        Self {
            config,
            handle,
            child: Mutex::new(None),
        }
    }

    fn kill_child(&self) {
        let mut guard = match self.child.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(mut child) = guard.take() {
            if let Err(e) = child.kill() {
                warn!("could not kill mpv: {}", e);
            }
            let _ = child.wait();
        }
    }
}

impl AudioPlayer for MpvPlayer {
    fn start(&self, url: &str) {
        self.kill_child();
        self.handle.on_state_changed(StreamState::Buffering);
        let spawned = Command::new(&self.config.mpv_binary)
            .args(&self.config.mpv_args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                info!("mpv started for {}", url);
                let mut guard = match self.child.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                *guard = Some(child);
                self.handle.on_state_changed(StreamState::Playing);
                self.handle.on_buffer_changed(100);
            }
            Err(e) => {
                warn!("could not start {}: {}", self.config.mpv_binary, e);
                self.handle.on_state_changed(StreamState::Stopped);
                self.handle.on_buffer_changed(0);
            }
        }
    }

    fn stop(&self) {
        self.kill_child();
        self.handle.on_state_changed(StreamState::Stopped);
        self.handle.on_buffer_changed(0);
    }
}

impl Drop for MpvPlayer {
    fn drop(&mut self) {
        self.kill_child();
    }
}
