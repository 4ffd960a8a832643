//! Shared collaborator-boundary types for the tunedeck UI.
//!
//! Everything the terminal front end consumes from the outside world lives
//! here: the bookmark store, the configuration loader, platform paths, and
//! the audio-player interface. The UI crate (`deck-tui`) depends on this one
//! and never on a concrete store or player directly.

pub mod bookmarks;
pub mod config;
pub mod platform;
pub mod player;
