//! tunedeck — a multi-pane terminal dashboard for an internet radio player.
//!
//! The [`driver::UiDriver`] owns the terminal surface and all panel state
//! and runs a fixed-period cooperative tick loop; audio-engine callbacks
//! reach it only through the [`updates::UiHandle`] queue. Panels compose a
//! [`pane::Pane`] (a rectangular frame buffer) with their slice of the
//! shared [`state::UiState`].

pub mod animation;
pub mod driver;
pub mod input;
pub mod menu;
pub mod mpv;
pub mod pane;
pub mod panels;
pub mod state;
pub mod theme;
pub mod updates;
