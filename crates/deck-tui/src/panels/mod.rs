//! The dashboard panels. Each one composes a [`Pane`](crate::pane::Pane)
//! with its slice of the UI model; the driver decides when each gets drawn.

pub mod bookmark_panel;
pub mod buffer_meter;
pub mod icon_panel;
pub mod key_bar;
pub mod status_panel;
pub mod title_bar;

use ratatui::backend::Backend;

use crate::pane::Pane;
use crate::state::UiState;

/// The capability set the driver relies on for every panel: reach the pane
/// for resize/reposition, and render on demand.
pub trait Panel {
    fn pane_mut(&mut self) -> &mut Pane;
    fn render<B: Backend>(&mut self, backend: &mut B, state: &UiState);
}

pub use bookmark_panel::BookmarkPanel;
pub use buffer_meter::BufferMeter;
pub use icon_panel::IconPanel;
pub use key_bar::KeyBar;
pub use status_panel::StatusPanel;
pub use title_bar::TitleBar;
