//! Key-hint bar — context legend for the active mode, shortcut letters
//! highlighted.

use ratatui::backend::Backend;
use ratatui::layout::Rect;

use crate::pane::{Fragment, Pane};
use crate::panels::Panel;
use crate::state::{Mode, UiState};
use crate::theme::C_ACCENT;

pub struct KeyBar {
    pub pane: Pane,
}

impl KeyBar {
    pub fn new(area: Rect) -> Self {
        Self {
            pane: Pane::new(area, false),
        }
    }
}

impl Panel for KeyBar {
    fn pane_mut(&mut self) -> &mut Pane {
        &mut self.pane
    }

    fn render<B: Backend>(&mut self, backend: &mut B, state: &UiState) {
        let (view_key, view_rest) = match state.mode {
            Mode::Main => ("b", "ookmarks view | "),
            Mode::Bookmarks => ("m", "ain view | "),
        };
        self.pane.draw(backend, |c| {
            c.print_string(
                0,
                0,
                &[
                    Fragment::new("p").color(C_ACCENT),
                    Fragment::new("lay/stop | "),
                    Fragment::new(view_key).color(C_ACCENT),
                    Fragment::new(view_rest),
                    Fragment::new("q").color(C_ACCENT),
                    Fragment::new("uit"),
                ],
                true,
            );
        });
    }
}
