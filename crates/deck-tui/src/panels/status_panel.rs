//! Status panel — fixed-label artist / title / stream-state rows.

use ratatui::backend::Backend;
use ratatui::layout::Rect;

use crate::pane::{Fragment, Pane};
use crate::panels::Panel;
use crate::state::UiState;
use crate::theme::{C_ACCENT, C_PLAYING, C_SECONDARY};

pub struct StatusPanel {
    pub pane: Pane,
}

impl StatusPanel {
    pub fn new(area: Rect) -> Self {
        Self {
            pane: Pane::new(area, true),
        }
    }
}

impl Panel for StatusPanel {
    fn pane_mut(&mut self) -> &mut Pane {
        &mut self.pane
    }

    fn render<B: Backend>(&mut self, backend: &mut B, state: &UiState) {
        let artist = state.player.artist.clone();
        let title = state.player.title.clone();
        let stream = state.player.stream.to_string();
        self.pane.draw(backend, |c| {
            c.print_string(
                1,
                1,
                &[
                    Fragment::new("Artist | ").color(C_ACCENT),
                    Fragment::new(&artist).color(C_ACCENT).bold(),
                ],
                false,
            );
            c.print_string(
                1,
                2,
                &[
                    Fragment::new("Title  | ").color(C_SECONDARY),
                    Fragment::new(&title).color(C_SECONDARY).bold(),
                ],
                false,
            );
            c.print_string(
                1,
                3,
                &[
                    Fragment::new("State  | ").color(C_PLAYING),
                    Fragment::new(&stream).color(C_PLAYING).bold(),
                ],
                false,
            );
        });
    }
}
