//! Title bar — a slow three-phase ticker across the top row.
//!
//! Each draw shows one phase and advances to the next: the static banner,
//! then the tuned URL, then the station name when the station came from a
//! bookmark (otherwise back to the banner). The panel's own redraw cadence
//! makes this tick slowly.

use ratatui::backend::Backend;
use ratatui::layout::Rect;

use crate::pane::{Fragment, Pane};
use crate::panels::Panel;
use crate::state::UiState;

const BANNER: &str = concat!("** tunedeck v", env!("CARGO_PKG_VERSION"), " **");

pub struct TitleBar {
    pub pane: Pane,
    phase: u8,
}

impl TitleBar {
    pub fn new(area: Rect) -> Self {
        Self {
            pane: Pane::new(area, false),
            phase: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> u8 {
        self.phase
    }
}

impl Panel for TitleBar {
    fn pane_mut(&mut self) -> &mut Pane {
        &mut self.pane
    }

    fn render<B: Backend>(&mut self, backend: &mut B, state: &UiState) {
        let title: String = match self.phase {
            0 => {
                self.phase = 1;
                BANNER.to_string()
            }
            1 => {
                self.phase = if state.station.bookmarked { 2 } else { 0 };
                state.station.url.clone()
            }
            _ => {
                self.phase = 0;
                state.station.name.clone().unwrap_or_default()
            }
        };
        self.pane.draw(backend, |c| {
            c.erase_line(0, true);
            c.print_string(0, 0, &[Fragment::new(&title).reverse()], true);
        });
    }
}
