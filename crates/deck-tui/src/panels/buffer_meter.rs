//! Buffer meter — a one-row fill gauge for the stream buffer percentage.

use ratatui::backend::Backend;
use ratatui::layout::Rect;

use crate::pane::{Fragment, Pane};
use crate::panels::Panel;
use crate::state::UiState;
use crate::theme::C_METER;

pub struct BufferMeter {
    pub pane: Pane,
}

impl BufferMeter {
    pub fn new(area: Rect) -> Self {
        Self {
            pane: Pane::new(area, false),
        }
    }
}

/// Filled cells for `percent` across `available` columns:
/// `floor(percent / (100 / available))`.
fn filled_cells(percent: u8, available: usize) -> usize {
    if available == 0 {
        return 0;
    }
    let cell_worth = 100.0 / available as f64;
    ((f64::from(percent) / cell_worth) as usize).min(available)
}

impl Panel for BufferMeter {
    fn pane_mut(&mut self) -> &mut Pane {
        &mut self.pane
    }

    fn render<B: Backend>(&mut self, backend: &mut B, state: &UiState) {
        let available = self.pane.width().saturating_sub(2) as usize;
        let filled = filled_cells(state.player.buffer, available);
        let mut bar = "█".repeat(filled);
        bar.push_str(&" ".repeat(available - filled));
        self.pane.draw(backend, |c| {
            c.print_string(1, 0, &[Fragment::new(&bar).color(C_METER)], false);
        });
    }
}
