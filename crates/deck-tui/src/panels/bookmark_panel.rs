//! Bookmark selector panel — renders the menu's scroll window and forwards
//! navigation to the state machine. Station choice comes back to the driver
//! as a [`TuneRequest`].

use ratatui::backend::Backend;
use ratatui::layout::Rect;

use deck_core::bookmarks::BookmarkProvider;

use crate::menu::{BookmarkMenu, TuneRequest};
use crate::pane::{Fragment, Pane};
use crate::panels::Panel;
use crate::state::UiState;
use crate::theme::{C_MARKER, C_PLAYING};

pub struct BookmarkPanel {
    pub pane: Pane,
    pub menu: BookmarkMenu,
}

impl BookmarkPanel {
    pub fn new(area: Rect, provider: &dyn BookmarkProvider) -> Self {
        Self {
            pane: Pane::new(area, true),
            menu: BookmarkMenu::new(provider),
        }
    }

    fn sync_rows(&mut self) {
        let rows = self.pane.height().saturating_sub(2).max(1) as usize;
        self.menu.set_visible_rows(rows);
    }

    pub fn menu_up(&mut self) {
        self.sync_rows();
        self.menu.menu_up();
    }

    pub fn menu_down(&mut self) {
        self.sync_rows();
        self.menu.menu_down();
    }

    pub fn select(&mut self) -> Option<TuneRequest> {
        self.sync_rows();
        self.menu.select()
    }

    pub fn go_back(&mut self) {
        self.menu.go_back();
    }
}

impl Panel for BookmarkPanel {
    fn pane_mut(&mut self) -> &mut Pane {
        &mut self.pane
    }

    fn render<B: Backend>(&mut self, backend: &mut B, _state: &UiState) {
        self.sync_rows();
        let rows = self.menu.visible_rows();
        let scroll = self.menu.scroll();
        let selected = self.menu.selected_index();
        let entries = self.menu.current_entries();
        self.pane.draw(backend, |c| {
            for i in 0..rows {
                let idx = scroll + i;
                let Some(name) = entries.get(idx) else {
                    // Rows beyond the list stay blank.
                    break;
                };
                let marker = if idx == selected { ">> " } else { "   " };
                c.print_string(
                    1,
                    1 + i as u16,
                    &[
                        Fragment::new(marker).color(C_MARKER),
                        Fragment::new(name).color(C_PLAYING),
                    ],
                    false,
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CurrentStation, UiState};
    use deck_core::bookmarks::TomlBookmarks;
    use ratatui::backend::TestBackend;

    fn provider() -> TomlBookmarks {
        TomlBookmarks::from_toml_str(
            r#"
            [[group]]
            name = "Jazz"
            [[group.station]]
            name = "Jazz FM"
            url = "http://x"

            [[group]]
            name = "Rock"
            "#,
        )
        .unwrap()
    }

    fn blank_state() -> UiState {
        UiState::new(CurrentStation {
            url: String::new(),
            name: None,
            bookmarked: false,
        })
    }

    #[test]
    fn marks_the_selected_row() {
        let p = provider();
        let mut backend = TestBackend::new(20, 5);
        let mut panel = BookmarkPanel::new(Rect::new(0, 0, 20, 5), &p);
        panel.menu_down();
        panel.render(&mut backend, &blank_state());

        let line = |y: u16| -> String {
            (0..20)
                .map(|x| backend.buffer().cell((x, y)).unwrap().symbol().to_string())
                .collect()
        };
        assert!(line(1).contains("   Jazz"));
        assert!(line(2).contains(">> Rock"));
    }

    #[test]
    fn jazz_scenario_emits_tune_request_and_resets_cursor() {
        let p = provider();
        let mut panel = BookmarkPanel::new(Rect::new(0, 0, 20, 5), &p);
        assert!(panel.select().is_none());
        let tune = panel.select().unwrap();
        assert_eq!(tune.url, "http://x");
        assert_eq!(tune.name, "Jazz FM");
        assert_eq!((panel.menu.scroll(), panel.menu.cursor()), (0, 0));
    }
}
