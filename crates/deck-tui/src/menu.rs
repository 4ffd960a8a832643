//! Two-level bookmark menu: group list at depth 0, the chosen group's
//! stations at depth 1.
//!
//! The cursor tracks a position inside a scroll window of `visible_rows`
//! entries; the logical selection is always `scroll + cursor`. Invariants
//! kept at all times for a non-empty list:
//!   scroll ∈ [0, max(0, len − visible_rows)]
//!   cursor ∈ [0, min(visible_rows, len) − 1]

use deck_core::bookmarks::BookmarkProvider;

/// Emitted when a station is chosen at depth 1. The driver applies it —
/// the menu itself never touches the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneRequest {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone)]
struct MenuStation {
    name: String,
    url: String,
}

#[derive(Debug, Clone)]
struct MenuGroup {
    name: String,
    stations: Vec<MenuStation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Groups,
    Stations,
}

pub struct BookmarkMenu {
    groups: Vec<MenuGroup>,
    depth: Depth,
    selected_group: usize,
    selected_station: usize,
    scroll: usize,
    cursor: usize,
    visible_rows: usize,
}

impl BookmarkMenu {
    /// Query the store once and keep the tree for the session. A group
    /// literally named "root" is an artifact of flat stores and is skipped.
    pub fn new(provider: &dyn BookmarkProvider) -> Self {
        let groups = provider
            .list_group_names()
            .into_iter()
            .filter(|name| name != "root")
            .map(|name| {
                let stations = provider
                    .list_radios_in_group(&name)
                    .into_iter()
                    .filter_map(|station| {
                        provider.get_radio_url(&station).map(|url| MenuStation {
                            name: station,
                            url,
                        })
                    })
                    .collect();
                MenuGroup { name, stations }
            })
            .collect();
        Self {
            groups,
            depth: Depth::Groups,
            selected_group: 0,
            selected_station: 0,
            scroll: 0,
            cursor: 0,
            visible_rows: 3,
        }
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Logical selection index into the current list.
    pub fn selected_index(&self) -> usize {
        self.scroll + self.cursor
    }

    /// Names currently listed (groups at depth 0, the chosen group's
    /// stations at depth 1), in store order.
    pub fn current_entries(&self) -> Vec<&str> {
        match self.depth {
            Depth::Groups => self.groups.iter().map(|g| g.name.as_str()).collect(),
            Depth::Stations => self
                .groups
                .get(self.selected_group)
                .map(|g| g.stations.iter().map(|s| s.name.as_str()).collect())
                .unwrap_or_default(),
        }
    }

    fn current_len(&self) -> usize {
        match self.depth {
            Depth::Groups => self.groups.len(),
            Depth::Stations => self
                .groups
                .get(self.selected_group)
                .map(|g| g.stations.len())
                .unwrap_or(0),
        }
    }

    /// The panel reports its row budget before rendering or navigating;
    /// cursor and scroll are re-clamped so a shrunken window can't leave
    /// the selection outside it.
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows.max(1);
        self.clamp();
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    fn clamp(&mut self) {
        let len = self.current_len();
        if len == 0 {
            self.scroll = 0;
            self.cursor = 0;
            return;
        }
        let max_scroll = len.saturating_sub(self.visible_rows);
        self.scroll = self.scroll.min(max_scroll);
        let max_cursor = self.visible_rows.min(len) - 1;
        self.cursor = self.cursor.min(max_cursor);
        if self.scroll + self.cursor >= len {
            self.cursor = len - 1 - self.scroll;
        }
    }

    fn reset_cursor(&mut self) {
        self.scroll = 0;
        self.cursor = 0;
    }

    pub fn menu_up(&mut self) {
        if self.current_len() == 0 {
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.scroll > 0 {
            self.scroll -= 1;
        }
    }

    pub fn menu_down(&mut self) {
        let len = self.current_len();
        if len == 0 {
            return;
        }
        let max_cursor = self.visible_rows.min(len) - 1;
        let max_scroll = len.saturating_sub(self.visible_rows);
        if self.cursor < max_cursor && self.selected_index() + 1 < len {
            self.cursor += 1;
        } else if self.scroll < max_scroll {
            self.scroll += 1;
        }
    }

    /// Descend into the highlighted group, or choose the highlighted station.
    /// Only the latter produces a tune-effect.
    pub fn select(&mut self) -> Option<TuneRequest> {
        if self.current_len() == 0 {
            return None;
        }
        match self.depth {
            Depth::Groups => {
                self.selected_group = self.selected_index();
                self.depth = Depth::Stations;
                self.reset_cursor();
                None
            }
            Depth::Stations => {
                self.selected_station = self.selected_index();
                self.reset_cursor();
                let station = &self.groups[self.selected_group].stations[self.selected_station];
                Some(TuneRequest {
                    url: station.url.clone(),
                    name: station.name.clone(),
                })
            }
        }
    }

    /// Back out of the station list. A no-op at the group level.
    pub fn go_back(&mut self) {
        if self.depth == Depth::Stations {
            self.depth = Depth::Groups;
            self.reset_cursor();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::bookmarks::TomlBookmarks;

    fn sample_menu() -> BookmarkMenu {
        let bookmarks = TomlBookmarks::from_toml_str(
            r#"
            [[group]]
            name = "Jazz"
            [[group.station]]
            name = "Jazz FM"
            url = "http://x"

            [[group]]
            name = "Rock"
            [[group.station]]
            name = "Rock One"
            url = "http://rock1"
            [[group.station]]
            name = "Rock Two"
            url = "http://rock2"
            [[group.station]]
            name = "Rock Three"
            url = "http://rock3"
            [[group.station]]
            name = "Rock Four"
            url = "http://rock4"
            "#,
        )
        .unwrap();
        BookmarkMenu::new(&bookmarks)
    }

    #[test]
    fn select_group_then_station_emits_tune_request() {
        let mut menu = sample_menu();
        assert_eq!(menu.current_entries(), vec!["Jazz", "Rock"]);

        assert!(menu.select().is_none());
        assert_eq!(menu.depth(), Depth::Stations);
        assert_eq!(menu.current_entries(), vec!["Jazz FM"]);

        let tune = menu.select().expect("station select emits tune-effect");
        assert_eq!(tune.url, "http://x");
        assert_eq!(tune.name, "Jazz FM");
        assert_eq!((menu.scroll(), menu.cursor()), (0, 0));
    }

    #[test]
    fn descending_shows_exactly_the_chosen_groups_stations_in_order() {
        let mut menu = sample_menu();
        menu.menu_down();
        menu.select();
        assert_eq!(
            menu.current_entries(),
            vec!["Rock One", "Rock Two", "Rock Three", "Rock Four"]
        );
    }

    #[test]
    fn go_back_at_depth_zero_is_a_noop() {
        let mut menu = sample_menu();
        menu.menu_down();
        menu.go_back();
        assert_eq!(menu.depth(), Depth::Groups);
        assert_eq!(menu.selected_index(), 1);

        menu.select();
        menu.go_back();
        assert_eq!(menu.depth(), Depth::Groups);
        assert_eq!((menu.scroll(), menu.cursor()), (0, 0));
    }

    #[test]
    fn cursor_and_scroll_stay_in_bounds() {
        let mut menu = sample_menu();
        menu.menu_down();
        menu.select(); // Rock: 4 stations

        for rows in 1..=6usize {
            menu.set_visible_rows(rows);
            for _ in 0..10 {
                menu.menu_down();
                check_invariants(&menu, 4, rows);
            }
            assert_eq!(menu.selected_index(), 3, "rows={rows}");
            for _ in 0..10 {
                menu.menu_up();
                check_invariants(&menu, 4, rows);
            }
            assert_eq!(menu.selected_index(), 0, "rows={rows}");
        }
    }

    fn check_invariants(menu: &BookmarkMenu, len: usize, rows: usize) {
        assert!(menu.scroll() <= len.saturating_sub(rows));
        assert!(menu.cursor() <= rows.min(len) - 1);
        assert!(menu.selected_index() < len);
    }

    #[test]
    fn shrinking_window_reclamps_the_cursor() {
        let mut menu = sample_menu();
        menu.menu_down();
        menu.select();
        menu.set_visible_rows(4);
        for _ in 0..3 {
            menu.menu_down();
        }
        assert_eq!(menu.cursor(), 3);
        menu.set_visible_rows(2);
        assert!(menu.cursor() <= 1);
        assert!(menu.selected_index() < 4);
    }

    #[test]
    fn empty_store_makes_navigation_noops() {
        let bookmarks = TomlBookmarks::from_toml_str("").unwrap();
        let mut menu = BookmarkMenu::new(&bookmarks);
        menu.menu_down();
        menu.menu_up();
        assert!(menu.select().is_none());
        assert_eq!((menu.scroll(), menu.cursor()), (0, 0));
    }

    #[test]
    fn root_group_is_skipped() {
        let bookmarks = TomlBookmarks::from_toml_str(
            r#"
            [[group]]
            name = "root"
            [[group]]
            name = "Jazz"
            "#,
        )
        .unwrap();
        let menu = BookmarkMenu::new(&bookmarks);
        assert_eq!(menu.current_entries(), vec!["Jazz"]);
    }
}
