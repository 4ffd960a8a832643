//! UI driver loop — single cooperative owner of the terminal surface and
//! all panel/menu state.
//!
//! One iteration per fixed tick period (default 100 ms): drain queued player
//! updates, redraw the mode-appropriate main panel + icon + meter every 5th
//! tick and the title ticker every 30th, then a bounded keyboard poll (which
//! doubles as the tick sleep), a terminal-size compare, and mode-keyed key
//! dispatch. Resize is handled synchronously in the tick that detects it:
//! every pane is resized/repositioned and redrawn before the next poll. Key
//! handlers redraw only the panels they touched — that asymmetry is load
//! bearing, don't "simplify" it.

use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::{Rect, Size};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use deck_core::bookmarks::BookmarkProvider;
use deck_core::player::{AudioPlayer, StreamState};

use crate::input::{Key, KeySource};
use crate::menu::TuneRequest;
use crate::panels::{BookmarkPanel, BufferMeter, IconPanel, KeyBar, Panel, StatusPanel, TitleBar};
use crate::state::{CurrentStation, Mode, UiState};
use crate::updates::PlayerUpdate;

const MAIN_CADENCE: u64 = 5;
const TITLE_CADENCE: u64 = 30;

pub struct DriverOptions {
    pub tick: Duration,
    pub initial_station: CurrentStation,
    /// Fixes the icon panel's random picks — used by tests.
    pub animation_seed: Option<u64>,
}

impl DriverOptions {
    pub fn new(initial_station: CurrentStation) -> Self {
        Self {
            tick: Duration::from_millis(100),
            initial_station,
            animation_seed: None,
        }
    }
}

/// Per-panel screen regions. Disjointness across panels is this function's
/// contract, not the pane type's.
struct PanelLayout {
    title: Rect,
    main: Rect,
    icon: Rect,
    key_bar: Rect,
    meter: Rect,
}

fn layout(screen: Size) -> PanelLayout {
    let main_w = screen.width.saturating_sub(10);
    PanelLayout {
        title: Rect::new(0, 0, screen.width, 1),
        main: Rect::new(0, 1, main_w, 5),
        icon: Rect::new(main_w, 1, 9, 5),
        key_bar: Rect::new(0, 6, main_w, 1),
        meter: Rect::new(main_w, 6, 9, 1),
    }
}

/// Snapshot of every pane's draw counter, for cadence/trigger diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCounts {
    pub title: u64,
    pub status: u64,
    pub bookmarks: u64,
    pub icon: u64,
    pub key_bar: u64,
    pub meter: u64,
}

pub struct UiDriver<B: Backend, K: KeySource> {
    backend: B,
    keys: K,
    tick: Duration,
    screen: Size,
    state: UiState,

    title: TitleBar,
    status: StatusPanel,
    bookmarks: BookmarkPanel,
    icon: IconPanel,
    key_bar: KeyBar,
    meter: BufferMeter,

    updates: mpsc::UnboundedReceiver<PlayerUpdate>,
    player: Arc<dyn AudioPlayer>,

    ticks: u64,
    should_quit: bool,
}

impl<B: Backend, K: KeySource> UiDriver<B, K> {
    pub fn new(
        backend: B,
        keys: K,
        provider: &dyn BookmarkProvider,
        player: Arc<dyn AudioPlayer>,
        updates: mpsc::UnboundedReceiver<PlayerUpdate>,
        opts: DriverOptions,
    ) -> anyhow::Result<Self> {
        let screen = backend.size()?;
        let l = layout(screen);
        Ok(Self {
            backend,
            keys,
            tick: opts.tick,
            screen,
            state: UiState::new(opts.initial_station),
            title: TitleBar::new(l.title),
            status: StatusPanel::new(l.main),
            bookmarks: BookmarkPanel::new(l.main, provider),
            icon: IconPanel::new(l.icon, opts.animation_seed)?,
            key_bar: KeyBar::new(l.key_bar),
            meter: BufferMeter::new(l.meter),
            updates,
            player,
            ticks: 0,
            should_quit: false,
        })
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn bookmarks(&self) -> &BookmarkPanel {
        &self.bookmarks
    }

    pub fn icon(&self) -> &IconPanel {
        &self.icon
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn draw_counts(&self) -> DrawCounts {
        DrawCounts {
            title: self.title.pane.draw_count(),
            status: self.status.pane.draw_count(),
            bookmarks: self.bookmarks.pane.draw_count(),
            icon: self.icon.pane.draw_count(),
            key_bar: self.key_bar.pane.draw_count(),
            meter: self.meter.pane.draw_count(),
        }
    }

    /// Run until `q`. Releases the cursor before returning so the owning
    /// process loop can tear the terminal down.
    pub fn run(mut self) -> anyhow::Result<()> {
        info!("driver loop starting, tick={:?}", self.tick);
        self.backend.hide_cursor()?;
        self.backend.clear()?;
        self.key_bar.render(&mut self.backend, &self.state);
        while !self.should_quit {
            self.tick_once();
        }
        self.backend.show_cursor()?;
        info!("driver loop stopped");
        Ok(())
    }

    /// One tick of the loop. Public so tests can step deterministically.
    pub fn tick_once(&mut self) {
        self.drain_updates();

        if self.ticks % MAIN_CADENCE == 0 {
            self.draw_main();
            self.icon.render(&mut self.backend, &self.state);
            self.meter.render(&mut self.backend, &self.state);
        }
        if self.ticks % TITLE_CADENCE == 0 {
            self.title.render(&mut self.backend, &self.state);
        }

        let key = self.keys.poll_key(self.tick);
        self.check_resize();
        if let Some(key) = key {
            self.handle_key(key);
        }
        self.ticks = self.ticks.wrapping_add(1);
    }

    fn draw_main(&mut self) {
        match self.state.mode {
            Mode::Main => self.status.render(&mut self.backend, &self.state),
            Mode::Bookmarks => self.bookmarks.render(&mut self.backend, &self.state),
        }
    }

    // ── Updates (cross-thread queue) ──────────────────────────────────────────

    fn drain_updates(&mut self) {
        while let Ok(update) = self.updates.try_recv() {
            self.apply_update(update);
        }
    }

    fn apply_update(&mut self, update: PlayerUpdate) {
        match update {
            PlayerUpdate::Song(change) => {
                // Absent artist clears; absent title means no change.
                self.state.player.artist = change.artist.unwrap_or_default();
                if let Some(title) = change.title {
                    self.state.player.title = title;
                    if self.state.player.artist.is_empty() {
                        if let Some((artist, rest)) = self.state.player.title.split_once(" - ") {
                            self.state.player.artist = artist.to_string();
                            self.state.player.title = rest.to_string();
                        }
                    }
                }
            }
            PlayerUpdate::State(stream) => {
                self.state.player.stream = stream;
                self.icon.set_running(stream == StreamState::Playing);
            }
            PlayerUpdate::Buffer(buffer) => {
                self.state.player.buffer = buffer.min(100);
            }
        }
    }

    // ── Resize ────────────────────────────────────────────────────────────────

    fn check_resize(&mut self) {
        let size = match self.backend.size() {
            Ok(size) => size,
            Err(e) => {
                warn!("could not read terminal size: {}", e);
                return;
            }
        };
        if size == self.screen {
            return;
        }
        debug!("terminal resized {:?} -> {:?}", self.screen, size);
        self.screen = size;
        self.relayout();
    }

    /// Give every pane its new geometry, then redraw the whole dashboard
    /// before the next keyboard poll.
    fn relayout(&mut self) {
        if let Err(e) = self.backend.clear() {
            warn!("screen clear failed during relayout: {}", e);
        }
        let l = layout(self.screen);
        let s = self.screen;

        place(self.title.pane_mut(), l.title, s);
        place(self.status.pane_mut(), l.main, s);
        place(self.bookmarks.pane_mut(), l.main, s);
        place(self.icon.pane_mut(), l.icon, s);
        place(self.key_bar.pane_mut(), l.key_bar, s);
        place(self.meter.pane_mut(), l.meter, s);

        self.title.render(&mut self.backend, &self.state);
        self.draw_main();
        self.icon.render(&mut self.backend, &self.state);
        self.key_bar.render(&mut self.backend, &self.state);
        self.meter.render(&mut self.backend, &self.state);
    }

    // ── Key dispatch ──────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: Key) {
        if key == Key::Char('q') {
            info!("quit requested");
            self.should_quit = true;
            return;
        }
        match self.state.mode {
            Mode::Main => match key {
                Key::Char('p') => {
                    if self.state.player.stream != StreamState::Playing {
                        self.player.start(&self.state.station.url);
                    } else {
                        self.player.stop();
                    }
                    self.status.render(&mut self.backend, &self.state);
                }
                Key::Char('b') => {
                    self.state.mode = Mode::Bookmarks;
                    self.bookmarks.render(&mut self.backend, &self.state);
                    self.key_bar.render(&mut self.backend, &self.state);
                }
                _ => {}
            },
            Mode::Bookmarks => match key {
                Key::Char('m') => {
                    self.state.mode = Mode::Main;
                    self.status.render(&mut self.backend, &self.state);
                    self.key_bar.render(&mut self.backend, &self.state);
                }
                Key::Up => {
                    self.bookmarks.menu_up();
                    self.bookmarks.render(&mut self.backend, &self.state);
                }
                Key::Down => {
                    self.bookmarks.menu_down();
                    self.bookmarks.render(&mut self.backend, &self.state);
                }
                Key::Char('e') => {
                    if let Some(tune) = self.bookmarks.select() {
                        self.apply_tune(tune);
                    }
                    self.bookmarks.render(&mut self.backend, &self.state);
                }
                Key::Left => {
                    self.bookmarks.go_back();
                    self.bookmarks.render(&mut self.backend, &self.state);
                }
                _ => {}
            },
        }
    }

    fn apply_tune(&mut self, tune: TuneRequest) {
        info!("tuning to {} ({})", tune.name, tune.url);
        self.state.station = CurrentStation {
            url: tune.url,
            name: Some(tune.name),
            bookmarked: true,
        };
        self.player.stop();
        self.player.start(&self.state.station.url);
    }
}

fn place(pane: &mut crate::pane::Pane, rect: Rect, screen: Size) {
    pane.reposition(rect.y, rect.x, screen);
    pane.resize(rect.width, rect.height, screen);
}
