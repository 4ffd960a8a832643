//! End-to-end driver-loop scenarios over a `TestBackend`: key dispatch,
//! redraw scope per trigger, resize adaptation, and the cross-thread update
//! path.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ratatui::backend::TestBackend;

use deck_core::bookmarks::TomlBookmarks;
use deck_core::player::{AudioPlayer, StreamState};
use deck_tui::driver::{DriverOptions, UiDriver};
use deck_tui::input::{Key, KeySource};
use deck_tui::state::{CurrentStation, Mode};
use deck_tui::updates::{SongChange, UiHandle};

// ── Test doubles ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct ScriptedKeys {
    queue: Arc<Mutex<VecDeque<Key>>>,
}

impl ScriptedKeys {
    fn press(&self, key: Key) {
        self.queue.lock().unwrap().push_back(key);
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self, _timeout: Duration) -> Option<Key> {
        self.queue.lock().unwrap().pop_front()
    }
}

#[derive(Clone, Default)]
struct RecordingPlayer {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingPlayer {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AudioPlayer for RecordingPlayer {
    fn start(&self, url: &str) {
        self.calls.lock().unwrap().push(format!("start:{url}"));
    }

    fn stop(&self) {
        self.calls.lock().unwrap().push("stop".to_string());
    }
}

// ── Harness ───────────────────────────────────────────────────────────────────

fn bookmarks() -> TomlBookmarks {
    TomlBookmarks::from_toml_str(
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
        "#,
    )
    .unwrap()
}

fn options() -> DriverOptions {
    let mut opts = DriverOptions::new(CurrentStation {
        url: "http://default".to_string(),
        name: Some("Default FM".to_string()),
        bookmarked: false,
    });
    opts.tick = Duration::ZERO;
    opts.animation_seed = Some(1);
    opts
}

struct Harness {
    driver: UiDriver<TestBackend, ScriptedKeys>,
    keys: ScriptedKeys,
    player: RecordingPlayer,
    handle: UiHandle,
}

fn harness(width: u16, height: u16) -> Harness {
    let keys = ScriptedKeys::default();
    let player = RecordingPlayer::default();
    let (handle, updates) = UiHandle::channel();
    let store = bookmarks();
    let driver = UiDriver::new(
        TestBackend::new(width, height),
        keys.clone(),
        &store,
        Arc::new(player.clone()),
        updates,
        options(),
    )
    .unwrap();
    Harness {
        driver,
        keys,
        player,
        handle,
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn run_terminates_on_q() {
    let mut h = harness(80, 24);
    h.keys.press(Key::Char('q'));
    h.driver.tick_once();
    assert!(h.driver.should_quit());
    h.driver.run().unwrap();
}

#[test]
fn cadence_draws_main_panels_every_fifth_tick_and_title_every_thirtieth() {
    let mut h = harness(80, 24);
    for _ in 0..30 {
        h.driver.tick_once();
    }
    let counts = h.driver.draw_counts();
    assert_eq!(counts.status, 6); // ticks 0,5,10,15,20,25
    assert_eq!(counts.icon, 6);
    assert_eq!(counts.meter, 6);
    assert_eq!(counts.title, 1); // tick 0 only
    assert_eq!(counts.bookmarks, 0);
    assert_eq!(counts.key_bar, 0); // only key handlers and resize touch it here
}

#[test]
fn key_handlers_redraw_only_affected_panels() {
    let mut h = harness(80, 24);
    h.driver.tick_once(); // tick 0: cadence draws
    let before = h.driver.draw_counts();

    h.keys.press(Key::Char('b'));
    h.driver.tick_once(); // tick 1: no cadence, just the handler
    let after = h.driver.draw_counts();

    assert_eq!(h.driver.state().mode, Mode::Bookmarks);
    assert_eq!(after.bookmarks, before.bookmarks + 1);
    assert_eq!(after.key_bar, before.key_bar + 1);
    assert_eq!(after.status, before.status);
    assert_eq!(after.title, before.title);
    assert_eq!(after.icon, before.icon);
    assert_eq!(after.meter, before.meter);
}

#[test]
fn resize_relayouts_and_redraws_everything_in_the_same_tick() {
    let mut h = harness(80, 24);
    h.driver.tick_once(); // tick 0
    let before = h.driver.draw_counts();

    h.driver.backend_mut().resize(40, 24);
    h.driver.tick_once(); // tick 1: no cadence draws, only the resize path
    let after = h.driver.draw_counts();

    assert_eq!(after.title, before.title + 1);
    assert_eq!(after.status, before.status + 1);
    assert_eq!(after.icon, before.icon + 1);
    assert_eq!(after.key_bar, before.key_bar + 1);
    assert_eq!(after.meter, before.meter + 1);
    // Hidden while in main mode, so the relayout skips its redraw.
    assert_eq!(after.bookmarks, before.bookmarks);
}

#[test]
fn panels_below_minimum_go_inactive_until_regrown() {
    let mut h = harness(80, 24);
    h.driver.tick_once();
    assert!(h.driver.icon().pane.is_active());

    h.driver.backend_mut().resize(8, 24);
    h.driver.tick_once();
    assert!(!h.driver.icon().pane.is_active());

    h.driver.backend_mut().resize(80, 24);
    h.driver.tick_once();
    assert!(h.driver.icon().pane.is_active());
}

#[test]
fn selecting_a_bookmark_tunes_the_player() {
    let mut h = harness(80, 24);
    h.keys.press(Key::Char('b'));
    h.driver.tick_once();
    h.keys.press(Key::Char('e')); // descend into Jazz
    h.driver.tick_once();
    h.keys.press(Key::Char('e')); // choose Jazz FM
    h.driver.tick_once();

    let station = &h.driver.state().station;
    assert_eq!(station.url, "http://x");
    assert_eq!(station.name.as_deref(), Some("Jazz FM"));
    assert!(station.bookmarked);
    assert_eq!(
        h.player.calls(),
        vec!["stop".to_string(), "start:http://x".to_string()]
    );
    assert_eq!(
        (h.driver.bookmarks().menu.scroll(), h.driver.bookmarks().menu.cursor()),
        (0, 0)
    );
}

#[test]
fn left_arrow_backs_out_of_a_group_and_is_noop_at_depth_zero() {
    let mut h = harness(80, 24);
    h.keys.press(Key::Char('b'));
    h.driver.tick_once();
    h.keys.press(Key::Char('e'));
    h.driver.tick_once();
    h.keys.press(Key::Left);
    h.driver.tick_once();
    h.keys.press(Key::Left); // already at groups: no-op
    h.driver.tick_once();
    assert_eq!(h.driver.state().mode, Mode::Bookmarks);
    assert!(h.player.calls().is_empty());
}

#[test]
fn play_key_starts_and_stops_via_the_collaborator() {
    let mut h = harness(80, 24);
    h.keys.press(Key::Char('p'));
    h.driver.tick_once();
    assert_eq!(h.player.calls(), vec!["start:http://default".to_string()]);

    h.handle.on_state_changed(StreamState::Playing);
    h.keys.press(Key::Char('p'));
    h.driver.tick_once(); // update drained first, so 'p' now stops
    assert_eq!(
        h.player.calls(),
        vec!["start:http://default".to_string(), "stop".to_string()]
    );
}

#[test]
fn updates_mutate_state_and_drive_the_icon_animation() {
    let mut h = harness(80, 24);
    h.handle.on_song_changed(SongChange {
        artist: None,
        title: Some("Alice Coltrane - Journey".to_string()),
    });
    h.handle.on_state_changed(StreamState::Playing);
    h.handle.on_buffer_changed(200);
    h.driver.tick_once();

    let player_state = &h.driver.state().player;
    assert_eq!(player_state.artist, "Alice Coltrane");
    assert_eq!(player_state.title, "Journey");
    assert_eq!(player_state.stream, StreamState::Playing);
    assert_eq!(player_state.buffer, 100, "buffer clamps to 100");
    assert!(h.driver.icon().is_running());

    h.handle.on_state_changed(StreamState::Buffering);
    h.driver.tick_once();
    assert!(!h.driver.icon().is_running(), "non-playing states stop the icon");
}

#[test]
fn absent_artist_clears_previous_value() {
    let mut h = harness(80, 24);
    h.handle.on_song_changed(SongChange {
        artist: Some("Sun Ra".to_string()),
        title: Some("Lanquidity".to_string()),
    });
    h.driver.tick_once();
    assert_eq!(h.driver.state().player.artist, "Sun Ra");

    h.handle.on_song_changed(SongChange {
        artist: None,
        title: Some("Station Jingle".to_string()),
    });
    h.driver.tick_once();
    assert_eq!(h.driver.state().player.artist, "");
    assert_eq!(h.driver.state().player.title, "Station Jingle");
}
