use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::info;

use deck_core::bookmarks::TomlBookmarks;
use deck_core::player::AudioPlayer;
use deck_core::config::Config;
use deck_tui::driver::{DriverOptions, UiDriver};
use deck_tui::input::CrosstermKeys;
use deck_tui::mpv::MpvPlayer;
use deck_tui::state::CurrentStation;
use deck_tui::updates::UiHandle;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_default();

    let log_path = &config.paths.log_file;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print the log path before the alternate screen swallows stderr.
    eprintln!("tunedeck log: {}", log_path.display());
    info!("tunedeck starting…");

    let bookmarks = TomlBookmarks::load(&config.paths.bookmarks_file)?;

    let (handle, updates) = UiHandle::channel();
    let player = Arc::new(MpvPlayer::new(config.player.clone(), handle));

    let initial_station = CurrentStation {
        url: config.station.default_url.clone(),
        name: Some(config.station.default_name.clone()),
        bookmarked: false,
    };
    let mut opts = DriverOptions::new(initial_station);
    opts.tick = Duration::from_millis(config.ui.tick_ms.max(1));

    let backend = CrosstermBackend::new(io::stdout());
    let driver = UiDriver::new(
        backend,
        CrosstermKeys,
        &bookmarks,
        player.clone(),
        updates,
        opts,
    )?;

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    // The driver loop is synchronous and owns the surface; park it on a
    // blocking thread and wait for `q`.
    let result = tokio::task::spawn_blocking(move || driver.run()).await;

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    player.stop();

    result??;
    info!("tunedeck stopped");
    Ok(())
}
