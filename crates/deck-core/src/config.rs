use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::platform;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub station: StationConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Driver-loop tick period in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// The station tuned at startup, before any bookmark is chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    #[serde(default = "default_station_url")]
    pub default_url: String,
    #[serde(default = "default_station_name")]
    pub default_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_mpv_binary")]
    pub mpv_binary: String,
    /// Extra arguments passed to mpv before the stream URL.
    #[serde(default = "default_mpv_args")]
    pub mpv_args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_bookmarks_file")]
    pub bookmarks_file: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            default_url: default_station_url(),
            default_name: default_station_name(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mpv_binary: default_mpv_binary(),
            mpv_args: default_mpv_args(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            bookmarks_file: default_bookmarks_file(),
            log_file: default_log_file(),
        }
    }
}

fn default_tick_ms() -> u64 {
    100
}

fn default_station_url() -> String {
    "http://icecast.omroep.nl/radio1-bb-mp3".to_string()
}

fn default_station_name() -> String {
    "Radio1 NL".to_string()
}

fn default_mpv_binary() -> String {
    "mpv".to_string()
}

fn default_mpv_args() -> Vec<String> {
    vec!["--no-video".to_string(), "--really-quiet".to_string()]
}

fn default_bookmarks_file() -> PathBuf {
    platform::config_dir().join("bookmarks.toml")
}

fn default_log_file() -> PathBuf {
    platform::data_dir().join("tunedeck.log")
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}
