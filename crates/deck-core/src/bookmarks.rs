//! Bookmark data store — hierarchical group → station → URL lookup.
//!
//! The UI queries this once at construction through the read-only
//! [`BookmarkProvider`] boundary. The shipped implementation reads a TOML
//! file of `[[group]]` / `[[group.station]]` tables and seeds a small
//! default list on first run.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Read-only station lookup. Groups are ordered; stations keep the order
/// they appear in within their group.
pub trait BookmarkProvider {
    fn list_group_names(&self) -> Vec<String>;
    fn list_radios_in_group(&self, group: &str) -> Vec<String>;
    fn get_radio_url(&self, station: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlBookmarks {
    #[serde(default, rename = "group")]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default, rename = "station")]
    pub stations: Vec<Station>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub url: String,
}

impl TomlBookmarks {
    /// Load bookmarks from `path`. A missing file is seeded with a default
    /// list (so a fresh install has something to tune); a malformed file is
    /// a construction-time fatal error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("bookmarks file {} not found, seeding defaults", path.display());
            let bookmarks = Self::default_list();
            bookmarks.save(path)?;
            return Ok(bookmarks);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read bookmarks file {}", path.display()))?;
        let bookmarks: Self = toml::from_str(&content)
            .with_context(|| format!("malformed bookmarks file {}", path.display()))?;
        Ok(bookmarks)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn default_list() -> Self {
        Self {
            groups: vec![
                Group {
                    name: "News".to_string(),
                    stations: vec![Station {
                        name: "Radio1 NL".to_string(),
                        url: "http://icecast.omroep.nl/radio1-bb-mp3".to_string(),
                    }],
                },
                Group {
                    name: "Eclectic".to_string(),
                    stations: vec![
                        Station {
                            name: "NTS 1".to_string(),
                            url: "https://stream-relay-geo.ntslive.net/stream".to_string(),
                        },
                        Station {
                            name: "NTS 2".to_string(),
                            url: "https://stream-relay-geo.ntslive.net/stream2".to_string(),
                        },
                    ],
                },
            ],
        }
    }
}

impl BookmarkProvider for TomlBookmarks {
    fn list_group_names(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.name.clone()).collect()
    }

    fn list_radios_in_group(&self, group: &str) -> Vec<String> {
        self.groups
            .iter()
            .find(|g| g.name == group)
            .map(|g| g.stations.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }

    fn get_radio_url(&self, station: &str) -> Option<String> {
        self.groups
            .iter()
            .flat_map(|g| g.stations.iter())
            .find(|s| s.name == station)
            .map(|s| s.url.clone())
    }
}
