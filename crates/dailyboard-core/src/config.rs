use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::resolver::{MAX_RETRIES, RETRY_STRIDE};
use crate::validate;

/// Main configuration structure
///
/// Loaded from a TOML file; every field has a default so a missing file
/// means a fully working board.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub museum: MuseumConfig,
    pub weather: WeatherConfig,
    pub cache: CacheConfig,
    pub content: ContentConfig,
}

impl Config {
    /// Load config from default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            // No config file? Use defaults
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Config file path: XDG config dir on Unix-likes, AppData on Windows
    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::Config("Could not find config directory".into()))?
            .join("dailyboard");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuseumConfig {
    /// Full search URL, query string included
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Object endpoint base; the object id is appended
    #[serde(default = "default_object_url")]
    pub object_url: String,

    /// Candidates examined per day before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Per-attempt index stride, a large prime
    #[serde(default = "default_retry_stride")]
    pub retry_stride: i64,

    /// Smallest acceptable image edge in pixels
    #[serde(default = "default_min_image_dimension")]
    pub min_image_dimension: u32,

    /// Filename markers for the museum's "no photo" assets
    #[serde(default = "default_placeholder_markers")]
    pub placeholder_markers: Vec<String>,
}

fn default_search_url() -> String {
    dailyboard_api::MET_SEARCH_URL.to_string()
}

fn default_object_url() -> String {
    dailyboard_api::MET_OBJECT_URL.to_string()
}

fn default_max_retries() -> u32 {
    MAX_RETRIES
}

fn default_retry_stride() -> i64 {
    RETRY_STRIDE
}

fn default_min_image_dimension() -> u32 {
    validate::MIN_IMAGE_DIMENSION
}

fn default_placeholder_markers() -> Vec<String> {
    validate::default_markers()
}

impl Default for MuseumConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            object_url: default_object_url(),
            max_retries: default_max_retries(),
            retry_stride: default_retry_stride(),
            min_image_dimension: default_min_image_dimension(),
            placeholder_markers: default_placeholder_markers(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_latitude() -> f64 {
    49.253657 // Vancouver, where the board hangs
}

fn default_longitude() -> f64 {
    -123.164873
}

fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    /// Override for the SQLite file location
    pub path: Option<PathBuf>,
}

impl CacheConfig {
    /// Resolved database path: the override, or the platform data dir
    pub fn db_path(&self) -> crate::Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| crate::Error::Config("Could not find data directory".into()))?
            .join("dailyboard");

        Ok(data_dir.join("cache.db"))
    }
}

/// Paths to the rotation content lists. Absent paths mean that widget
/// stays empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    pub notes_path: Option<PathBuf>,
    pub captions_path: Option<PathBuf>,
    pub games_path: Option<PathBuf>,
}
