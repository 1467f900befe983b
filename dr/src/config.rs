//! dailyread configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Verses read per run
pub const DEFAULT_DAILY_VERSES: u32 = 30;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verses read per run
    #[serde(rename = "daily-verses")]
    pub daily_verses: u32,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// File locations
    pub paths: PathsConfig,

    /// Ayah-of-the-day endpoint
    pub quote: QuoteConfig,

    /// README block markers
    pub markers: MarkersConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_verses: DEFAULT_DAILY_VERSES,
            log_level: None,
            paths: PathsConfig::default(),
            quote: QuoteConfig::default(),
            markers: MarkersConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `.dailyread.yml` in the run root, then
    /// `~/.config/dailyread/dailyread.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>, root: &Path) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::default_locations(root) {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, before logging is set up
    pub fn load_log_level(config_path: Option<&PathBuf>, root: &Path) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::default_locations(root),
        };

        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|c| c.log_level)
    }

    fn default_locations(root: &Path) -> Vec<PathBuf> {
        let mut locations = vec![root.join(".dailyread.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("dailyread").join("dailyread.yml"));
        }
        locations
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// File locations, relative paths resolve against the run root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Document with the marker blocks
    pub readme: PathBuf,

    /// Persisted reading state
    pub state: PathBuf,

    /// Surah metadata table
    #[serde(rename = "surah-meta")]
    pub surah_meta: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            state: PathBuf::from("state.json"),
            surah_meta: PathBuf::from("data").join("surah_meta.json"),
        }
    }
}

impl PathsConfig {
    /// Anchor relative paths at `root`
    pub fn resolve(&self, root: &Path) -> Self {
        let anchor = |p: &PathBuf| if p.is_absolute() { p.clone() } else { root.join(p) };
        Self {
            readme: anchor(&self.readme),
            state: anchor(&self.state),
            surah_meta: anchor(&self.surah_meta),
        }
    }
}

/// Ayah-of-the-day endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub url: String,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            url: "https://api.tarteel.io/v1/aad/schedule/".to_string(),
            timeout_secs: 30,
            user_agent: format!("dailyread/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Start/end markers of the two README blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkersConfig {
    #[serde(rename = "reading-start")]
    pub reading_start: String,

    #[serde(rename = "reading-end")]
    pub reading_end: String,

    #[serde(rename = "ayahaday-start")]
    pub ayahaday_start: String,

    #[serde(rename = "ayahaday-end")]
    pub ayahaday_end: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            reading_start: "<!-- READING:START -->".to_string(),
            reading_end: "<!-- READING:END -->".to_string(),
            ayahaday_start: "<!-- AYAHADAY:START -->".to_string(),
            ayahaday_end: "<!-- AYAHADAY:END -->".to_string(),
        }
    }
}
