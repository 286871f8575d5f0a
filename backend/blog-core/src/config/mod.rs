use crate::error::config::ConfigError;
use crate::{APP_NAME, DEFAULT_ARCHIVE_SIZE, DEFAULT_INITIAL_POST_COUNT};

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

const MAX_INITIAL_POST_COUNT: usize = 1_000;
const MAX_ARCHIVE_SIZE: usize = 100_000;
const MAX_ARCHIVE_PAGE_SIZE: usize = 500;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default = "default_initial_post_count")]
    pub initial_post_count: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            initial_post_count: default_initial_post_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default = "default_archive_size")]
    pub size: usize,
    #[serde(default)]
    pub show_on_start: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            size: default_archive_size(),
            show_on_start: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub fake_dark_mode: bool,
    #[serde(default = "default_archive_page_size")]
    pub archive_page_size: usize,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            fake_dark_mode: false,
            archive_page_size: default_archive_page_size(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible posts. Unset means fresh random posts each run.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub blog: BlogConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub ui: UiPreferences,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            blog: BlogConfig::default(),
            archive: ArchiveConfig::default(),
            ui: UiPreferences::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_initial_post_count() -> usize {
    DEFAULT_INITIAL_POST_COUNT
}
fn default_archive_size() -> usize {
    DEFAULT_ARCHIVE_SIZE
}
fn default_archive_page_size() -> usize {
    20
}

// ============================================
// IMPLEMENTATION
// ============================================

/// Default config directory: `{platform config dir}/atomic-blog`.
///
/// # Errors
///
/// Returns [`ConfigError::DirectoryNotFound`] if the platform has no config dir.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Default log directory: `{platform local data dir}/atomic-blog/logs`.
///
/// # Errors
///
/// Returns [`ConfigError::DirectoryNotFound`] if the platform has no data dir.
pub fn default_log_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_NAME).join("logs"))
        .ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
        })
}

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using temp file + rename.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - Validation fails
    /// - Directory creation fails
    /// - Serialization fails
    /// - Write or rename fails
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.blog.initial_post_count > MAX_INITIAL_POST_COUNT {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid initial_post_count: {} (must be 0-{})",
                    self.blog.initial_post_count, MAX_INITIAL_POST_COUNT
                ),
            });
        }

        if self.archive.size > MAX_ARCHIVE_SIZE {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid archive size: {} (must be 0-{})",
                    self.archive.size, MAX_ARCHIVE_SIZE
                ),
            });
        }

        if self.ui.archive_page_size == 0 || self.ui.archive_page_size > MAX_ARCHIVE_PAGE_SIZE {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid archive_page_size: {} (must be 1-{})",
                    self.ui.archive_page_size, MAX_ARCHIVE_PAGE_SIZE
                ),
            });
        }

        Ok(())
    }
}
