// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file. On first run the defaults are
//! written out so the file can be edited by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Image search endpoint, page size, ordering, request timeout
//! - `[gallery]` - List view scroll trigger distance and grid layout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `CAT_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use cat_gallery::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("page size: {}", config.api.page_size());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Ordering requested from the search endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
    Rand,
}

impl SortDirection {
    /// Value of the `order` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Desc => "Desc",
            SortDirection::Asc => "Asc",
            SortDirection::Rand => "Rand",
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Image search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. `https://api.thecatapi.com/v1`.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Number of images per page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Result ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortDirection>,

    /// Timeout for every request, in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            order: Some(SortDirection::default()),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Page size clamped to the range the endpoint accepts.
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    pub fn order(&self) -> SortDirection {
        self.order.unwrap_or_default()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
    }
}

/// Gallery layout and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Distance from the bottom of the List view that loads the next page.
    #[serde(
        default = "default_scroll_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_threshold_px: Option<f32>,

    /// Cards per row in Grid view.
    #[serde(
        default = "default_grid_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_columns: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_scroll_threshold_px(),
            grid_columns: default_grid_columns(),
        }
    }
}

impl GalleryConfig {
    pub fn scroll_threshold_px(&self) -> f32 {
        self.scroll_threshold_px
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD_PX)
            .clamp(0.0, MAX_SCROLL_THRESHOLD_PX)
    }

    pub fn grid_columns(&self) -> u32 {
        self.grid_columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

fn default_page_size() -> Option<u32> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_scroll_threshold_px() -> Option<f32> {
    Some(DEFAULT_SCROLL_THRESHOLD_PX)
}

fn default_grid_columns() -> Option<u32> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// A missing file is not an error: defaults are returned and written to the
/// expected location. A file that cannot be read is left untouched.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        let config = Config::default();
        match save_to_path(&config, &path) {
            Ok(()) => log::info!("Wrote default settings to {}", path.display()),
            Err(err) => log::debug!("Could not write {}: {}", path.display(), err),
        }
        return (config, None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
