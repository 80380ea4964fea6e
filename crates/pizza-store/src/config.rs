//! # Catalog Configuration
//!
//! Settings for the `pizza-catalog` binary and any shell that embeds the store.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PIZZA_CATALOG_FIXTURE=./menu.json                                  │
//! │     PIZZA_AUTHENTICATED=true                                           │
//! │     PIZZA_LOG=debug                                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/builder/pizza.toml (Linux)                               │
//! │     ~/Library/Application Support/com.pizza.builder/pizza.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     bundled fixture, anonymous session, "info,pizza_store=debug"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pizza.toml
//! [catalog]
//! fixture = "/srv/pizza/menu.json"
//!
//! [session]
//! authenticated = true
//!
//! [log]
//! filter = "info,pizza_store=trace"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Sections
// =============================================================================

/// Where reference data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// JSON fixture to serve the catalog from. `None` uses the bundled one.
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

/// Session the store starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Start authenticated, which makes init fetch addresses and orders.
    #[serde(default)]
    pub authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,pizza_store=debug".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl PizzaConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (pizza.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> StoreResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| StoreError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.log.filter.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "log.filter must not be empty".into(),
            ));
        }

        if let Some(ref fixture) = self.catalog.fixture {
            if fixture.as_os_str().is_empty() {
                return Err(StoreError::InvalidConfig(
                    "catalog.fixture must not be an empty path".into(),
                ));
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `PIZZA_*` overrides read through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("PIZZA_CATALOG_FIXTURE") {
            debug!(fixture = %path, "Overriding catalog fixture from environment");
            self.catalog.fixture = Some(PathBuf::from(path));
        }

        if let Some(value) = var("PIZZA_AUTHENTICATED") {
            match parse_flag(&value) {
                Some(flag) => self.session.authenticated = flag,
                None => warn!(value = %value, "Unknown PIZZA_AUTHENTICATED value in environment"),
            }
        }

        if let Some(filter) = var("PIZZA_LOG") {
            self.log.filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pizza", "builder")
            .map(|dirs| dirs.config_dir().join("pizza.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
