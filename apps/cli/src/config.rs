//! # CLI Configuration
//!
//! Where the snapshots live, how receipts look, and how loud the logs are.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --data-dir ./shop                                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     GROCER_DATA_DIR=./shop                                             │
//! │     GROCER_STORE_NAME="Corner Store"                                   │
//! │     GROCER_LOG=warn                                                    │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/store/config.toml (Linux)                                │
//! │     ~/Library/Application Support/com.grocer.store/config.toml (macOS) │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     platform data dir, "Grocer"                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! data_dir = "/srv/grocer"
//! items_file = "items_data.json"
//! bills_file = "bills_data.json"
//!
//! [display]
//! store_name = "Corner Store"
//!
//! [log]
//! filter = "info,grocer=debug"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use grocer_store::{StoreConfig, BILLS_FILE, ITEMS_FILE};

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,grocer=debug";

/// Fallback data directory when the platform has no home directory.
const FALLBACK_DATA_DIR: &str = "./data";

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The config file exists but could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value is present but unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// `[store]`: snapshot locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Directory holding both snapshots.
    /// Default: the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default: items_data.json
    #[serde(default = "default_items_file")]
    pub items_file: String,

    /// Default: bills_data.json
    #[serde(default = "default_bills_file")]
    pub bills_file: String,
}

fn default_items_file() -> String {
    ITEMS_FILE.to_string()
}

fn default_bills_file() -> String {
    BILLS_FILE.to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        StoreSection {
            data_dir: None,
            items_file: default_items_file(),
            bills_file: default_bills_file(),
        }
    }
}

/// `[display]`: receipt and listing presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Printed at the top of receipts.
    #[serde(default = "default_store_name")]
    pub store_name: String,
}

fn default_store_name() -> String {
    "Grocer".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            store_name: default_store_name(),
        }
    }
}

/// `[log]`: tracing filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    /// `EnvFilter` directive string. `RUST_LOG` still wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogSection {
    fn default() -> Self {
        LogSection {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub log: LogSection,

    /// The file this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`explicit`, else the platform default path)
    /// 3. Environment variables
    ///
    /// A missing default config file is normal; a missing explicit one is
    /// an error.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match explicit {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses one TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: AppConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, file) in [
            ("store.items_file", &self.store.items_file),
            ("store.bills_file", &self.store.bills_file),
        ] {
            if file.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
            if file.contains('/') || file.contains('\\') {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a file name, not a path: {}",
                    key, file
                )));
            }
        }

        if self.store.items_file == self.store.bills_file {
            return Err(ConfigError::Invalid(
                "store.items_file and store.bills_file must differ".into(),
            ));
        }

        if let Some(dir) = &self.store.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("store.data_dir must not be empty".into()));
            }
        }

        if EnvFilter::try_new(&self.log.filter).is_err() {
            return Err(ConfigError::Invalid(format!(
                "log.filter is not a valid filter: {}",
                self.log.filter
            )));
        }

        Ok(())
    }

    /// Applies `GROCER_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("GROCER_DATA_DIR") {
            self.store.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(name) = lookup("GROCER_STORE_NAME") {
            self.display.store_name = name;
        }

        if let Some(filter) = lookup("GROCER_LOG") {
            self.log.filter = filter;
        }
    }

    /// The data directory to open, resolving the platform default.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.grocer.store/`
    /// - **Windows**: `%APPDATA%\grocer\store\data\`
    /// - **Linux**: `~/.local/share/store/`
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.store.data_dir {
            return dir.clone();
        }
        match project_dirs() {
            Some(dirs) => dirs.data_dir().to_path_buf(),
            None => {
                tracing::warn!(
                    fallback = FALLBACK_DATA_DIR,
                    "No platform data directory, using fallback"
                );
                PathBuf::from(FALLBACK_DATA_DIR)
            }
        }
    }

    /// Builds the store configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.data_dir())
            .items_file(self.store.items_file.clone())
            .bills_file(self.store.bills_file.clone())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "grocer", "store")
}

/// Returns the default config file path.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store.items_file, "items_data.json");
        assert_eq!(config.store.bills_file, "bills_data.json");
        assert_eq!(config.display.store_name, "Grocer");
        assert_eq!(config.log.filter, DEFAULT_LOG_FILTER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_with_partial_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[store]\ndata_dir = \"/srv/grocer\"\n\n[display]\nstore_name = \"Corner Store\"\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.store.data_dir, Some(PathBuf::from("/srv/grocer")));
        assert_eq!(config.store.items_file, "items_data.json");
        assert_eq!(config.display.store_name, "Corner Store");
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn test_currency_symbol_is_not_configurable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ncurrency_symbol = \"Rs. \"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.display, DisplayConfig::default());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_str.contains("currency_symbol"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store\n").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides_from(lookup(&[
            ("GROCER_DATA_DIR", "/tmp/shop"),
            ("GROCER_STORE_NAME", "Corner Store"),
            ("GROCER_LOG", "warn"),
        ]));

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/shop"));
        assert_eq!(config.display.store_name, "Corner Store");
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_env_overrides_leave_unset_values() {
        let mut config = AppConfig::default();
        config.apply_overrides_from(lookup(&[]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.store.items_file = "  ".into();
        assert!(config.validate().is_err());

        config.store.items_file = "nested/items.json".into();
        assert!(config.validate().is_err());

        config.store.items_file = "bills_data.json".into();
        assert!(config.validate().is_err());

        config.store.items_file = "inventory.json".into();
        assert!(config.validate().is_ok());

        config.store.data_dir = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_store_config_uses_file_names() {
        let mut config = AppConfig::default();
        config.store.data_dir = Some(PathBuf::from("/srv/grocer"));
        config.store.items_file = "inventory.json".into();

        let store = config.store_config();
        assert_eq!(store.data_dir, PathBuf::from("/srv/grocer"));
        assert_eq!(store.items_file, "inventory.json");
        assert_eq!(store.bills_file, "bills_data.json");
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[store]"));
        assert!(toml_str.contains("[display]"));
        assert!(toml_str.contains("[log]"));
    }
}
