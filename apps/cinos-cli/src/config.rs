//! # Stand Configuration
//!
//! Receipt layout and price-list overrides for the stand.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CINOS_RECEIPT_HEADER="=== Boardwalk Receipt ==="                   │
//! │     CINOS_RECEIPT_SEPARATOR="~~~~"                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, else $CINOS_CONFIG, else                          │
//! │     ~/.config/cinos-stand/stand.toml (Linux)                           │
//! │     ~/Library/Application Support/com.cinos.stand/stand.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Built-in Cinos menu, "=== Cinos Receipt ===" header                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [receipt]
//! header = "=== Cinos Receipt ==="
//! separator = "----------------------"
//!
//! # Each table present here replaces the built-in one
//! [menu.food]
//! "Hotdog" = "2.30"
//! "Pretzel" = "2.50"
//!
//! [menu.toppings]
//! "Ketchup" = "0.00"
//! ```
//!
//! Prices are strings so they never pass through a float.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use cinos_core::receipt::{DEFAULT_HEADER, DEFAULT_SEPARATOR};
use cinos_core::{Menu, PriceTable, ReceiptFormatter};

use crate::error::{CliError, CliResult};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "CINOS_CONFIG";

// =============================================================================
// Receipt Settings
// =============================================================================

/// Receipt layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSettings {
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for ReceiptSettings {
    fn default() -> Self {
        ReceiptSettings {
            header: default_header(),
            separator: default_separator(),
        }
    }
}

impl ReceiptSettings {
    pub fn formatter(&self) -> ReceiptFormatter {
        ReceiptFormatter::new(self.header.clone(), self.separator.clone())
    }
}

// =============================================================================
// Menu Settings
// =============================================================================

/// Price-list overrides. `None` keeps the built-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toppings: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavors: Option<BTreeMap<String, String>>,
}

impl MenuSettings {
    /// Builds the menu: the Cinos defaults with any configured tables swapped in.
    pub fn to_menu(&self) -> CliResult<Menu> {
        let mut menu = Menu::cinos();

        if let Some(food) = &self.food {
            menu = menu.with_food(PriceTable::parse("food", food)?);
        }
        if let Some(toppings) = &self.toppings {
            menu = menu.with_toppings(PriceTable::parse("topping", toppings)?);
        }
        if let Some(flavors) = &self.flavors {
            menu = menu.with_flavors(PriceTable::parse("flavor", flavors)?);
        }

        Ok(menu)
    }
}

// =============================================================================
// Stand Config
// =============================================================================

/// Complete stand configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandConfig {
    #[serde(default)]
    pub receipt: ReceiptSettings,

    #[serde(default)]
    pub menu: MenuSettings,
}

impl StandConfig {
    /// Loads configuration with priority:
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    ///
    /// A path given explicitly (argument or `CINOS_CONFIG`) must exist; the
    /// platform default path is optional.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = config_path.or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path));
                }
                info!(?path, "Loading stand config from file");
                read_toml(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading stand config from file");
                    read_toml(&path)?
                }
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration, including every configured price.
    pub fn validate(&self) -> CliResult<()> {
        if self.receipt.header.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "receipt header must not be empty".to_string(),
            ));
        }

        self.menu.to_menu()?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(header) = lookup("CINOS_RECEIPT_HEADER") {
            debug!(header = %header, "Overriding receipt header from environment");
            self.receipt.header = header;
        }

        if let Some(separator) = lookup("CINOS_RECEIPT_SEPARATOR") {
            debug!(separator = %separator, "Overriding receipt separator from environment");
            self.receipt.separator = separator;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cinos", "stand")
            .map(|dirs| dirs.config_dir().join("stand.toml"))
    }
}

/// Reads and deserializes a TOML file.
pub fn read_toml<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = StandConfig::default();

        assert_eq!(config.receipt.header, "=== Cinos Receipt ===");
        assert_eq!(config.receipt.separator, "----------------------");
        assert_eq!(config.menu.to_menu().unwrap(), Menu::cinos());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [receipt]
            header = "=== Boardwalk ==="

            [menu.food]
            "Pretzel" = "2.50"
            "Hotdog" = "2.45"
            "#,
        );

        let config = StandConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.receipt.header, "=== Boardwalk ===");
        assert_eq!(config.receipt.separator, "----------------------");

        let menu = config.menu.to_menu().unwrap();
        assert_eq!(menu.food().len(), 2);
        assert_eq!(menu.food().lookup("pretzel").unwrap().cents(), 250);
        assert_eq!(menu.food().lookup("hotdog").unwrap().cents(), 245);
        // Untouched tables keep the built-in prices
        assert_eq!(menu.flavors(), Menu::cinos().flavors());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = StandConfig::load(Some(path.clone())).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound(p) if p == path));
    }

    #[test]
    fn test_bad_price_fails_validation() {
        let file = write_config(
            r#"
            [menu.toppings]
            "Chili" = "0.605"
            "#,
        );

        let err = StandConfig::load(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn test_malformed_toml_reports_path() {
        let file = write_config("[receipt\nheader = 1");

        let err = StandConfig::load(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
    }

    #[test]
    fn test_empty_header_is_rejected() {
        let mut config = StandConfig::default();
        config.receipt.header = "   ".to_string();

        assert!(matches!(
            config.validate(),
            Err(CliError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = StandConfig::default();
        config.apply_overrides(|key| match key {
            "CINOS_RECEIPT_HEADER" => Some("** Pier 9 **".to_string()),
            _ => None,
        });

        assert_eq!(config.receipt.header, "** Pier 9 **");
        assert_eq!(config.receipt.separator, DEFAULT_SEPARATOR);
        assert_eq!(config.receipt.formatter().header(), "** Pier 9 **");
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&StandConfig::default()).unwrap();
        assert!(toml_str.contains("[receipt]"));
        assert!(toml_str.contains("=== Cinos Receipt ==="));
    }
}
