//! Configuration module for the import completion engine.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `ESM_` and use double underscores
//! to separate nested levels:
//! - `ESM_COMPLETION__IMPORT_LOOKAHEAD=4000` sets `completion.import_lookahead`
//! - `ESM_COMPLETION__AMBIENT_ENABLED=false` sets `completion.ambient_enabled`
//! - `ESM_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::imports::DEFAULT_IMPORT_LOOKAHEAD;

/// Directory holding `settings.toml`, searched for from the current
/// directory upwards.
pub const CONFIG_DIR_NAME: &str = ".esm-complete";

const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Completion behaviour
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CompletionConfig {
    /// Characters at the top of a document searched for imports
    #[serde(default = "default_import_lookahead")]
    pub import_lookahead: usize,

    /// Offer ambient (browser global) bindings without an import
    #[serde(default = "default_true")]
    pub ambient_enabled: bool,

    /// JSON file replacing the bundled ambient completions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for all modules
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `esm_complete::modules = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_import_lookahead() -> usize {
    DEFAULT_IMPORT_LOOKAHEAD
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            completion: CompletionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            import_lookahead: default_import_lookahead(),
            ambient_enabled: true,
            ambient_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME));

        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honoring `ESM_` variables
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore
            // stays part of the field name
            .merge(Env::prefixed("ESM_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find `settings.toml` by walking from the current directory to the root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR_NAME);
            if config_dir.is_dir() {
                return Some(config_dir.join(SETTINGS_FILE_NAME));
            }
        }

        None
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file under `dir`
    pub fn init_config_file(dir: &Path, force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.completion.import_lookahead, 1000);
        assert!(settings.completion.ambient_enabled);
        assert!(settings.completion.ambient_path.is_none());
        assert_eq!(settings.logging.default, "warn");
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
version = 2

[completion]
import_lookahead = 4000
ambient_enabled = false
ambient_path = "globals.json"

[logging]
default = "debug"

[logging.modules]
"esm_complete::modules" = "trace"
"#;

        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.version, 2);
        assert_eq!(settings.completion.import_lookahead, 4000);
        assert!(!settings.completion.ambient_enabled);
        assert_eq!(
            settings.completion.ambient_path,
            Some(PathBuf::from("globals.json"))
        );
        assert_eq!(settings.logging.default, "debug");
        assert_eq!(settings.logging.modules["esm_complete::modules"], "trace");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[completion]\nimport_lookahead = 250\n").unwrap();

        let settings = Settings::load_from(&config_path).unwrap();

        // Modified values
        assert_eq!(settings.completion.import_lookahead, 250);

        // Default values should still be present
        assert_eq!(settings.version, 1);
        assert!(settings.completion.ambient_enabled);
        assert_eq!(settings.logging.default, "warn");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_init() {
        let temp_dir = TempDir::new().unwrap();

        let path = Settings::init_config_file(temp_dir.path(), false).unwrap();
        assert!(path.ends_with(".esm-complete/settings.toml"));
        assert!(Settings::init_config_file(temp_dir.path(), false).is_err());
        assert!(Settings::init_config_file(temp_dir.path(), true).is_ok());

        let mut settings = Settings::default();
        settings.completion.import_lookahead = 64;
        settings.save(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.completion.import_lookahead, 64);
    }
}
