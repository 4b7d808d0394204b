//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.proplog/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! With nothing configured anywhere the tool behaves like the classic
//! version: `listings.txt` in the working directory, unlimited retries
//! on invalid integer input, colored output.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProplogConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub store_path: Option<String>,
    pub max_input_retries: Option<u32>,
    pub color: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STORE_PATH: &str = "listings.txt";

/// 0 means "re-prompt forever", the classic behavior.
pub const DEFAULT_MAX_INPUT_RETRIES: u32 = 0;

const DEFAULT_CONFIG_CONTENTS: &str = r#"# Proplog Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# store_path = "listings.txt"    # Working-directory relative unless absolute.
                                 # Env override: PROPLOG_STORE. CLI: --store.
# max_input_retries = 0          # Rejected integer inputs allowed per prompt.
                                 # 0 = re-prompt forever.
# color = true                   # ANSI colors. Env override: PROPLOG_COLOR
                                 # ("0", "false", "off", "no" disable).
"#;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub store_path: PathBuf,
    pub max_input_retries: u32,
    pub color: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.proplog/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".proplog").join("config.toml"))
}

/// Load config from `~/.proplog/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ProplogConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse` - reported before any session begins.
pub fn load_config() -> Result<ProplogConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ProplogConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ProplogConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ProplogConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENTS) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_store` is the `--store` flag (None = not specified).
pub fn resolve(config: &ProplogConfig, cli_store: Option<&str>) -> ResolvedConfig {
    // Store path: CLI → env → config → default
    let store_path = cli_store
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PROPLOG_STORE").ok())
        .or_else(|| config.general.store_path.clone())
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());

    // Color: env → config → default (on)
    let color = match std::env::var("PROPLOG_COLOR") {
        Ok(value) => color_flag(&value),
        Err(_) => config.general.color.unwrap_or(true),
    };

    ResolvedConfig {
        store_path: PathBuf::from(store_path),
        max_input_retries: config
            .general
            .max_input_retries
            .unwrap_or(DEFAULT_MAX_INPUT_RETRIES),
        color,
    }
}

/// `0`, `false`, `off` and `no` (any case) disable color; anything else enables it.
fn color_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ProplogConfig::default();
        assert!(config.general.store_path.is_none());
        assert!(config.general.max_input_retries.is_none());
        assert!(config.general.color.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ProplogConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.store_path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(resolved.max_input_retries, DEFAULT_MAX_INPUT_RETRIES);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ProplogConfig {
            general: GeneralConfig {
                store_path: Some("/var/data/flats.txt".to_string()),
                max_input_retries: Some(3),
                color: Some(false),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.store_path, PathBuf::from("/var/data/flats.txt"));
        assert_eq!(resolved.max_input_retries, 3);
        assert!(!resolved.color);
    }

    #[test]
    fn test_resolve_cli_store_wins() {
        let config = ProplogConfig {
            general: GeneralConfig {
                store_path: Some("from-config.txt".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("from-cli.txt"));
        assert_eq!(resolved.store_path, PathBuf::from("from-cli.txt"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing - everything else stays default
        let toml_str = r#"
[general]
max_input_retries = 5
"#;
        let config: ProplogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.max_input_retries, Some(5));
        assert!(config.general.store_path.is_none());
        assert!(config.general.color.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
store_path = "flats.txt"
max_input_retries = 2
color = false
"#;
        let config: ProplogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.store_path.as_deref(), Some("flats.txt"));
        assert_eq!(config.general.max_input_retries, Some(2));
        assert_eq!(config.general.color, Some(false));
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        // Fully commented out, so it must parse as an empty config
        let config: ProplogConfig = toml::from_str(DEFAULT_CONFIG_CONTENTS).unwrap();
        assert!(config.general.store_path.is_none());
    }

    #[test]
    fn test_color_flag_values() {
        for off in ["0", "false", "off", "no", "FALSE", " Off "] {
            assert!(!color_flag(off), "{off:?} should disable color");
        }
        for on in ["1", "true", "yes", "on", "anything"] {
            assert!(color_flag(on), "{on:?} should enable color");
        }
    }
}
