//! # Local Settings
//!
//! Centralizes the shell's own settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Settings live at `~/.portico/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The remote configuration (menus, app settings) is a different thing
//! entirely and comes from the fetch; this file only decides where to
//! fetch it from and how the drawer behaves.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::nav::NavPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PorticoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NavigationConfig {
    pub home_label: Option<String>,
    pub detail_back_hint: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "https://portosprivados.org.br/api.php";
pub const DEFAULT_HOME_LABEL: &str = "Home";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub policy: NavPolicy,
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

/// Returns the path to `~/.portico/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".portico").join("config.toml"))
}

/// Load settings from `~/.portico/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PorticoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PorticoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default settings");
            return Ok(PorticoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PorticoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PorticoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded settings from {}", path.display());
    debug!("Settings: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Portico Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# endpoint = "https://portosprivados.org.br/api.php"   # Or set PORTICO_ENDPOINT env var

# [navigation]
# home_label = "Home"        # Label of the drawer entry holding the tab group
# detail_back_hint = true    # Show a back hint on detail screens
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final settings by collapsing: defaults → config file → env
/// vars → CLI. `cli_endpoint` comes from the `--endpoint` flag (None = not
/// specified).
pub fn resolve(config: &PorticoConfig, cli_endpoint: Option<&str>) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PORTICO_ENDPOINT").ok())
        .or_else(|| config.general.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let policy = NavPolicy {
        home_label: config
            .navigation
            .home_label
            .clone()
            .unwrap_or_else(|| DEFAULT_HOME_LABEL.to_string()),
        detail_back_hint: config.navigation.detail_back_hint.unwrap_or(true),
    };

    ResolvedConfig { endpoint, policy }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PorticoConfig::default();
        assert!(config.general.endpoint.is_none());
        assert!(config.navigation.home_label.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PorticoConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.policy.home_label, DEFAULT_HOME_LABEL);
        assert!(resolved.policy.detail_back_hint);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PorticoConfig {
            general: GeneralConfig {
                endpoint: Some("https://example.org/api.php".to_string()),
            },
            navigation: NavigationConfig {
                home_label: Some("Início".to_string()),
                detail_back_hint: Some(false),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, "https://example.org/api.php");
        assert_eq!(resolved.policy.home_label, "Início");
        assert!(!resolved.policy.detail_back_hint);
    }

    #[test]
    fn test_resolve_cli_endpoint_wins() {
        let config = PorticoConfig {
            general: GeneralConfig {
                endpoint: Some("https://from-config.example".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("https://from-cli.example"));
        assert_eq!(resolved.endpoint, "https://from-cli.example");
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
endpoint = "https://example.org/api.php"

[navigation]
home_label = "Main"
detail_back_hint = false
"#;
        let config: PorticoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.endpoint.as_deref(),
            Some("https://example.org/api.php")
        );
        assert_eq!(config.navigation.home_label.as_deref(), Some("Main"));
        assert_eq!(config.navigation.detail_back_hint, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[navigation]
home_label = "Início"
"#;
        let config: PorticoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.navigation.home_label.as_deref(), Some("Início"));
        assert!(config.navigation.detail_back_hint.is_none());
        assert!(config.general.endpoint.is_none());
    }
}
