//! # Portal Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FARMCONNECT_SECTION_POLICY=fallback                                │
//! │     FARMCONNECT_CATALOG_PATH=/srv/farmconnect/dataset.json             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $FARMCONNECT_CONFIG, or                                            │
//! │     ~/.config/farmconnect-portal/portal.toml (Linux)                   │
//! │     ~/Library/Application Support/com.farmconnect.portal/portal.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     strict section policy, bundled demo catalog                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [app]
//! name = "FarmConnect"
//! pretty_json = false
//!
//! [session]
//! section_policy = "strict"  # strict | fallback
//!
//! [catalog]
//! path = "/srv/farmconnect/dataset.json"  # omit for the demo dataset
//!
//! [logging]
//! filter = "info,farmconnect=debug"
//! ```

use std::path::PathBuf;

use farmconnect_core::SectionPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::{PortalError, PortalResult};

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Name logged at startup.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Indent response lines (handy when driving the loop by hand).
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_app_name() -> String {
    "FarmConnect".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            name: default_app_name(),
            pretty_json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// What selecting a section outside the role's dashboard does.
    #[serde(default)]
    pub section_policy: SectionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Dataset file; the bundled demo dataset when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,farmconnect=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Portal Configuration
// =============================================================================

/// Complete portal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub app: AppSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl PortalConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, then `FARMCONNECT_CONFIG`, then the
    ///    platform config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> PortalResult<Self> {
        let path = config_path
            .or_else(|| std::env::var_os("FARMCONNECT_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading portal config from file");
                let contents = std::fs::read_to_string(&path)?;
                Self::from_toml(&contents)?
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

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(contents: &str) -> PortalResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> PortalResult<()> {
        if self.app.name.trim().is_empty() {
            return Err(PortalError::InvalidConfig("app.name must not be empty".into()));
        }

        if let Some(path) = &self.catalog.path {
            if path.as_os_str().is_empty() {
                return Err(PortalError::InvalidConfig(
                    "catalog.path must not be empty when set".into(),
                ));
            }
        }

        EnvFilter::try_new(&self.logging.filter).map_err(|e| {
            PortalError::InvalidConfig(format!(
                "logging.filter '{}' is not a valid filter: {}",
                self.logging.filter, e
            ))
        })?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `FARMCONNECT_*` overrides from `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("FARMCONNECT_APP_NAME") {
            self.app.name = name;
        }

        if let Some(pretty) = lookup("FARMCONNECT_PRETTY_JSON") {
            match pretty.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.app.pretty_json = true,
                "0" | "false" | "no" => self.app.pretty_json = false,
                _ => warn!(value = %pretty, "Ignoring FARMCONNECT_PRETTY_JSON"),
            }
        }

        if let Some(policy) = lookup("FARMCONNECT_SECTION_POLICY") {
            match policy.parse() {
                Ok(parsed) => {
                    debug!(policy = %policy, "Overriding section policy from environment");
                    self.session.section_policy = parsed;
                }
                Err(e) => warn!("{}", e),
            }
        }

        if let Some(path) = lookup("FARMCONNECT_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup("FARMCONNECT_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "farmconnect", "portal")
            .map(|dirs| dirs.config_dir().join("portal.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.app.name, "FarmConnect");
        assert_eq!(config.session.section_policy, SectionPolicy::Strict);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.logging.filter, "info,farmconnect=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PortalConfig::from_toml(
            r#"
            [session]
            section_policy = "fallback"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.section_policy, SectionPolicy::Fallback);
        assert_eq!(config.app.name, "FarmConnect");
        assert!(!config.app.pretty_json);
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = PortalConfig::from_toml("[session]\nsection_policy = \"lenient\"\n");
        assert!(matches!(result, Err(PortalError::TomlParse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PortalConfig::default();
        config.apply_overrides(overrides(&[
            ("FARMCONNECT_SECTION_POLICY", "fallback"),
            ("FARMCONNECT_CATALOG_PATH", "/tmp/dataset.json"),
            ("FARMCONNECT_PRETTY_JSON", "true"),
            ("FARMCONNECT_LOG", "warn"),
        ]));

        assert_eq!(config.session.section_policy, SectionPolicy::Fallback);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/dataset.json")));
        assert!(config.app.pretty_json);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = PortalConfig::default();
        config.apply_overrides(overrides(&[
            ("FARMCONNECT_SECTION_POLICY", "sometimes"),
            ("FARMCONNECT_PRETTY_JSON", "maybe"),
        ]));
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = PortalConfig::default();

        config.app.name = "  ".to_string();
        assert!(config.validate().is_err());

        config.app.name = "FarmConnect".to_string();
        config.catalog.path = Some(PathBuf::new());
        assert!(config.validate().is_err());

        config.catalog.path = None;
        config.logging.filter = "farmconnect=loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[app]\nname = \"Valley Co-op\"\npretty_json = true").unwrap();

        let config = PortalConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.app.name, "Valley Co-op");
        assert!(config.app.pretty_json);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&PortalConfig::default()).unwrap();
        assert!(toml_str.contains("[app]"));
        assert!(toml_str.contains("[session]"));
        assert!(toml_str.contains("section_policy = \"strict\""));
    }
}
