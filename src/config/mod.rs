//! Application configuration.
//!
//! Loaded from an optional YAML file plus environment variables with the
//! `CQRS_SCAFFOLD` prefix. Every field has a default so the toolkit works
//! out of the box.

use std::path::PathBuf;

use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "CQRS_SCAFFOLD_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "CQRS_SCAFFOLD";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "CQRS_SCAFFOLD_LOG";
/// Environment variable overriding the template directory used by `new`.
pub const TEMPLATES_ENV_VAR: &str = "CQRS_SCAFFOLD_TEMPLATES";

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Build(#[from] config::ConfigError),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Master-data table configuration.
    pub master: MasterConfig,
    /// Scaffolding (CLI) configuration.
    pub scaffold: ScaffoldConfig,
}

/// Master-data table configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MasterConfig {
    /// Logical table holding master-setting records.
    pub table_name: String,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            table_name: "master".to_string(),
        }
    }
}

/// Scaffolding configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Template tree used by the `new` command; `None` falls back to the
    /// tree shipped with the binary.
    pub template_dir: Option<PathBuf>,
    /// Git repository holding the shared UI-component tree.
    pub ui_repo_url: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_dir: None,
            ui_repo_url: "https://github.com/mbc-cqrs/ui-common.git".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `config.yaml` in the current directory (if it exists)
    /// 2. File specified by the `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` (if set)
    /// 4. Environment variables with the `CONFIG_ENV_PREFIX` prefix
    pub fn load(path: Option<&str>) -> Result<Self> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Create config for testing.
    pub fn for_test() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.master.table_name, "master");
        assert!(config.scaffold.template_dir.is_none());
    }

    #[test]
    fn test_config_for_test() {
        let config = Config::for_test();
        assert!(config.scaffold.ui_repo_url.starts_with("https://"));
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "master:\n  table_name: tenant_master\nscaffold:\n  ui_repo_url: https://example.com/ui.git\n",
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.master.table_name, "tenant_master");
        assert_eq!(config.scaffold.ui_repo_url, "https://example.com/ui.git");
        // Unset sections keep their defaults.
        assert!(config.scaffold.template_dir.is_none());
    }

    #[test]
    fn test_config_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(Config::load(Some(path.to_str().unwrap())).is_err());
    }
}
