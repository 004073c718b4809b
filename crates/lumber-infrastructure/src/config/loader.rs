//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lumber_domain::error::{Error, Result};
use lumber_domain::value_objects::{ComponentDeclaration, Level};

use crate::config::{LoggingConfig, LumberConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `LumberConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix, `__` between nested keys
    ///    (e.g., `LUMBER_MANAGER__LOGGER_CONTEXT_FACTORY`)
    pub fn load(&self) -> Result<LumberConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(LumberConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: LumberConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Render a configuration as TOML
    pub fn render(config: &LumberConfig) -> Result<String> {
        toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate configuration values
fn validate_config(config: &LumberConfig) -> Result<()> {
    if config
        .manager
        .logger_context_factory
        .as_deref()
        .is_some_and(|class| class.trim().is_empty())
    {
        return Err(Error::configuration(
            "manager.logger_context_factory cannot be empty",
        ));
    }
    parse_log_level(&config.logging.level)?;
    for (index, declaration) in config.components.iter().enumerate() {
        validate_declaration(declaration)
            .map_err(|message| Error::configuration(format!("components[{index}]: {message}")))?;
    }
    Ok(())
}

fn validate_declaration(declaration: &ComponentDeclaration) -> std::result::Result<(), String> {
    if declaration.type_name.trim().is_empty() {
        return Err("component type cannot be empty".to_string());
    }
    declaration.children.iter().try_for_each(validate_declaration)
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: LumberConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a backend ahead of discovery
    pub fn with_override(mut self, class_name: impl Into<String>) -> Self {
        self.config.manager.logger_context_factory = Some(class_name.into());
        self
    }

    /// Add a directory to the provider search path
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.manager.provider_search_path.push(path.into());
        self
    }

    /// Include or exclude linked provider records
    pub fn with_linked_providers(mut self, scan: bool) -> Self {
        self.config.manager.scan_linked = scan;
        self
    }

    /// Set the fallback backend's threshold
    pub fn with_fallback_level(mut self, level: Level) -> Self {
        self.config.manager.fallback_level = level;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Declare a component
    pub fn with_component(mut self, declaration: ComponentDeclaration) -> Self {
        self.config.components.push(declaration);
        self
    }

    /// Build the configuration, applying the loader's validation
    pub fn build(self) -> Result<LumberConfig> {
        validate_config(&self.config)?;
        Ok(self.config)
    }
}
