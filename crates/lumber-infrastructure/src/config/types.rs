//! Configuration types

use std::path::PathBuf;

use lumber_domain::value_objects::{ComponentDeclaration, Level};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FALLBACK_LEVEL, DEFAULT_LOG_LEVEL};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LumberConfig {
    /// Backend selection
    pub manager: ManagerConfig,

    /// Lumber's own diagnostics
    pub logging: LoggingConfig,

    /// Components built and installed at bootstrap
    pub components: Vec<ComponentDeclaration>,
}

/// Backend selection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Registered class name selected ahead of discovery
    pub logger_context_factory: Option<String>,

    /// Directories searched for `META-INF/lumber-provider.toml` records
    pub provider_search_path: Vec<PathBuf>,

    /// Whether records linked into the binary take part in discovery
    pub scan_linked: bool,

    /// Threshold of the fallback backend's loggers
    pub fallback_level: Level,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            logger_context_factory: None,
            provider_search_path: Vec::new(),
            scan_linked: true,
            fallback_level: DEFAULT_FALLBACK_LEVEL,
        }
    }
}

/// Diagnostic logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
