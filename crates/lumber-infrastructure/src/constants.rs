//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Names shared with backends are defined in `lumber_domain::constants`.

use lumber_domain::value_objects::Level;

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lumber.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "lumber";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "LUMBER";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// DIAGNOSTIC LOGGING CONSTANTS
// ============================================================================

/// Default level of lumber's own diagnostics
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the diagnostic filter
pub const LOG_ENV_VAR: &str = "LUMBER_LOG";

// ============================================================================
// BACKEND SELECTION CONSTANTS
// ============================================================================

/// Source identity reported for the configured override
pub const OVERRIDE_SOURCE_ID: &str = "manager.logger_context_factory";

/// Identifier of the built-in fallback backend
pub const FALLBACK_CLASS_NAME: &str = "lumber.infrastructure.SimpleContextFactory";

/// Name of the fallback backend's single context
pub const FALLBACK_CONTEXT_NAME: &str = "simple";

/// Default threshold of fallback loggers
pub const DEFAULT_FALLBACK_LEVEL: Level = Level::Error;

/// Caller identity used by the log manager itself
pub const MANAGER_CALLER: &str = "lumber";
