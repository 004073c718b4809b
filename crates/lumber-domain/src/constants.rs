//! Domain layer constants

/// Name of the root logger
pub const ROOT_LOGGER_NAME: &str = "";

/// Label rendered in place of an empty logger name
pub const ROOT_LOGGER_LABEL: &str = "root";

/// Name of the realm used when no isolation boundary can be inferred
pub const DEFAULT_REALM: &str = "default";

/// Name of the single process-global logger context
pub const GLOBAL_CONTEXT_NAME: &str = "global";

/// Placeholder used by [`crate::ParameterizedMessageFactory`]
pub const MESSAGE_PLACEHOLDER: &str = "{}";
