//! Discovery constants

/// Relative path of a provider metadata record inside a search-path entry
pub const PROVIDER_RESOURCE: &str = "META-INF/lumber-provider.toml";

/// Metadata key naming the backend implementation
pub const KEY_CONTEXT_FACTORY: &str = "LoggerContextFactory";

/// Metadata key carrying the declared API version
pub const KEY_API_VERSION: &str = "ApiVersion";

/// Metadata key carrying the declared priority
pub const KEY_FACTORY_PRIORITY: &str = "FactoryPriority";

/// Priority assumed when a record does not declare one
pub const DEFAULT_PRIORITY: i32 = -1;

/// API versions this facade accepts, matched as string prefixes
pub const COMPATIBLE_API_VERSIONS: &[&str] = &["2.0.0", "2.0.1"];
