//! Backend registration table

use std::sync::Arc;

use lumber_domain::error::Result;
use lumber_domain::ports::LoggerContextFactory;

/// Registry entry for a backend implementation
///
/// Each backend registers itself with this entry using
/// `#[linkme::distributed_slice(BACKEND_FACTORIES)]`.
pub struct BackendFactoryEntry {
    /// Stable identifier metadata records and the override setting refer to
    pub class_name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating the backend
    pub factory: fn() -> Result<Arc<dyn LoggerContextFactory>>,
}

/// Metadata record linked into the binary
///
/// The linked equivalent of a resource file shipped next to a provider.
pub struct ProviderSourceEntry {
    /// Identity reported in diagnostics
    pub id: &'static str,
    /// TOML metadata record
    pub metadata: &'static str,
}

#[linkme::distributed_slice]
pub static BACKEND_FACTORIES: [BackendFactoryEntry] = [..];

#[linkme::distributed_slice]
pub static PROVIDER_SOURCES: [ProviderSourceEntry] = [..];

/// Find a registered backend by class name
pub fn lookup_backend(class_name: &str) -> Option<&'static BackendFactoryEntry> {
    BACKEND_FACTORIES
        .iter()
        .find(|entry| entry.class_name == class_name)
}

/// List all registered backends as (class name, description) tuples
pub fn list_backends() -> Vec<(&'static str, &'static str)> {
    let mut backends: Vec<_> = BACKEND_FACTORIES
        .iter()
        .map(|e| (e.class_name, e.description))
        .collect();
    backends.sort_unstable();
    backends
}
