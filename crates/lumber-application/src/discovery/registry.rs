//! Provider registry

use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::{debug, error, warn};

use lumber_domain::error::{Error, Result};
use lumber_domain::ports::LoggerContextFactory;

use super::catalog::{BackendCatalog, LinkedCatalog};
use super::metadata::ProviderMetadata;
use super::source::{LinkedSources, ProviderSource, SourceLocator};
use crate::version::is_compatible;

/// A discovered, instantiated and version-checked backend
#[derive(Clone)]
pub struct ProviderDescriptor {
    /// The backend instance
    pub factory: Arc<dyn LoggerContextFactory>,
    /// Registered class name
    pub class_name: String,
    /// Declared API version
    pub api_version: String,
    /// Declared priority
    pub priority: i32,
    /// Record the backend was discovered through
    pub source_id: String,
}

impl std::fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("class_name", &self.class_name)
            .field("api_version", &self.api_version)
            .field("priority", &self.priority)
            .field("source_id", &self.source_id)
            .finish()
    }
}

/// Enumerates, validates and ranks backend providers
#[derive(Clone)]
pub struct ProviderRegistry {
    locator: Arc<dyn SourceLocator>,
    catalog: Arc<dyn BackendCatalog>,
}

impl ProviderRegistry {
    /// Create a registry over a locator and catalog
    pub fn new(locator: Arc<dyn SourceLocator>, catalog: Arc<dyn BackendCatalog>) -> Self {
        Self { locator, catalog }
    }

    /// Registry over the linked records and registered backends
    pub fn linked() -> Self {
        Self::new(Arc::new(LinkedSources), Arc::new(LinkedCatalog))
    }

    /// Catalog used to instantiate backends
    pub fn catalog(&self) -> &Arc<dyn BackendCatalog> {
        &self.catalog
    }

    /// Discover every usable provider, ordered by ascending priority
    ///
    /// Never fails: enumeration, parse and instantiation failures are logged
    /// and the affected sources are skipped. Providers sharing a priority
    /// keep only the one discovered last.
    pub fn discover(&self) -> Vec<ProviderDescriptor> {
        let sources = match self.locator.sources() {
            Ok(sources) => sources,
            Err(e) => {
                error!(locator = %self.locator.describe(), error = %e, "Unable to locate provider records");
                Vec::new()
            }
        };

        let mut by_priority: BTreeMap<i32, ProviderDescriptor> = BTreeMap::new();
        for source in &sources {
            match self.load(source) {
                Ok(Some(descriptor)) => {
                    if let Some(replaced) = by_priority.get(&descriptor.priority) {
                        warn!(
                            priority = descriptor.priority,
                            replaced = %replaced.class_name,
                            replacement = %descriptor.class_name,
                            "Providers share a priority; the one discovered last is kept"
                        );
                    }
                    by_priority.insert(descriptor.priority, descriptor);
                }
                Ok(None) => {}
                Err(e) => error!(source = %source.id, error = %e, "Skipping provider"),
            }
        }
        by_priority.into_values().collect()
    }

    /// Load one record; `Ok(None)` means the record was deliberately ignored
    fn load(&self, source: &ProviderSource) -> Result<Option<ProviderDescriptor>> {
        let text = source.read()?;
        let metadata = ProviderMetadata::parse(&source.id, &text)?;

        if !is_compatible(metadata.api_version.as_deref()) {
            debug!(
                source = %source.id,
                version = ?metadata.api_version,
                "Ignoring provider with incompatible API version"
            );
            return Ok(None);
        }

        let Some(class_name) = metadata.factory.clone() else {
            debug!(source = %source.id, "Provider record names no factory");
            return Ok(None);
        };

        let priority = metadata.priority(&source.id)?;
        let factory = self.instantiate(&class_name, &source.id)?;
        Ok(Some(ProviderDescriptor {
            factory,
            class_name,
            api_version: metadata.api_version.unwrap_or_default(),
            priority,
            source_id: source.id.clone(),
        }))
    }

    /// Instantiate through the catalog; a panicking factory becomes an error
    pub fn instantiate(
        &self,
        class_name: &str,
        source_id: &str,
    ) -> Result<Arc<dyn LoggerContextFactory>> {
        catch_unwind(AssertUnwindSafe(|| {
            self.catalog.instantiate(class_name, source_id)
        }))
        .unwrap_or_else(|_| {
            Err(Error::instantiation(
                class_name,
                source_id,
                "backend factory panicked",
            ))
        })
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("locator", &self.locator.describe())
            .finish_non_exhaustive()
    }
}
