//! Backend catalogs
//!
//! A catalog turns the class name found in a metadata record (or in the
//! override setting) into a live backend.

use std::sync::Arc;

use lumber_domain::error::{Error, Result};
use lumber_domain::ports::LoggerContextFactory;

use crate::registry::lookup_backend;

/// Creates backends by registered class name
pub trait BackendCatalog: Send + Sync {
    /// Instantiate the backend registered as `class_name`
    ///
    /// `source_id` names where the class name came from and is carried into
    /// any error.
    fn instantiate(&self, class_name: &str, source_id: &str)
    -> Result<Arc<dyn LoggerContextFactory>>;
}

/// Catalog backed by the `BACKEND_FACTORIES` registration table
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedCatalog;

impl BackendCatalog for LinkedCatalog {
    fn instantiate(
        &self,
        class_name: &str,
        source_id: &str,
    ) -> Result<Arc<dyn LoggerContextFactory>> {
        let entry = lookup_backend(class_name).ok_or_else(|| {
            Error::instantiation(class_name, source_id, "no backend is registered under this name")
        })?;
        (entry.factory)()
            .map_err(|e| Error::instantiation(class_name, source_id, e.to_string()))
    }
}
