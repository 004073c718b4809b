//! Provider Discovery
//!
//! ```text
//! SourceLocator::sources()        → every reachable metadata record
//!        │  (enumeration failure: logged, zero sources)
//!        ▼
//! ProviderMetadata::parse()       → factory / api version, priority kept raw
//!        │  (not TOML: logged, source skipped)
//!        ▼
//! version::is_compatible()        → incompatible or mistyped: silently excluded
//!        ▼
//! ProviderMetadata::priority()    → invalid priority: logged, source skipped
//!        ▼
//! BackendCatalog::instantiate()   → unknown or failing backend: logged, dropped
//!        ▼
//! BTreeMap<priority, descriptor>  → ascending priority, last writer per bucket
//! ```

pub mod catalog;
pub mod metadata;
pub mod registry;
pub mod source;

pub use catalog::{BackendCatalog, LinkedCatalog};
pub use metadata::ProviderMetadata;
pub use registry::{ProviderDescriptor, ProviderRegistry};
pub use source::{
    ChainedSources, DirectorySources, LinkedSources, ProviderSource, SourceBody, SourceLocator,
};
