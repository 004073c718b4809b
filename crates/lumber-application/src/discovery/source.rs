//! Discovery sources
//!
//! A [`SourceLocator`] enumerates the metadata records reachable from one
//! place: the records linked into the binary, or the records found under a
//! set of search-path directories.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};
use walkdir::WalkDir;

use lumber_domain::error::{Error, Result};

use crate::constants::PROVIDER_RESOURCE;
use crate::registry::PROVIDER_SOURCES;

/// Where a record's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBody {
    /// Text already in memory
    Inline(String),
    /// File read on demand
    File(PathBuf),
}

/// One discovered metadata record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSource {
    /// Identity used in diagnostics
    pub id: String,
    /// Record body
    pub body: SourceBody,
}

impl ProviderSource {
    /// Source whose text is already known
    pub fn inline(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: SourceBody::Inline(text.into()),
        }
    }

    /// Source backed by a file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: path.display().to_string(),
            body: SourceBody::File(path),
        }
    }

    /// Read the record text
    pub fn read(&self) -> Result<String> {
        match &self.body {
            SourceBody::Inline(text) => Ok(text.clone()),
            SourceBody::File(path) => std::fs::read_to_string(path)
                .map_err(|e| Error::discovery_with_source(&self.id, "Unable to read", e)),
        }
    }
}

/// Enumerates provider metadata records
pub trait SourceLocator: Send + Sync {
    /// Every record reachable from this locator, in a stable order
    fn sources(&self) -> Result<Vec<ProviderSource>>;

    /// Short description for diagnostics
    fn describe(&self) -> String;
}

/// Records linked into the binary through `PROVIDER_SOURCES`
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedSources;

impl SourceLocator for LinkedSources {
    fn sources(&self) -> Result<Vec<ProviderSource>> {
        let mut sources: Vec<_> = PROVIDER_SOURCES
            .iter()
            .map(|entry| ProviderSource::inline(entry.id, entry.metadata))
            .collect();
        // Link order is not stable across builds
        sources.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(sources)
    }

    fn describe(&self) -> String {
        "linked provider records".to_string()
    }
}

/// Records found as `META-INF/lumber-provider.toml` under search-path roots
#[derive(Debug, Clone, Default)]
pub struct DirectorySources {
    roots: Vec<PathBuf>,
}

impl DirectorySources {
    /// Create a locator over the given roots, searched in order
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured roots
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn scan_root(root: &Path) -> Result<Vec<ProviderSource>> {
        if !root.is_dir() {
            return Err(Error::discovery(
                root.display().to_string(),
                "search path entry is not a directory",
            ));
        }

        let resource = Path::new(PROVIDER_RESOURCE);
        let mut found = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() && entry.path().ends_with(resource) => {
                    debug!(path = %entry.path().display(), "Found provider record");
                    found.push(ProviderSource::file(entry.path()));
                }
                Ok(_) => {}
                Err(e) => warn!(root = %root.display(), error = %e, "Skipping unreadable entry"),
            }
        }
        Ok(found)
    }
}

impl SourceLocator for DirectorySources {
    fn sources(&self) -> Result<Vec<ProviderSource>> {
        let mut sources = Vec::new();
        for root in &self.roots {
            match Self::scan_root(root) {
                Ok(found) => sources.extend(found),
                Err(e) => warn!(error = %e, "Unable to search provider path"),
            }
        }
        Ok(sources)
    }

    fn describe(&self) -> String {
        format!("{} search path root(s)", self.roots.len())
    }
}

/// Concatenates several locators, in order
#[derive(Clone, Default)]
pub struct ChainedSources {
    locators: Vec<Arc<dyn SourceLocator>>,
}

impl ChainedSources {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a locator
    pub fn with(mut self, locator: Arc<dyn SourceLocator>) -> Self {
        self.locators.push(locator);
        self
    }
}

impl SourceLocator for ChainedSources {
    fn sources(&self) -> Result<Vec<ProviderSource>> {
        let mut sources = Vec::new();
        for locator in &self.locators {
            match locator.sources() {
                Ok(found) => sources.extend(found),
                Err(e) => warn!(
                    locator = %locator.describe(),
                    error = %e,
                    "Unable to enumerate provider records"
                ),
            }
        }
        Ok(sources)
    }

    fn describe(&self) -> String {
        let parts: Vec<_> = self.locators.iter().map(|l| l.describe()).collect();
        parts.join(" + ")
    }
}

impl std::fmt::Debug for ChainedSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSources")
            .field("locators", &self.describe())
            .finish()
    }
}
