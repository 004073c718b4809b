//! Backend selection
//!
//! Rules, evaluated in order, first match wins:
//!
//! 1. a configured override naming a registered backend
//! 2. the highest-priority discovered provider
//! 3. the built-in [`SimpleContextFactory`]
//!
//! Selection never fails. A broken override falls through to discovery and
//! an empty discovery result degrades to the fallback.

use std::fmt;
use std::sync::Arc;

use lumber_application::discovery::{
    ChainedSources, DirectorySources, LinkedCatalog, LinkedSources, ProviderDescriptor,
    ProviderRegistry,
};
use lumber_domain::ports::LoggerContextFactory;
use lumber_domain::value_objects::Level;
use tracing::{error, info, warn};

use crate::config::ManagerConfig;
use crate::constants::{DEFAULT_FALLBACK_LEVEL, FALLBACK_CLASS_NAME, OVERRIDE_SOURCE_ID};
use crate::fallback::SimpleContextFactory;

/// How the backend was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Named by the override setting
    Override,
    /// Highest priority among discovered providers
    Discovered,
    /// No provider available; degraded operation
    Fallback,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Override => "override",
            Self::Discovered => "discovered",
            Self::Fallback => "fallback",
        })
    }
}

/// The process's backend and how it was chosen
#[derive(Clone)]
pub struct SelectedBackend {
    /// The backend every context request is delegated to
    pub factory: Arc<dyn LoggerContextFactory>,
    /// Rule that produced it
    pub selection: Selection,
}

impl SelectedBackend {
    /// Identifier of the selected implementation
    pub fn implementation_name(&self) -> &str {
        self.factory.implementation_name()
    }
}

impl fmt::Debug for SelectedBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedBackend")
            .field("implementation", &self.implementation_name())
            .field("selection", &self.selection)
            .finish()
    }
}

/// Chooses the process's backend
#[derive(Debug, Clone)]
pub struct ContextFactorySelector {
    override_class: Option<String>,
    registry: ProviderRegistry,
    fallback_level: Level,
}

impl ContextFactorySelector {
    /// Create a selector over a provider registry
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            override_class: None,
            registry,
            fallback_level: DEFAULT_FALLBACK_LEVEL,
        }
    }

    /// Create a selector from the manager configuration
    ///
    /// Discovery reads the linked records (unless disabled) followed by the
    /// search path directories; backends come from the linked catalog.
    pub fn from_config(config: &ManagerConfig) -> Self {
        let mut sources = ChainedSources::new();
        if config.scan_linked {
            sources = sources.with(Arc::new(LinkedSources));
        }
        if !config.provider_search_path.is_empty() {
            sources = sources.with(Arc::new(DirectorySources::new(
                config.provider_search_path.iter().cloned(),
            )));
        }
        Self::new(ProviderRegistry::new(Arc::new(sources), Arc::new(LinkedCatalog)))
            .with_override(config.logger_context_factory.clone())
            .with_fallback_level(config.fallback_level)
    }

    /// Set or clear the override class name
    pub fn with_override(mut self, class_name: Option<String>) -> Self {
        self.override_class = class_name;
        self
    }

    /// Threshold used if the fallback is installed
    pub fn with_fallback_level(mut self, level: Level) -> Self {
        self.fallback_level = level;
        self
    }

    /// Registry used for discovery
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run the selection rules
    pub fn select(&self) -> SelectedBackend {
        if let Some(selected) = self.select_override() {
            return selected;
        }
        self.select_candidate(&self.registry.discover())
    }

    /// Run the selection rules over an already discovered candidate list
    ///
    /// `candidates` must be in ascending priority order, as returned by
    /// [`ProviderRegistry::discover`].
    pub fn select_from(&self, candidates: &[ProviderDescriptor]) -> SelectedBackend {
        if let Some(selected) = self.select_override() {
            return selected;
        }
        self.select_candidate(candidates)
    }

    fn select_candidate(&self, candidates: &[ProviderDescriptor]) -> SelectedBackend {
        if let Some(selected) = select_discovered(candidates) {
            return selected;
        }

        error!(
            fallback = %FALLBACK_CLASS_NAME,
            "No logging backend could be discovered; using the simple fallback backend, logging is degraded"
        );
        SelectedBackend {
            factory: Arc::new(SimpleContextFactory::new(self.fallback_level)),
            selection: Selection::Fallback,
        }
    }

    fn select_override(&self) -> Option<SelectedBackend> {
        let class_name = self.override_class.as_deref()?;
        match self.registry.instantiate(class_name, OVERRIDE_SOURCE_ID) {
            Ok(factory) => {
                info!(backend = %class_name, "Using configured logging backend");
                Some(SelectedBackend {
                    factory,
                    selection: Selection::Override,
                })
            }
            Err(e) => {
                error!(
                    backend = %class_name,
                    error = %e,
                    "Unable to create the configured logging backend; falling back to discovery"
                );
                None
            }
        }
    }
}

/// Pick the highest priority; `candidates` is in ascending priority order
fn select_discovered(candidates: &[ProviderDescriptor]) -> Option<SelectedBackend> {
    let winner = candidates.last()?;
    if candidates.len() > 1 {
        let listing = candidates
            .iter()
            .map(|d| format!("{} (priority {}, from {})", d.class_name, d.priority, d.source_id))
            .collect::<Vec<_>>()
            .join(", ");
        warn!(
            candidates = %listing,
            selected = %winner.class_name,
            "Multiple logging backends found; using {} with priority {}",
            winner.class_name,
            winner.priority
        );
    } else {
        info!(backend = %winner.class_name, priority = winner.priority, "Using discovered logging backend");
    }
    Some(SelectedBackend {
        factory: Arc::clone(&winner.factory),
        selection: Selection::Discovered,
    })
}
