//! Plugin registration table
//!
//! A plugin is discoverable when it registers a [`PluginEntry`]: its name,
//! the element type it produces, an explicit parameter schema and a factory
//! taking the coerced arguments. The schema is what the generic binder in
//! [`crate::plugins`] consults; configuration data never reaches the
//! component's own code.

use lumber_domain::error::Result;
use lumber_domain::ports::ComponentInstance;
use lumber_domain::value_objects::ElementType;

use crate::plugins::PluginArgs;

/// Semantic type of a plugin parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// `true` / `false`
    Bool,
    /// Base-10 integer
    Int,
    /// Charset name
    Charset,
    /// Free text
    Text,
    /// At most one nested component of the given type
    Element(ElementType),
    /// Any number of nested components of the given type
    Elements(ElementType),
}

impl ParameterKind {
    /// Whether the parameter is fed from attributes rather than children
    pub fn is_attribute(self) -> bool {
        !matches!(self, Self::Element(_) | Self::Elements(_))
    }
}

/// One declared factory parameter
#[derive(Debug, Clone, Copy)]
pub struct ParameterSpec {
    /// Attribute or element name
    pub name: &'static str,
    /// Semantic type
    pub kind: ParameterKind,
    /// Raw default applied when the attribute is absent
    pub default: Option<&'static str>,
    /// Whether absence is a build error
    pub required: bool,
}

impl ParameterSpec {
    /// Optional attribute with a default
    pub const fn attr(name: &'static str, kind: ParameterKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
            required: false,
        }
    }

    /// Optional attribute without a default
    pub const fn optional(name: &'static str, kind: ParameterKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            required: false,
        }
    }

    /// Attribute that must be supplied
    pub const fn required(name: &'static str, kind: ParameterKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            required: true,
        }
    }

    /// Optional single nested component
    pub const fn element(name: &'static str, element_type: ElementType) -> Self {
        Self::optional(name, ParameterKind::Element(element_type))
    }

    /// List of nested components
    pub const fn elements(name: &'static str, element_type: ElementType) -> Self {
        Self::optional(name, ParameterKind::Elements(element_type))
    }
}

/// Registry entry for a plugin
pub struct PluginEntry {
    /// Component type name declarations refer to (case-insensitive)
    pub name: &'static str,
    /// Element type of the produced instance
    pub element_type: ElementType,
    /// Human-readable description
    pub description: &'static str,
    /// Parameter schema
    pub parameters: &'static [ParameterSpec],
    /// Factory invoked with the coerced arguments
    pub factory: fn(&PluginArgs) -> Result<ComponentInstance>,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("name", &self.name)
            .field("element_type", &self.element_type)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[linkme::distributed_slice]
pub static PLUGINS: [PluginEntry] = [..];

/// List all registered plugins as (name, element type, description) tuples
pub fn list_plugins() -> Vec<(&'static str, ElementType, &'static str)> {
    let mut plugins: Vec<_> = PLUGINS
        .iter()
        .map(|e| (e.name, e.element_type, e.description))
        .collect();
    plugins.sort_unstable_by_key(|(name, _, _)| name.to_ascii_lowercase());
    plugins
}
