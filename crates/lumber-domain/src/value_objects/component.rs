//! Component declarations
//!
//! A [`ComponentDeclaration`] is the format-agnostic description of one
//! pluggable unit: a type name, a flat attribute mapping and nested child
//! declarations. Whatever parses the configuration document produces these;
//! the plugin resolver consumes them.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of component a plugin produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Event formatter
    Layout,
    /// Event sink
    Appender,
    /// Name to appender mapping
    Appenders,
}

impl ElementType {
    /// Lower-case element name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Appender => "appender",
            Self::Appenders => "appenders",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared component instance
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentDeclaration {
    /// Registered plugin name (matched case-insensitively)
    #[serde(rename = "type")]
    pub type_name: String,

    /// Raw attribute values keyed by attribute name
    #[serde(default, deserialize_with = "deserialize_attributes")]
    pub attributes: BTreeMap<String, String>,

    /// Nested declarations, in document order
    #[serde(default)]
    pub children: Vec<ComponentDeclaration>,
}

impl ComponentDeclaration {
    /// Create a declaration for the given component type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a nested declaration
    pub fn with_child(mut self, child: ComponentDeclaration) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute ignoring ASCII case
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for ComponentDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)?;
        if let Some(name) = self.attribute("name") {
            write!(f, "[{name}]")?;
        }
        Ok(())
    }
}

/// Accepts scalar TOML/JSON values and keeps their textual form
fn deserialize_attributes<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = BTreeMap::<String, Scalar>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Scalar::Bool(b) => b.to_string(),
                Scalar::Int(i) => i.to_string(),
                Scalar::Float(x) => x.to_string(),
                Scalar::Text(s) => s,
            };
            (key, text)
        })
        .collect())
}
