//! Provider metadata records
//!
//! Records are read leniently: only a document that is not TOML at all is
//! an error. Keys of the wrong type are kept for the version gate to judge,
//! and the priority is coerced only once the record has passed it.

use toml::{Table, Value};

use lumber_domain::error::{Error, Result};

use crate::constants::{DEFAULT_PRIORITY, KEY_API_VERSION, KEY_CONTEXT_FACTORY, KEY_FACTORY_PRIORITY};

/// Parsed provider metadata record
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderMetadata {
    /// Registered class name of the backend; absent unless a string
    pub factory: Option<String>,

    /// Declared API version; absent unless a string
    pub api_version: Option<String>,

    /// Declared priority, uncoerced
    priority: Option<Value>,
}

impl ProviderMetadata {
    /// Parse a TOML metadata record
    pub fn parse(source_id: &str, text: &str) -> Result<Self> {
        let table: Table = toml::from_str(text).map_err(|e| {
            Error::discovery_with_source(source_id, "Malformed provider metadata", e)
        })?;
        Ok(Self {
            factory: text_value(&table, KEY_CONTEXT_FACTORY),
            api_version: text_value(&table, KEY_API_VERSION),
            priority: table.get(KEY_FACTORY_PRIORITY).cloned(),
        })
    }

    /// Declared priority, or the lowest priority when absent
    ///
    /// Accepts an integer or a numeric string.
    pub fn priority(&self, source_id: &str) -> Result<i32> {
        match &self.priority {
            None => Ok(DEFAULT_PRIORITY),
            Some(Value::Integer(value)) => i32::try_from(*value).map_err(|_| {
                Error::discovery(source_id, format!("Priority out of range: {value}"))
            }),
            Some(Value::String(text)) => text
                .trim()
                .parse()
                .map_err(|_| Error::discovery(source_id, format!("Invalid priority: {text}"))),
            Some(other) => Err(Error::discovery(
                source_id,
                format!("Invalid priority: {other}"),
            )),
        }
    }
}

fn text_value(table: &Table, key: &str) -> Option<String> {
    table.get(key).and_then(Value::as_str).map(str::to_string)
}
