//! Coerced plugin arguments

use std::collections::HashMap;

use lumber_domain::error::{Error, Result};
use lumber_domain::ports::ComponentInstance;
use lumber_domain::value_objects::Charset;

/// A coerced argument value
#[derive(Debug, Clone)]
pub enum ArgValue {
    /// Parameter absent and without default
    Absent,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Charset
    Charset(Charset),
    /// Text
    Text(String),
    /// Single nested component
    Element(ComponentInstance),
    /// Nested components in declaration order
    Elements(Vec<ComponentInstance>),
}

/// Arguments handed to a plugin factory, keyed by parameter name
#[derive(Debug, Clone)]
pub struct PluginArgs {
    component: String,
    values: HashMap<&'static str, ArgValue>,
}

impl PluginArgs {
    /// Create an empty argument set for a component
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            values: HashMap::new(),
        }
    }

    /// Set an argument
    pub fn insert(&mut self, name: &'static str, value: ArgValue) {
        self.values.insert(name, value);
    }

    /// Set an argument, builder style
    pub fn with(mut self, name: &'static str, value: ArgValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Component type being built
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Raw value
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Boolean argument
    pub fn bool(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            Some(ArgValue::Bool(b)) => Ok(*b),
            other => Err(self.mismatch(name, "bool", other)),
        }
    }

    /// Integer argument
    pub fn int(&self, name: &str) -> Result<i64> {
        match self.get(name) {
            Some(ArgValue::Int(i)) => Ok(*i),
            other => Err(self.mismatch(name, "integer", other)),
        }
    }

    /// Charset argument
    pub fn charset(&self, name: &str) -> Result<Charset> {
        match self.get(name) {
            Some(ArgValue::Charset(c)) => Ok(*c),
            other => Err(self.mismatch(name, "charset", other)),
        }
    }

    /// Optional text argument
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ArgValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Text argument that must be present
    pub fn required_text(&self, name: &str) -> Result<&str> {
        self.text(name)
            .ok_or_else(|| Error::missing_parameter(&self.component, name))
    }

    /// Optional nested component
    pub fn element(&self, name: &str) -> Option<&ComponentInstance> {
        match self.get(name) {
            Some(ArgValue::Element(instance)) => Some(instance),
            _ => None,
        }
    }

    /// Nested components; empty when absent
    pub fn elements(&self, name: &str) -> &[ComponentInstance] {
        match self.get(name) {
            Some(ArgValue::Elements(list)) => list,
            _ => &[],
        }
    }

    fn mismatch(&self, name: &str, expected: &str, found: Option<&ArgValue>) -> Error {
        Error::factory(
            &self.component,
            format!("parameter {name} is not a {expected}: {found:?}"),
        )
    }
}
