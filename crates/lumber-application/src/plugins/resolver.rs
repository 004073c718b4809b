//! Plugin factory resolver

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, error, warn};

use lumber_domain::error::{Error, Result};
use lumber_domain::ports::ComponentInstance;
use lumber_domain::value_objects::{ComponentDeclaration, ElementType};

use super::args::{ArgValue, PluginArgs};
use super::coerce::coerce;
use crate::registry::{PLUGINS, ParameterKind, PluginEntry};

/// Component type name → registered plugin
///
/// Populated once from the registration table and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FactoryBinding {
    entries: HashMap<String, &'static PluginEntry>,
}

impl FactoryBinding {
    /// Binding over every plugin linked into the binary
    pub fn linked() -> Self {
        Self::from_entries(PLUGINS.iter())
    }

    /// Binding over an explicit set of plugins; later entries win on name clashes
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'static PluginEntry>,
    {
        let mut map = HashMap::new();
        for entry in entries {
            let key = entry.name.to_ascii_lowercase();
            if map.insert(key, entry).is_some() {
                warn!(plugin = entry.name, "Duplicate plugin name; keeping the last registration");
            }
        }
        Self { entries: map }
    }

    /// Look a plugin up by component type name, ignoring case
    pub fn lookup(&self, type_name: &str) -> Option<&'static PluginEntry> {
        self.entries.get(&type_name.to_ascii_lowercase()).copied()
    }

    /// Number of bound plugins
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no plugin is bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds component instances from declarations
#[derive(Debug, Clone, Default)]
pub struct PluginFactoryResolver {
    binding: FactoryBinding,
}

impl PluginFactoryResolver {
    /// Create a resolver over a binding
    pub fn new(binding: FactoryBinding) -> Self {
        Self { binding }
    }

    /// Resolver over every linked plugin
    pub fn linked() -> Self {
        Self::new(FactoryBinding::linked())
    }

    /// The binding consulted by this resolver
    pub fn binding(&self) -> &FactoryBinding {
        &self.binding
    }

    /// Build one declared component
    pub fn build(&self, declaration: &ComponentDeclaration) -> Result<ComponentInstance> {
        let entry = self
            .binding
            .lookup(&declaration.type_name)
            .ok_or_else(|| Error::unknown_component(&declaration.type_name))?;

        warn_unknown_attributes(entry, declaration);
        let children = self.build_children(declaration);
        let args = assemble(entry, declaration, children)?;

        let instance = catch_unwind(AssertUnwindSafe(|| (entry.factory)(&args)))
            .unwrap_or_else(|_| Err(Error::factory(entry.name, "factory panicked")))
            .map_err(|e| {
                if e.is_build_error() {
                    e
                } else {
                    Error::factory(entry.name, e.to_string())
                }
            })?;

        if instance.element_type() != entry.element_type {
            return Err(Error::factory(
                entry.name,
                format!(
                    "produced a {} but is registered as a {}",
                    instance.element_type(),
                    entry.element_type
                ),
            ));
        }
        debug!(component = %declaration, "Built component");
        Ok(instance)
    }

    /// Build a batch; each declaration succeeds or fails on its own
    pub fn build_all(&self, declarations: &[ComponentDeclaration]) -> Vec<Result<ComponentInstance>> {
        declarations
            .iter()
            .map(|declaration| {
                let result = self.build(declaration);
                if let Err(e) = &result {
                    error!(component = %declaration, error = %e, "Unable to build component");
                }
                result
            })
            .collect()
    }

    /// Build nested declarations; failing children are logged and skipped
    fn build_children(&self, declaration: &ComponentDeclaration) -> Vec<ComponentInstance> {
        declaration
            .children
            .iter()
            .filter_map(|child| match self.build(child) {
                Ok(instance) => Some(instance),
                Err(e) => {
                    error!(
                        parent = %declaration,
                        component = %child,
                        error = %e,
                        "Unable to build nested component"
                    );
                    None
                }
            })
            .collect()
    }
}

fn warn_unknown_attributes(entry: &PluginEntry, declaration: &ComponentDeclaration) {
    for name in declaration.attributes.keys() {
        let known = entry
            .parameters
            .iter()
            .any(|p| p.kind.is_attribute() && p.name.eq_ignore_ascii_case(name));
        if !known {
            warn!(component = entry.name, attribute = %name, "Ignoring unknown attribute");
        }
    }
}

fn assemble(
    entry: &PluginEntry,
    declaration: &ComponentDeclaration,
    children: Vec<ComponentInstance>,
) -> Result<PluginArgs> {
    let mut args = PluginArgs::new(entry.name);
    let mut children: Vec<Option<ComponentInstance>> = children.into_iter().map(Some).collect();

    for spec in entry.parameters {
        let value = match spec.kind {
            ParameterKind::Element(element_type) => {
                let mut matching = take_matching(&mut children, element_type);
                if matching.len() > 1 {
                    warn!(
                        component = entry.name,
                        parameter = spec.name,
                        count = matching.len(),
                        "Several nested components supplied; using the first"
                    );
                }
                if matching.is_empty() {
                    ArgValue::Absent
                } else {
                    ArgValue::Element(matching.swap_remove(0))
                }
            }
            ParameterKind::Elements(element_type) => {
                ArgValue::Elements(take_matching(&mut children, element_type))
            }
            kind => match declaration.attribute(spec.name).or(spec.default) {
                Some(raw) => coerce(entry.name, spec.name, kind, raw)?,
                None => ArgValue::Absent,
            },
        };

        if spec.required && matches!(value, ArgValue::Absent) {
            return Err(Error::missing_parameter(entry.name, spec.name));
        }
        args.insert(spec.name, value);
    }

    let unused = children.iter().flatten().count();
    if unused > 0 {
        warn!(component = entry.name, count = unused, "Ignoring nested components no parameter accepts");
    }
    Ok(args)
}

fn take_matching(
    children: &mut [Option<ComponentInstance>],
    element_type: ElementType,
) -> Vec<ComponentInstance> {
    children
        .iter_mut()
        .filter(|slot| matches!(slot, Some(c) if c.element_type() == element_type))
        .filter_map(Option::take)
        .collect()
}
