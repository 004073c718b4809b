//! Appender collection builder
//!
//! Produces a complete name → appender mapping before handing it out; the
//! mapping is never mutated afterwards, so it can be published to logging
//! threads without readers seeing it half-filled.

use std::sync::Arc;

use lumber_application::plugins::PluginArgs;
use lumber_application::registry::{PLUGINS, ParameterSpec, PluginEntry};
use lumber_domain::error::Result;
use lumber_domain::ports::{Appender, AppenderMap, ComponentInstance};
use lumber_domain::value_objects::ElementType;
use tracing::{debug, warn};

/// Collect appenders into a mapping keyed by name
///
/// Duplicate names keep the later appender and log a warning.
pub fn collect_appenders<I>(appenders: I) -> AppenderMap
where
    I: IntoIterator<Item = Arc<dyn Appender>>,
{
    let mut map = AppenderMap::new();
    for appender in appenders {
        let name = appender.name().to_string();
        if map.insert(name.clone(), appender).is_some() {
            warn!(appender = %name, "Duplicate appender name, keeping the later declaration");
        }
    }
    map
}

fn create_appender_set(args: &PluginArgs) -> Result<ComponentInstance> {
    let map = collect_appenders(
        args.elements("appenders")
            .iter()
            .filter_map(ComponentInstance::as_appender)
            .cloned(),
    );
    debug!(count = map.len(), "Built appender set");
    Ok(ComponentInstance::Appenders(Arc::new(map)))
}

#[linkme::distributed_slice(PLUGINS)]
static APPENDERS_PLUGIN: PluginEntry = PluginEntry {
    name: "appenders",
    element_type: ElementType::Appenders,
    description: "Collects appender declarations into a name-keyed set",
    parameters: &[ParameterSpec::elements("appenders", ElementType::Appender)],
    factory: create_appender_set,
};
