//! XML layout
//!
//! Renders each event as a `<log4j:event>` element compatible with log4j
//! viewers (Chainsaw and friends). In `complete` mode the layout also
//! supplies the XML declaration and the enclosing `<log4j:eventSet>` element
//! as header and footer, so an appender's output is a standalone document.
//!
//! ```text
//! <log4j:event logger="app" timestamp="1700000000000" level="INFO" thread="main">
//! <log4j:message><![CDATA[started]]></log4j:message>
//! </log4j:event>
//! ```

use std::sync::Arc;

use lumber_application::plugins::PluginArgs;
use lumber_application::registry::{PLUGINS, ParameterKind, ParameterSpec, PluginEntry};
use lumber_domain::constants::ROOT_LOGGER_LABEL;
use lumber_domain::error::Result;
use lumber_domain::ports::{ComponentInstance, Layout};
use lumber_domain::value_objects::{Charset, ElementType, LogEvent};

use super::escape::{append_escaping_cdata, escape_tags};
use super::throwable::throwable_lines;
use crate::constants::{CDATA_END, CDATA_START, XML_EOL, XML_EVENT_CAPACITY, XML_NAMESPACE};

/// XML event formatter
///
/// Immutable after construction; all output is a pure function of the
/// flags and the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XmlLayout {
    location_info: bool,
    properties: bool,
    complete: bool,
    charset: Charset,
}

impl XmlLayout {
    /// Create a layout
    ///
    /// * `location_info` - emit `<log4j:locationInfo>` for events carrying a source location
    /// * `properties` - emit the mapped diagnostic context as `<log4j:properties>`
    /// * `complete` - supply document header and footer
    /// * `charset` - output encoding
    pub fn new(location_info: bool, properties: bool, complete: bool, charset: Charset) -> Self {
        Self {
            location_info,
            properties,
            complete,
            charset,
        }
    }

    /// Whether location info is emitted
    pub fn location_info(&self) -> bool {
        self.location_info
    }

    /// Whether context properties are emitted
    pub fn properties(&self) -> bool {
        self.properties
    }

    /// Whether header and footer are supplied
    pub fn complete(&self) -> bool {
        self.complete
    }

    fn append_location(&self, buf: &mut String, event: &LogEvent) {
        let Some(source) = event.source.as_ref().filter(|_| self.location_info) else {
            return;
        };
        buf.push_str("<log4j:locationInfo class=\"");
        buf.push_str(&escape_tags(&source.module));
        buf.push_str("\" method=\"");
        buf.push_str(&escape_tags(source.function.as_deref().unwrap_or("?")));
        buf.push_str("\" file=\"");
        buf.push_str(&escape_tags(&source.file));
        buf.push_str("\" line=\"");
        buf.push_str(&source.line.to_string());
        buf.push_str("\"/>");
        buf.push_str(XML_EOL);
    }

    fn append_properties(&self, buf: &mut String, event: &LogEvent) {
        if !self.properties || event.context_map.is_empty() {
            return;
        }
        buf.push_str("<log4j:properties>");
        buf.push_str(XML_EOL);
        for (key, value) in &event.context_map {
            buf.push_str("<log4j:data name=\"");
            buf.push_str(&escape_tags(key));
            buf.push_str("\" value=\"");
            buf.push_str(&escape_tags(value));
            buf.push_str("\"/>");
            buf.push_str(XML_EOL);
        }
        buf.push_str("</log4j:properties>");
        buf.push_str(XML_EOL);
    }
}

impl Layout for XmlLayout {
    fn to_serializable(&self, event: &LogEvent) -> String {
        let mut buf = String::with_capacity(XML_EVENT_CAPACITY);

        let logger = if event.logger_name.is_empty() {
            ROOT_LOGGER_LABEL
        } else {
            &event.logger_name
        };
        buf.push_str("<log4j:event logger=\"");
        buf.push_str(&escape_tags(logger));
        buf.push_str("\" timestamp=\"");
        buf.push_str(&event.timestamp_millis.to_string());
        buf.push_str("\" level=\"");
        buf.push_str(&escape_tags(event.level.as_str()));
        buf.push_str("\" thread=\"");
        buf.push_str(&escape_tags(&event.thread_name));
        buf.push_str("\">");
        buf.push_str(XML_EOL);

        if let Some(message) = &event.message {
            buf.push_str("<log4j:message>");
            push_cdata(&mut buf, message);
            buf.push_str("</log4j:message>");
            buf.push_str(XML_EOL);
        }

        if !event.context_stack.is_empty() {
            buf.push_str("<log4j:NDC>");
            push_cdata(&mut buf, &event.context_stack.join(" "));
            buf.push_str("</log4j:NDC>");
            buf.push_str(XML_EOL);
        }

        if let Some(thrown) = &event.thrown {
            buf.push_str("<log4j:throwable>");
            buf.push_str(CDATA_START);
            for line in throwable_lines(thrown.as_ref()) {
                append_escaping_cdata(&mut buf, &line);
                buf.push_str(XML_EOL);
            }
            buf.push_str(CDATA_END);
            buf.push_str("</log4j:throwable>");
            buf.push_str(XML_EOL);
        }

        self.append_location(&mut buf, event);
        self.append_properties(&mut buf, event);

        buf.push_str("</log4j:event>");
        buf.push_str(XML_EOL);
        buf.push_str(XML_EOL);
        buf
    }

    fn header(&self) -> Option<Vec<u8>> {
        if !self.complete {
            return None;
        }
        let header = format!(
            "<?xml version=\"1.0\" encoding=\"{}\"?>{XML_EOL}<log4j:eventSet xmlns:log4j=\"{XML_NAMESPACE}\">{XML_EOL}",
            self.charset.name()
        );
        Some(self.charset.encode(&header))
    }

    fn footer(&self) -> Option<Vec<u8>> {
        if !self.complete {
            return None;
        }
        Some(self.charset.encode(&format!("</log4j:eventSet>{XML_EOL}")))
    }

    fn charset(&self) -> Charset {
        self.charset
    }

    fn content_type(&self) -> String {
        format!("text/xml; charset={}", self.charset)
    }
}

fn push_cdata(buf: &mut String, text: &str) {
    buf.push_str(CDATA_START);
    append_escaping_cdata(buf, text);
    buf.push_str(CDATA_END);
}

fn create_xml_layout(args: &PluginArgs) -> Result<ComponentInstance> {
    let layout = XmlLayout::new(
        args.bool("locationInfo")?,
        args.bool("properties")?,
        args.bool("complete")?,
        args.charset("charset")?,
    );
    Ok(ComponentInstance::Layout(Arc::new(layout)))
}

#[linkme::distributed_slice(PLUGINS)]
static XML_LAYOUT_PLUGIN: PluginEntry = PluginEntry {
    name: "XMLLayout",
    element_type: ElementType::Layout,
    description: "log4j-compatible XML events, optionally as a standalone document",
    parameters: &[
        ParameterSpec::attr("locationInfo", ParameterKind::Bool, "false"),
        ParameterSpec::attr("properties", ParameterKind::Bool, "false"),
        ParameterSpec::attr("complete", ParameterKind::Bool, "false"),
        ParameterSpec::attr("charset", ParameterKind::Charset, "UTF-8"),
    ],
    factory: create_xml_layout,
};
