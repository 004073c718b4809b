//! Markup escaping helpers

use std::borrow::Cow;

use crate::constants::{CDATA_EMBEDDED_END, CDATA_END};

/// Escape markup characters for use in element text or attribute values
///
/// Tabs and line breaks become character references so attribute-value
/// normalization cannot turn them into spaces.
pub fn escape_tags(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Append `input` to a buffer that is inside a CDATA section
///
/// Each embedded `]]>` closes the section, emits the escaped terminator as
/// text and reopens a new section.
pub fn append_escaping_cdata(buf: &mut String, input: &str) {
    let mut rest = input;
    while let Some(pos) = rest.find(CDATA_END) {
        buf.push_str(&rest[..pos]);
        buf.push_str(CDATA_EMBEDDED_END);
        rest = &rest[pos + CDATA_END.len()..];
    }
    buf.push_str(rest);
}
