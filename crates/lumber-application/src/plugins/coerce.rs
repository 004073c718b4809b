//! String to parameter-type coercion

use lumber_domain::error::{Error, Result};
use lumber_domain::value_objects::Charset;

use super::args::ArgValue;
use crate::registry::ParameterKind;

/// Convert a raw attribute value to the parameter's type
pub fn coerce(component: &str, parameter: &str, kind: ParameterKind, raw: &str) -> Result<ArgValue> {
    match kind {
        ParameterKind::Bool => parse_bool(raw)
            .map(ArgValue::Bool)
            .ok_or_else(|| Error::coercion(component, parameter, format!("expected true or false, got {raw:?}"))),
        ParameterKind::Int => raw
            .trim()
            .parse::<i64>()
            .map(ArgValue::Int)
            .map_err(|e| Error::coercion(component, parameter, format!("{raw:?}: {e}"))),
        ParameterKind::Charset => raw
            .parse::<Charset>()
            .map(ArgValue::Charset)
            .map_err(|e| Error::coercion(component, parameter, e.to_string())),
        ParameterKind::Text => Ok(ArgValue::Text(raw.to_string())),
        ParameterKind::Element(_) | ParameterKind::Elements(_) => Err(Error::coercion(
            component,
            parameter,
            "nested components cannot be given as attributes",
        )),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
