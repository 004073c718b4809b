//! Error rendering
//!
//! Error types are foreign code: a `Display` impl may panic or report a
//! formatting failure. Rendering never propagates either.

use std::error::Error as StdError;
use std::fmt::Write as _;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::constants::UNRENDERABLE_ERROR;

/// Render an error and its `source()` chain, one line per entry
///
/// Falls back to the `Debug` rendering of the outermost error, then to a
/// fixed placeholder.
pub fn throwable_lines(error: &(dyn StdError + Send + Sync)) -> Vec<String> {
    match catch_unwind(AssertUnwindSafe(|| render_chain(error))) {
        Ok(Ok(text)) => text.lines().map(str::to_string).collect(),
        _ => vec![describe(error)],
    }
}

fn render_chain(error: &(dyn StdError + Send + Sync)) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    write!(out, "{error}")?;
    let mut cause = error.source();
    while let Some(inner) = cause {
        write!(out, "\nCaused by: {inner}")?;
        cause = inner.source();
    }
    Ok(out)
}

fn describe(error: &(dyn StdError + Send + Sync)) -> String {
    catch_unwind(AssertUnwindSafe(|| {
        let mut out = String::new();
        write!(out, "{error:?}").map(|()| out)
    }))
    .ok()
    .and_then(std::result::Result::ok)
    .unwrap_or_else(|| UNRENDERABLE_ERROR.to_string())
}
