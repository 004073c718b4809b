//! API version gate
//!
//! Runs before any provider code is instantiated, so it stays a plain
//! prefix match against [`COMPATIBLE_API_VERSIONS`].

use crate::constants::COMPATIBLE_API_VERSIONS;

/// Whether a declared API version is accepted
///
/// Absent and empty versions are incompatible, never errors.
pub fn is_compatible(version: Option<&str>) -> bool {
    version.is_some_and(|v| {
        COMPATIBLE_API_VERSIONS
            .iter()
            .any(|accepted| v.starts_with(accepted))
    })
}
