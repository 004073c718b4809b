//! Layout implementations
//!
//! | Plugin | Type | Output |
//! |--------|------|--------|
//! | `XMLLayout` | [`XmlLayout`] | log4j-compatible XML event fragments |

pub mod escape;
pub mod throwable;
pub mod xml;

pub use xml::XmlLayout;
