//! Value objects
//!
//! Immutable values passed between the facade, backends and components.

pub mod charset;
pub mod component;
pub mod event;
pub mod level;
pub mod realm;

pub use charset::Charset;
pub use component::{ComponentDeclaration, ElementType};
pub use event::{LogEvent, SourceLocation};
pub use level::Level;
pub use realm::IsolationKey;
