//! Built component instances

use std::sync::Arc;

use crate::ports::appender::{Appender, AppenderMap};
use crate::ports::layout::Layout;
use crate::value_objects::ElementType;

/// Product of a plugin factory
#[derive(Debug, Clone)]
pub enum ComponentInstance {
    /// A formatter
    Layout(Arc<dyn Layout>),
    /// An appender
    Appender(Arc<dyn Appender>),
    /// A complete name to appender mapping
    Appenders(Arc<AppenderMap>),
}

impl ComponentInstance {
    /// Element type of the instance
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Layout(_) => ElementType::Layout,
            Self::Appender(_) => ElementType::Appender,
            Self::Appenders(_) => ElementType::Appenders,
        }
    }

    /// The layout, if this is one
    pub fn as_layout(&self) -> Option<&Arc<dyn Layout>> {
        match self {
            Self::Layout(layout) => Some(layout),
            _ => None,
        }
    }

    /// The appender, if this is one
    pub fn as_appender(&self) -> Option<&Arc<dyn Appender>> {
        match self {
            Self::Appender(appender) => Some(appender),
            _ => None,
        }
    }

    /// The appender mapping, if this is one
    pub fn as_appenders(&self) -> Option<&Arc<AppenderMap>> {
        match self {
            Self::Appenders(map) => Some(map),
            _ => None,
        }
    }
}
