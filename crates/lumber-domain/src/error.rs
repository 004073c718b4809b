//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as an optional cause
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for lumber
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A provider discovery source could not be enumerated or parsed
    #[error("Discovery error in {source_id}: {message}")]
    Discovery {
        /// Identity of the offending source (path, linked entry id, ...)
        source_id: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// A backend implementation could not be created
    #[error("Unable to create {class_name} specified in {source_id}: {message}")]
    Instantiation {
        /// Registered identifier of the implementation
        class_name: String,
        /// Where the identifier came from
        source_id: String,
        /// Description of the failure
        message: String,
    },

    /// No plugin is registered under the declared type name
    #[error("Unknown component type: {name}")]
    UnknownComponent {
        /// Declared component type name
        name: String,
    },

    /// An attribute value could not be converted to the parameter's type
    #[error("Invalid value for {component}.{parameter}: {message}")]
    Coercion {
        /// Component type being built
        component: String,
        /// Parameter name
        parameter: String,
        /// Description of the failure
        message: String,
    },

    /// A parameter without a default was not supplied
    #[error("Missing required parameter {component}.{parameter}")]
    MissingParameter {
        /// Component type being built
        component: String,
        /// Parameter name
        parameter: String,
    },

    /// The component factory itself failed
    #[error("Factory for {component} failed: {message}")]
    Factory {
        /// Component type being built
        component: String,
        /// Description of the failure
        message: String,
    },

    /// Appender write failure
    #[error("Appender {name} failed: {message}")]
    Appender {
        /// Appender name
        name: String,
        /// Description of the failure
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }
}

// Discovery error creation methods
impl Error {
    /// Create a discovery error for a source
    pub fn discovery<I: Into<String>, S: Into<String>>(source_id: I, message: S) -> Self {
        Self::Discovery {
            source_id: source_id.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a discovery error with an underlying cause
    pub fn discovery_with_source<
        I: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        source_id: I,
        message: S,
        source: E,
    ) -> Self {
        Self::Discovery {
            source_id: source_id.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an instantiation error
    pub fn instantiation<C: Into<String>, I: Into<String>, S: Into<String>>(
        class_name: C,
        source_id: I,
        message: S,
    ) -> Self {
        Self::Instantiation {
            class_name: class_name.into(),
            source_id: source_id.into(),
            message: message.into(),
        }
    }
}

// Plugin build error creation methods
impl Error {
    /// Create an unknown component error
    pub fn unknown_component<S: Into<String>>(name: S) -> Self {
        Self::UnknownComponent { name: name.into() }
    }

    /// Create a coercion error
    pub fn coercion<C: Into<String>, P: Into<String>, S: Into<String>>(
        component: C,
        parameter: P,
        message: S,
    ) -> Self {
        Self::Coercion {
            component: component.into(),
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter<C: Into<String>, P: Into<String>>(component: C, parameter: P) -> Self {
        Self::MissingParameter {
            component: component.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a factory failure error
    pub fn factory<C: Into<String>, S: Into<String>>(component: C, message: S) -> Self {
        Self::Factory {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an appender failure error
    pub fn appender<N: Into<String>, S: Into<String>>(name: N, message: S) -> Self {
        Self::Appender {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether the error was produced while building a declared component
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownComponent { .. }
                | Self::Coercion { .. }
                | Self::MissingParameter { .. }
                | Self::Factory { .. }
        )
    }
}
