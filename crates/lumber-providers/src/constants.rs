//! Provider Constants
//!
//! Constants specific to provider implementations. Names shared with the
//! facade live in `lumber_domain::constants`.

use lumber_domain::value_objects::Level;

// ============================================================================
// STANDARD BACKEND CONSTANTS
// ============================================================================

/// Identifier the standard backend registers under
pub const STANDARD_CLASS_NAME: &str = "lumber.providers.StandardContextFactory";

/// Identity of the linked discovery record
pub const STANDARD_SOURCE_ID: &str = "lumber-providers/META-INF/lumber-provider.toml";

/// Threshold for loggers created by the standard backend
pub const DEFAULT_LOGGER_LEVEL: Level = Level::Info;

// ============================================================================
// XML LAYOUT CONSTANTS
// ============================================================================

/// Line terminator of every XML fragment
pub const XML_EOL: &str = "\r\n";

/// Namespace bound to the `log4j` prefix in standalone documents
pub const XML_NAMESPACE: &str = "http://logging.apache.org/log4j/";

/// Opens a CDATA section
pub const CDATA_START: &str = "<![CDATA[";

/// Closes a CDATA section
pub const CDATA_END: &str = "]]>";

/// Replacement for a `]]>` occurring inside CDATA content
pub const CDATA_EMBEDDED_END: &str = "]]>]]&gt;<![CDATA[";

/// Initial capacity of a rendered event
pub const XML_EVENT_CAPACITY: usize = 256;

/// Written when an attached error cannot be rendered at all
pub const UNRENDERABLE_ERROR: &str = "<unrenderable error>";

// ============================================================================
// APPENDER CONSTANTS
// ============================================================================

/// Console target writing to standard output
pub const CONSOLE_TARGET_STDOUT: &str = "SYSTEM_OUT";

/// Console target writing to standard error
pub const CONSOLE_TARGET_STDERR: &str = "SYSTEM_ERR";
