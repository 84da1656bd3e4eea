// CallScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CallScope operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CallScopeError {
    /// Call-log parsing failed.
    Parse(ParseError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Writing the rendered tables to the output stream failed.
    Render { source: io::Error },
}

impl fmt::Display for CallScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Render { source } => write!(f, "Failed to write output: {source}"),
        }
    }
}

impl std::error::Error for CallScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Render { source } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors related to call-log export parsing.
///
/// The whole parse is fatal on the first error: a call-log export is a
/// single coherent document, so partial results would be misleading.
#[derive(Debug)]
pub enum ParseError {
    /// The document is not well-formed XML.
    Xml {
        position: u64,
        source: quick_xml::Error,
    },

    /// A call element carries a missing or malformed attribute.
    Field(FieldError),

    /// The document holds more call elements than the configured cap.
    TooManyRecords { max: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml { position, source } => {
                write!(f, "malformed XML near byte {position}: {source}")
            }
            Self::Field(e) => write!(f, "{e}"),
            Self::TooManyRecords { max } => {
                write!(f, "export exceeds the maximum of {max} call records")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml { source, .. } => Some(source),
            Self::Field(e) => Some(e),
            Self::TooManyRecords { .. } => None,
        }
    }
}

impl From<ParseError> for CallScopeError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// A required call attribute is missing or cannot be interpreted.
///
/// `record` is the 1-based ordinal of the offending `call` element in
/// document order, so the element can be found in the source file.
#[derive(Debug)]
pub enum FieldError {
    /// A required attribute is absent.
    Missing {
        record: usize,
        field: &'static str,
    },

    /// An attribute that must be a non-negative integer is not one.
    NotNumeric {
        record: usize,
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },

    /// The epoch-millisecond date is numeric but outside the range
    /// chrono can represent.
    TimestampOutOfRange { record: usize, millis: i64 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { record, field } => {
                write!(f, "call record {record}: missing required attribute '{field}'")
            }
            Self::NotNumeric {
                record,
                field,
                value,
                source,
            } => write!(
                f,
                "call record {record}: attribute '{field}' value '{value}' is not a \
                 non-negative integer: {source}"
            ),
            Self::TimestampOutOfRange { record, millis } => write!(
                f,
                "call record {record}: date {millis} ms is outside the representable \
                 timestamp range"
            ),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotNumeric { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for CallScopeError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for CallScope results.
pub type Result<T> = std::result::Result<T, CallScopeError>;
