// CallScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CallScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Call type codes
// =============================================================================

/// Type codes classified as inbound calls (incoming, missed, rejected).
pub const INBOUND_TYPE_CODES: &[&str] = &["1", "3", "5"];

/// Type codes classified as outbound calls (outgoing, voicemail).
pub const OUTBOUND_TYPE_CODES: &[&str] = &["2", "4"];

// =============================================================================
// Parsing limits
// =============================================================================

/// Maximum number of call records accepted from a single export.
///
/// A call-log export is bounded by what a phone can store; anything past
/// this cap indicates a malformed or hostile document rather than data.
pub const MAX_RECORDS: usize = 1_000_000;

// =============================================================================
// Display and export formats
// =============================================================================

/// chrono format string for timestamps in the rendered table and CSV export.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Conventional file name for the exported filtered records.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "filtered_data.csv";

/// Conventional file name when the export format is JSON.
pub const DEFAULT_JSON_EXPORT_FILE_NAME: &str = "filtered_data.json";

/// Widest the contact-name column may grow before values are truncated.
pub const MAX_NAME_COLUMN_WIDTH: usize = 40;

/// Widest the number column may grow before values are truncated.
pub const MAX_NUMBER_COLUMN_WIDTH: usize = 24;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
