// CallScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// knowledge of the CLI shell.
//
// These types are the shared vocabulary across parsing, filtering,
// summarising, rendering, and export.

use crate::util::constants;
use chrono::{DateTime, Local};
use serde::Serialize;

// =============================================================================
// Call Record (normalised output of parsing)
// =============================================================================

/// A single parsed call record.
///
/// This is the core data unit that flows through filtering, display,
/// and export. One record per `call` element in the source export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRecord {
    /// Phone number exactly as it appears in the export.
    pub number: String,

    /// Contact name, lowercased at parse time for case-insensitive
    /// matching. Empty when the export carries no name for the call.
    pub contact_name: String,

    /// Call timestamp converted from epoch milliseconds to local time.
    pub timestamp: DateTime<Local>,

    /// Call duration in whole seconds.
    pub duration_secs: u64,

    /// Raw call type code from the export (e.g. "1" for incoming).
    /// Kept as a string so unrecognised codes survive untouched.
    pub call_type: String,
}

impl CallRecord {
    /// Direction class for this record's type code, if it has one.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_type_code(&self.call_type)
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Direction class derived from a call type code.
///
/// Codes outside both classes (carrier-specific extensions) map to no
/// direction: such records stay in the filtered list but contribute to
/// neither summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    /// Classifies a raw type code, returning `None` for codes that
    /// belong to neither class.
    pub fn from_type_code(code: &str) -> Option<Self> {
        if constants::INBOUND_TYPE_CODES.contains(&code) {
            Some(Self::Inbound)
        } else if constants::OUTBOUND_TYPE_CODES.contains(&code) {
            Some(Self::Outbound)
        } else {
            None
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inbound => "Inbound",
            Self::Outbound => "Outbound",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Summary
// =============================================================================

/// One row of the per-direction summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Direction label shown in the "Call Type" column.
    pub label: &'static str,

    /// Number of records in this direction class.
    pub call_count: usize,

    /// Sum of `duration_secs` over those records, saturating at
    /// `u64::MAX`.
    pub total_duration_secs: u64,
}

impl SummaryRow {
    fn empty(direction: Direction) -> Self {
        Self {
            label: direction.label(),
            call_count: 0,
            total_duration_secs: 0,
        }
    }
}

/// The fixed inbound/outbound summary pair.
///
/// Grouping the two rows in a struct keeps them labelled and ordered;
/// `rows()` yields them in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSummary {
    pub inbound: SummaryRow,
    pub outbound: SummaryRow,
}

impl CallSummary {
    /// Both rows in display order (inbound first).
    pub fn rows(&self) -> [&SummaryRow; 2] {
        [&self.inbound, &self.outbound]
    }
}

impl Default for CallSummary {
    fn default() -> Self {
        Self {
            inbound: SummaryRow::empty(Direction::Inbound),
            outbound: SummaryRow::empty(Direction::Outbound),
        }
    }
}
