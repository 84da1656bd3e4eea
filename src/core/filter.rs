// CallScope - core/filter.rs
//
// Composable filter engine for call records.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or CLI dependencies.

use crate::core::model::CallRecord;
use chrono::NaiveDate;

/// Complete filter criteria. All fields are AND-combined when applied;
/// an unset field matches every record.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Substring the number must contain (case-sensitive, exact bytes).
    pub number_contains: Option<String>,

    /// Substring the contact name must contain (case-insensitive).
    pub name_contains: Option<String>,

    /// Start of the date range (inclusive, local calendar date).
    pub date_start: Option<NaiveDate>,

    /// End of the date range (inclusive, local calendar date).
    pub date_end: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.number_contains.is_none()
            && self.name_contains.is_none()
            && self.date_range().is_none()
    }

    /// The effective date range.
    ///
    /// The range applies only when BOTH bounds are supplied; a
    /// single-sided range means "no date filter". This mirrors the
    /// two-or-nothing behaviour of the original date picker and is a
    /// deliberate boundary case, not a bug.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_start.zip(self.date_end)
    }
}

/// Apply filters to a slice of records, returning the matching records
/// in their original order.
pub fn apply_filters(records: &[CallRecord], criteria: &FilterCriteria) -> Vec<CallRecord> {
    if criteria.is_empty() {
        return records.to_vec();
    }

    // Lowercase the name needle once, not per record.
    let name_lower = criteria.name_contains.as_deref().map(str::to_lowercase);

    let filtered: Vec<CallRecord> = records
        .iter()
        .filter(|record| matches_all(record, criteria, name_lower.as_deref()))
        .cloned()
        .collect();

    tracing::debug!(
        before = records.len(),
        after = filtered.len(),
        "Filters applied"
    );
    filtered
}

/// Check if a single record matches all active filters.
fn matches_all(record: &CallRecord, criteria: &FilterCriteria, name_lower: Option<&str>) -> bool {
    // Date range filter (both bounds inclusive, local calendar dates)
    if let Some((start, end)) = criteria.date_range() {
        let date = record.timestamp.date_naive();
        if date < start || date > end {
            return false;
        }
    }

    // Number substring (case-sensitive)
    if let Some(ref number) = criteria.number_contains {
        if !record.number.contains(number.as_str()) {
            return false;
        }
    }

    // Contact-name substring (record names are lowercased at parse)
    if let Some(name) = name_lower {
        if !record.contact_name.contains(name) {
            return false;
        }
    }

    true
}
