// CallScope - core/summary.rs
//
// Per-direction aggregate summary over a record set.
// Computed on whatever slice the caller passes -- the pipeline hands it
// the FILTERED records, never the raw parse.

use crate::core::model::{CallRecord, CallSummary, Direction};

/// Count records and sum durations per direction class.
///
/// Records whose type code belongs to neither class are skipped here but
/// remain in the record list itself. An empty slice yields two zero rows.
/// Duration sums saturate at `u64::MAX`: individual durations are only
/// bounded by what fits in the field, so the accumulator must not wrap.
pub fn summarize(records: &[CallRecord]) -> CallSummary {
    let mut summary = CallSummary::default();

    for record in records {
        let row = match record.direction() {
            Some(Direction::Inbound) => &mut summary.inbound,
            Some(Direction::Outbound) => &mut summary.outbound,
            None => continue,
        };
        row.call_count += 1;
        row.total_duration_secs = row.total_duration_secs.saturating_add(record.duration_secs);
    }

    summary
}
