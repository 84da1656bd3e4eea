// CallScope - core/render.rs
//
// Plain-text table rendering of the filtered records and the direction
// summary. Core layer: writes to any Write trait object; the CLI points
// it at stdout.

use crate::core::model::{CallRecord, CallSummary};
use crate::util::constants;
use std::io::{self, Write};

/// Notice shown in place of the record table when nothing matched.
pub const NO_MATCH_NOTICE: &str = "No records match the active filters.";

/// Write the two-row per-direction summary table.
pub fn render_summary<W: Write>(summary: &CallSummary, mut out: W) -> io::Result<()> {
    let type_width = 10;
    let count_width = 10;
    let duration_width = 12;

    writeln!(out, "Summary by call type:")?;
    writeln!(
        out,
        "{:<type_width$} {:>count_width$} {:>duration_width$}",
        "Call Type", "Call Count", "Duration Sum"
    )?;
    writeln!(
        out,
        "{} {} {}",
        "\u{2500}".repeat(type_width),
        "\u{2500}".repeat(count_width),
        "\u{2500}".repeat(duration_width)
    )?;
    for row in summary.rows() {
        writeln!(
            out,
            "{:<type_width$} {:>count_width$} {:>duration_width$}",
            row.label, row.call_count, row.total_duration_secs
        )?;
    }
    Ok(())
}

/// Write the filtered records as an aligned table, or the no-match
/// notice when the slice is empty.
///
/// The number and contact-name columns are sized to their content within
/// clamps so one long value cannot blow the layout apart; clipped values
/// end in "...".
pub fn render_table<W: Write>(records: &[CallRecord], mut out: W) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "{NO_MATCH_NOTICE}")?;
        return Ok(());
    }

    let number_width = column_width(
        records.iter().map(|r| r.number.chars().count()),
        "Number".len(),
        constants::MAX_NUMBER_COLUMN_WIDTH,
    );
    let name_width = column_width(
        records.iter().map(|r| r.contact_name.chars().count()),
        "Contact Name".len(),
        constants::MAX_NAME_COLUMN_WIDTH,
    );
    let date_width = 19; // YYYY-MM-DD HH:MM:SS
    let duration_width = "Duration".len();

    writeln!(
        out,
        "{:<number_width$} {:<name_width$} {:<date_width$} {:>duration_width$} {}",
        "Number", "Contact Name", "Date Time", "Duration", "Type"
    )?;
    writeln!(
        out,
        "{} {} {} {} {}",
        "\u{2500}".repeat(number_width),
        "\u{2500}".repeat(name_width),
        "\u{2500}".repeat(date_width),
        "\u{2500}".repeat(duration_width),
        "\u{2500}".repeat(4)
    )?;

    for record in records {
        let timestamp = record
            .timestamp
            .format(constants::TIMESTAMP_DISPLAY_FORMAT)
            .to_string();
        writeln!(
            out,
            "{:<number_width$} {:<name_width$} {:<date_width$} {:>duration_width$} {}",
            clip(&record.number, number_width),
            clip(&record.contact_name, name_width),
            timestamp,
            record.duration_secs,
            record.call_type
        )?;
    }

    Ok(())
}

/// Widest content length, clamped between the header width and a cap.
fn column_width<I: Iterator<Item = usize>>(lengths: I, min: usize, max: usize) -> usize {
    lengths.max().unwrap_or(min).clamp(min, max)
}

/// Clip a value to `max` display characters, marking the cut with "...".
/// Counts chars, not bytes, so multi-byte names cannot split a codepoint.
fn clip(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let keep: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{keep}...")
    }
}
