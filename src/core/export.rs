// CallScope - core/export.rs
//
// CSV and JSON export of filtered call records.
// Core layer: writes to any Write trait object; the shell layer decides
// where the bytes go (conventionally filtered_data.csv).

use crate::core::model::CallRecord;
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Column headers shared by the CSV export and the rendered table.
pub const CSV_HEADERS: [&str; 5] = ["Number", "Contact Name", "Date Time", "Duration", "Type"];

/// Export filtered records to CSV format.
///
/// Writes the five display columns with timestamps in the same
/// `YYYY-MM-DD HH:MM:SS` form the table shows. Returns the number of
/// records written.
pub fn export_csv<W: Write>(
    records: &[CallRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    for record in records {
        let timestamp = record
            .timestamp
            .format(constants::TIMESTAMP_DISPLAY_FORMAT)
            .to_string();
        let duration = record.duration_secs.to_string();

        csv_writer
            .write_record([
                record.number.as_str(),
                record.contact_name.as_str(),
                timestamp.as_str(),
                duration.as_str(),
                record.call_type.as_str(),
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(records.len())
}

/// Export filtered records to JSON format (array of objects).
pub fn export_json<W: Write>(
    records: &[CallRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn make_record(number: &str, contact: &str) -> CallRecord {
        CallRecord {
            number: number.to_string(),
            contact_name: contact.to_string(),
            timestamp: Local.with_ymd_and_hms(2024, 1, 15, 18, 30, 5).unwrap(),
            duration_secs: 125,
            call_type: "2".to_string(),
        }
    }

    #[test]
    fn test_csv_export() {
        let records = vec![
            make_record("+15551230001", "alice martin"),
            make_record("+15551230002", "bob smith"),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&records, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Number,Contact Name,Date Time,Duration,Type"));
        assert_eq!(
            lines.next(),
            Some("+15551230001,alice martin,2024-01-15 18:30:05,125,2")
        );
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_csv_export_quotes_embedded_commas() {
        let records = vec![make_record("+15551230001", "martin, alice")];
        let mut buf = Vec::new();
        export_csv(&records, &mut buf, &PathBuf::from("out.csv")).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"martin, alice\""));
    }

    #[test]
    fn test_json_export() {
        let records = vec![make_record("+15551230001", "alice martin")];
        let mut buf = Vec::new();
        let count = export_json(&records, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"number\": \"+15551230001\""));
        assert!(output.contains("\"duration_secs\": 125"));
    }
}
