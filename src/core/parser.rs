// CallScope - core/parser.rs
//
// Event-driven XML parsing of call-log exports into CallRecord values.
// Core layer: accepts in-memory content, never touches the filesystem --
// the shell layer owns file reading.

use crate::core::model::CallRecord;
use crate::util::constants;
use crate::util::error::{FieldError, ParseError};
use chrono::{DateTime, Local};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Configuration for parsing operations.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Hard cap on the number of call records accepted from one document.
    pub max_records: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_records: constants::MAX_RECORDS,
        }
    }
}

/// Parse a call-log XML export into records.
///
/// Walks the document with an event reader and builds one `CallRecord`
/// per `call` element, whether self-closing or paired. Other elements
/// and unrecognised attributes are ignored, so exports that carry extra
/// metadata (e.g. `readable_date`) parse unchanged.
///
/// The parse is all-or-nothing: the first ill-formed construct or bad
/// field aborts with a typed error and no partial results.
///
/// # Arguments
/// * `content` - Document text (the shell layer handles reading)
/// * `config` - Parsing limits
pub fn parse_records(content: &str, config: &ParseConfig) -> Result<Vec<CallRecord>, ParseError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut records: Vec<CallRecord> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"call" {
                    if records.len() >= config.max_records {
                        return Err(ParseError::TooManyRecords {
                            max: config.max_records,
                        });
                    }
                    let position = reader.buffer_position() as u64;
                    records.push(record_from_element(&e, records.len() + 1, position)?);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(ParseError::Xml {
                    position: reader.buffer_position() as u64,
                    source,
                });
            }
        }
    }

    tracing::debug!(records = records.len(), "Call-log export parsed");
    Ok(records)
}

/// Build one record from a `call` element's attribute list.
///
/// `record` is the 1-based ordinal in document order, carried into field
/// errors so the offending element can be located in the source file.
fn record_from_element(
    element: &BytesStart<'_>,
    record: usize,
    position: u64,
) -> Result<CallRecord, ParseError> {
    let mut number = String::new();
    let mut contact_name = String::new();
    let mut date_raw: Option<String> = None;
    let mut duration_raw: Option<String> = None;
    let mut call_type = String::new();

    for attr in element.attributes() {
        let attr = attr.map_err(|e| ParseError::Xml {
            position,
            source: e.into(),
        })?;
        let value = attr
            .unescape_value()
            .map_err(|source| ParseError::Xml { position, source })?;
        match attr.key.as_ref() {
            b"number" => number = value.into_owned(),
            // Lowercased here so every later name comparison is
            // case-insensitive without repeated conversions.
            b"contact_name" => contact_name = value.to_lowercase(),
            b"date" => date_raw = Some(value.into_owned()),
            b"duration" => duration_raw = Some(value.into_owned()),
            b"type" => call_type = value.into_owned(),
            _ => {}
        }
    }

    let millis: i64 = parse_required(date_raw, record, "date")?;
    let timestamp = DateTime::from_timestamp_millis(millis)
        .ok_or(FieldError::TimestampOutOfRange { record, millis })?
        .with_timezone(&Local);
    let duration_secs: u64 = parse_required(duration_raw, record, "duration")?;

    Ok(CallRecord {
        number,
        contact_name,
        timestamp,
        duration_secs,
        call_type,
    })
}

/// Parse a required numeric attribute.
///
/// Absence and non-numeric text map to the matching `FieldError`
/// variants; the unsigned target type is what rejects negative durations.
fn parse_required<T>(raw: Option<String>, record: usize, field: &'static str) -> Result<T, FieldError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let raw = raw.ok_or(FieldError::Missing { record, field })?;
    match raw.trim().parse() {
        Ok(value) => Ok(value),
        Err(source) => Err(FieldError::NotNumeric {
            record,
            field,
            value: raw,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local};

    /// Expected local timestamp for an epoch-millisecond value, built via
    /// the same conversion the parser uses so tests hold in any timezone.
    fn local(ms: i64) -> DateTime<Local> {
        DateTime::from_timestamp_millis(ms)
            .unwrap()
            .with_timezone(&Local)
    }

    #[test]
    fn test_parses_self_closing_and_paired_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<calls count="2">
  <call number="+15551230134" contact_name="Alice Martin" date="1704103200000" duration="95" type="1" />
  <call number="02079460000" date="1704189600000" duration="0" type="2"></call>
</calls>"#;
        let records = parse_records(xml, &ParseConfig::default()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].number, "+15551230134");
        assert_eq!(records[0].contact_name, "alice martin");
        assert_eq!(records[0].timestamp, local(1_704_103_200_000));
        assert_eq!(records[0].duration_secs, 95);
        assert_eq!(records[0].call_type, "1");

        assert_eq!(records[1].number, "02079460000");
        assert_eq!(records[1].contact_name, "", "absent contact_name defaults to empty");
        assert_eq!(records[1].duration_secs, 0);
    }

    #[test]
    fn test_ignores_unknown_attributes_and_elements() {
        let xml = r#"<calls>
  <call number="555" date="0" duration="1" type="1" readable_date="1 Jan 1970" presentation="1" />
  <sms address="555" body="not a call" />
</calls>"#;
        let records = parse_records(xml, &ParseConfig::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, "555");
    }

    #[test]
    fn test_unescapes_attribute_values() {
        let xml = r#"<calls><call number="555" contact_name="A &amp; B Taxis" date="0" duration="1" type="2" /></calls>"#;
        let records = parse_records(xml, &ParseConfig::default()).unwrap();
        assert_eq!(records[0].contact_name, "a & b taxis");
    }

    #[test]
    fn test_empty_root_yields_no_records() {
        let records = parse_records("<calls />", &ParseConfig::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_date_aborts_parse() {
        let xml = r#"<calls><call number="555" duration="10" type="1" /></calls>"#;
        let result = parse_records(xml, &ParseConfig::default());
        assert!(
            matches!(
                result,
                Err(ParseError::Field(FieldError::Missing {
                    record: 1,
                    field: "date"
                }))
            ),
            "expected missing-date field error, got {result:?}"
        );
    }

    #[test]
    fn test_non_numeric_duration_aborts_parse() {
        let xml = r#"<calls>
  <call number="555" date="0" duration="10" type="1" />
  <call number="556" date="0" duration="ten" type="1" />
</calls>"#;
        let result = parse_records(xml, &ParseConfig::default());
        assert!(
            matches!(
                result,
                Err(ParseError::Field(FieldError::NotNumeric {
                    record: 2,
                    field: "duration",
                    ..
                }))
            ),
            "expected non-numeric duration error, got {result:?}"
        );
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let xml = r#"<calls><call number="555" date="0" duration="-5" type="1" /></calls>"#;
        let result = parse_records(xml, &ParseConfig::default());
        assert!(matches!(
            result,
            Err(ParseError::Field(FieldError::NotNumeric { field: "duration", .. }))
        ));
    }

    #[test]
    fn test_numeric_date_beyond_chrono_range_is_rejected() {
        let xml = r#"<calls><call number="555" date="9000000000000000000" duration="1" type="1" /></calls>"#;
        let result = parse_records(xml, &ParseConfig::default());
        assert!(matches!(
            result,
            Err(ParseError::Field(FieldError::TimestampOutOfRange { record: 1, .. }))
        ));
    }

    #[test]
    fn test_malformed_document_aborts_parse() {
        let xml = r#"<calls><call number="555" date="0" duration="1" type="1" /></cals>"#;
        let result = parse_records(xml, &ParseConfig::default());
        assert!(
            matches!(result, Err(ParseError::Xml { .. })),
            "expected XML error, got {result:?}"
        );
    }

    #[test]
    fn test_record_cap_is_enforced() {
        let xml = r#"<calls>
  <call number="1" date="0" duration="1" type="1" />
  <call number="2" date="0" duration="1" type="1" />
  <call number="3" date="0" duration="1" type="1" />
</calls>"#;
        let config = ParseConfig { max_records: 2 };
        let result = parse_records(xml, &config);
        assert!(matches!(
            result,
            Err(ParseError::TooManyRecords { max: 2 })
        ));
    }
}
