//! Line codecs for the data file.
//!
//! Each event is one line: name, address, category, timestamp and description
//! joined by [`DELIMITER`]. Two formats exist:
//! - `Legacy`: plain join, no escaping. Fields containing the delimiter or a
//!   line break cannot be encoded.
//! - `Escaped`: backslash-escapes the delimiter, line breaks and backslashes,
//!   so any text survives a round trip.

mod escaped;
mod legacy;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::category::EventCategory;
use crate::error::RecordError;
use crate::event::{Event, STORAGE_TIME_FORMAT, parse_storage_timestamp};

pub const DELIMITER: char = ',';

const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Legacy,
    Escaped,
}

impl Format {
    /// Encode an event as a single line (without the line terminator).
    pub fn encode(&self, event: &Event) -> Result<String, RecordError> {
        match self {
            Format::Legacy => legacy::encode(event),
            Format::Escaped => Ok(escaped::encode(event)),
        }
    }

    /// Decode one line back into an event.
    ///
    /// `Escaped` also reads lines written by `Legacy`: a stray backslash that
    /// forms no valid escape falls back to a plain split when that yields a
    /// whole record. A legacy backslash followed by a valid escape character
    /// (`\\`, `\,`, `\n`, `\r`) is still read as an escape.
    pub fn decode(&self, line: &str) -> Result<Event, RecordError> {
        let parts = match self {
            Format::Legacy => legacy::split(line),
            Format::Escaped => match escaped::split(line) {
                Ok(parts) => parts,
                Err(err) => {
                    let parts = legacy::split(line);
                    if parts.len() != FIELD_COUNT {
                        return Err(err);
                    }
                    parts
                }
            },
        };
        assemble(parts)
    }
}

fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(STORAGE_TIME_FORMAT).to_string()
}

/// Turn the five raw fields into an event, validating category and timestamp.
fn assemble(parts: Vec<String>) -> Result<Event, RecordError> {
    let [name, address, tag, timestamp, description]: [String; FIELD_COUNT] = parts
        .try_into()
        .map_err(|p: Vec<String>| RecordError::FieldCount(p.len()))?;

    let category = EventCategory::from_tag(&tag).ok_or(RecordError::UnknownCategory(tag))?;
    let timestamp =
        parse_storage_timestamp(&timestamp).ok_or(RecordError::BadTimestamp(timestamp))?;

    Ok(Event::new(name, address, category, timestamp, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn launch() -> Event {
        Event::new(
            "Launch",
            "Main St 1",
            EventCategory::Party,
            at(2024, 5, 1, 18, 30),
            "kickoff",
        )
    }

    #[test]
    fn legacy_encode_layout() {
        let line = Format::Legacy.encode(&launch()).unwrap();
        assert_eq!(line, "Launch,Main St 1,PARTY,2024-05-01 18:30,kickoff");
    }

    #[test]
    fn legacy_pads_single_digit_fields() {
        let event = Event::new("a", "b", EventCategory::Sport, at(987, 2, 3, 4, 5), "c");
        let line = Format::Legacy.encode(&event).unwrap();
        assert_eq!(line, "a,b,SPORT,0987-02-03 04:05,c");
    }

    #[test]
    fn legacy_round_trip() {
        for event in [
            launch(),
            Event::new("", "", EventCategory::Other, at(2030, 12, 31, 23, 59), ""),
            Event::new("Café", "Rua São João", EventCategory::Show, at(2024, 1, 1, 0, 0), "noite"),
        ] {
            let line = Format::Legacy.encode(&event).unwrap();
            assert_eq!(Format::Legacy.decode(&line).unwrap(), event);
        }
    }

    #[test]
    fn legacy_refuses_delimiter_in_fields() {
        let event = Event::new("Rock, Paper", "x", EventCategory::Show, at(2024, 1, 1, 0, 0), "y");
        assert_eq!(
            Format::Legacy.encode(&event),
            Err(RecordError::DelimiterInField("name"))
        );

        let event = Event::new("x", "y", EventCategory::Show, at(2024, 1, 1, 0, 0), "two\nlines");
        assert_eq!(
            Format::Legacy.encode(&event),
            Err(RecordError::DelimiterInField("description"))
        );
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        assert_eq!(
            Format::Legacy.decode("a,b,PARTY,2024-05-01 18:30"),
            Err(RecordError::FieldCount(4))
        );
        assert_eq!(
            Format::Legacy.decode("a,b,PARTY,2024-05-01 18:30,c,d"),
            Err(RecordError::FieldCount(6))
        );
    }

    #[test]
    fn decode_rejects_lowercase_tag() {
        assert_eq!(
            Format::Legacy.decode("a,b,party,2024-05-01 18:30,c"),
            Err(RecordError::UnknownCategory("party".into()))
        );
    }

    #[test]
    fn decode_rejects_bad_timestamp() {
        assert_eq!(
            Format::Legacy.decode("a,b,PARTY,01/05/2024 18:30,c"),
            Err(RecordError::BadTimestamp("01/05/2024 18:30".into()))
        );
    }

    #[test]
    fn decode_rejects_non_canonical_timestamp() {
        for timestamp in ["2024-5-1 18:30", "2024-05-0118:30", " 2024-05-01 18:30", "2024-05-01 18:30 "] {
            let line = format!("a,b,PARTY,{timestamp},c");
            for format in [Format::Legacy, Format::Escaped] {
                assert_eq!(
                    format.decode(&line),
                    Err(RecordError::BadTimestamp(timestamp.into())),
                    "{format:?} accepted {timestamp:?}"
                );
            }
        }
    }

    #[test]
    fn escaped_round_trip_with_delimiters() {
        let event = Event::new(
            "Rock, Paper, Scissors",
            "Av. Paulista, 1000\\A",
            EventCategory::Sport,
            at(2024, 7, 14, 9, 0),
            "bring water,\nand a hat",
        );
        let line = Format::Escaped.encode(&event).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(Format::Escaped.decode(&line).unwrap(), event);
    }

    #[test]
    fn escaped_reads_plain_legacy_lines() {
        let line = "Launch,Main St 1,PARTY,2024-05-01 18:30,kickoff";
        assert_eq!(Format::Escaped.decode(line).unwrap(), launch());
    }

    #[test]
    fn escaped_reads_legacy_line_with_stray_backslash() {
        let event = Format::Escaped
            .decode("C:\\temp,x,PARTY,2024-05-01 10:00,d")
            .unwrap();
        assert_eq!(event.name(), "C:\\temp");
        assert_eq!(event.description(), "d");
    }

    #[test]
    fn escaped_still_rejects_unrecoverable_escape() {
        assert_eq!(
            Format::Escaped.decode("abc\\"),
            Err(RecordError::BadEscape("abc\\".into()))
        );
    }
}
