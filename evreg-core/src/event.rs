//! The event record and the raw input form it is built from.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use crate::category::EventCategory;
use crate::error::{EvregError, EvregResult};

/// Timestamp format used in the data file and for user input.
pub const STORAGE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Timestamp format used in summaries (day/month/year, 24h).
pub const DISPLAY_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// A registered event. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    address: String,
    category: EventCategory,
    timestamp: NaiveDateTime,
    description: String,
}

impl Event {
    /// Build an event. The timestamp is truncated to whole minutes.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        category: EventCategory,
        timestamp: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(timestamp);

        Event {
            name: name.into(),
            address: address.into(),
            category,
            timestamp,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The free-text fields paired with their names, in storage order.
    pub(crate) fn text_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("address", self.address.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Address: {}, Category: {}, Time: {}, Description: {}",
            self.name,
            self.address,
            self.category,
            self.timestamp.format(DISPLAY_TIME_FORMAT),
            self.description
        )
    }
}

/// An event as typed by the user, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name: String,
    pub address: String,
    pub category: String,
    pub timestamp: String,
    pub description: String,
}

impl NewEvent {
    /// Validate the category and timestamp and build the event.
    /// Nothing is created if either is invalid.
    pub fn build(self) -> EvregResult<Event> {
        let category: EventCategory = self.category.parse()?;
        let timestamp = parse_timestamp_input(&self.timestamp)?;

        Ok(Event::new(
            self.name,
            self.address,
            category,
            timestamp,
            self.description,
        ))
    }
}

/// Parse a user-typed "YYYY-MM-DD HH:MM" timestamp. Surrounding whitespace is ignored.
pub fn parse_timestamp_input(input: &str) -> EvregResult<NaiveDateTime> {
    parse_storage_timestamp(input.trim())
        .ok_or_else(|| EvregError::InvalidTimestampInput(input.to_string()))
}

/// Parse a timestamp laid out exactly as [`STORAGE_TIME_FORMAT`] writes it.
///
/// chrono alone also takes single-digit fields and any run of spaces, so the
/// parsed value must format back to the same text.
pub(crate) fn parse_storage_timestamp(text: &str) -> Option<NaiveDateTime> {
    let parsed = NaiveDateTime::parse_from_str(text, STORAGE_TIME_FORMAT).ok()?;
    (parsed.format(STORAGE_TIME_FORMAT).to_string() == text).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn launch_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn summary_uses_day_month_year() {
        let event = Event::new(
            "Launch",
            "Main St 1",
            EventCategory::Party,
            launch_time(),
            "kickoff",
        );
        assert_eq!(
            event.to_string(),
            "Name: Launch, Address: Main St 1, Category: PARTY, Time: 01/05/2024 18:30, Description: kickoff"
        );
    }

    #[test]
    fn timestamp_is_truncated_to_minutes() {
        let precise = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_milli_opt(18, 30, 42, 500)
            .unwrap();
        let event = Event::new("a", "b", EventCategory::Other, precise, "c");
        assert_eq!(event.timestamp(), launch_time());
    }

    #[test]
    fn build_normalizes_category() {
        let event = NewEvent {
            name: "Launch".into(),
            address: "Main St 1".into(),
            category: "party".into(),
            timestamp: "2024-05-01 18:30".into(),
            description: "kickoff".into(),
        }
        .build()
        .unwrap();

        assert_eq!(event.category(), EventCategory::Party);
        assert_eq!(event.timestamp(), launch_time());
    }

    #[test]
    fn build_rejects_unknown_category() {
        let result = NewEvent {
            category: "CONCERT".into(),
            timestamp: "2024-05-01 18:30".into(),
            ..Default::default()
        }
        .build();

        assert!(matches!(result, Err(EvregError::InvalidCategoryInput(_))));
    }

    #[test]
    fn build_rejects_bad_timestamp() {
        let result = NewEvent {
            category: "SHOW".into(),
            timestamp: "01/05/2024 18:30".into(),
            ..Default::default()
        }
        .build();

        assert!(matches!(result, Err(EvregError::InvalidTimestampInput(_))));
    }

    #[test]
    fn input_timestamp_must_be_zero_padded() {
        for input in ["2024-5-1 18:30", "2024-05-01 8:3", "2024-05-0118:30", "2024-05-01  18:30"] {
            assert!(
                matches!(
                    parse_timestamp_input(input),
                    Err(EvregError::InvalidTimestampInput(_))
                ),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn input_timestamp_ignores_surrounding_whitespace() {
        assert_eq!(parse_timestamp_input(" 2024-05-01 18:30\t").unwrap(), launch_time());
    }
}
