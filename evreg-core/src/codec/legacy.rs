//! Plain comma-joined lines, no escaping.

use super::{DELIMITER, format_timestamp};
use crate::error::RecordError;
use crate::event::Event;

const FORBIDDEN: [char; 3] = [DELIMITER, '\n', '\r'];

pub(super) fn encode(event: &Event) -> Result<String, RecordError> {
    // A delimiter inside a field would shift every later field on decode.
    for (field, value) in event.text_fields() {
        if value.contains(&FORBIDDEN[..]) {
            return Err(RecordError::DelimiterInField(field));
        }
    }

    let timestamp = format_timestamp(event.timestamp());
    let fields = [
        event.name(),
        event.address(),
        event.category().tag(),
        timestamp.as_str(),
        event.description(),
    ];

    let delimiter = DELIMITER.to_string();
    Ok(fields.join(delimiter.as_str()))
}

pub(super) fn split(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(String::from).collect()
}
