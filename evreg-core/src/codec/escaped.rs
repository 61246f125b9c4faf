//! Comma-joined lines with backslash escaping.
//!
//! `\\`, `\,`, `\n` and `\r` stand for a backslash, the delimiter, a newline
//! and a carriage return. Any other escape is rejected on decode.

use super::{DELIMITER, format_timestamp};
use crate::error::RecordError;
use crate::event::Event;

pub(super) fn encode(event: &Event) -> String {
    let fields = [
        escape(event.name()),
        escape(event.address()),
        event.category().tag().to_string(),
        format_timestamp(event.timestamp()),
        escape(event.description()),
    ];

    let delimiter = DELIMITER.to_string();
    fields.join(delimiter.as_str())
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            DELIMITER => {
                out.push('\\');
                out.push(DELIMITER);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Split on unescaped delimiters, unescaping each part.
pub(super) fn split(line: &str) -> Result<Vec<String>, RecordError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') => current.push('\\'),
                Some(DELIMITER) => current.push(DELIMITER),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                _ => return Err(RecordError::BadEscape(line.to_string())),
            },
            DELIMITER => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    parts.push(current);

    Ok(parts)
}
