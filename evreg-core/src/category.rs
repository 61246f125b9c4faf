use std::fmt;
use std::str::FromStr;

use crate::error::EvregError;

/// The closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Party,
    Sport,
    Show,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Party,
        EventCategory::Sport,
        EventCategory::Show,
        EventCategory::Other,
    ];

    /// Canonical tag, as written to the data file.
    pub fn tag(&self) -> &'static str {
        match self {
            EventCategory::Party => "PARTY",
            EventCategory::Sport => "SPORT",
            EventCategory::Show => "SHOW",
            EventCategory::Other => "OTHER",
        }
    }

    /// Exact, case-sensitive lookup used when reading persisted lines.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Case-insensitive parsing of user input ("party", "Party", "PARTY").
impl FromStr for EventCategory {
    type Err = EvregError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.tag().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EvregError::InvalidCategoryInput(s.to_string()))
    }
}
