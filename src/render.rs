//! Colored terminal rendering for evreg types.

use evreg_core::event::DISPLAY_TIME_FORMAT;
use evreg_core::{Event, EventCategory};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventCategory {
    fn render(&self) -> String {
        let tag = self.tag();
        match self {
            EventCategory::Party => tag.magenta().to_string(),
            EventCategory::Sport => tag.green().to_string(),
            EventCategory::Show => tag.cyan().to_string(),
            EventCategory::Other => tag.dimmed().to_string(),
        }
    }
}

/// Same fields and order as the plain summary, with the name and category highlighted.
impl Render for Event {
    fn render(&self) -> String {
        let time = self.timestamp().format(DISPLAY_TIME_FORMAT).to_string();

        format!(
            "Name: {}, Address: {}, Category: {}, Time: {}, Description: {}",
            self.name().bold(),
            self.address(),
            self.category().render(),
            time.yellow(),
            self.description()
        )
    }
}
