use crate::event::Event;
use crate::participation::Participation;

/// The person driving the session. Not persisted.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub city: String,
    participation: Participation,
}

impl User {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        User {
            name: name.into(),
            city: city.into(),
            participation: Participation::new(),
        }
    }

    pub fn confirm(&mut self, event: Event) {
        self.participation.add(event);
    }

    pub fn withdraw(&mut self, event: &Event) -> bool {
        self.participation.remove(event)
    }

    pub fn confirmed_events(&self) -> &[Event] {
        self.participation.list()
    }
}
