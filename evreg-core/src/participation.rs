//! Events a user has confirmed attendance for.

use crate::event::Event;

/// Ordered list of confirmed events. Duplicates are kept; order is confirmation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participation {
    confirmed: Vec<Event>,
}

impl Participation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, event: Event) {
        self.confirmed.push(event);
    }

    /// Remove the first entry equal (field by field) to `event`.
    /// Returns false when there was nothing to remove.
    pub fn remove(&mut self, event: &Event) -> bool {
        match self.confirmed.iter().position(|e| e == event) {
            Some(pos) => {
                self.confirmed.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[Event] {
        &self.confirmed
    }

    pub fn len(&self) -> usize {
        self.confirmed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::EventCategory;
    use chrono::NaiveDate;

    fn event(name: &str) -> Event {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        Event::new(name, "Arena", EventCategory::Show, at, "")
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let mut p = Participation::new();
        p.add(event("a"));
        p.add(event("b"));
        p.add(event("a"));

        let names: Vec<_> = p.list().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["a", "b", "a"]);
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut p = Participation::new();
        p.add(event("a"));
        p.add(event("b"));
        p.add(event("a"));

        assert!(p.remove(&event("a")));
        let names: Vec<_> = p.list().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn remove_missing_reports_false() {
        let mut p = Participation::new();
        p.add(event("a"));

        assert!(!p.remove(&event("z")));
        assert_eq!(p.len(), 1);
    }
}
