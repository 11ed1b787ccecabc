//! Notification feed shown on the notifications screen

use crate::types::Notification;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
}

impl NotificationFeed {
    /// Sorts newest first.
    pub fn new(mut entries: Vec<Notification>) -> Self {
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { entries }
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) if !entry.read => {
                entry.read = true;
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(id: &str, hour: u32, read: bool) -> Notification {
        Notification {
            id: id.into(),
            title: format!("Note {id}"),
            message: "Someone contributed".into(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 1, hour, 0, 0).unwrap(),
            read,
        }
    }

    #[test]
    fn newest_first_with_unread_count() {
        let mut feed = NotificationFeed::new(vec![
            note("a", 8, false),
            note("b", 10, true),
            note("c", 9, false),
        ]);

        let ids: Vec<_> = feed.entries().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(feed.unread_count(), 2);

        assert!(feed.mark_read("a"));
        assert!(!feed.mark_read("a"));
        assert_eq!(feed.unread_count(), 1);

        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
    }
}
