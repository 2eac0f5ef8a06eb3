//! Notification center: bell, badge and disclosure panel

use serde::{Deserialize, Serialize};

use super::Toggle;

/// Text shown in an open panel with no messages
pub const EMPTY_PLACEHOLDER: &str = "No notifications";

/// Seed messages the dashboard mounts with
pub fn default_notifications() -> Vec<String> {
    vec![
        "New health tip available!".to_string(),
        "You have a doctor's appointment tomorrow.".to_string(),
        "Your fitness goal has been updated.".to_string(),
    ]
}

/// Bell dropdown state
///
/// Messages keep insertion order and are never deduplicated or bounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationCenter {
    open: Toggle,
    messages: Vec<String>,
}

/// What the panel below the bell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPanel<'a> {
    Hidden,
    /// Open with no messages: a single placeholder row
    Empty,
    Rows(&'a [String]),
}

impl NotificationCenter {
    /// Closed center seeded with `messages`
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            open: Toggle::Closed,
            messages,
        }
    }

    pub fn toggle(&mut self) -> Toggle {
        self.open.toggle()
    }

    pub fn state(&self) -> Toggle {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Badge count, omitted when there are no messages
    ///
    /// Does not depend on whether the panel is open.
    pub fn badge(&self) -> Option<usize> {
        match self.messages.len() {
            0 => None,
            n => Some(n),
        }
    }

    pub fn panel(&self) -> NotificationPanel<'_> {
        if !self.open.is_open() {
            NotificationPanel::Hidden
        } else if self.messages.is_empty() {
            NotificationPanel::Empty
        } else {
            NotificationPanel::Rows(&self.messages)
        }
    }
}

impl NotificationPanel<'_> {
    /// Row texts in display order; empty when hidden
    pub fn rows(&self) -> Vec<&str> {
        match self {
            NotificationPanel::Hidden => Vec::new(),
            NotificationPanel::Empty => vec![EMPTY_PLACEHOLDER],
            NotificationPanel::Rows(messages) => messages.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, NotificationPanel::Hidden)
    }

    /// Open with nothing to show but the placeholder row
    pub fn is_placeholder(&self) -> bool {
        matches!(self, NotificationPanel::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded(messages: &[&str]) -> NotificationCenter {
        NotificationCenter::new(messages.iter().map(|m| m.to_string()).collect())
    }

    #[test]
    fn test_starts_closed() {
        let center = seeded(&["A"]);
        assert!(!center.is_open());
        assert_eq!(center.panel(), NotificationPanel::Hidden);
        assert!(center.panel().rows().is_empty());
    }

    #[test]
    fn test_open_shows_rows_in_order() {
        let mut center = seeded(&["A", "B", "C"]);
        center.toggle();

        assert_eq!(center.panel().rows(), vec!["A", "B", "C"]);
        assert_eq!(center.badge(), Some(3));

        center.toggle();
        assert_eq!(center.panel(), NotificationPanel::Hidden);
        assert_eq!(center.badge(), Some(3));
    }

    #[test]
    fn test_empty_shows_placeholder_without_badge() {
        let mut center = seeded(&[]);
        assert_eq!(center.badge(), None);

        center.toggle();
        assert_eq!(center.panel(), NotificationPanel::Empty);
        assert_eq!(center.panel().rows(), vec![EMPTY_PLACEHOLDER]);
        assert_eq!(center.badge(), None);
    }

    #[test]
    fn test_panel_states() {
        let mut empty = seeded(&[]);
        assert!(!empty.panel().is_visible());
        empty.toggle();
        assert!(empty.panel().is_visible());
        assert!(empty.panel().is_placeholder());

        let mut full = seeded(&["A"]);
        full.toggle();
        assert!(full.panel().is_visible());
        assert!(!full.panel().is_placeholder());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut center = seeded(&["Drink water", "Drink water"]);
        center.toggle();
        assert_eq!(center.panel().rows().len(), 2);
        assert_eq!(center.badge(), Some(2));
    }

    #[test]
    fn test_default_seed() {
        let center = NotificationCenter::new(default_notifications());
        assert_eq!(center.len(), 3);
        assert_eq!(center.messages()[0], "New health tip available!");
    }

    proptest! {
        #[test]
        fn badge_tracks_length(messages in prop::collection::vec(".*", 0..16), open: bool) {
            let mut center = NotificationCenter::new(messages.clone());
            if open {
                center.toggle();
            }
            let expected = if messages.is_empty() { None } else { Some(messages.len()) };
            prop_assert_eq!(center.badge(), expected);
        }
    }
}
