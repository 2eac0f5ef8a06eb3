//! Two-state disclosure toggle

use serde::{Deserialize, Serialize};

/// Open/closed state of a disclosure panel
///
/// The only transition is [`Toggle::toggle`], which flips the state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    #[default]
    Closed,
    Open,
}

impl Toggle {
    /// Flip the state and return the new one
    pub fn toggle(&mut self) -> Toggle {
        *self = self.flipped();
        *self
    }

    /// The opposite state, without mutating
    pub fn flipped(self) -> Toggle {
        match self {
            Toggle::Closed => Toggle::Open,
            Toggle::Open => Toggle::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Toggle::Open)
    }
}

impl From<bool> for Toggle {
    fn from(open: bool) -> Self {
        if open {
            Toggle::Open
        } else {
            Toggle::Closed
        }
    }
}

impl std::fmt::Display for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Toggle::Closed => write!(f, "closed"),
            Toggle::Open => write!(f, "open"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_to_closed() {
        assert_eq!(Toggle::default(), Toggle::Closed);
        assert!(!Toggle::default().is_open());
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut toggle = Toggle::Closed;
        assert_eq!(toggle.toggle(), Toggle::Open);
        assert!(toggle.is_open());
        assert_eq!(toggle.toggle(), Toggle::Closed);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Toggle::from(true), Toggle::Open);
        assert_eq!(Toggle::from(false), Toggle::Closed);
    }

    proptest! {
        #[test]
        fn toggling_twice_is_identity(open: bool) {
            let original = Toggle::from(open);
            let mut toggle = original;
            toggle.toggle();
            toggle.toggle();
            prop_assert_eq!(toggle, original);
        }

        #[test]
        fn parity_of_toggles_decides_state(flips in 0usize..64) {
            let mut toggle = Toggle::default();
            for _ in 0..flips {
                toggle.toggle();
            }
            prop_assert_eq!(toggle.is_open(), flips % 2 == 1);
        }
    }
}
