//! Profile avatar dropdown

use serde::{Deserialize, Serialize};

use super::Toggle;

/// Entries of the profile menu
///
/// Selecting one changes nothing on the dashboard; navigation and session
/// handling belong to whatever embeds it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProfileAction {
    Profile,
    Settings,
    Logout,
}

impl ProfileAction {
    /// All actions in menu order
    pub fn all() -> &'static [ProfileAction] {
        &[
            ProfileAction::Profile,
            ProfileAction::Settings,
            ProfileAction::Logout,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileAction::Profile => "Profile",
            ProfileAction::Settings => "Settings",
            ProfileAction::Logout => "Logout",
        }
    }
}

impl std::fmt::Display for ProfileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileMenu {
    open: Toggle,
}

impl ProfileMenu {
    pub fn toggle(&mut self) -> Toggle {
        self.open.toggle()
    }

    pub fn state(&self) -> Toggle {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Menu entries while open, `None` while closed
    pub fn panel(&self) -> Option<&'static [ProfileAction]> {
        self.open.is_open().then(ProfileAction::all)
    }
}
