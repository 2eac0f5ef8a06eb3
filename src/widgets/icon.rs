//! Icon handles
//!
//! The dashboard only needs something renderable for each symbol. Renderers
//! pick either the glyph (terminal) or the name (CSS class / SVG lookup).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Person,
    Bell,
    Search,
    /// Vertical three-dot overflow menu
    Overflow,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Person => "👤",
            Icon::Bell => "🔔",
            Icon::Search => "🔍",
            Icon::Overflow => "⋮",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Icon::Person => "person",
            Icon::Bell => "bell",
            Icon::Search => "search",
            Icon::Overflow => "three-dots-vertical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serializes_by_name() {
        let json = serde_json::to_string(&Icon::Overflow).unwrap();
        assert_eq!(json, "\"overflow\"");
        assert_eq!(Icon::Overflow.name(), "three-dots-vertical");
    }
}
