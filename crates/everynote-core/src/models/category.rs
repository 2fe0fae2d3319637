//! Note category model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of labels used to partition notes in the list.
///
/// Serialized with the display label so stored payloads read `"To-Do"`,
/// not `"ToDo"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    Meeting,
    #[serde(rename = "To-Do")]
    ToDo,
    Ideas,
    Personal,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Meeting,
        Self::ToDo,
        Self::Ideas,
        Self::Personal,
    ];

    /// Human-readable label, identical to the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Meeting => "Meeting",
            Self::ToDo => "To-Do",
            Self::Ideas => "Ideas",
            Self::Personal => "Personal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_general() {
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_display_order() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["General", "Meeting", "To-Do", "Ideas", "Personal"]);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::ToDo).unwrap();
        assert_eq!(json, "\"To-Do\"");

        let parsed: Category = serde_json::from_str("\"To-Do\"").unwrap();
        assert_eq!(parsed, Category::ToDo);
    }
}
