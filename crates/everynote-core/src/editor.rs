//! Rich-text editing commands
//!
//! Formatting itself is done by the host web engine's `execCommand`. This
//! module only models which commands exist, what they are called on the
//! engine side, and which keyboard shortcuts trigger them.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;

/// Placeholder shown in an empty, unfocused editor
pub const EDITOR_PLACEHOLDER: &str = "What's on your mind today?";

static MARKUP_TAG: OnceLock<Regex> = OnceLock::new();

/// Block-level formats offered by the format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFormat {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
}

impl BlockFormat {
    /// All block formats in selector order
    pub const ALL: [Self; 4] = [
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Paragraph,
    ];

    /// Tag name passed as the `formatBlock` value
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Heading1 => "h1",
            Self::Heading2 => "h2",
            Self::Heading3 => "h3",
            Self::Paragraph => "p",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::Heading3 => "Heading 3",
            Self::Paragraph => "Paragraph",
        }
    }
}

impl FromStr for BlockFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.tag() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown block format: {s}")))
    }
}

/// A formatting command the editor can run against its editable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    BulletList,
    NumberedList,
    Block(BlockFormat),
}

impl FormatCommand {
    /// Inline and list commands in toolbar order
    pub const TOOLBAR: [Self; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::BulletList,
        Self::NumberedList,
    ];

    /// Command name understood by `document.execCommand`
    #[must_use]
    pub const fn exec_name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::BulletList => "insertUnorderedList",
            Self::NumberedList => "insertOrderedList",
            Self::Block(_) => "formatBlock",
        }
    }

    /// Value argument for `document.execCommand`, if the command takes one
    #[must_use]
    pub const fn exec_value(self) -> Option<&'static str> {
        match self {
            Self::Block(format) => Some(format.tag()),
            _ => None,
        }
    }

    /// Tooltip text for the toolbar button
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Bold => "Bold (Ctrl+B)",
            Self::Italic => "Italic (Ctrl+I)",
            Self::Underline => "Underline (Ctrl+U)",
            Self::BulletList => "Bullet List",
            Self::NumberedList => "Numbered List",
            Self::Block(format) => format.label(),
        }
    }

    /// Resolve a keyboard shortcut.
    ///
    /// Only Ctrl/Cmd combined with `b`, `i` or `u` map to a command; the
    /// caller should suppress the key's default action when this returns
    /// `Some`.
    #[must_use]
    pub fn from_shortcut(key: &str, ctrl_or_meta: bool) -> Option<Self> {
        if !ctrl_or_meta {
            return None;
        }
        match key {
            "b" => Some(Self::Bold),
            "i" => Some(Self::Italic),
            "u" => Some(Self::Underline),
            _ => None,
        }
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exec_value() {
            Some(value) => write!(f, "{}({value})", self.exec_name()),
            None => f.write_str(self.exec_name()),
        }
    }
}

/// Remove anything that looks like a markup tag.
///
/// Entities are left alone; this is only used for list previews.
#[must_use]
pub fn strip_markup(content: &str) -> String {
    let re = MARKUP_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));
    re.replace_all(content, "").into_owned()
}
