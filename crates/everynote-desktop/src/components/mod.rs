//! UI Components
//!
//! Building blocks for the home screen.

mod category_bar;
mod header;
mod note_card;
mod note_editor;
mod note_list;
mod rich_text_editor;
mod search_bar;
mod toolbar;

pub use category_bar::CategoryBar;
pub use header::Header;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use rich_text_editor::RichTextEditor;
pub use search_bar::SearchBar;
pub use toolbar::FormattingToolbar;
