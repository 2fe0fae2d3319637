//! Application services
//!
//! Local storage setup and native dialogs.

mod dialogs;
mod storage;

pub use dialogs::{alert, confirm};
pub use storage::{default_data_dir, open_storage};
