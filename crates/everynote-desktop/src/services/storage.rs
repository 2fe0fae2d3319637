//! Local storage setup for the desktop application

use std::path::PathBuf;

use everynote_core::config::AppConfig;
use everynote_core::error::Result;

use crate::state::Storage;

/// Platform data directory for EveryNote, e.g. `~/.local/share/everynote`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("everynote")
}

/// Open the storage file named by `config`, creating its directory first
pub fn open_storage(config: &AppConfig) -> Result<Storage> {
    config.ensure_data_dir()?;
    let path = config.storage_path();
    let storage = Storage::open(&path)?;
    tracing::info!("Using local storage at {}", path.display());
    Ok(storage)
}
