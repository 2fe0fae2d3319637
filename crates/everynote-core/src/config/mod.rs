//! Runtime configuration.
//!
//! Resolved from environment variables with defaults. The shell supplies the
//! platform data directory so this crate stays free of OS lookups.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::normalize_text_option;

/// Overrides the directory holding the local storage file
pub const DATA_DIR_ENV: &str = "EVERYNOTE_DATA_DIR";
/// Overrides the default tracing directive
pub const LOG_ENV: &str = "EVERYNOTE_LOG";

pub const DEFAULT_STORAGE_FILE: &str = "local_storage.db";
pub const DEFAULT_LOG_DIRECTIVE: &str = "everynote=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage_file: String,
    /// Directive added on top of `RUST_LOG`
    pub log_directive: String,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            storage_file: DEFAULT_STORAGE_FILE.to_string(),
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }

    /// Resolve from the process environment
    pub fn from_env(default_data_dir: impl Into<PathBuf>) -> Self {
        Self::from_lookup(default_data_dir, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for variable access; blank values are ignored.
    pub fn from_lookup(
        default_data_dir: impl Into<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::new(default_data_dir);
        if let Some(dir) = normalize_text_option(lookup(DATA_DIR_ENV)) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(directive) = normalize_text_option(lookup(LOG_ENV)) {
            config.log_directive = directive;
        }
        config
    }

    /// Full path of the local storage file
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage_file)
    }

    /// Create the data directory if it doesn't exist
    pub fn ensure_data_dir(&self) -> Result<&Path> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(&self.data_dir)
    }
}
