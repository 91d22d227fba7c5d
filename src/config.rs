//! Configuration for FolioDB
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::logger::{ConsoleLogger, Logger};

/// Main configuration for a FolioDB store
#[derive(Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all collections
    /// Internal structure:
    ///   {root_dir}/
    ///     └── {collection}/
    ///           ├── {resource}.json
    ///           └── {resource}.json.tmp   (only while a write is in flight)
    pub root_dir: PathBuf,

    /// Permission bits for the root and collection directories (Unix only)
    pub dir_mode: u32,

    /// Permission bits for resource files (Unix only)
    pub file_mode: u32,

    /// fsync the temp file before it is renamed into place
    pub sync_writes: bool,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Logging capability; defaults to a console logger at Info
    pub logger: Arc<dyn Logger>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("./foliodb_data"),
            dir_mode: 0o755,
            file_mode: 0o644,
            sync_writes: true,
            logger: Arc::new(ConsoleLogger::default()),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("root_dir", &self.root_dir)
            .field("dir_mode", &format_args!("{:#o}", self.dir_mode))
            .field("file_mode", &format_args!("{:#o}", self.file_mode))
            .field("sync_writes", &self.sync_writes)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the root directory (parent of all collections)
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root_dir = path.into();
        self
    }

    /// Set the permission bits for created directories
    pub fn dir_mode(mut self, mode: u32) -> Self {
        self.config.dir_mode = mode;
        self
    }

    /// Set the permission bits for resource files
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.config.file_mode = mode;
        self
    }

    /// Enable or disable fsync of the temp file before rename
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    /// Replace the logging capability
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.config.logger = logger;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
