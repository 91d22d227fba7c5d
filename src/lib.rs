//! # FolioDB
//!
//! A minimal embedded document store with:
//! - One JSON file per record, one directory per collection
//! - Atomic writes (temp file + rename)
//! - Per-collection locking for concurrent writers
//! - A pluggable logging capability
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Store                                │
//! │        write / read / read_all / read_all_as / delete        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ LockRegistry│          │    Codec    │
//!   │ (per coll.) │          │ (JSON, tab) │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └───────────┬────────────┘
//!                      ▼
//!              ┌───────────────┐
//!              │  Filesystem   │
//!              │ root/coll/*.json
//!              └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use foliodb::Store;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let store = Store::open_path("./data")?;
//! store.write("users", "John", &User { name: "John".into(), age: 23 })?;
//! let john: User = store.read("users", "John")?;
//! store.delete("users", "John")?;
//! # Ok::<(), foliodb::FolioError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logger;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FolioError, Result};
pub use config::{Config, ConfigBuilder};
pub use logger::{ConsoleLogger, LogLevel, Logger, TracingLogger};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FolioDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
