//! Store Module
//!
//! The document store: maps `(collection, resource)` to
//! `<root>/<collection>/<resource>.json`.
//!
//! ## Responsibilities
//! - Create or reuse the root directory on open
//! - Persist records with a temp-file + rename protocol
//! - Serialize writes and deletes per collection
//! - Resolve resources with or without their `.json` extension
//!
//! ## Layout
//! ```text
//! {root}/
//!   ├── users/
//!   │     ├── John.json
//!   │     └── James.json.tmp   (only while a write is in flight)
//!   └── orders/
//!         └── 1001.json
//! ```

mod atomic;
mod codec;
mod locks;
mod paths;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::{FolioError, Result};

use locks::LockRegistry;

pub use paths::{clean_path, RECORD_EXTENSION, TEMP_SUFFIX};

/// An embedded document store rooted at one directory
///
/// ## Concurrency Model: per-collection writer lock
///
/// - **write / delete**: hold the collection's lock for the whole
///   operation. Same collection = totally ordered; different collections
///   run in parallel.
/// - **read / read_all**: take no lock. The rename in `write` means a
///   reader sees a complete old or new file, never a mix.
/// - The registry lock is only held while looking up a collection lock.
///
/// `Store` is `Send + Sync`; share it with `Arc<Store>`.
pub struct Store {
    /// Cleaned root directory (immutable after open)
    root_dir: PathBuf,

    /// Store configuration (logger, permissions, sync policy)
    config: Config,

    /// One lock per collection, created lazily, never removed
    locks: LockRegistry,
}

impl Store {
    /// Open or create a store with the given config
    ///
    /// On open:
    /// 1. Clean the root path
    /// 2. Reuse the directory if it exists, otherwise create it
    pub fn open(config: Config) -> Result<Self> {
        let root_dir = clean_path(&config.root_dir);

        match fs::metadata(&root_dir) {
            Ok(metadata) => {
                if !metadata.is_dir() {
                    return Err(FolioError::Io(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("'{}' exists and is not a directory", root_dir.display()),
                    )));
                }
                config.logger.debug(format_args!(
                    "Using '{}' (database already exists)",
                    root_dir.display()
                ));
            }
            Err(_) => {
                config.logger.debug(format_args!(
                    "Creating the database at '{}'...",
                    root_dir.display()
                ));
                atomic::create_dir_all(&root_dir, config.dir_mode)?;
            }
        }

        Ok(Self {
            root_dir,
            config,
            locks: LockRegistry::new(),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified root directory
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::builder().root_dir(path.as_ref()).build())
    }

    /// Persist `record` as `<collection>/<resource>.json`
    ///
    /// Steps:
    /// 1. Validate names
    /// 2. Encode the record
    /// 3. Acquire the collection lock
    /// 4. Ensure the collection directory exists
    /// 5. Write `<resource>.json.tmp`, then rename over `<resource>.json`
    pub fn write<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        resource: &str,
        record: &T,
    ) -> Result<()> {
        check_collection("save", collection)?;
        let resource = check_resource("save", resource)?;

        let bytes = codec::encode(record)?;

        let lock = self.locks.get_or_create(collection);
        let _guard = lock.lock();

        let dir = self.collection_dir(collection);
        atomic::create_dir_all(&dir, self.config.dir_mode)?;

        let path = paths::record_path(&dir, resource);
        atomic::write_atomic(&path, &bytes, self.config.file_mode, self.config.sync_writes)?;

        Ok(())
    }

    /// Load `<collection>/<resource>` and decode it as `T`
    ///
    /// `resource` may be given with or without the `.json` extension.
    /// The existence probe only gates the read; the bytes always come
    /// from `<resource>.json`.
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
        check_collection("read", collection)?;
        let resource = check_resource("read", resource)?;

        let dir = self.collection_dir(collection);
        paths::probe(&dir.join(resource)).map_err(|e| missing_or_io(e, collection, resource))?;

        // Also covers a delete landing between the probe and the read
        let bytes = fs::read(paths::record_path(&dir, resource))
            .map_err(|e| missing_or_io(e, collection, resource))?;
        codec::decode(&bytes)
    }

    /// Raw JSON text of every record in `collection`
    ///
    /// The result is unordered (directory listing order). Staged `.tmp`
    /// files and non-record entries are skipped. Any read failure fails
    /// the whole call, including a record deleted mid-listing.
    pub fn read_all(&self, collection: &str) -> Result<Vec<String>> {
        check_collection("read", collection)?;

        let dir = self.collection_dir(collection);
        let found = paths::probe(&dir).map_err(|e| missing_or_io(e, collection, ""))?;
        if !found.metadata.is_dir() {
            return Err(not_found(collection, ""));
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&found.path)? {
            let entry = entry?;
            let path = entry.path();

            if !paths::is_record_file(&path) || entry.file_type()?.is_dir() {
                continue;
            }

            records.push(fs::read_to_string(&path)?);
        }

        Ok(records)
    }

    /// Every record in `collection`, decoded as `T` (unordered)
    pub fn read_all_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        self.read_all(collection)?
            .iter()
            .map(|text| codec::decode(text.as_bytes()))
            .collect()
    }

    /// Remove `<collection>/<resource>`, or the whole collection when
    /// `resource` is empty
    ///
    /// Holds the collection lock, so it is ordered against writes.
    pub fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        check_collection("delete", collection)?;
        let resource = if resource.is_empty() {
            resource
        } else {
            check_resource("delete", resource)?
        };

        let lock = self.locks.get_or_create(collection);
        let _guard = lock.lock();

        let dir = self.collection_dir(collection);
        let target = if resource.is_empty() {
            dir.clone()
        } else {
            dir.join(resource)
        };

        // A directory is removed recursively; for anything else only the
        // record file `<resource>.json` goes, never a bare sibling
        let found = paths::probe(&target).map_err(|_| not_found(collection, resource))?;
        let removed = if found.metadata.is_dir() {
            fs::remove_dir_all(&found.path)
        } else {
            fs::remove_file(paths::record_path(&dir, resource))
        };

        match removed {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the cleaned root directory
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of collections that have been written to or deleted from
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root_dir.join(collection)
    }
}

fn check_collection(op: &'static str, collection: &str) -> Result<()> {
    if collection.is_empty() {
        return Err(FolioError::MissingCollection { op });
    }
    paths::validate_name(collection)
}

/// Validate a resource name and strip its `.json` extension
fn check_resource<'a>(op: &'static str, resource: &'a str) -> Result<&'a str> {
    if resource.is_empty() {
        return Err(FolioError::MissingResource { op });
    }
    paths::validate_name(resource)?;
    Ok(paths::resource_stem(resource))
}

fn not_found(collection: &str, resource: &str) -> FolioError {
    let path = if resource.is_empty() {
        collection.to_owned()
    } else {
        format!("{}/{}", collection, resource)
    };
    FolioError::NotFound { path }
}

fn missing_or_io(err: io::Error, collection: &str, resource: &str) -> FolioError {
    if err.kind() == io::ErrorKind::NotFound {
        not_found(collection, resource)
    } else {
        FolioError::Io(err)
    }
}
