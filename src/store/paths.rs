//! Path helpers
//!
//! - Name validation (one path segment per collection/resource)
//! - Lexical path cleaning for the root directory
//! - The existence probe shared by read, read_all and delete

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{FolioError, Result};

/// Extension of every resource file, including the dot
pub const RECORD_EXTENSION: &str = ".json";

/// Suffix appended to a resource file while it is being written
pub const TEMP_SUFFIX: &str = ".tmp";

/// Result of a successful existence probe
#[derive(Debug)]
pub struct Probe {
    /// The form that exists: the bare path or its `.json` sibling
    pub path: PathBuf,
    pub metadata: fs::Metadata,
}

/// Stat `path`, falling back to `<path>.json` if the bare path is absent
///
/// When neither exists the error of the suffixed check is returned.
pub fn probe(path: &Path) -> io::Result<Probe> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Probe {
            path: path.to_path_buf(),
            metadata,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let suffixed = append_suffix(path, RECORD_EXTENSION);
            let metadata = fs::metadata(&suffixed)?;
            Ok(Probe {
                path: suffixed,
                metadata,
            })
        }
        Err(e) => Err(e),
    }
}

/// Reject names that would escape their directory
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name == "." || name == ".." {
        Some("must not be a relative directory reference")
    } else if name.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else if name.contains('\0') {
        Some("must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FolioError::InvalidName {
            name: name.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Strip one trailing `.json` so "john" and "john.json" name the same resource
pub fn resource_stem(resource: &str) -> &str {
    match resource.strip_suffix(RECORD_EXTENSION) {
        Some(stem) if !stem.is_empty() => stem,
        _ => resource,
    }
}

/// `<path><suffix>` without touching any existing extension
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(suffix);
    PathBuf::from(os)
}

/// `<dir>/<resource>.json`
pub fn record_path(dir: &Path, resource: &str) -> PathBuf {
    append_suffix(&dir.join(resource), RECORD_EXTENSION)
}

/// Sibling file a record is staged in before the rename
pub fn temp_path(record_path: &Path) -> PathBuf {
    append_suffix(record_path, TEMP_SUFFIX)
}

/// True for finished record files; staged `.json.tmp` files don't count
pub fn is_record_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.len() > RECORD_EXTENSION.len() && name.ends_with(RECORD_EXTENSION))
        .unwrap_or(false)
}

/// Lexically normalize a path
///
/// Drops `.` segments, folds `name/..` pairs and repeated separators.
/// `..` directly under the root is dropped; leading `..` on a relative
/// path is kept. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
