//! Filesystem primitives with explicit permissions
//!
//! `write_atomic` stages bytes in `<path>.tmp` and renames it over
//! `<path>`, so readers see either the old file or the new one.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::paths;

/// `mkdir -p` applying `mode` to every directory it creates
pub fn create_dir_all(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path)
}

/// Publish `bytes` at `path` via a temp file and a rename
///
/// A failure before the rename leaves the previous file untouched; at
/// worst a stray `.tmp` sibling remains.
pub fn write_atomic(path: &Path, bytes: &[u8], mode: u32, sync: bool) -> io::Result<()> {
    let temp = paths::temp_path(path);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(&temp)?;
    file.write_all(bytes)?;
    if sync {
        file.sync_all()?;
    }
    drop(file);

    fs::rename(&temp, path)
}
