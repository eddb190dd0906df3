//! Append-only writes for files that grow during a run.

use crate::error::{Result, VarlinesError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append `text` to the file at `path`, creating it if needed.
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| VarlinesError::io("open", path, e))?;

    file.write_all(text.as_bytes())
        .map_err(|e| VarlinesError::io("append to", path, e))
}

/// Remove the file at `path`; a missing file is not an error.
pub fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(VarlinesError::io("remove", path, e)),
    }
}
