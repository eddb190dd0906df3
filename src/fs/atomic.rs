//! Atomic file writes.
//!
//! All atomic writes follow this pattern:
//! 1. Write content to a temporary file `.{filename}.tmp` in the same directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! Source and destination share a directory, so the rename never crosses
//! filesystems. On crash, the temporary file may remain.

use crate::error::{Result, VarlinesError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(VarlinesError::IoError)` - On write or rename failure
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        fs::create_dir_all(parent)
            .map_err(|e| VarlinesError::io("create parent directory", parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        VarlinesError::io("atomically replace", path, e)
    })
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            VarlinesError::IoError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).map_err(|e| VarlinesError::io("create temporary file", path, e))?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            VarlinesError::io("write temporary file", path, e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("summary.tsv");

        atomic_write(&file_path, b"CAv\t3\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "CAv\t3\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("summary.tsv");
        fs::write(&file_path, "stale summary").unwrap();

        atomic_write_file(&file_path, "fresh summary").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "fresh summary");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("out").join("summary.tsv");

        atomic_write_file(&file_path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_temp_file_does_not_remain() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("summary.tsv");

        atomic_write_file(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join(".summary.tsv.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/some/out/summary.tsv")).unwrap();
        assert_eq!(temp, Path::new("/some/out/.summary.tsv.tmp"));
    }

    #[test]
    fn test_write_into_missing_target_dir_fails_as_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let err = atomic_write_file(blocker.join("summary.tsv"), "x").unwrap_err();
        assert!(matches!(err, VarlinesError::IoError(_)));
    }
}
