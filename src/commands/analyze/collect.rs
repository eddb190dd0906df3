//! Selection of the commit files to analyze.

use std::fs;
use std::path::Path;

use crate::error::{Result, VarlinesError};
use crate::logging::Log;

const ORIGIN: &str = "Analyze";

/// Collect the names of the commit files in `input_dir`.
///
/// Only regular files ending in `.{extension}` are considered; they are
/// returned sorted by name. With a `list` file, only the commits whose SHA
/// appears in the list are returned, in the order of the list. Listed SHAs
/// without a commit file are reported as warnings.
///
/// # Arguments
///
/// * `input_dir` - Directory holding the commit files
/// * `extension` - Extension of commit files, without the leading dot
/// * `list` - Optional file with one commit SHA per line
pub fn collect_commit_files(
    input_dir: &Path,
    extension: &str,
    list: Option<&Path>,
    log: &dyn Log,
) -> Result<Vec<String>> {
    let suffix = format!(".{}", extension);

    let entries = fs::read_dir(input_dir)
        .map_err(|e| VarlinesError::io("read directory", input_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| VarlinesError::io("read directory", input_dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(&suffix) {
            names.push(name);
        }
    }
    names.sort();

    let Some(list) = list else {
        return Ok(names);
    };

    let mut selected = Vec::new();
    for sha in read_commit_list(list)? {
        let name = format!("{}{}", sha, suffix);
        if selected.contains(&name) {
            continue;
        }
        if names.contains(&name) {
            selected.push(name);
        } else {
            log.warning(ORIGIN, "Listed commit not found", Some(&name));
        }
    }

    Ok(selected)
}

/// Read the trimmed, non-empty lines of a commit list file.
fn read_commit_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VarlinesError::UserError(format!(
                "commit list file '{}' does not exist",
                path.display()
            ))
        } else {
            VarlinesError::io("read commit list", path, e)
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
