//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, VarlinesError};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(VarlinesError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            VarlinesError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| VarlinesError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            VarlinesError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `commit_file_extension` and `extension_blacklist` entries must be
    ///   non-empty and have no leading dots
    /// - output file names must be non-empty plain file names
    /// - `excluded_paths` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        check_extension("commit_file_extension", &self.commit_file_extension)?;
        if self.commit_file_extension.contains('.') {
            return Err(VarlinesError::UserError(format!(
                "config validation failed: commit_file_extension must be a single extension (found '{}')",
                self.commit_file_extension
            )));
        }

        for ext in &self.extension_blacklist {
            check_extension("extension_blacklist", ext)?;
        }

        for (field, name) in [
            ("results_file", &self.results_file),
            ("summary_file", &self.summary_file),
            ("unanalyzed_file", &self.unanalyzed_file),
        ] {
            if name.trim().is_empty() {
                return Err(VarlinesError::UserError(format!(
                    "config validation failed: {} must be non-empty",
                    field
                )));
            }
            if name.contains(['/', '\\']) {
                return Err(VarlinesError::UserError(format!(
                    "config validation failed: {} must be a file name, not a path (found '{}')",
                    field, name
                )));
            }
        }

        if self.results_file == self.summary_file
            || self.results_file == self.unanalyzed_file
            || self.summary_file == self.unanalyzed_file
        {
            return Err(VarlinesError::UserError(
                "config validation failed: results_file, summary_file and unanalyzed_file must differ"
                    .to_string(),
            ));
        }

        self.excluded_paths_globset()?;

        Ok(())
    }

    /// Compile `excluded_paths` into one glob set.
    pub fn excluded_paths_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.excluded_paths {
            let glob = Glob::new(&pattern.replace('\\', "/")).map_err(|e| {
                VarlinesError::UserError(format!(
                    "config validation failed: invalid glob pattern in excluded_paths: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder.build().map_err(|e| {
            VarlinesError::UserError(format!("failed to compile excluded_paths globs: {}", e))
        })
    }

    /// Get extension_blacklist normalized to lowercase.
    pub fn normalized_blacklist(&self) -> Vec<String> {
        self.extension_blacklist
            .iter()
            .map(|s| s.to_lowercase())
            .collect()
    }
}

fn check_extension(field: &str, ext: &str) -> Result<()> {
    if ext.is_empty() {
        return Err(VarlinesError::UserError(format!(
            "config validation failed: {} entries must be non-empty",
            field
        )));
    }
    if ext.starts_with('.') {
        return Err(VarlinesError::UserError(format!(
            "config validation failed: {} entries must not have leading dots (found '{}'). Use '{}' instead.",
            field,
            ext,
            ext.trim_start_matches('.')
        )));
    }
    Ok(())
}
