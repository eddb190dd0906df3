//! Error types for the varlines CLI.
//!
//! Uses thiserror for derive macros. Classification itself never fails:
//! these errors only describe the surfaces around it (arguments, config,
//! reading commit files and writing result files).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for varlines operations.
#[derive(Error, Debug)]
pub enum VarlinesError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Reading input or writing output failed.
    #[error("I/O failure: {0}")]
    IoError(String),
}

impl VarlinesError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            VarlinesError::UserError(_) => exit_codes::USER_ERROR,
            VarlinesError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }

    /// Wrap an I/O error with the path it concerns.
    pub fn io(action: &str, path: &std::path::Path, err: std::io::Error) -> Self {
        VarlinesError::IoError(format!("failed to {} '{}': {}", action, path.display(), err))
    }
}

/// Result type alias for varlines operations.
pub type Result<T> = std::result::Result<T, VarlinesError>;
