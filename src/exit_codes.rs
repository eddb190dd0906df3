//! Exit code constants for the varlines CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, missing directories)
//! - 2: I/O failure (reading commit files, writing results)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or missing input.
pub const USER_ERROR: i32 = 1;

/// I/O failure: a commit file could not be read or a result file could not be written.
pub const IO_FAILURE: i32 = 2;
