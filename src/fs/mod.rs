//! Filesystem utilities for varlines.
//!
//! Result files are either appended to line by line while commits are
//! analyzed, or written once and atomically when the run is complete.

mod append;
pub mod atomic;

pub use append::{append_text, remove_if_exists};
pub use atomic::atomic_write_file;
