//! Diff block primitives for varlines.
//!
//! A commit file holds the commit timestamp on its first line followed by
//! the unified diff of every changed file. This module splits such text
//! into per-file [`DiffBlock`]s and exposes the bits of a block header the
//! rest of the crate needs:
//! - the old (`a/`) and new (`b/`) paths of the changed file
//! - the index of the first hunk marker (`@@`), where line-level changes start
//!
//! A block without any hunk marker is malformed (binary files, pure mode
//! changes, renames without content changes) and is never constructed.

mod block;
mod commit;
mod helpers;


pub use block::{DiffBlock, HUNK_MARKER};
pub use commit::{CommitText, DIFF_HEADER_PREFIX, date_label, split_commit};
pub use helpers::parse_diff_git_line;
