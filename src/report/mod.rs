//! Run results for varlines.
//!
//! A run produces three files in the output directory:
//! - the results TSV, one line per analyzed commit
//! - the summary TSV, run-wide totals written once at the end
//! - the unanalyzed list, one commit file name per line, only created if
//!   some commit could not be analyzed

mod summary;
mod writer;


pub use summary::{CommitCategory, CommitCategoryTotals, RunSummary};
pub use writer::{RESULTS_HEADER, ResultWriter, result_row};
