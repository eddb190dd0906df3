//! Implementation of the `varlines show` command.
//!
//! Analyzes a single commit file and displays the counts of every changed
//! file, optionally with the verdict of each counted line.

use crate::analyze::{CommitAnalysis, CommitAnalyzer};
use crate::classify::{ChangeType, ClassifiedLine};
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::dispatch::FileKindDispatcher;
use crate::error::{Result, VarlinesError};
use crate::logging::Log;

const RULE: &str =
    "================================================================================";

/// Execute the `varlines show` command.
pub fn cmd_show(args: ShowArgs, config: &Config, log: &dyn Log) -> Result<()> {
    if !args.commit_file.is_file() {
        return Err(VarlinesError::UserError(format!(
            "commit file '{}' is not a file or does not exist",
            args.commit_file.display()
        )));
    }

    let dispatcher = FileKindDispatcher::from_config(config)?;
    let analysis = CommitAnalyzer::new(&dispatcher, log)
        .with_extension(&config.commit_file_extension)
        .with_lines(args.lines)
        .analyze_file(&args.commit_file)?
        .ok_or_else(|| {
            VarlinesError::UserError(format!(
                "'{}' holds no changes to analyze.\n\n\
                 Commit files are named `<sha>.{}` and contain at least one hunk.",
                args.commit_file.display(),
                config.commit_file_extension
            ))
        })?;

    if args.json {
        let json = serde_json::to_string_pretty(&analysis).map_err(|e| {
            VarlinesError::UserError(format!("failed to serialize analysis: {}", e))
        })?;
        println!("{}", json);
    } else {
        print!("{}", render_analysis(&analysis));
    }

    Ok(())
}

/// Render the human-readable report of one commit.
pub fn render_analysis(analysis: &CommitAnalysis) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    let date = analysis.date_label();
    if date.is_empty() {
        out.push_str(&format!("{}\n", analysis.sha));
    } else {
        out.push_str(&format!("{} [{}]\n", analysis.sha, date));
    }
    out.push_str(RULE);
    out.push_str("\n\n");

    for file in &analysis.files {
        out.push_str(&format!("{:<7} {}\n", file.kind.as_str(), file.path));
        out.push_str(&format!(
            "        added {} general + {} variability, deleted {} general + {} variability\n",
            file.counts.added,
            file.counts.added_variability,
            file.counts.deleted,
            file.counts.deleted_variability
        ));
        for line in &file.lines {
            out.push_str(&render_line(line));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "Artifact-specific lines: {}\n",
        analysis.artifact_lines()
    ));
    out.push_str(&format!(
        "Variability lines:       {}\n",
        analysis.variability_lines()
    ));

    out
}

fn render_line(line: &ClassifiedLine) -> String {
    let sign = match line.change {
        ChangeType::Added => '+',
        ChangeType::Deleted => '-',
        ChangeType::Context => ' ',
    };
    let verdict = if line.variability { "VAR" } else { "   " };
    format!("    {} {} {}\n", verdict, sign, line.text)
}
