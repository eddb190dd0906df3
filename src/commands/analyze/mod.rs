//! Implementation of the `varlines analyze` command.
//!
//! # What `varlines analyze` does
//!
//! 1. Checks that the input and output directories (and the list file) exist
//! 2. Removes the output files of a previous run
//! 3. Collects the commit files, optionally restricted to the listed SHAs
//! 4. Analyzes each commit, appending its results line or, if it holds
//!    nothing to analyze, its file name to the unanalyzed list
//! 5. Writes the run summary

mod collect;


use chrono::Local;

use crate::analyze::CommitAnalyzer;
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::dispatch::FileKindDispatcher;
use crate::error::{Result, VarlinesError};
use crate::logging::Log;
use crate::report::{ResultWriter, RunSummary};

pub use collect::collect_commit_files;

const ORIGIN: &str = "Analyze";

const TIMESTAMP_FORMAT: &str = "%a %d.%m.%Y %H:%M:%S";

/// Execute the `varlines analyze` command.
pub fn cmd_analyze(args: AnalyzeArgs, config: &Config, log: &dyn Log) -> Result<()> {
    log.info(
        ORIGIN,
        &format!("Run start: {}", Local::now().format(TIMESTAMP_FORMAT)),
    );

    let summary = run_analysis(&args, config, log)?;

    println!(
        "Analyzed {} of {} commits ({} changing artifact-specific information only, {} changing variability information only, {} changing both)",
        summary.analyzed,
        summary.available,
        summary.artifact_only.commits,
        summary.variability_only.commits,
        summary.artifact_and_variability.commits,
    );

    log.info(
        ORIGIN,
        &format!("Run end: {}", Local::now().format(TIMESTAMP_FORMAT)),
    );
    Ok(())
}

/// Analyze all commit files selected by `args` and write the output files.
///
/// # Returns
///
/// * `Ok(RunSummary)` - The totals that were written to the summary file
/// * `Err(VarlinesError::UserError)` - A directory or the list file is missing
/// * `Err(VarlinesError::IoError)` - Reading a commit or writing a result failed
pub fn run_analysis(args: &AnalyzeArgs, config: &Config, log: &dyn Log) -> Result<RunSummary> {
    require_dir(&args.input, "input")?;
    require_dir(&args.output, "output")?;
    if let Some(list) = &args.list
        && !list.is_file()
    {
        return Err(VarlinesError::UserError(format!(
            "commit list file '{}' is not a file or does not exist",
            list.display()
        )));
    }

    let dispatcher = FileKindDispatcher::from_config(config)?;
    let analyzer =
        CommitAnalyzer::new(&dispatcher, log).with_extension(&config.commit_file_extension);
    let mut writer = ResultWriter::new(&args.output, config);
    writer.start()?;

    log.info(ORIGIN, "Collecting commits");
    let commit_files = collect_commit_files(
        &args.input,
        &config.commit_file_extension,
        args.list.as_deref(),
        log,
    )?;
    log.info(ORIGIN, &format!("{} commits found", commit_files.len()));

    log.info(ORIGIN, "Analyzing commits");
    let mut summary = RunSummary::new(commit_files.len() as u64);
    for name in &commit_files {
        let analysis = analyzer
            .analyze_file(&args.input.join(name))
            .inspect_err(|e| {
                log.error(ORIGIN, "Commit could not be read", Some(&e.to_string()));
            })?;
        match analysis {
            Some(analysis) => {
                writer.add_results(&analysis)?;
                summary.record(&analysis);
            }
            None => writer.add_unanalyzed(name)?,
        }
    }

    writer.write_summary(&summary)?;
    log.info(ORIGIN, "Commits analyzed");

    log_output(&writer, log);

    Ok(summary)
}

fn log_output(writer: &ResultWriter, log: &dyn Log) {
    let mut written = vec![writer.results_path(), writer.summary_path()];
    if writer.unanalyzed_path().exists() {
        written.push(writer.unanalyzed_path());
    }
    for path in written {
        log.debug(ORIGIN, "Output written", Some(&path.display().to_string()));
    }
}

fn require_dir(path: &std::path::Path, role: &str) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(VarlinesError::UserError(format!(
            "{} directory '{}' is not a directory or does not exist",
            role,
            path.display()
        )))
    }
}
