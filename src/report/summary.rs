//! Run-wide totals and the summary table.

use serde::Serialize;

use crate::analyze::CommitAnalysis;
use crate::classify::ChangeCounts;

const SUMMARY_HEADER: &str = "Counted Element\tNumber of Commits\tNumber of Changed Lines (artifact-specific)\tNumber of Changed Lines (variability)";

const SUMMARY_LEGEND: &[&str] = &[
    "CAv\t[C]ommits [Av]ailable: number of all commits input to this analysis",
    "CAn\t[C]ommits [An]alyzed: number of commits actually analyzed",
    "\t    Some commits may not be analyzed due to no file changes",
    "CCAI\t[C]ommits [C]hanging [A]rtifact-specific [I]nformation: number of commits that change at least one line of",
    "\t    a) help text in a variability model file (no variability information)",
    "\t    b) general source code in a source code file (no variability information)",
    "\t    c) the general build process definition in a build file (no variability information)",
    "CCVI\t[C]ommits [C]hanging [V]ariability [I]nformation: number of commits that change at least one line defining",
    "\t    a) configuration options, etc. in a variability model file (variability information)",
    "\t    b) references to configuration options in a source code file (variability information)",
    "\t    c) references to configuration options in a build file (variability information)",
    "CCAVI\t[C]ommits [C]hanging [A]rtifact-specific and [V]ariability [I]nformation: number of commits that change both types of information (see CCAI and CCVI)",
    "CML\t[C]hanged [M]odel [L]ines: number of changed model lines over all analyzed commits",
    "CCL\t[C]hanged source [C]ode [L]ines: number of changed source code lines over all analyzed commits",
    "CBL\t[C]hanged [B]uild process [L]ines: number of changed build process lines over all analyzed commits",
];

/// What kind of information an analyzed commit changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitCategory {
    /// Only artifact-specific lines (CCAI).
    ArtifactOnly,
    /// Only variability lines (CCVI).
    VariabilityOnly,
    /// Both (CCAVI).
    ArtifactAndVariability,
}

impl CommitCategory {
    /// The category of `analysis`, or `None` if it changes no counted line.
    pub fn of(analysis: &CommitAnalysis) -> Option<Self> {
        match (analysis.artifact_lines(), analysis.variability_lines()) {
            (0, 0) => None,
            (0, _) => Some(CommitCategory::VariabilityOnly),
            (_, 0) => Some(CommitCategory::ArtifactOnly),
            _ => Some(CommitCategory::ArtifactAndVariability),
        }
    }
}

/// Commits of one category and the lines they change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommitCategoryTotals {
    pub commits: u64,
    pub artifact_lines: u64,
    pub variability_lines: u64,
}

/// Totals over all commits of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Commit files input to the run (CAv).
    pub available: u64,
    /// Commits actually analyzed (CAn).
    pub analyzed: u64,
    pub artifact_only: CommitCategoryTotals,
    pub variability_only: CommitCategoryTotals,
    pub artifact_and_variability: CommitCategoryTotals,
    pub model: ChangeCounts,
    pub source: ChangeCounts,
    pub build: ChangeCounts,
}

impl RunSummary {
    pub fn new(available: u64) -> Self {
        Self {
            available,
            ..Self::default()
        }
    }

    /// Add one analyzed commit to the totals.
    pub fn record(&mut self, analysis: &CommitAnalysis) {
        self.analyzed += 1;
        self.model += analysis.model.counts;
        self.source += analysis.source.counts;
        self.build += analysis.build.counts;

        let totals = match CommitCategory::of(analysis) {
            Some(CommitCategory::ArtifactOnly) => &mut self.artifact_only,
            Some(CommitCategory::VariabilityOnly) => &mut self.variability_only,
            Some(CommitCategory::ArtifactAndVariability) => &mut self.artifact_and_variability,
            None => return,
        };
        totals.commits += 1;
        totals.artifact_lines += analysis.artifact_lines();
        totals.variability_lines += analysis.variability_lines();
    }

    /// Render the summary table followed by its legend.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let lines = |counts: &ChangeCounts| (counts.artifact_lines(), counts.variability_lines());
        let (model_art, model_var) = lines(&self.model);
        let (source_art, source_var) = lines(&self.source);
        let (build_art, build_var) = lines(&self.build);

        out.push_str(&format!("{}\n", SUMMARY_HEADER));
        out.push_str(&format!("CAv\t{}\n", self.available));
        out.push_str(&format!("CAn\t{}\n", self.analyzed));
        out.push_str(&format!(
            "CCAI\t{}\t{}\n",
            self.artifact_only.commits, self.artifact_only.artifact_lines
        ));
        out.push_str(&format!(
            "CCVI\t{}\t\t{}\n",
            self.variability_only.commits, self.variability_only.variability_lines
        ));
        out.push_str(&format!(
            "CCAVI\t{}\t{}\t{}\n",
            self.artifact_and_variability.commits,
            self.artifact_and_variability.artifact_lines,
            self.artifact_and_variability.variability_lines
        ));
        out.push_str(&format!("CML\t\t{}\t{}\n", model_art, model_var));
        out.push_str(&format!("CCL\t\t{}\t{}\n", source_art, source_var));
        out.push_str(&format!("CBL\t\t{}\t{}\n", build_art, build_var));

        out.push_str("\n\nDescription:\n");
        for line in SUMMARY_LEGEND {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
