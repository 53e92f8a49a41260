use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::reconcile::ReconcileStats;

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Init(InitSummary),
}

/// Per-locale outcome of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSummary {
    pub locale: String,
    /// Entries in the `all` view.
    pub total: usize,
    /// Entries in the `untranslated` view.
    pub untranslated: usize,
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub source_locale: String,
    pub outdir: PathBuf,
    /// Number of catalog files loaded.
    pub files_loaded: usize,
    /// Number of Go files scanned, `None` when scanning was not requested.
    pub files_sifted: Option<usize>,
    /// Alias found by the scanner.
    pub alias: Option<String>,
    /// Message ids collected from source (duplicates included).
    pub ids_collected: usize,
    pub stats: ReconcileStats,
    pub locales: Vec<LocaleSummary>,
}

impl MergeSummary {
    pub fn untranslated_count(&self) -> usize {
        self.locales.iter().map(|l| l.untranslated).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running siftmerge commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, `Failure` is returned when any locale has untranslated entries.
    pub exit_on_untranslated: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Merge(summary)
                if self.exit_on_untranslated && summary.untranslated_count() > 0 =>
            {
                ExitStatus::Failure
            }
            _ => ExitStatus::Success,
        }
    }
}
