/// What a finished sweep hands back to its caller.
use crate::model::{DeletedFileRecord, FolderStats, SkippedEntry};
use std::path::PathBuf;
use std::time::Duration;

/// Why a run ended before doing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// No path component starts with `Re` and the label policy is `Abort`.
    NoRootLabel { root: PathBuf },
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRootLabel { root } => write!(
                f,
                "No folder starting with 'Re' found in '{}'",
                root.display()
            ),
        }
    }
}

/// Full result of a completed sweep.
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub root: PathBuf,
    pub root_label: String,
    /// Folders that received a register (or would have, in a dry run).
    pub folders_reported: u64,
    /// In walk order.
    pub folder_stats: Vec<FolderStats>,
    /// Global list across the whole tree, in walk order.
    pub deleted_files: Vec<DeletedFileRecord>,
    pub skipped: Vec<SkippedEntry>,
    /// `None` in a dry run.
    pub inventory_path: Option<PathBuf>,
    pub deletion_log_path: Option<PathBuf>,
    pub dry_run: bool,
    pub duration: Duration,
}

impl SweepReport {
    /// Text of the completion notice shown to the user.
    pub fn completion_message(&self) -> String {
        let n = self.folders_reported;
        let mut message = match &self.inventory_path {
            Some(path) => format!(
                "{n} Excels created in {n} subfolders.\n\nSummary Excel created in {}",
                path.display()
            ),
            None => format!(
                "Dry run: {n} subfolders would get an Excel, {} PDF files would be deleted.",
                self.deleted_files.len()
            ),
        };
        if !self.skipped.is_empty() {
            message.push_str(&format!(
                "\n\n{} entries were skipped (see log).",
                self.skipped.len()
            ));
        }
        message
    }
}

/// Result of [`run_sweep`](super::run_sweep).
#[derive(Debug)]
pub enum SweepOutcome {
    Completed(SweepReport),
    Aborted(AbortReason),
}
