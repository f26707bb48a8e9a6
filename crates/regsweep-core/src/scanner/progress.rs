/// Sweep progress reporting -- messages sent from the sweep thread to the
/// UI thread via a crossbeam channel.
use super::outcome::{AbortReason, SweepReport};
use crate::model::FolderStats;
use std::path::PathBuf;

/// Progress updates sent from the sweep thread to the UI.
#[derive(Debug)]
pub enum SweepProgress {
    /// The label is resolved and the folder list is known.
    Started {
        root: PathBuf,
        root_label: String,
        folder_count: u64,
    },
    /// One folder was swept (and its register written, unless dry run).
    FolderDone { path: PathBuf, stats: FolderStats },
    /// A non-fatal problem with one file or subfolder.
    Skipped { path: String, message: String },
    /// The inventory was written; the run is over.
    Complete(Box<SweepReport>),
    /// The run stopped before touching anything.
    Aborted(AbortReason),
    /// A fatal error ended the run.
    Failed { message: String },
}
