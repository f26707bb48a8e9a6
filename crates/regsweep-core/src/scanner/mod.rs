/// Scanner module -- orchestrates a sweep of a directory tree.
///
/// A sweep runs in four steps:
/// 1. Resolve the root label from the selected path ([`label`]).
/// 2. Collect every folder of the tree ([`walk`]).
/// 3. For each folder with files: inspect it ([`classify`]), delete its PDFs
///    ([`sweep`]), and write its register.
/// 4. Sum everything into the inventory workbook.
///
/// Step 3 runs on a rayon pool when `parallel` is set. Results are merged in
/// walk order, so the inventory rows come out the same either way.
pub mod classify;
pub mod label;
pub mod outcome;
pub mod progress;
pub mod sweep;
pub mod walk;

use crate::config::SweepConfig;
use crate::error::{Result, SweepError};
use crate::model::{AggregateSummary, DeletedFileRecord, FolderStats, SkippedEntry};
use crate::report;
use classify::inspect_folder;
use crossbeam_channel::{Receiver, Sender};
use outcome::{AbortReason, SweepOutcome, SweepReport};
use progress::SweepProgress;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// The UI drains the channel once per frame. If it falls behind, the sweep
/// thread blocks on `send` instead of growing the queue without bound.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed sweep.
pub struct SweepHandle {
    /// Receiver for progress updates from the sweep thread.
    pub progress_rx: Receiver<SweepProgress>,
    _thread: Option<thread::JoinHandle<()>>,
}

/// Start a sweep of `root` on a background thread.
///
/// The thread always ends with exactly one of `Complete`, `Aborted` or
/// `Failed` on the progress channel.
pub fn start_sweep(root: PathBuf, config: SweepConfig) -> Result<SweepHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<SweepProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("regsweep-sweeper".into())
        .spawn(move || {
            let last = match run_sweep(&root, &config, Some(&progress_tx)) {
                Ok(SweepOutcome::Completed(report)) => SweepProgress::Complete(Box::new(report)),
                Ok(SweepOutcome::Aborted(reason)) => SweepProgress::Aborted(reason),
                Err(err) => {
                    error!("Sweep of {} failed: {err}", root.display());
                    SweepProgress::Failed {
                        message: err.to_string(),
                    }
                }
            };
            let _ = progress_tx.send(last);
        })
        .map_err(SweepError::Spawn)?;

    Ok(SweepHandle {
        progress_rx,
        _thread: Some(thread),
    })
}

/// Everything one folder contributes to the run.
struct FolderOutcome {
    stats: Option<FolderStats>,
    deleted: Vec<DeletedFileRecord>,
    skipped: Vec<SkippedEntry>,
}

/// Sweep `root` on the calling thread.
///
/// Progress is sent to `progress` if given; the terminal message is left to
/// the caller. Any error is fatal: files already deleted and registers
/// already written stay as they are.
pub fn run_sweep(
    root: &Path,
    config: &SweepConfig,
    progress: Option<&Sender<SweepProgress>>,
) -> Result<SweepOutcome> {
    let start = Instant::now();

    if !root.is_dir() {
        return Err(SweepError::InvalidRoot(root.to_path_buf()));
    }
    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    let Some(root_label) = label::resolve_root_label(&root, config.label_policy) else {
        let reason = AbortReason::NoRootLabel { root };
        info!("{reason}. Exiting.");
        return Ok(SweepOutcome::Aborted(reason));
    };

    info!(
        "Sweeping {} (label '{root_label}'{})",
        root.display(),
        if config.dry_run { ", dry run" } else { "" }
    );

    let walk = walk::collect_folders(&root)?;
    let mut skipped = walk.skipped;
    for entry in &skipped {
        emit(progress, || SweepProgress::Skipped {
            path: entry.path.to_string_lossy().into_owned(),
            message: entry.reason.clone(),
        });
    }
    emit(progress, || SweepProgress::Started {
        root: root.clone(),
        root_label: root_label.clone(),
        folder_count: walk.folders.len() as u64,
    });

    let process = |folder: &PathBuf| process_folder(folder, &root, config, progress);
    let outcomes: Vec<FolderOutcome> = if config.parallel && walk.folders.len() > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_threads.max(1))
            .thread_name(|i| format!("regsweep-worker-{i}"))
            .build()?;
        pool.install(|| walk.folders.par_iter().map(process).collect::<Result<_>>())?
    } else {
        walk.folders.iter().map(process).collect::<Result<_>>()?
    };

    let mut folder_stats = Vec::new();
    let mut deleted_files = Vec::new();
    for outcome in outcomes {
        folder_stats.extend(outcome.stats);
        deleted_files.extend(outcome.deleted);
        skipped.extend(outcome.skipped);
    }
    let folders_reported = folder_stats.len() as u64;

    let summary = AggregateSummary::from_stats(&root_label, folders_reported, &folder_stats);
    let (inventory_path, deletion_log_path) = if config.dry_run {
        (None, None)
    } else {
        let path = report::inventory::write_inventory(&root, &summary, &deleted_files)?;
        let log_path = if config.write_deletion_log {
            let log_path = report::deletion_log::deletion_log_path(&root, &root_label);
            report::deletion_log::write_deletion_log(&log_path, &deleted_files)?;
            Some(log_path)
        } else {
            None
        };
        (Some(path), log_path)
    };

    let duration = start.elapsed();
    info!(
        "Sweep complete: {folders_reported} folders reported, {} PDFs deleted, {} skipped in {duration:?}",
        deleted_files.len(),
        skipped.len()
    );

    Ok(SweepOutcome::Completed(SweepReport {
        root,
        root_label,
        folders_reported,
        folder_stats,
        deleted_files,
        skipped,
        inventory_path,
        deletion_log_path,
        dry_run: config.dry_run,
        duration,
    }))
}

/// Inspect, sweep and register one folder.
fn process_folder(
    folder: &Path,
    root: &Path,
    config: &SweepConfig,
    progress: Option<&Sender<SweepProgress>>,
) -> Result<FolderOutcome> {
    let inventory = match inspect_folder(folder) {
        Ok(inv) => inv,
        // A subfolder that vanished or became unreadable after the walk.
        Err(err) if folder != root => {
            warn!("Skipping {}: {err}", folder.display());
            let entry = SkippedEntry {
                path: folder.to_path_buf(),
                reason: err.to_string(),
            };
            emit(progress, || SweepProgress::Skipped {
                path: folder.to_string_lossy().into_owned(),
                message: entry.reason.clone(),
            });
            return Ok(FolderOutcome {
                stats: None,
                deleted: Vec::new(),
                skipped: vec![entry],
            });
        }
        Err(err) => return Err(err),
    };

    if !inventory.has_files() {
        debug!("No files in {}, skipping", folder.display());
        return Ok(FolderOutcome {
            stats: None,
            deleted: Vec::new(),
            skipped: Vec::new(),
        });
    }

    let swept = sweep::sweep_folder(&inventory, config.dry_run);
    for entry in &swept.skipped {
        emit(progress, || SweepProgress::Skipped {
            path: entry.path.to_string_lossy().into_owned(),
            message: entry.reason.clone(),
        });
    }

    if let Some(stats) = &swept.stats {
        if !config.dry_run {
            report::folder::write_register(folder, stats, &swept.deleted, config.empty_section)?;
        }
        emit(progress, || SweepProgress::FolderDone {
            path: folder.to_path_buf(),
            stats: stats.clone(),
        });
    }

    Ok(FolderOutcome {
        stats: swept.stats,
        deleted: swept.deleted,
        skipped: swept.skipped,
    })
}

/// Send a progress message if anyone is listening.
///
/// The message is only built when there is a channel. A dropped receiver
/// (the window was closed) does not stop the sweep.
fn emit(progress: Option<&Sender<SweepProgress>>, message: impl FnOnce() -> SweepProgress) {
    if let Some(tx) = progress {
        let _ = tx.send(message());
    }
}
