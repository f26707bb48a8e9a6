/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes.
/// The sweep thread communicates via a channel; state updates happen
/// in `process_sweep_messages()` which runs once per frame.
use crate::picker::{default_start_dir, FolderBrowser};
use regsweep_core::scanner::outcome::SweepReport;
use regsweep_core::scanner::progress::SweepProgress;
use regsweep_core::scanner::SweepHandle;
use regsweep_core::SweepConfig;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Choosing the root folder.
    Picking,
    /// A sweep is running on the background thread.
    Sweeping,
    /// The sweep finished and the inventory was written.
    Finished,
    /// The sweep ended with a fatal error.
    Failed,
}

/// Maximum number of sweep messages drained from the channel per frame.
///
/// Keeps a backlog (e.g. after the window was hidden) from stalling the
/// render thread.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum skipped entries kept for display; the log has all of them.
const MAX_SKIPPED_SHOWN: usize = 1_000;

/// All application state.
pub struct AppState {
    // ── Selection ──────────────────────────────────────
    pub config: SweepConfig,
    pub browser: FolderBrowser,

    // ── Sweep ──────────────────────────────────────────
    pub phase: AppPhase,
    pub sweep_handle: Option<SweepHandle>,
    pub sweep_root: Option<PathBuf>,
    pub root_label: String,
    pub folders_total: u64,
    pub folders_done: u64,
    pub pdfs_deleted: u64,
    pub current_folder: String,
    /// `(path, reason)` of entries the sweep left alone.
    pub skipped: Vec<(String, String)>,

    // ── Results ────────────────────────────────────────
    pub report: Option<SweepReport>,
    pub error_message: Option<String>,
    pub show_result_dialog: bool,

    // ── UI state ───────────────────────────────────────
    pub show_about: bool,
    pub dark_mode: bool,
    /// Set when the window should close at the end of the frame.
    pub exit_requested: bool,
}

impl AppState {
    /// Create initial application state, browsing the user's home folder.
    pub fn new(config: SweepConfig) -> Self {
        Self::with_start_dir(config, default_start_dir())
    }

    pub fn with_start_dir(config: SweepConfig, start: PathBuf) -> Self {
        Self {
            config,
            browser: FolderBrowser::new(start),
            phase: AppPhase::Picking,
            sweep_handle: None,
            sweep_root: None,
            root_label: String::new(),
            folders_total: 0,
            folders_done: 0,
            pdfs_deleted: 0,
            current_folder: String::new(),
            skipped: Vec::new(),
            report: None,
            error_message: None,
            show_result_dialog: false,
            show_about: false,
            dark_mode: true,
            exit_requested: false,
        }
    }

    /// Start sweeping `root` on a background thread.
    pub fn start_sweep(&mut self, root: PathBuf) {
        self.phase = AppPhase::Sweeping;
        self.root_label.clear();
        self.folders_total = 0;
        self.folders_done = 0;
        self.pdfs_deleted = 0;
        self.current_folder = root.to_string_lossy().into_owned();
        self.skipped.clear();
        self.report = None;
        self.error_message = None;
        self.show_result_dialog = false;

        info!("Selected directory: {}", root.display());
        match regsweep_core::scanner::start_sweep(root.clone(), self.config.clone()) {
            Ok(handle) => self.sweep_handle = Some(handle),
            Err(err) => self.fail(err.to_string()),
        }
        self.sweep_root = Some(root);
    }

    /// Start sweeping the folder shown in the browser.
    pub fn start_selected_sweep(&mut self) {
        let root = self.browser.selection().to_path_buf();
        self.start_sweep(root);
    }

    /// The user closed the picker without choosing a folder.
    pub fn cancel_selection(&mut self) {
        info!("No directory selected. Exiting.");
        self.exit_requested = true;
    }

    /// Close the completion or error notice. The run is over, so the
    /// application exits with it.
    pub fn dismiss_result(&mut self) {
        self.show_result_dialog = false;
        self.exit_requested = true;
    }

    /// Text of the completion or error notice, once there is one.
    pub fn result_message(&self) -> Option<String> {
        match self.phase {
            AppPhase::Finished => self.report.as_ref().map(SweepReport::completion_message),
            AppPhase::Failed => self
                .error_message
                .as_ref()
                .map(|msg| format!("An error occurred: {msg}")),
            AppPhase::Picking | AppPhase::Sweeping => None,
        }
    }

    /// Fraction of folders processed, for the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        if self.folders_total == 0 {
            0.0
        } else {
            (self.folders_done as f32 / self.folders_total as f32).clamp(0.0, 1.0)
        }
    }

    fn fail(&mut self, message: String) {
        error!("Sweep failed: {message}");
        self.phase = AppPhase::Failed;
        self.error_message = Some(message);
        self.show_result_dialog = true;
        self.sweep_handle = None;
    }

    /// Process pending sweep progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_sweep_messages(&mut self) -> bool {
        let mut repaint = false;
        let mut messages_this_frame = 0usize;

        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let Some(handle) = &self.sweep_handle else {
                break;
            };
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(_) => break,
            };
            messages_this_frame += 1;
            repaint = true;

            match msg {
                SweepProgress::Started {
                    root_label,
                    folder_count,
                    ..
                } => {
                    self.root_label = root_label;
                    self.folders_total = folder_count;
                }
                SweepProgress::FolderDone { path, stats } => {
                    self.folders_done += 1;
                    self.pdfs_deleted += stats.deleted_count;
                    self.current_folder = path.to_string_lossy().into_owned();
                }
                SweepProgress::Skipped { path, message } => {
                    if self.skipped.len() < MAX_SKIPPED_SHOWN {
                        self.skipped.push((path, message));
                    }
                }
                SweepProgress::Complete(report) => {
                    info!("{}", report.completion_message());
                    self.folders_done = self.folders_total;
                    self.pdfs_deleted = report.deleted_files.len() as u64;
                    self.report = Some(*report);
                    self.phase = AppPhase::Finished;
                    self.show_result_dialog = true;
                    self.sweep_handle = None;
                }
                SweepProgress::Aborted(reason) => {
                    warn!("{reason}. Exiting.");
                    self.sweep_handle = None;
                    self.phase = AppPhase::Picking;
                    self.exit_requested = true;
                }
                SweepProgress::Failed { message } => {
                    self.fail(message);
                }
            }
        }

        repaint
    }
}
