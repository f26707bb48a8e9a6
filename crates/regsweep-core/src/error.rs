/// Error types for the sweep pipeline.
///
/// Only failures that end a run live here. Per-entry problems (a locked PDF,
/// a size read that fails, an unreadable subfolder) are collected as
/// [`SkippedEntry`] records instead and never abort the walk.
///
/// [`SkippedEntry`]: crate::model::SkippedEntry
use std::path::PathBuf;
use thiserror::Error;

/// A fatal error raised while sweeping a directory tree.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The selected root is missing or is not a directory.
    #[error("'{0}' does not exist or is not a directory")]
    InvalidRoot(PathBuf),

    /// The tree walker could not descend into a directory.
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] jwalk::Error),

    /// The entries of a single folder could not be listed.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A register or inventory workbook could not be written.
    #[error("failed to write workbook '{path}': {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// The CSV deletion log could not be written.
    #[error("failed to write deletion log '{path}': {source}")]
    DeletionLog {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The configuration file exists but could not be read.
    #[error("failed to read config '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`SweepConfig`].
    ///
    /// [`SweepConfig`]: crate::config::SweepConfig
    #[error("invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The background sweep thread could not be started.
    #[error("failed to spawn sweep thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The rayon pool used for parallel folder processing failed to start.
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, SweepError>;
