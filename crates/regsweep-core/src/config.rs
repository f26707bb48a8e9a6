/// Run configuration for a sweep.
///
/// Every field has a serde default so a partial `regsweep.json` (or none at
/// all) yields a working configuration. The defaults reproduce the behaviour
/// of the original register tool.
use crate::error::{Result, SweepError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// File name looked up beside the executable.
pub const CONFIG_FILE_NAME: &str = "regsweep.json";

/// What to do when no path component starts with `Re`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPolicy {
    /// Use the literal default label `Inventory` and continue.
    #[default]
    Fallback,
    /// Stop before touching any file.
    Abort,
}

/// How a register renders the deleted-files section of a folder without PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySectionPolicy {
    /// One `N/A` row beneath the header (folder name kept in its column).
    #[default]
    Placeholder,
    /// Header row only.
    HeaderOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub label_policy: LabelPolicy,
    #[serde(default)]
    pub empty_section: EmptySectionPolicy,
    /// Classify and size only: no deletion, no workbooks.
    #[serde(default)]
    pub dry_run: bool,
    /// Process folders on a rayon pool. Output order is unaffected.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
    /// Also write the global deleted-file list as CSV next to the inventory.
    #[serde(default)]
    pub write_deletion_log: bool,
}

fn default_parallel() -> bool {
    true
}

fn default_worker_threads() -> usize {
    num_cpus::get()
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            label_policy: LabelPolicy::default(),
            empty_section: EmptySectionPolicy::default(),
            dry_run: false,
            parallel: default_parallel(),
            worker_threads: default_worker_threads(),
            write_deletion_log: false,
        }
    }
}

impl SweepConfig {
    /// Load the configuration at `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| SweepError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| SweepError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
