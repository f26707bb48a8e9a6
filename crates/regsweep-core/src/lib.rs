/// RegSweep Core -- scanning, PDF cleanup, and Excel registers.
///
/// This crate contains all business logic with zero UI dependencies.
/// The GUI drives it through [`scanner::start_sweep`]; tests and other
/// frontends can call [`scanner::run_sweep`] directly.
///
/// # Modules
///
/// - [`model`] -- Folder statistics, deletion records, and formatting helpers.
/// - [`scanner`] -- Tree walk, folder inspection, PDF removal, orchestration.
/// - [`report`] -- Register, inventory, and CSV deletion-log writers.
/// - [`config`] -- Run policies loaded from `regsweep.json`.
/// - [`error`] -- The fatal error type of a sweep.
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use config::{EmptySectionPolicy, LabelPolicy, SweepConfig};
pub use error::{Result, SweepError};
