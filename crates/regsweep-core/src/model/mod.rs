/// Data model for sweep results.
///
/// Folder statistics, deletion records and the root-level rollup, plus the
/// small formatting helpers the reports share.
pub mod deleted_file;
pub mod file_kind;
pub mod folder_stats;
pub mod size;

pub use deleted_file::{DeletedFileRecord, SkippedEntry, DELETION_TIMESTAMP_FORMAT};
pub use file_kind::{classify_file_name, FileKind};
pub use folder_stats::{AggregateSummary, FolderStats, DEFAULT_ROOT_LABEL};
