/// Tree walk -- enumerates every folder below (and including) the root.
///
/// Uses `jwalk` in serial mode with sorted entries so the folder order, and
/// therefore the row order of the inventory, is the same on every run:
/// depth-first pre-order, siblings by name. Only directories are collected;
/// their contents are read later by [`inspect_folder`], after the walk has
/// finished, so deleting files and writing registers cannot disturb it.
///
/// [`inspect_folder`]: super::classify::inspect_folder
use crate::error::Result;
use crate::model::SkippedEntry;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Folders found by [`collect_folders`].
#[derive(Debug, Default)]
pub struct FolderWalk {
    /// Root first, then pre-order.
    pub folders: Vec<PathBuf>,
    /// Subfolders that could not be read.
    pub skipped: Vec<SkippedEntry>,
}

/// Collect every folder under `root`.
///
/// Symlinked directories are not followed. An unreadable subfolder is logged
/// and skipped; failing to read the root itself is an error.
pub fn collect_folders(root: &Path) -> Result<FolderWalk> {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    let mut walk = FolderWalk::default();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) if err.depth() > 0 => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                warn!("Skipping unreadable folder {}: {err}", path.display());
                walk.skipped.push(SkippedEntry {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if entry.file_type().is_dir() {
            walk.folders.push(entry.path());
        }
    }

    // jwalk yields an unreadable folder as an entry of its parent and then
    // its read error; it is reported once, as skipped.
    if !walk.skipped.is_empty() {
        let unreadable: HashSet<&Path> = walk.skipped.iter().map(|s| s.path.as_path()).collect();
        walk.folders.retain(|folder| !unreadable.contains(folder.as_path()));
    }

    debug!(
        "Walk of {} found {} folders ({} skipped)",
        root.display(),
        walk.folders.len(),
        walk.skipped.len()
    );
    Ok(walk)
}
