/// Read-only inspection of a single folder.
///
/// Lists the immediate children of a folder and classifies each file. Nothing
/// here touches the filesystem beyond `read_dir`, so the result can be used
/// for a dry run or handed to [`sweep_folder`](super::sweep::sweep_folder).
use crate::error::{Result, SweepError};
use crate::model::{classify_file_name, FileKind};
use std::path::{Path, PathBuf};

/// One file directly inside the inspected folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Immediate contents of one folder.
#[derive(Debug, Clone)]
pub struct FolderInventory {
    pub path: PathBuf,
    pub folder_name: String,
    pub subfolder_count: u64,
    /// Files sorted by name.
    pub files: Vec<FolderEntry>,
}

impl FolderInventory {
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn pdfs(&self) -> impl Iterator<Item = &FolderEntry> {
        self.files.iter().filter(|f| f.kind == FileKind::Pdf)
    }
}

/// List and classify the immediate children of `path`.
///
/// Symlinks are classified by their target; a dangling link counts as a file.
pub fn inspect_folder(path: &Path) -> Result<FolderInventory> {
    let read_err = |source| SweepError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut subfolder_count = 0u64;
    let mut files = Vec::new();

    for entry in std::fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(read_err)?;
        let is_dir = if file_type.is_symlink() {
            entry_path.is_dir()
        } else {
            file_type.is_dir()
        };

        if is_dir {
            subfolder_count += 1;
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        files.push(FolderEntry {
            kind: classify_file_name(&name),
            name,
            path: entry_path,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(FolderInventory {
        path: path.to_path_buf(),
        folder_name: folder_display_name(path),
        subfolder_count,
        files,
    })
}

/// Display name of a folder: its last component, or the trimmed path for a
/// filesystem root such as `C:\`.
pub fn folder_display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        name.to_string_lossy().to_string()
    } else {
        let s = path.to_string_lossy();
        s.trim_end_matches(['\\', '/']).to_string()
    }
}
