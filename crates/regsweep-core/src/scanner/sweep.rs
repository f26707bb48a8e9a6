/// PDF removal for one inspected folder.
///
/// Takes the read-only [`FolderInventory`] and deletes every PDF in it,
/// producing one [`DeletedFileRecord`] per removed file. A file whose size
/// cannot be read or that refuses to be deleted is skipped and reported;
/// its siblings are processed as usual.
use super::classify::FolderInventory;
use crate::model::{DeletedFileRecord, FileKind, FolderStats, SkippedEntry};
use chrono::Local;
use compact_str::CompactString;
use tracing::{debug, warn};

/// Result of sweeping one folder.
#[derive(Debug, Clone)]
pub struct FolderSweep {
    /// `None` when the folder has no files.
    pub stats: Option<FolderStats>,
    /// Deleted files in deletion order.
    pub deleted: Vec<DeletedFileRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// Delete the PDFs of `inventory`.
///
/// With `dry_run` the files stay on disk but records are produced exactly as
/// a real run would produce them.
pub fn sweep_folder(inventory: &FolderInventory, dry_run: bool) -> FolderSweep {
    let folder_name = CompactString::new(&inventory.folder_name);
    let mut deleted = Vec::new();
    let mut skipped = Vec::new();

    for pdf in inventory.pdfs() {
        let size_bytes = match std::fs::metadata(&pdf.path) {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!("Skipping {}: cannot read size: {err}", pdf.path.display());
                skipped.push(SkippedEntry {
                    path: pdf.path.clone(),
                    reason: format!("cannot read size: {err}"),
                });
                continue;
            }
        };

        if !dry_run {
            if let Err(err) = std::fs::remove_file(&pdf.path) {
                warn!("Skipping {}: cannot delete: {err}", pdf.path.display());
                skipped.push(SkippedEntry {
                    path: pdf.path.clone(),
                    reason: format!("cannot delete: {err}"),
                });
                continue;
            }
        }

        debug!("Deleted {} ({size_bytes} bytes)", pdf.path.display());
        deleted.push(DeletedFileRecord {
            file_name: CompactString::new(&pdf.name),
            folder_name: folder_name.clone(),
            file_type: FileKind::Pdf,
            deleted_at: Local::now().naive_local(),
            size_bytes,
        });
    }

    let stats = FolderStats::tally(
        &inventory.folder_name,
        inventory.subfolder_count,
        inventory.files.iter().map(|f| f.kind),
        deleted.len() as u64,
    );

    FolderSweep {
        stats,
        deleted,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::classify::inspect_folder;
    use std::fs;
    use tempfile::TempDir;

    fn write_bytes(path: &std::path::Path, n: usize) {
        fs::write(path, vec![0u8; n]).unwrap();
    }

    #[test]
    fn deletes_every_pdf_and_records_it() {
        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("a.pdf"), 1000);
        write_bytes(&tmp.path().join("b.PDF"), 3000);
        write_bytes(&tmp.path().join("c.jpg"), 10);

        let inv = inspect_folder(tmp.path()).unwrap();
        let sweep = sweep_folder(&inv, false);

        assert!(!tmp.path().join("a.pdf").exists());
        assert!(!tmp.path().join("b.PDF").exists());
        assert!(tmp.path().join("c.jpg").exists());

        let stats = sweep.stats.unwrap();
        assert_eq!(stats.file_count, 3);
        assert_eq!(stats.pdf_count, 2);
        assert_eq!(stats.jpeg_count, 1);
        assert_eq!(stats.deleted_count, 2);
        assert!(sweep.skipped.is_empty());

        let sizes: Vec<String> = sweep.deleted.iter().map(|r| r.size_label()).collect();
        assert_eq!(sizes, vec!["1kB", "3kB"]);
        assert!(sweep.deleted.iter().all(|r| r.file_type == FileKind::Pdf));
    }

    #[test]
    fn records_carry_folder_name() {
        let tmp = TempDir::new().unwrap();
        let folder = tmp.path().join("Reports");
        fs::create_dir(&folder).unwrap();
        write_bytes(&folder.join("x.pdf"), 5);

        let sweep = sweep_folder(&inspect_folder(&folder).unwrap(), false);
        assert_eq!(sweep.deleted[0].folder_name, "Reports");
        assert_eq!(sweep.deleted[0].file_name, "x.pdf");
    }

    #[test]
    fn dry_run_keeps_files() {
        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("a.pdf"), 2048);

        let sweep = sweep_folder(&inspect_folder(tmp.path()).unwrap(), true);
        assert!(tmp.path().join("a.pdf").exists());
        assert_eq!(sweep.deleted.len(), 1);
        assert_eq!(sweep.deleted[0].size_label(), "2kB");
    }

    /// A PDF that vanished between inspection and sweep is skipped; the rest
    /// of the folder is still processed.
    #[test]
    fn vanished_pdf_is_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        write_bytes(&tmp.path().join("a.pdf"), 10);
        write_bytes(&tmp.path().join("b.pdf"), 10);

        let inv = inspect_folder(tmp.path()).unwrap();
        fs::remove_file(tmp.path().join("a.pdf")).unwrap();

        let sweep = sweep_folder(&inv, false);
        assert_eq!(sweep.skipped.len(), 1);
        assert!(sweep.skipped[0].path.ends_with("a.pdf"));
        assert_eq!(sweep.deleted.len(), 1);
        assert_eq!(sweep.deleted[0].file_name, "b.pdf");

        let stats = sweep.stats.unwrap();
        assert_eq!(stats.pdf_count, 2);
        assert_eq!(stats.deleted_count, 1);
    }

    #[test]
    fn folder_without_files_has_no_stats() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let sweep = sweep_folder(&inspect_folder(tmp.path()).unwrap(), false);
        assert!(sweep.stats.is_none());
        assert!(sweep.deleted.is_empty());
    }
}
