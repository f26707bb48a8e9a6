/// Per-folder statistics and the root-level rollup.
use super::file_kind::FileKind;
use compact_str::CompactString;
use serde::Serialize;

/// Counts gathered for one folder that contained at least one file.
///
/// `file_count` is always `pdf_count + jpeg_count + other_count`, and
/// `deleted_count` never exceeds `pdf_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderStats {
    pub folder_name: CompactString,
    pub subfolder_count: u64,
    pub file_count: u64,
    pub pdf_count: u64,
    pub jpeg_count: u64,
    pub other_count: u64,
    pub deleted_count: u64,
}

impl FolderStats {
    /// Tally the kinds of a folder's files.
    ///
    /// Returns `None` for a folder without files; such folders get no
    /// register and contribute nothing to the inventory.
    pub fn tally<I>(
        folder_name: &str,
        subfolder_count: u64,
        kinds: I,
        deleted_count: u64,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = FileKind>,
    {
        let (mut pdf, mut jpeg, mut other) = (0u64, 0u64, 0u64);
        for kind in kinds {
            match kind {
                FileKind::Pdf => pdf += 1,
                FileKind::Jpeg => jpeg += 1,
                FileKind::Other => other += 1,
            }
        }

        let file_count = pdf + jpeg + other;
        if file_count == 0 {
            return None;
        }

        debug_assert!(deleted_count <= pdf, "more deletions than PDFs");
        Some(Self {
            folder_name: CompactString::new(folder_name),
            subfolder_count,
            file_count,
            pdf_count: pdf,
            jpeg_count: jpeg,
            other_count: other,
            deleted_count,
        })
    }
}

/// Root label used when no path component starts with `Re`.
pub const DEFAULT_ROOT_LABEL: &str = "Inventory";

/// The single summary row of the inventory workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    pub root_label: String,
    /// Folders that received a register.
    pub folders_reported: u64,
    /// Sum of all `file_count` plus one for the inventory workbook itself.
    pub files_before_deletion: u64,
    pub pdf_count: u64,
    pub jpeg_count: u64,
    pub other_count: u64,
    pub deleted_count: u64,
}

impl AggregateSummary {
    /// Sum `stats` column-wise.
    pub fn from_stats(root_label: &str, folders_reported: u64, stats: &[FolderStats]) -> Self {
        let mut summary = Self {
            root_label: root_label.to_string(),
            folders_reported,
            files_before_deletion: 1,
            pdf_count: 0,
            jpeg_count: 0,
            other_count: 0,
            deleted_count: 0,
        };
        for s in stats {
            summary.files_before_deletion += s.file_count;
            summary.pdf_count += s.pdf_count;
            summary.jpeg_count += s.jpeg_count;
            summary.other_count += s.other_count;
            summary.deleted_count += s.deleted_count;
        }
        summary
    }
}
