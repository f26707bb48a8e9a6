/// Inventory workbook: the aggregated summary of a whole sweep, saved in the
/// parent of the scanned root.
use super::sheet::{CellStyle, CellValue, SheetLayout};
use super::{push_deleted_section, xlsx};
use crate::error::Result;
use crate::model::{AggregateSummary, DeletedFileRecord, DEFAULT_ROOT_LABEL};
use std::path::{Path, PathBuf};
use tracing::info;

pub const INVENTORY_SHEET_NAME: &str = "Aggregated Summary";

pub const INVENTORY_SUMMARY_HEADERS: [&str; 7] = [
    "Invoice name",
    "Number of subfolders",
    "Number of files before deletion incl. Inventory file",
    "Number of PDF files",
    "Number of JPEG files",
    "Number of other files",
    "Number of deleted files",
];

/// `Inventory` for the default label, `Inventory_<label>` otherwise.
pub fn inventory_file_stem(root_label: &str) -> String {
    if root_label == DEFAULT_ROOT_LABEL {
        DEFAULT_ROOT_LABEL.to_string()
    } else {
        format!("Inventory_{root_label}")
    }
}

/// Directory the inventory goes to: the parent of `root`, or `root` itself
/// when it has none (a filesystem root).
pub fn inventory_dir(root: &Path) -> PathBuf {
    match root.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => root.to_path_buf(),
    }
}

pub fn inventory_path(root: &Path, root_label: &str) -> PathBuf {
    inventory_dir(root).join(format!("{}.xlsx", inventory_file_stem(root_label)))
}

/// Lay out the inventory sheet.
///
/// The summary header and its single data row are bordered; the global
/// deleted-files list follows with no placeholder when empty.
pub fn build_inventory(summary: &AggregateSummary, records: &[DeletedFileRecord]) -> SheetLayout {
    let mut sheet = SheetLayout::new(INVENTORY_SHEET_NAME);

    sheet.push_header_row(&INVENTORY_SUMMARY_HEADERS);
    sheet.push_row(
        [
            CellValue::from(summary.root_label.as_str()),
            summary.folders_reported.into(),
            summary.files_before_deletion.into(),
            summary.pdf_count.into(),
            summary.jpeg_count.into(),
            summary.other_count.into(),
            summary.deleted_count.into(),
        ],
        CellStyle::BORDERED,
    );

    push_deleted_section(&mut sheet, records);
    sheet
}

/// Build and save the inventory for `root`. Returns the absolute path.
pub fn write_inventory(
    root: &Path,
    summary: &AggregateSummary,
    records: &[DeletedFileRecord],
) -> Result<PathBuf> {
    let path = inventory_path(root, &summary.root_label);
    let path = std::path::absolute(&path).unwrap_or(path);

    let sheet = build_inventory(summary, records);
    xlsx::save_workbook(&sheet, &path)?;

    info!(
        "Aggregated summary saved as '{}' in '{}'",
        path.file_name().unwrap_or_default().to_string_lossy(),
        inventory_dir(&path).display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileKind, FolderStats};
    use crate::report::{DELETED_FILE_HEADERS, DELETED_SECTION_TITLE};
    use chrono::Local;
    use compact_str::CompactString;
    use FileKind::{Jpeg, Other, Pdf};

    fn record(name: &str, folder: &str) -> DeletedFileRecord {
        DeletedFileRecord {
            file_name: CompactString::new(name),
            folder_name: CompactString::new(folder),
            file_type: FileKind::Pdf,
            deleted_at: Local::now().naive_local(),
            size_bytes: 2048,
        }
    }

    fn summary() -> AggregateSummary {
        let stats = [
            FolderStats::tally("A", 0, [Pdf, Pdf, Jpeg], 2).unwrap(),
            FolderStats::tally("B", 2, [Other, Pdf], 1).unwrap(),
        ];
        AggregateSummary::from_stats("Reclamations2024", 2, &stats)
    }

    #[test]
    fn file_stem_depends_on_label() {
        assert_eq!(inventory_file_stem("Inventory"), "Inventory");
        assert_eq!(inventory_file_stem("Reclamations2024"), "Inventory_Reclamations2024");
    }

    #[test]
    fn inventory_goes_to_parent_of_root() {
        let path = inventory_path(Path::new("/srv/Re2024"), "Re2024");
        assert_eq!(path, PathBuf::from("/srv/Inventory_Re2024.xlsx"));
    }

    #[test]
    fn filesystem_root_keeps_inventory_inside() {
        assert_eq!(inventory_dir(Path::new("/")), PathBuf::from("/"));
        assert_eq!(inventory_dir(Path::new("Re2024")), PathBuf::from("Re2024"));
    }

    #[test]
    fn summary_row_holds_sums() {
        let sheet = build_inventory(&summary(), &[]);
        let row: Vec<CellValue> = sheet.rows()[1].iter().map(|c| c.value.clone()).collect();
        assert_eq!(
            row,
            vec![
                CellValue::from("Reclamations2024"),
                CellValue::Number(2),
                CellValue::Number(6),
                CellValue::Number(3),
                CellValue::Number(1),
                CellValue::Number(1),
                CellValue::Number(3),
            ]
        );
    }

    #[test]
    fn summary_table_is_bordered() {
        let sheet = build_inventory(&summary(), &[]);
        assert!(sheet.rows()[0].iter().all(|c| c.style == CellStyle::HEADER));
        assert!(sheet.rows()[1].iter().all(|c| c.style == CellStyle::BORDERED));
    }

    /// Global records follow the header in the order given, unstyled.
    #[test]
    fn deleted_section_lists_global_records() {
        let records = [record("x.pdf", "A"), record("y.pdf", "A"), record("z.pdf", "B")];
        let sheet = build_inventory(&summary(), &records);
        let rows = sheet.rows();

        assert_eq!(sheet.name(), INVENTORY_SHEET_NAME);
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[4][0].value.rendered(), DELETED_SECTION_TITLE);
        let header: Vec<String> = rows[5].iter().map(|c| c.value.rendered()).collect();
        assert_eq!(header, DELETED_FILE_HEADERS.to_vec());
        let names: Vec<String> = rows[6..].iter().map(|r| r[0].value.rendered()).collect();
        assert_eq!(names, vec!["x.pdf", "y.pdf", "z.pdf"]);
        assert_eq!(rows[8][1].value.rendered(), "B");
        assert!(rows[6..].iter().flatten().all(|c| c.style == CellStyle::PLAIN));
    }

    #[test]
    fn empty_global_list_has_header_only() {
        let sheet = build_inventory(&summary(), &[]);
        assert_eq!(sheet.rows().len(), 6);
    }
}
