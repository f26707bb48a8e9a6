/// Per-folder register: `Register_<folder>.xlsx`, saved inside the folder.
use super::sheet::{CellStyle, CellValue, SheetLayout};
use super::{push_deleted_section, xlsx, PLACEHOLDER};
use crate::config::EmptySectionPolicy;
use crate::error::Result;
use crate::model::{DeletedFileRecord, FolderStats};
use std::path::{Path, PathBuf};
use tracing::info;

pub const FOLDER_SHEET_NAME: &str = "Folder Summary";

pub const FOLDER_SUMMARY_HEADERS: [&str; 7] = [
    "Ordnername",
    "Number of subfolders",
    "Number of files",
    "Number of PDF files",
    "Number of JPEG files",
    "Number of other files",
    "Number of deleted files",
];

pub fn register_file_name(folder_name: &str) -> String {
    format!("Register_{folder_name}.xlsx")
}

/// Lay out the register of one folder.
///
/// Rows: summary header, summary data, two blank rows, section title,
/// deleted-files header, one row per record. For a folder without PDFs the
/// `Placeholder` policy adds a single `N/A` row. A folder whose PDFs were all
/// skipped gets no placeholder: it did have PDFs.
pub fn build_register(
    stats: &FolderStats,
    records: &[DeletedFileRecord],
    empty_section: EmptySectionPolicy,
) -> SheetLayout {
    let mut sheet = SheetLayout::new(FOLDER_SHEET_NAME);

    sheet.push_header_row(&FOLDER_SUMMARY_HEADERS);
    sheet.push_row(
        [
            CellValue::from(stats.folder_name.as_str()),
            stats.subfolder_count.into(),
            stats.file_count.into(),
            stats.pdf_count.into(),
            stats.jpeg_count.into(),
            stats.other_count.into(),
            stats.deleted_count.into(),
        ],
        CellStyle::BORDERED,
    );

    push_deleted_section(&mut sheet, records);

    if stats.pdf_count == 0 && empty_section == EmptySectionPolicy::Placeholder {
        sheet.push_row(
            [
                PLACEHOLDER,
                stats.folder_name.as_str(),
                PLACEHOLDER,
                PLACEHOLDER,
                PLACEHOLDER,
            ],
            CellStyle::PLAIN,
        );
    }

    sheet
}

/// Build and save the register inside `folder`. Returns the workbook path.
pub fn write_register(
    folder: &Path,
    stats: &FolderStats,
    records: &[DeletedFileRecord],
    empty_section: EmptySectionPolicy,
) -> Result<PathBuf> {
    let file_name = register_file_name(&stats.folder_name);
    let path = folder.join(&file_name);
    let sheet = build_register(stats, records, empty_section);
    xlsx::save_workbook(&sheet, &path)?;
    info!("Excel file '{file_name}' created in '{}'", folder.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileKind;
    use crate::report::sheet::Cell;
    use crate::report::{DELETED_FILE_HEADERS, DELETED_SECTION_TITLE};
    use chrono::NaiveDate;
    use compact_str::CompactString;

    fn stats(pdfs: u64) -> FolderStats {
        FolderStats::tally(
            "Sub",
            1,
            std::iter::repeat(FileKind::Pdf)
                .take(pdfs as usize)
                .chain([FileKind::Jpeg]),
            pdfs,
        )
        .unwrap()
    }

    fn record(name: &str, size_bytes: u64) -> DeletedFileRecord {
        DeletedFileRecord {
            file_name: CompactString::new(name),
            folder_name: CompactString::new("Sub"),
            file_type: FileKind::Pdf,
            deleted_at: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(13, 4, 0)
                .unwrap(),
            size_bytes,
        }
    }

    fn texts(row: &[Cell]) -> Vec<String> {
        row.iter().map(|c| c.value.rendered()).collect()
    }

    #[test]
    fn layout_rows_in_order() {
        let records = [record("a.pdf", 1000), record("b.pdf", 3000)];
        let sheet = build_register(&stats(2), &records, EmptySectionPolicy::Placeholder);
        let rows = sheet.rows();

        assert_eq!(sheet.name(), FOLDER_SHEET_NAME);
        assert_eq!(rows.len(), 8);
        assert_eq!(texts(&rows[0]), FOLDER_SUMMARY_HEADERS.to_vec());
        assert_eq!(texts(&rows[1]), vec!["Sub", "1", "3", "2", "1", "0", "2"]);
        assert!(rows[2].is_empty() && rows[3].is_empty());
        assert_eq!(texts(&rows[4]), vec![DELETED_SECTION_TITLE]);
        assert_eq!(texts(&rows[5]), DELETED_FILE_HEADERS.to_vec());
        assert_eq!(
            texts(&rows[6]),
            vec!["a.pdf", "Sub", "PDF", "02.01.2024 13:04", "1kB"]
        );
        assert_eq!(texts(&rows[7])[0], "b.pdf");
        assert_eq!(texts(&rows[7])[4], "3kB");
    }

    #[test]
    fn counts_are_numeric_cells() {
        let sheet = build_register(&stats(0), &[], EmptySectionPolicy::HeaderOnly);
        assert_eq!(sheet.cell(1, 2).unwrap().value, CellValue::Number(1));
    }

    /// Headers are bold and bordered, the title only bold, record rows plain.
    #[test]
    fn styling() {
        let records = [record("a.pdf", 10)];
        let sheet = build_register(&stats(1), &records, EmptySectionPolicy::Placeholder);

        assert!(sheet.rows()[0].iter().all(|c| c.style == CellStyle::HEADER));
        assert!(sheet.rows()[1].iter().all(|c| c.style == CellStyle::BORDERED));
        assert_eq!(sheet.cell(4, 0).unwrap().style, CellStyle::TITLE);
        assert!(sheet.rows()[5].iter().all(|c| c.style == CellStyle::HEADER));
        assert!(sheet.rows()[6].iter().all(|c| c.style == CellStyle::PLAIN));
    }

    #[test]
    fn placeholder_row_when_nothing_deleted() {
        let sheet = build_register(&stats(0), &[], EmptySectionPolicy::Placeholder);
        assert_eq!(sheet.rows().len(), 7);
        assert_eq!(
            texts(&sheet.rows()[6]),
            vec!["N/A", "Sub", "N/A", "N/A", "N/A"]
        );
    }

    /// PDFs that could not be deleted leave the section empty, not `N/A`.
    #[test]
    fn no_placeholder_when_pdfs_were_skipped() {
        let mut folder = stats(1);
        folder.deleted_count = 0;
        let sheet = build_register(&folder, &[], EmptySectionPolicy::Placeholder);
        let rows = sheet.rows();

        assert_eq!(texts(&rows[1])[3], "1");
        assert_eq!(rows.len(), 6);
        assert_eq!(texts(rows.last().unwrap()), DELETED_FILE_HEADERS.to_vec());
    }

    /// A PDF that vanished between inspection and deletion is counted but
    /// not recorded; the register shows neither a record nor `N/A`.
    #[test]
    fn vanished_pdf_gets_no_placeholder() {
        use crate::scanner::{classify::inspect_folder, sweep::sweep_folder};

        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.pdf"), vec![0u8; 10]).unwrap();
        let inventory = inspect_folder(tmp.path()).unwrap();
        std::fs::remove_file(tmp.path().join("a.pdf")).unwrap();

        let swept = sweep_folder(&inventory, false);
        let folder = swept.stats.unwrap();
        assert_eq!((folder.pdf_count, folder.deleted_count), (1, 0));
        assert_eq!(swept.skipped.len(), 1);

        let sheet = build_register(&folder, &swept.deleted, EmptySectionPolicy::Placeholder);
        let last = texts(sheet.rows().last().unwrap());
        assert_eq!(last, DELETED_FILE_HEADERS.to_vec());
    }

    #[test]
    fn header_only_when_nothing_deleted() {
        let sheet = build_register(&stats(0), &[], EmptySectionPolicy::HeaderOnly);
        assert_eq!(sheet.rows().len(), 6);
        assert_eq!(texts(&sheet.rows()[5]), DELETED_FILE_HEADERS.to_vec());
    }

    /// The section title sits in column A, so it sets that column's width.
    #[test]
    fn widths_follow_longest_cell() {
        let records = [record("a-very-long-invoice-name-2024.pdf", 10)];
        let sheet = build_register(&stats(1), &records, EmptySectionPolicy::Placeholder);
        let widths = sheet.column_widths();
        assert_eq!(widths[0], "Gelöschte Dateien / Deleted files".chars().count() + 2);
        assert_eq!(widths[6], "Number of deleted files".len() + 2);
    }

    #[test]
    fn register_name() {
        assert_eq!(register_file_name("Sub"), "Register_Sub.xlsx");
    }

    /// The saved workbook reads back with the sheet name, texts and numbers
    /// of the layout.
    #[test]
    fn written_register_reads_back() {
        use calamine::{open_workbook, Data, Reader, Xlsx};

        let tmp = tempfile::TempDir::new().unwrap();
        let records = [record("a.pdf", 1536)];
        let path = write_register(
            tmp.path(),
            &stats(1),
            &records,
            EmptySectionPolicy::Placeholder,
        )
        .unwrap();
        assert_eq!(path, tmp.path().join("Register_Sub.xlsx"));

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![FOLDER_SHEET_NAME.to_string()]);
        let range = workbook.worksheet_range(FOLDER_SHEET_NAME).unwrap();

        let text = |r: u32, c: u32| range.get_value((r, c)).map(|d| d.to_string());
        assert_eq!(text(0, 0).as_deref(), Some("Ordnername"));
        assert_eq!(range.get_value((1, 0)), Some(&Data::String("Sub".into())));
        assert_eq!(range.get_value((1, 2)), Some(&Data::Float(2.0)));
        assert_eq!(range.get_value((1, 3)), Some(&Data::Float(1.0)));
        assert_eq!(text(4, 0).as_deref(), Some(DELETED_SECTION_TITLE));
        assert_eq!(text(5, 4).as_deref(), Some("Dateigröße"));
        assert_eq!(text(6, 0).as_deref(), Some("a.pdf"));
        assert_eq!(text(6, 3).as_deref(), Some("02.01.2024 13:04"));
        assert_eq!(text(6, 4).as_deref(), Some("2kB"));
    }
}
