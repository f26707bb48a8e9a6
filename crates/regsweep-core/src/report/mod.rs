/// Report writers -- per-folder registers, the inventory, and the CSV
/// deletion log.
///
/// Both workbook kinds end with the same deleted-files section, built here.
pub mod deletion_log;
pub mod folder;
pub mod inventory;
pub mod sheet;
pub mod xlsx;

use crate::model::DeletedFileRecord;
use sheet::{CellStyle, SheetLayout};

/// Bold title above the deleted-files table.
pub const DELETED_SECTION_TITLE: &str = "Gelöschte Dateien / Deleted files";

/// Column headers of the deleted-files table.
pub const DELETED_FILE_HEADERS: [&str; 5] =
    ["Dateiname", "Ordnername", "Dateityp", "Löschdatum", "Dateigröße"];

/// Blank rows between the summary table and the deleted-files title.
pub const SECTION_GAP_ROWS: usize = 2;

/// Cell text of the placeholder row in a register without deletions.
pub const PLACEHOLDER: &str = "N/A";

/// Append the gap, the title, the header, and one unstyled row per record.
fn push_deleted_section(sheet: &mut SheetLayout, records: &[DeletedFileRecord]) {
    sheet.push_blank_rows(SECTION_GAP_ROWS);
    sheet.push_row([DELETED_SECTION_TITLE], CellStyle::TITLE);
    sheet.push_header_row(&DELETED_FILE_HEADERS);
    for record in records {
        sheet.push_row(record_cells(record), CellStyle::PLAIN);
    }
}

/// The five rendered columns of a record, in header order.
pub(crate) fn record_cells(record: &DeletedFileRecord) -> [String; 5] {
    [
        record.file_name.to_string(),
        record.folder_name.to_string(),
        record.file_type.label().to_string(),
        record.deletion_timestamp(),
        record.size_label(),
    ]
}
