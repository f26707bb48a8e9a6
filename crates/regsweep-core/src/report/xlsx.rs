/// Renders a [`SheetLayout`] into an `.xlsx` workbook with `rust_xlsxwriter`.
use super::sheet::{CellStyle, CellValue, SheetLayout};
use crate::error::{Result, SweepError};
use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};
use std::path::Path;

/// Write `sheet` as the only worksheet of a new workbook at `path`,
/// replacing any existing file.
pub fn save_workbook(sheet: &SheetLayout, path: &Path) -> Result<()> {
    render(sheet, path).map_err(|source| SweepError::Workbook {
        path: path.to_path_buf(),
        source,
    })
}

fn render(sheet: &SheetLayout, path: &Path) -> std::result::Result<(), XlsxError> {
    let title = Format::new().set_bold();
    let bordered = Format::new().set_border(FormatBorder::Thin);
    let header = Format::new().set_bold().set_border(FormatBorder::Thin);
    let format_for = |style: CellStyle| match (style.bold, style.border) {
        (false, false) => None,
        (true, false) => Some(&title),
        (false, true) => Some(&bordered),
        (true, true) => Some(&header),
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name())?;

    for (r, row) in sheet.rows().iter().enumerate() {
        let r = r as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match (&cell.value, format_for(cell.style)) {
                (CellValue::Text(s), Some(format)) => {
                    worksheet.write_string_with_format(r, c, s, format)?;
                }
                (CellValue::Text(s), None) => {
                    worksheet.write_string(r, c, s)?;
                }
                (CellValue::Number(n), Some(format)) => {
                    worksheet.write_number_with_format(r, c, *n as f64, format)?;
                }
                (CellValue::Number(n), None) => {
                    worksheet.write_number(r, c, *n as f64)?;
                }
            }
        }
    }

    for (c, width) in sheet.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(c as u16, width as f64)?;
    }

    workbook.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_a_workbook_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.xlsx");

        let mut sheet = SheetLayout::new("Folder Summary");
        sheet.push_header_row(&["Ordnername", "Number of files"]);
        sheet.push_row([CellValue::from("Sub"), CellValue::Number(3)], CellStyle::BORDERED);
        sheet.push_blank_rows(2);
        sheet.push_row(["Gelöschte Dateien / Deleted files"], CellStyle::TITLE);

        save_workbook(&sheet, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > 100, "workbook should not be empty");
        assert_eq!(&bytes[..2], b"PK", "xlsx is a zip container");
    }

    #[test]
    fn unwritable_target_is_workbook_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("out.xlsx");

        let err = save_workbook(&SheetLayout::new("S"), &path).unwrap_err();
        assert!(matches!(err, SweepError::Workbook { .. }));
    }
}
