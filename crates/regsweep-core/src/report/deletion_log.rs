/// CSV deletion log -- the global deleted-file list in a machine-readable
/// file beside the inventory workbook.
use super::inventory::{inventory_dir, inventory_file_stem};
use super::{record_cells, DELETED_FILE_HEADERS};
use crate::error::{Result, SweepError};
use crate::model::DeletedFileRecord;
use std::path::{Path, PathBuf};
use tracing::info;

/// `Inventory[_<label>]_deleted.csv` next to the inventory workbook.
pub fn deletion_log_path(root: &Path, root_label: &str) -> PathBuf {
    let path = inventory_dir(root).join(format!("{}_deleted.csv", inventory_file_stem(root_label)));
    std::path::absolute(&path).unwrap_or(path)
}

/// Write `records` with the same five columns as the workbook section.
pub fn write_deletion_log(path: &Path, records: &[DeletedFileRecord]) -> Result<()> {
    write_rows(path, records).map_err(|source| SweepError::DeletionLog {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Deletion log with {} entries written to {}", records.len(), path.display());
    Ok(())
}

fn write_rows(path: &Path, records: &[DeletedFileRecord]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(DELETED_FILE_HEADERS)?;
    for record in records {
        writer.write_record(record_cells(record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileKind;
    use chrono::NaiveDate;
    use compact_str::CompactString;
    use tempfile::TempDir;

    #[test]
    fn log_name_follows_inventory_name() {
        let path = deletion_log_path(Path::new("/srv/Re2024"), "Re2024");
        assert_eq!(path, PathBuf::from("/srv/Inventory_Re2024_deleted.csv"));
    }

    #[test]
    fn writes_header_and_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("log.csv");
        let record = DeletedFileRecord {
            file_name: CompactString::new("a, b.pdf"),
            folder_name: CompactString::new("Sub"),
            file_type: FileKind::Pdf,
            deleted_at: NaiveDate::from_ymd_opt(2024, 12, 31)
                .unwrap()
                .and_hms_opt(23, 59, 0)
                .unwrap(),
            size_bytes: 1536,
        };

        write_deletion_log(&path, &[record]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Dateiname,Ordnername,Dateityp,Löschdatum,Dateigröße");
        assert_eq!(lines[1], "\"a, b.pdf\",Sub,PDF,31.12.2024 23:59,2kB");
    }
}
