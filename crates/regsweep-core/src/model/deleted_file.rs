/// Records captured when a PDF is removed, and for entries that were skipped.
use super::file_kind::FileKind;
use super::size::format_size_kb;
use chrono::NaiveDateTime;
use compact_str::CompactString;
use serde::Serialize;
use std::path::PathBuf;

/// `DD.MM.YYYY HH:MM`, as shown in the "Löschdatum" column.
pub const DELETION_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Metadata of one deleted file. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedFileRecord {
    pub file_name: CompactString,
    pub folder_name: CompactString,
    pub file_type: FileKind,
    /// Local wall-clock time of the deletion.
    pub deleted_at: NaiveDateTime,
    /// Size read just before deletion.
    pub size_bytes: u64,
}

impl DeletedFileRecord {
    pub fn deletion_timestamp(&self) -> String {
        self.deleted_at.format(DELETION_TIMESTAMP_FORMAT).to_string()
    }

    pub fn size_label(&self) -> String {
        format_size_kb(self.size_bytes)
    }
}

/// A PDF left on disk because its size could not be read or it could not be
/// deleted (permission denied, file in use), or a subfolder that could not be
/// listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(size_bytes: u64) -> DeletedFileRecord {
        DeletedFileRecord {
            file_name: CompactString::new("invoice.pdf"),
            folder_name: CompactString::new("Re2024"),
            file_type: FileKind::Pdf,
            deleted_at: NaiveDate::from_ymd_opt(2024, 3, 7)
                .unwrap()
                .and_hms_opt(9, 5, 59)
                .unwrap(),
            size_bytes,
        }
    }

    /// Day and month are zero-padded, seconds are dropped.
    #[test]
    fn timestamp_is_day_month_year_hour_minute() {
        assert_eq!(record(0).deletion_timestamp(), "07.03.2024 09:05");
    }

    #[test]
    fn size_label_rounds_to_kilobytes() {
        assert_eq!(record(1000).size_label(), "1kB");
        assert_eq!(record(3000).size_label(), "3kB");
        assert_eq!(record(1536).size_label(), "2kB");
    }
}
