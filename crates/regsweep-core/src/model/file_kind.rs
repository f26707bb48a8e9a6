/// File classification by extension.
///
/// The register only distinguishes three kinds: PDFs (which get deleted),
/// JPEGs, and everything else.
use serde::Serialize;

/// Report category of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileKind {
    Pdf,
    Jpeg,
    Other,
}

impl FileKind {
    /// Label written to the "Dateityp" column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Jpeg => "JPEG",
            Self::Other => "Other",
        }
    }
}

/// Classify a file by the extension of its name, ignoring case.
///
/// Names without a dot are `Other`. A bare `.pdf` counts as a PDF.
pub fn classify_file_name(name: &str) -> FileKind {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return FileKind::Other;
    };

    if ext.eq_ignore_ascii_case("pdf") {
        FileKind::Pdf
    } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        FileKind::Jpeg
    } else {
        FileKind::Other
    }
}
