//! Source kind detection.
//!
//! Maps a source reference (filesystem path or URL) to the scanner that
//! should handle it. PDF detection uses both the file extension and the
//! magic bytes, so a mislabeled upload still reaches the right scanner.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The inferred kind of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A PDF file on disk.
    Pdf,
    /// An HTTP/HTTPS resource.
    Web,
    /// A plain-text file on disk.
    PlainText,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Pdf => write!(f, "pdf"),
            SourceKind::Web => write!(f, "web"),
            SourceKind::PlainText => write!(f, "plain-text"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Infer the kind of a source reference.
///
/// * `http://` / `https://` prefixes select [`SourceKind::Web`].
/// * A `.pdf` extension or a PDF magic-byte header selects [`SourceKind::Pdf`].
/// * Everything else is treated as plain text.
///
/// # Example
/// ```
/// use mustakhrij::detect::{detect_source, SourceKind};
///
/// assert_eq!(detect_source("https://example.com/law"), SourceKind::Web);
/// assert_eq!(detect_source("case-201.pdf"), SourceKind::Pdf);
/// assert_eq!(detect_source("notes.txt"), SourceKind::PlainText);
/// ```
pub fn detect_source(source: &str) -> SourceKind {
    if source.starts_with("http://") || source.starts_with("https://") {
        return SourceKind::Web;
    }

    let path = Path::new(source);
    let has_pdf_ext = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if has_pdf_ext || is_pdf(path) {
        SourceKind::Pdf
    } else {
        SourceKind::PlainText
    }
}

/// Check whether a file on disk starts with the PDF magic bytes.
///
/// Returns `false` for missing or unreadable files; the scanner will
/// surface the real failure when it tries to open the source.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 5];
    if reader.read_exact(&mut header).is_err() {
        return false;
    }
    is_pdf_bytes(&header)
}

/// Check whether bytes start with the PDF magic bytes.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}
