//! Plain-text file scanner.

use std::fs;
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};
use crate::model::{ExtractionResult, Failure};

/// Reads a UTF-8 plain-text file.
///
/// Unlike the PDF and web scanners, a failed read degrades to a
/// human-readable diagnostic message rather than an empty string, so a
/// document view always has something to show the user.
pub struct PlainTextScanner;

impl PlainTextScanner {
    /// Read the text file at `path`.
    ///
    /// Never panics and never returns an error.
    pub fn extract<P: AsRef<Path>>(path: P) -> ExtractionResult {
        let path = path.as_ref();
        match Self::try_extract(path) {
            Ok(text) => ExtractionResult::ok(text),
            Err(e) => {
                warn!("plain-text read failed for {}: {}", path.display(), e);
                let diagnostic = format!("حدث خطأ أثناء قراءة الملف: {}", e);
                ExtractionResult::degraded(diagnostic, Failure::from(&e))
            }
        }
    }

    fn try_extract(path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| Error::Encoding(e.to_string()))?;
        Ok(crate::scan::nfc(&text))
    }
}
