//! PDF page scanner.

use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::model::{ExtractionResult, Failure};

/// Extracts raw text from a PDF, one page at a time.
///
/// Pages are visited in document order and their texts joined with a blank
/// line; a page that yields no text contributes nothing. The raw text comes
/// out in whatever order the glyph stream was painted, so Arabic content
/// usually needs [`crate::shape::direction::fix`] before storage or search.
pub struct PdfPageScanner;

impl PdfPageScanner {
    /// Extract text from the PDF at `path`.
    ///
    /// Never panics and never returns an error: a missing, corrupt, or
    /// encrypted file degrades to an empty string with the failure recorded.
    ///
    /// # Example
    /// ```no_run
    /// use mustakhrij::scan::PdfPageScanner;
    ///
    /// let result = PdfPageScanner::extract("case-201.pdf");
    /// println!("{}", result.text);
    /// ```
    pub fn extract<P: AsRef<Path>>(path: P) -> ExtractionResult {
        let path = path.as_ref();
        match Self::try_extract(path) {
            Ok(text) => ExtractionResult::ok(text),
            Err(e) => {
                warn!("pdf extraction failed for {}: {}", path.display(), e);
                ExtractionResult::degraded(String::new(), Failure::from(&e))
            }
        }
    }

    fn try_extract(path: &Path) -> Result<String> {
        let doc = lopdf::Document::load(path)?;

        let mut pages_text = Vec::new();
        // get_pages returns a BTreeMap keyed by page number: document order.
        for (&number, _) in doc.get_pages().iter() {
            let text = doc.extract_text(&[number])?;
            let text = text.trim_end();
            if !text.is_empty() {
                pages_text.push(text.to_string());
            }
        }

        Ok(crate::scan::nfc(&pages_text.join("\n\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FailureKind;
    use std::io::Write;

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let result = PdfPageScanner::extract("/no/such/file.pdf");
        assert_eq!(result.text, "");
        let failure = result.failure.expect("failure should be recorded");
        assert_eq!(failure.kind, FailureKind::Io);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.7\nthis is not a real pdf body")
            .unwrap();

        let result = PdfPageScanner::extract(file.path());
        assert_eq!(result.text, "");
        let failure = result.failure.expect("failure should be recorded");
        assert!(matches!(failure.kind, FailureKind::Pdf | FailureKind::Io));
    }

    #[test]
    fn test_non_pdf_bytes_degrade_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"plain text, no magic").unwrap();

        let result = PdfPageScanner::extract(file.path());
        assert_eq!(result.text, "");
        assert!(result.is_degraded());
    }
}
