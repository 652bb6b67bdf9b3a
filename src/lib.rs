//! # mustakhrij
//!
//! Text extraction for Arabic legal-case documents.
//!
//! Extracts text from PDF files, plain-text files, and web pages, and
//! normalizes right-to-left script ordering so the result works both for
//! indexing/search and for on-screen rendering.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mustakhrij::extract_source;
//!
//! // Canonical logical-order text, ready for storage and search.
//! let result = extract_source("case-201.pdf");
//! println!("{}", result.text);
//! ```
//!
//! ## Pipeline
//!
//! A scanner ([`scan::PdfPageScanner`], [`scan::WebPageScanner`], or
//! [`scan::PlainTextScanner`]) produces raw text, then
//! [`shape::direction::fix`] corrects per-line word order on PDF and web
//! output. That corrected logical-order text is the canonical artifact.
//! [`shape::reshape`] is an optional terminal transform for display
//! surfaces without native bidirectional rendering; its output must never
//! be stored, indexed, or fed back into the corrector.
//!
//! Every call is stateless and synchronous; no failure escapes a scanner
//! boundary — degraded results carry the failure record instead.

pub mod detect;
pub mod error;
pub mod model;
pub mod scan;
pub mod shape;

pub use detect::{detect_source, SourceKind};
pub use error::{Error, Result};
pub use model::{ExtractionResult, Failure, FailureKind, Source};
pub use scan::{PdfPageScanner, PlainTextScanner, WebPageScanner, WebScanOptions};
pub use shape::{fix, reshape};

use std::time::Duration;

/// Extract canonical logical-order text from a path or URL.
///
/// Detects the source kind, runs the matching scanner, and applies
/// direction correction to PDF and web output.
///
/// # Example
/// ```no_run
/// use mustakhrij::extract_source;
///
/// let result = extract_source("https://example.com/law/42");
/// if result.is_degraded() {
///     eprintln!("degraded: {:?}", result.failure);
/// }
/// ```
pub fn extract_source(source: &str) -> ExtractionResult {
    Extractor::new().extract(source)
}

/// Extract text from a path or URL and reshape it for display.
///
/// Same pipeline as [`extract_source`], with [`shape::reshape`] applied as
/// a terminal step. The result is for rendering only.
pub fn extract_for_display(source: &str) -> ExtractionResult {
    Extractor::new().extract_for_display(source)
}

/// Builder for the extraction pipeline.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use mustakhrij::Extractor;
///
/// let result = Extractor::new()
///     .with_timeout(Duration::from_secs(10))
///     .extract("https://example.com/law/42");
/// println!("{}", result.text);
/// ```
pub struct Extractor {
    web_options: WebScanOptions,
}

impl Extractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self {
            web_options: WebScanOptions::default(),
        }
    }

    /// Set the User-Agent header for web sources.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.web_options = self.web_options.with_user_agent(user_agent);
        self
    }

    /// Set a request deadline for web sources.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.web_options = self.web_options.with_timeout(timeout);
        self
    }

    /// Extract canonical logical-order text from `source`.
    pub fn extract(&self, source: &str) -> ExtractionResult {
        match detect_source(source) {
            SourceKind::Pdf => corrected(PdfPageScanner::extract(source)),
            SourceKind::Web => {
                let scanner = WebPageScanner::with_options(self.web_options.clone());
                corrected(scanner.extract(source))
            }
            // Plain-text files are already in logical order; a failed read
            // carries a diagnostic message that must not be reordered.
            SourceKind::PlainText => PlainTextScanner::extract(source),
        }
    }

    /// Extract from `source` and reshape the text for display.
    pub fn extract_for_display(&self, source: &str) -> ExtractionResult {
        let mut result = self.extract(source);
        result.text = shape::reshape(&result.text);
        result
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply direction correction to a scanner result's text.
fn corrected(mut result: ExtractionResult) -> ExtractionResult {
    result.text = shape::fix(&result.text);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_builder() {
        let extractor = Extractor::new()
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(extractor.web_options.user_agent, "test-agent");
        assert_eq!(
            extractor.web_options.timeout,
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn test_extract_missing_pdf_degrades_to_empty() {
        let result = extract_source("/no/such/file.pdf");
        assert_eq!(result.text, "");
        assert!(result.is_degraded());
    }

    #[test]
    fn test_extract_missing_text_file_yields_diagnostic() {
        let result = extract_source("/no/such/file.txt");
        assert!(result.is_degraded());
        assert!(!result.text.is_empty());
    }

    #[test]
    fn test_display_path_reshapes() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("سلام".as_bytes()).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let canonical = extract_source(&path);
        let display = extract_for_display(&path);
        assert!(!canonical.is_degraded());
        assert_ne!(canonical.text, display.text);
        // Display output leaves the Arabic block entirely.
        assert!(display
            .text
            .chars()
            .all(|c| !('\u{0600}'..='\u{06FF}').contains(&c)));
    }
}
