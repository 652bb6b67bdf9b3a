//! Data model for extraction inputs and results.

use serde::{Deserialize, Serialize};

use crate::detect::{detect_source, SourceKind};
use crate::error::Error;

/// A source document reference with its inferred kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Filesystem path or URL.
    pub reference: String,
    /// Inferred content kind.
    pub kind: SourceKind,
}

impl Source {
    /// Create a source from a path or URL, inferring its kind.
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let kind = detect_source(&reference);
        Self { reference, kind }
    }
}

/// Classification of a degraded extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// File missing, unreadable, or corrupt.
    Io,
    /// PDF structure could not be parsed (including encrypted documents).
    Pdf,
    /// Connection error, timeout, or non-success HTTP status.
    Network,
    /// Content could not be decoded as UTF-8.
    Encoding,
}

/// A recorded extraction failure: kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Failure classification.
    pub kind: FailureKind,
    /// Description of what went wrong.
    pub message: String,
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        let kind = match err {
            Error::Io(_) => FailureKind::Io,
            Error::PdfParse(_) | Error::Encrypted => FailureKind::Pdf,
            Error::Network(_) | Error::HttpStatus(_) => FailureKind::Network,
            Error::Encoding(_) => FailureKind::Encoding,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// The outcome of one extraction call.
///
/// Always renderable: `text` holds the canonical logical-order text on
/// success, and an empty string (or a diagnostic message for plain-text
/// sources) when the extraction degraded. The failure, if any, stays
/// inspectable instead of living only in log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted text.
    pub text: String,
    /// Recorded failure when the extraction degraded.
    pub failure: Option<Failure>,
}

impl ExtractionResult {
    /// A successful extraction.
    pub fn ok(text: String) -> Self {
        Self {
            text,
            failure: None,
        }
    }

    /// A degraded extraction carrying fallback text and the failure record.
    pub fn degraded(text: String, failure: Failure) -> Self {
        Self {
            text,
            failure: Some(failure),
        }
    }

    /// Whether the extraction degraded.
    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    /// Consume the result, keeping only the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_infers_kind() {
        let source = Source::new("https://example.com/law/42");
        assert_eq!(source.kind, SourceKind::Web);

        let source = Source::new("case.pdf");
        assert_eq!(source.kind, SourceKind::Pdf);
    }

    #[test]
    fn test_failure_from_error() {
        let failure = Failure::from(&Error::Encrypted);
        assert_eq!(failure.kind, FailureKind::Pdf);
        assert_eq!(failure.message, "Document is encrypted");

        let failure = Failure::from(&Error::HttpStatus(503));
        assert_eq!(failure.kind, FailureKind::Network);
    }

    #[test]
    fn test_encrypted_document_classified_as_pdf_failure() {
        use lopdf::encryption::DecryptionError;

        let err = Error::from(lopdf::Error::Decryption(DecryptionError::IncorrectPassword));
        let failure = Failure::from(&err);
        assert_eq!(failure.kind, FailureKind::Pdf);
        assert_eq!(failure.message, "Document is encrypted");
    }

    #[test]
    fn test_result_degradation() {
        let ok = ExtractionResult::ok("text".to_string());
        assert!(!ok.is_degraded());
        assert_eq!(ok.into_text(), "text");

        let degraded = ExtractionResult::degraded(
            String::new(),
            Failure {
                kind: FailureKind::Io,
                message: "file not found".to_string(),
            },
        );
        assert!(degraded.is_degraded());
        assert!(degraded.text.is_empty());
    }

    #[test]
    fn test_result_serializes() {
        let result = ExtractionResult::ok("نص".to_string());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("نص"));
        assert!(json.contains("null"));
    }
}
