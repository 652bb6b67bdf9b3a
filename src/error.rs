//! Error types for the mustakhrij library.

use std::io;
use thiserror::Error;

/// Result type alias for mustakhrij operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text extraction.
///
/// These never cross the public scanner boundary: scanners convert them
/// into a degraded [`crate::ExtractionResult`] and log the condition.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading a source file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// Network-level failure (connection error, timeout, invalid URL).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Unable to decode source content as UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::HttpStatus(status.as_u16());
        }
        Error::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::HttpStatus(404);
        assert_eq!(err.to_string(), "HTTP status 404");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_lopdf_error_conversion() {
        let err: Error = lopdf::Error::PageNumberNotFound(3).into();
        assert!(matches!(err, Error::PdfParse(_)));
    }

    #[test]
    fn test_encrypted_document_conversion() {
        use lopdf::encryption::DecryptionError;

        let err: Error = lopdf::Error::Decryption(DecryptionError::IncorrectPassword).into();
        assert!(matches!(err, Error::Encrypted));
    }
}
