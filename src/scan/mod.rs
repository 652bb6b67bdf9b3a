//! Source scanners.
//!
//! Each scanner turns one source reference into an [`ExtractionResult`]
//! without letting any failure escape: errors are logged, recorded on the
//! result, and degraded to an always-renderable string. Scanners hold no
//! state across calls; file handles and connections are scoped to the call.
//!
//! [`ExtractionResult`]: crate::ExtractionResult

mod pdf;
mod plain;
mod web;

pub use pdf::PdfPageScanner;
pub use plain::PlainTextScanner;
pub use web::{linearize_html, WebPageScanner, WebScanOptions, DEFAULT_USER_AGENT};

use unicode_normalization::UnicodeNormalization;

/// Normalize scanner output to Unicode NFC.
///
/// Applied to canonical text only, never to reshaped display text: NFC
/// leaves Arabic presentation forms alone but keeping it off the display
/// path avoids any coupling between the two.
pub(crate) fn nfc(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_composes_decomposed_input() {
        // e + combining acute -> é
        assert_eq!(nfc("e\u{0301}"), "\u{00E9}");
    }

    #[test]
    fn test_nfc_leaves_arabic_untouched() {
        let text = "مرحبا بالعالم";
        assert_eq!(nfc(text), text);
    }
}
