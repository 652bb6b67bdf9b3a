//! Display-only Arabic reshaping.
//!
//! Produces the visual form of a text for rendering surfaces without
//! native bidirectional support: contextual letterforms first, then
//! left-to-right visual reordering per line (UAX#9 via `unicode-bidi`).
//!
//! The output uses presentation-form code points and is not guaranteed
//! round-trippable: never store it, index it, or feed it back through
//! [`crate::shape::direction::fix`].

use unicode_bidi::BidiInfo;

use super::joining;

/// Reshape `text` for display.
///
/// Each line is converted to contextual presentation forms and emitted in
/// visual (left-to-right rendering) order. Text with nothing to reshape
/// comes back unchanged; `reshape("")` is `""`. The result is a fresh
/// allocation on every call.
///
/// # Example
/// ```
/// use mustakhrij::shape::reshape;
///
/// assert_eq!(reshape(""), "");
/// assert_eq!(reshape("plain latin"), "plain latin");
/// ```
pub fn reshape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let shaped = joining::shape_text(text);
    shaped
        .split('\n')
        .map(reorder_visual)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reorder one line into visual order.
///
/// Falls back to the line unchanged when the bidi analysis yields no
/// paragraphs (blank input).
fn reorder_visual(line: &str) -> String {
    let info = BidiInfo::new(line, None);
    if info.paragraphs.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    for para in &info.paragraphs {
        out.push_str(&info.reorder_line(para, para.range.clone()));
    }
    out
}
