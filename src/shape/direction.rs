//! Line-level direction correction for visually ordered PDF text.
//!
//! PDF text engines frequently emit Arabic glyph runs in the order they
//! were painted, which for Arabic fonts is the opposite of logical
//! reading order. Reversing token order per line restores sentence-level
//! reading order while leaving each word's internal character sequence
//! (and therefore its shaping) untouched.
//!
//! This is a heuristic, not the Unicode bidirectional algorithm: a line
//! mixing Arabic with Latin words or numerals is flipped as one unit,
//! which can misplace the embedded left-to-right segments.

/// Check whether a character falls in the Arabic Unicode block
/// (U+0600–U+06FF).
pub fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Check whether a line contains any Arabic-block character.
pub fn has_arabic(line: &str) -> bool {
    line.chars().any(is_arabic_char)
}

/// Correct word order on every Arabic line of `text`.
///
/// Lines without Arabic content pass through byte-for-byte. Correction is
/// strictly line-local; no token crosses a line boundary. The function is
/// an involution on token order: applying it twice restores the original
/// ordering of an Arabic line's tokens.
///
/// # Example
/// ```
/// use mustakhrij::shape::direction::fix;
///
/// assert_eq!(fix("مرحبا بالعالم"), "بالعالم مرحبا");
/// assert_eq!(fix("plain latin line"), "plain latin line");
/// ```
pub fn fix(text: &str) -> String {
    text.split('\n')
        .map(fix_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Correct a single line, returning it unchanged when it has no Arabic
/// content.
pub fn fix_line(line: &str) -> String {
    if !has_arabic(line) {
        return line.to_string();
    }
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.reverse();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_arabic_line_unchanged() {
        let line = "Article 5: the parties agree.";
        assert_eq!(fix(line), line);
    }

    #[test]
    fn test_arabic_line_tokens_reversed() {
        assert_eq!(fix("مرحبا بالعالم"), "بالعالم مرحبا");
    }

    #[test]
    fn test_mixed_line_reversed_as_whole() {
        // Whole-line reversal: the Latin word moves with the rest.
        assert_eq!(fix("Hello مرحبا"), "مرحبا Hello");
    }

    #[test]
    fn test_fix_is_involution_on_token_order() {
        let line = "المادة الأولى من النظام";
        assert_eq!(fix(&fix(line)), line);
    }

    #[test]
    fn test_token_multiset_preserved() {
        let line = "قانون الشركات السعودي";
        let fixed = fix(line);
        let mut before: Vec<&str> = line.split_whitespace().collect();
        let mut after: Vec<&str> = fixed.split_whitespace().collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn test_correction_is_line_local() {
        let text = "مرحبا بالعالم\nplain line\nالسلام عليكم";
        let fixed = fix(text);
        let lines: Vec<&str> = fixed.split('\n').collect();
        assert_eq!(lines[0], "بالعالم مرحبا");
        assert_eq!(lines[1], "plain line");
        assert_eq!(lines[2], "عليكم السلام");
    }

    #[test]
    fn test_empty_and_blank_lines_preserved() {
        assert_eq!(fix(""), "");
        assert_eq!(fix("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_has_arabic() {
        assert!(has_arabic("نص"));
        assert!(has_arabic("mixed نص line"));
        assert!(!has_arabic("latin only"));
        // Arabic-Indic digits sit inside the block too.
        assert!(has_arabic("\u{0661}\u{0662}"));
    }
}
