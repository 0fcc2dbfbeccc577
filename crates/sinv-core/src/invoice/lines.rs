//! Plain-text line extraction.

use crate::pdf::PdfContent;

/// Characters that end a line, including the vertical tab, form feed,
/// file/group/record separators and the Unicode line/paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Collect the non-empty, trimmed lines of every page in document order.
///
/// Pages without text are skipped.
pub fn extract_text_lines(content: &PdfContent) -> Vec<String> {
    content
        .pages
        .iter()
        .filter_map(|page| page.text.as_deref())
        .flat_map(split_lines)
        .map(str::to_string)
        .collect()
}
