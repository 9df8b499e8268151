//! Width-aware text truncation.
//!
//! Paths are cut to fit the terminal at grapheme boundaries, measured in
//! terminal cells rather than bytes or chars.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Suffix appended to truncated rows.
pub const ELLIPSIS: &str = "…";

/// Display width of `text` in terminal cells.
#[inline]
pub fn string_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate `text` to at most `max_width` cells, ending in `suffix` when cut.
///
/// Borrows when the text already fits.
pub fn truncate_text<'a>(text: &'a str, max_width: usize, suffix: &str) -> Cow<'a, str> {
    if string_width(text) <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let suffix_width = string_width(suffix);
    if suffix_width >= max_width {
        return Cow::Owned(take_width(suffix, max_width));
    }

    let mut result = take_width(text, max_width - suffix_width);
    result.push_str(suffix);
    Cow::Owned(result)
}

/// Leading graphemes of `text` filling at most `max_width` cells.
fn take_width(text: &str, max_width: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut current = 0;

    for grapheme in text.graphemes(true) {
        let width = string_width(grapheme);
        if current + width > max_width {
            break;
        }
        result.push_str(grapheme);
        current += width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_text("/srv/www", 10, ELLIPSIS), "/srv/www");
        assert!(matches!(truncate_text("/srv", 4, ELLIPSIS), Cow::Borrowed(_)));
    }

    #[test]
    fn truncate_long_path() {
        assert_eq!(truncate_text("/home/user/projects", 8, ELLIPSIS), "/home/u…");
        assert_eq!(string_width(&truncate_text("/home/user/projects", 8, ELLIPSIS)), 8);
    }

    #[test]
    fn truncate_wide_chars() {
        // Each CJK char is two cells wide.
        assert_eq!(truncate_text("/数据/文件", 6, ELLIPSIS), "/数据…");
    }

    #[test]
    fn truncate_never_splits_graphemes() {
        // "é" as e + combining acute is one cell wide.
        let text = "/cafe\u{301}/menu";
        assert_eq!(truncate_text(text, 6, ELLIPSIS), "/cafe\u{301}…");
    }

    #[test]
    fn truncate_tiny_widths() {
        assert_eq!(truncate_text("/abc", 1, ELLIPSIS), "…");
        assert_eq!(truncate_text("/abc", 0, ELLIPSIS), "");
        assert_eq!(truncate_text("/abcdef", 2, "..."), "..");
    }
}
