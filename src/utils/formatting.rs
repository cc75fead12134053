//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Default column width for wrapped comments.
pub const COMMENT_WIDTH: usize = 60;

/// Greedily pack whitespace-separated words into lines of at most `width`
/// display columns.
///
/// Every word is followed by a single space, and that space counts towards
/// the line width. Lines are joined with `\n` and are not trimmed, so each
/// one ends with a space. A word wider than `width` gets a line of its own.
pub fn wrap_comment(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let w = word.width() + 1;
        if line_len > 0 && line_len + w > width {
            out.push('\n');
            line_len = 0;
        }
        out.push_str(word);
        out.push(' ');
        line_len += w;
    }

    out
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
