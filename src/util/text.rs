use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis string used for truncation
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Calculates the display width of a string in terminal columns.
///
/// Unicode-aware: CJK characters and emoji occupy 2 columns, combining
/// marks 0. App names in the default `kr` feed are mostly CJK, so the grid
/// cannot rely on `str::len` for alignment.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncates a string to fit within a maximum display width, appending
/// "..." when anything was cut.
///
/// Returns `Cow::Borrowed` when the string already fits. For widths of 3
/// columns or fewer the ellipsis is omitted and as many characters as fit
/// are returned.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = if max_width > ELLIPSIS_WIDTH {
        max_width - ELLIPSIS_WIDTH
    } else {
        max_width
    };

    let mut width = 0;
    let mut cut = 0;
    for (idx, c) in s.char_indices() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        cut = idx + c.len_utf8();
    }

    if max_width > ELLIPSIS_WIDTH {
        Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
    } else {
        Cow::Owned(s[..cut].to_string())
    }
}

/// Truncates and right-pads a string to exactly `width` display columns.
///
/// Grid cells need a fixed column width regardless of content; a truncated
/// CJK string can come up one column short, which the trailing spaces cover.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let deficit = width.saturating_sub(display_width(&cell));
    format!("{}{}", cell, " ".repeat(deficit))
}
