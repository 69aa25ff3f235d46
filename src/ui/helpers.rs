//! Shared rendering utilities and helpers.
//!
//! Low-level rendering utilities used across multiple UI components: cursor
//! positioning, centering, and fuzzy match highlighting with proper ANSI escape
//! sequence management. All widths are counted in characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Returns the `(left, right)` padding that centers `text` in `cols` columns.
///
/// Left padding is the smaller half when the remainder is odd. Text wider than
/// `cols` gets no padding.
///
/// # Example
///
/// ```rust
/// use jetcatalog::ui::helpers::center_padding;
///
/// assert_eq!(center_padding("abc", 10), (3, 4));
/// assert_eq!(center_padding("abcdef", 4), (0, 0));
/// ```
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> (usize, usize) {
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    (left, cols.saturating_sub(left + len))
}

/// Prints `text` centered on `row`, padded to the full width with `style`
/// applied to the whole line.
pub fn render_centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let (left, right) = center_padding(&text, cols);

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(left));
    print!("{text}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is selected (disables match highlighting)
///
/// # Selection Behavior
///
/// When `is_selected` is `true`, match highlighting is disabled to avoid
/// conflicting with selection background colors.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len()).max(start);
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
