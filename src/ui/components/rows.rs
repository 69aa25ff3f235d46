//! Favorites list component renderer.
//!
//! Each favorite is drawn as a two-line row: a badge and the title on the
//! first line, the subtitle in the dimmed color on the second. Selection
//! highlights both lines across the full width.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ItemRow;

/// Renders all rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + `ItemRow::HEIGHT` per item)
pub fn render_rows(row: usize, items: &[ItemRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single favorite at the specified row position.
///
/// # Layout
///
/// ```text
///  [RR] RustRover                       [padding to fill line]
///       A cross-platform IDE for Rust   [padding to fill line]
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Fuzzy match highlights (unless selected)
/// 3. Normal text color
fn render_row(row: usize, item: &ItemRow, theme: &Theme, cols: usize) -> usize {
    let line_style = |dim_text: bool| {
        if item.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else if dim_text {
            Theme::fg(&theme.colors.text_dim)
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    position_cursor(row, 1);
    print!("{}", line_style(false));
    print!(" ");
    print!("{}{}", Theme::fg(&theme.colors.badge_fg), Theme::bg(&theme.colors.badge_bg));
    print!("{}{}{}", Theme::bold(), item.badge, Theme::reset());
    print!("{}", line_style(false));
    print!("{}", " ".repeat(ItemRow::BADGE_WIDTH.saturating_sub(item.badge.chars().count() + 1)));

    if item.is_selected {
        print!("{}", Theme::bold());
    }
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);

    let used = ItemRow::BADGE_WIDTH + item.title.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", line_style(true));
    print!("{}", " ".repeat(ItemRow::BADGE_WIDTH));
    print!("{}", item.subtitle);
    let used = ItemRow::BADGE_WIDTH + item.subtitle.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    row + ItemRow::HEIGHT
}
