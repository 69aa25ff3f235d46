//! Detail screen component renderer.

use crate::ui::helpers::{position_cursor, render_centered_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Column where field values start.
const VALUE_COLUMN: usize = 14;

/// Renders the detail page of one entry starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    match detail {
        DetailView::Found {
            id,
            badge,
            title,
            subtitle,
            category,
            image,
        } => {
            position_cursor(row + 1, 3);
            print!("{}{}", Theme::fg(&theme.colors.badge_fg), Theme::bg(&theme.colors.badge_bg));
            print!("{} {badge} {}", Theme::bold(), Theme::reset());
            print!("  {}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());

            position_cursor(row + 2, 3);
            print!("{}{subtitle}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());

            let fields = [("Category", category.clone()), ("Id", id.to_string()), ("Image", image.clone())];
            let mut current_row = row + 4;
            for (label, value) in fields {
                render_field(current_row, label, &value, theme);
                current_row += 1;
            }
            current_row
        }
        DetailView::NotFound { id } => {
            let text = format!("IDE #{id} is no longer in the catalog");
            render_centered_line(row + 1, &text, &Theme::fg(&theme.colors.empty_state_fg), cols);
            row + 2
        }
    }
}

fn render_field(row: usize, label: &str, value: &str, theme: &Theme) {
    position_cursor(row, 3);
    print!("{}{label}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    position_cursor(row, VALUE_COLUMN);
    print!("{}{value}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
}
