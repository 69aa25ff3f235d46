//! Centered message renderers: loading, load error, and the empty result.

use crate::ui::helpers::render_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, MessageView};

/// Renders the empty-result message and its subtitle starting at `row`.
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    render_centered_line(row + 1, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered_line(row + 2, &empty.subtitle, &subtitle_style, cols);
}

/// Renders the loading indicator at `row`.
pub fn render_loading(row: usize, message: &MessageView, theme: &Theme, cols: usize) {
    render_centered_line(row, &message.text, &Theme::fg(&theme.colors.empty_state_fg), cols);
}

/// Renders a load error at `row`. The text is shown as delivered.
pub fn render_error(row: usize, message: &MessageView, theme: &Theme, cols: usize) {
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    render_centered_line(row, &message.text, &style, cols);
}
