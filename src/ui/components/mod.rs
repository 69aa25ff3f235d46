//! Composable UI component renderers.
//!
//! Each component is responsible for rendering one part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`categories`]: Category filter pills
//! - [`rows`]: Two-line favorite rows
//! - [`message`]: Loading, error and empty-result messages
//! - [`detail`]: Detail page of one entry
//!
//! # Layouts
//!
//! - [`render_home_screen`]: Header + Search + Categories + Rows + Footer
//! - [`render_message_screen`]: Header + centered message + Footer
//! - [`render_detail_screen`]: Header + entry fields + Footer

mod categories;
mod detail;
mod footer;
mod header;
mod message;
mod rows;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, DetailView, HomeView, ListContent, SearchBarInfo, UIViewModel};

use categories::render_category_bar;
use detail::render_detail;
use footer::render_footer;
use header::render_header;
use message::{render_empty_state, render_error, render_loading};
use rows::render_rows;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the header and its border. Returns the first content row.
fn render_top(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let current_row = 2; // Start at row 2 (skip blank line at row 1)
    let current_row = render_header(current_row, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols)
}

/// Renders the bottom border and the footer on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the home screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Category Bar]
/// [blank line]
/// [Rows - 2 lines each] or [No-results message]
/// [Border]
/// [Footer]
/// ```
pub fn render_home_screen(
    vm: &UIViewModel,
    home: &HomeView,
    search: Option<&SearchBarInfo>,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_top(vm, theme, cols);
    if let Some(search) = search {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_category_bar(current_row, &home.category_bar, theme, cols);
    current_row += 1;

    match &home.content {
        ListContent::Items { rows: items, .. } => {
            render_rows(current_row, items, theme, cols);
        }
        ListContent::NoResults(empty) => render_empty_state(current_row, empty, theme, cols),
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders a screen with a single centered message (loading or error).
pub fn render_message_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let top = render_top(vm, theme, cols);
    let middle = top + rows.saturating_sub(top + 2) / 2;

    match &vm.body {
        Body::Loading(message) => render_loading(middle, message, theme, cols),
        Body::Error(message) => render_error(middle, message, theme, cols),
        Body::Home(_) | Body::Detail(_) => {}
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the detail screen layout.
pub fn render_detail_screen(vm: &UIViewModel, detail: &DetailView, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_top(vm, theme, cols);
    render_detail(current_row, detail, theme, cols);
    render_bottom(vm, theme, cols, rows);
}
