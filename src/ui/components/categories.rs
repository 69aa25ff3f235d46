//! Category bar component renderer.
//!
//! Draws the single-select category filter as a horizontal row of pills. The
//! selected pill is drawn inverted; the pill under the category cursor is
//! wrapped in brackets.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CategoryBarInfo, Pill};

/// Columns between the screen edge and the first pill.
const LEFT_MARGIN: usize = 2;

/// Renders the category bar at `row`.
///
/// Pills that do not fit in `cols` are dropped from the right; the pill under
/// the cursor is always kept visible by scrolling the bar.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_category_bar(row: usize, bar: &CategoryBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));

    let first = first_visible_pill(&bar.pills, cols.saturating_sub(LEFT_MARGIN));
    let mut used = LEFT_MARGIN;

    for pill in &bar.pills[first..] {
        let width = pill_width(pill);
        if used + width > cols {
            break;
        }
        render_pill(pill, theme);
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

/// Columns taken by one pill including its focus markers and gap.
fn pill_width(pill: &Pill) -> usize {
    pill.label.chars().count() + 5
}

/// Index of the first pill to draw so the focused pill fits in `width`.
fn first_visible_pill(pills: &[Pill], width: usize) -> usize {
    let Some(focused) = pills.iter().position(|pill| pill.is_focused) else {
        return 0;
    };

    let mut first = 0;
    while first < focused && pills[first..=focused].iter().map(pill_width).sum::<usize>() > width {
        first += 1;
    }
    first
}

fn render_pill(pill: &Pill, theme: &Theme) {
    let (fg, bg) = if pill.is_selected {
        (&theme.colors.pill_selected_fg, &theme.colors.pill_selected_bg)
    } else {
        (&theme.colors.pill_fg, &theme.colors.pill_bg)
    };
    let (open, close) = if pill.is_focused { ("[", "]") } else { (" ", " ") };

    print!("{}{}{open}", Theme::bold(), Theme::fg(&theme.colors.pill_focus_fg));
    print!("{}", Theme::reset());
    print!("{}{} {} ", Theme::fg(fg), Theme::bg(bg), pill.label);
    print!("{}", Theme::reset());
    print!("{}{}{close}", Theme::bold(), Theme::fg(&theme.colors.pill_focus_fg));
    print!("{} ", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pill(label: &str, is_focused: bool) -> Pill {
        Pill {
            label: label.to_string(),
            is_selected: false,
            is_focused,
        }
    }

    #[test]
    fn bar_scrolls_to_focused_pill() {
        let pills = vec![pill("all", false), pill("IDE", false), pill("Data", false), pill("Editor", true)];
        // widths: 8, 8, 9, 11
        assert_eq!(first_visible_pill(&pills, 40), 0);
        assert_eq!(first_visible_pill(&pills, 20), 2);
        assert_eq!(first_visible_pill(&pills, 5), 3);
    }

    #[test]
    fn unfocused_bar_starts_at_all() {
        let pills = vec![pill("all", false), pill("IDE", false)];
        assert_eq!(first_visible_pill(&pills, 1), 0);
    }
}
