//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the layout matching the body
//!
//! # Example
//!
//! ```rust
//! use jetcatalog::app::AppState;
//! use jetcatalog::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! render(&state, 24, 80); // Render to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using `print!`. Does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with the layout matching its body.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Loading(_) | Body::Error(_) => components::render_message_screen(vm, theme, cols, rows),
        Body::Home(home) => {
            components::render_home_screen(vm, home, vm.search_bar.as_ref(), theme, cols, rows);
        }
        Body::Detail(detail) => components::render_detail_screen(vm, detail, theme, cols, rows),
    }
}
