//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then hand
//! it to the layout for its [`LoadPhase`].

use crate::app::{AppState, LoadPhase};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; the
/// host hands each render a fresh pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match vm.phase {
        LoadPhase::InitialLoading => components::render_loading_screen(vm, theme, cols, rows),
        LoadPhase::Error => components::render_error_screen(vm, theme, cols, rows),
        LoadPhase::NavigationLoading | LoadPhase::Content => {
            components::render_browser(vm, theme, cols, rows);
        }
    }
}
