//! Loading indicator.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SpinnerInfo;

/// Renders the current spinner frame and its message centered at `row`.
pub fn render_spinner(row: usize, spinner: &SpinnerInfo, theme: &Theme, cols: usize) {
    let text = format!("{} {}", spinner.frame, spinner.message);
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.spinner_fg));
    print_centered(row, &text, &style, cols);
}
