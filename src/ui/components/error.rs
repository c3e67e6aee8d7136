//! Error display: the single line that replaces the page after a failed load.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;

pub fn render_error(row: usize, message: &str, theme: &Theme, cols: usize) {
    print_centered(row, message, &Theme::fg(&theme.colors.error_fg), cols);
}
