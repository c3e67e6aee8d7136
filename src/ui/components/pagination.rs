//! Prev/Next pagination controls.
//!
//! Terminals have no buttons, so each control is a bracketed label: bright
//! when its cursor exists, dimmed when it does not. The keys that trigger
//! them are listed in the footer.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

pub const PREV_LABEL: &str = "[ Prev ]";
pub const NEXT_LABEL: &str = "[ Next ]";
const SPACING: &str = "   ";

fn button_style(enabled: bool, theme: &Theme) -> String {
    if enabled {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.button_fg))
    } else {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    }
}

/// Renders both controls centered at `row` and returns the next free row.
pub fn render_pagination(
    row: usize,
    pagination: &PaginationInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = char_width(PREV_LABEL) + char_width(SPACING) + char_width(NEXT_LABEL);
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}{PREV_LABEL}{}", button_style(pagination.has_previous, theme), Theme::reset());
    print!("{SPACING}");
    print!("{}{NEXT_LABEL}{}", button_style(pagination.has_next, theme), Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    row + 1
}
