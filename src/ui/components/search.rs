//! Search box component renderer.
//!
//! Renders the bordered name filter input. The box is always drawn while
//! cards are browsable; its border lights up while it has keyboard focus.

use crate::ui::helpers::{char_width, ellipsize, ellipsize_start, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PROMPT: &str = " Search: ";
const CARET: &str = "▏";

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
/// [margin] ┌──────────────────────────┐ [margin]
/// [margin] │ Search: char▏            │ [margin]
/// [margin] └──────────────────────────┘ [margin]
/// ```
///
/// An empty query shows the dimmed placeholder instead. Long queries keep
/// their tail visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_active {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let caret = if search.is_active { CARET } else { "" };
    let room = inner_width.saturating_sub(char_width(PROMPT) + char_width(caret));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{PROMPT}");

    let shown = if search.query.is_empty() {
        let placeholder = ellipsize(&search.placeholder, room);
        print!("{caret}");
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{placeholder}");
        print!("{}", Theme::reset());
        char_width(&placeholder)
    } else {
        let query = ellipsize_start(&search.query, room);
        print!("{query}{caret}");
        char_width(&query)
    };

    let used = char_width(PROMPT) + char_width(caret) + shown;
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
