//! Composable UI component renderers.
//!
//! Each component prints one part of the screen at a given row and returns
//! the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title bar with the visible card count
//! - [`search`]: Search input box
//! - [`card`]: Pokémon cards and the card grid
//! - [`pagination`]: Prev/Next controls
//! - [`spinner`]: Loading indicator
//! - [`error`]: Error line
//! - [`empty`]: Message for an empty filter result
//! - [`footer`]: Keybinding hints
//!
//! # Layouts
//!
//! - [`render_loading_screen`]: Spinner only (first load)
//! - [`render_error_screen`]: Error line and footer
//! - [`render_browser`]: Header, search box, grid or spinner, controls, footer

pub mod card;
mod empty;
mod error;
mod footer;
mod header;
pub mod pagination;
mod search;
mod spinner;

use crate::app::LoadPhase;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use card::render_card_grid;
use empty::render_empty_state;
use error::render_error;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use spinner::render_spinner;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// First-load screen: the spinner, vertically centered.
pub fn render_loading_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    if let Some(spinner) = &vm.spinner {
        render_spinner((rows / 2).max(1), spinner, theme, cols);
    }
}

/// Failed-load screen: the error line, with the footer so reload stays discoverable.
pub fn render_error_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    if let Some(message) = &vm.error {
        render_error((rows / 2).max(1), message, theme, cols);
    }
    render_footer(rows.max(1), &vm.footer, theme, cols);
}

/// Browsing screen.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search box - 3 lines]
/// [Card grid | spinner | empty message]
/// [Prev / Next]
/// [Border]
/// [Footer]
/// ```
///
/// While a page change is loading the grid and the controls are replaced
/// by the spinner; header and search box stay.
pub fn render_browser(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    let footer_row = rows.max(current_row + 3);
    let controls_row = footer_row - 2;
    let body_middle = current_row + controls_row.saturating_sub(current_row) / 2;

    if vm.phase == LoadPhase::NavigationLoading {
        if let Some(spinner) = &vm.spinner {
            render_spinner(body_middle, spinner, theme, cols);
        }
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(body_middle.saturating_sub(1).max(current_row), empty, theme, cols);
        render_pagination(controls_row, &vm.pagination, theme, cols);
    } else {
        render_card_grid(current_row, &vm.cards, &vm.grid, theme, cols);
        render_pagination(controls_row, &vm.pagination, theme, cols);
    }

    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
