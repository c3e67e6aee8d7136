//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: pre-formatted card fields,
//! highlight ranges and the grid geometry for the current pane size.
//!
//! # Example
//!
//! ```rust
//! use pokedex::ui::viewmodel::GridLayout;
//!
//! let layout = GridLayout::for_viewport(40, 120);
//! assert_eq!(layout.columns, 4);
//! assert_eq!(layout.visible_rows, 2);
//! ```

use crate::app::LoadPhase;

/// Card width in columns, borders included.
pub const CARD_WIDTH: usize = 28;

/// Card height in rows, borders included.
pub const CARD_HEIGHT: usize = 11;

/// Blank columns between adjacent cards.
pub const CARD_GAP: usize = 1;

/// Rows taken by everything around the grid: top margin, header, border,
/// search box (3), pagination, border and footer.
pub const CHROME_ROWS: usize = 9;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Which screen to draw.
    pub phase: LoadPhase,

    /// Title bar contents.
    pub header: HeaderInfo,

    /// Search box contents.
    pub search_bar: SearchBarInfo,

    /// Cards in the visible window, row-major.
    pub cards: Vec<CardView>,

    /// Grid geometry for the current pane size.
    pub grid: GridLayout,

    /// Prev/Next control state.
    pub pagination: PaginationInfo,

    /// Shown instead of the grid when the filter leaves nothing.
    pub empty_state: Option<EmptyState>,

    /// Present while a load is in flight.
    pub spinner: Option<SpinnerInfo>,

    /// The single error line, when the last load failed.
    pub error: Option<String>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// One Pokémon card, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,

    /// Character ranges of `name` matching the search query.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Artwork URL, or a placeholder when the record has none.
    pub image: String,

    /// Type names joined with ", ".
    pub types: String,

    /// Labelled rows in display order (Height, Weight, Speed, ...).
    pub attributes: Vec<(&'static str, String)>,
}

/// How many cards fit across and down the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub visible_rows: usize,
}

impl GridLayout {
    /// Computes the grid for a pane of `rows` x `cols`.
    ///
    /// Always at least one card across and one card row down, so a tiny pane
    /// still shows something.
    #[must_use]
    pub fn for_viewport(rows: usize, cols: usize) -> Self {
        let columns = ((cols + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1);
        let visible_rows = (rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1);
        Self {
            columns,
            visible_rows,
        }
    }

    /// Number of card rows needed for `item_count` cards.
    #[must_use]
    pub const fn total_rows(&self, item_count: usize) -> usize {
        (item_count + self.columns - 1) / self.columns
    }

    /// Largest scroll offset (in card rows) that still fills the window.
    #[must_use]
    pub const fn max_scroll(&self, item_count: usize) -> usize {
        self.total_rows(item_count).saturating_sub(self.visible_rows)
    }
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the visible card count.
    pub title: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Shown dimmed when the query is empty.
    pub placeholder: String,

    /// Whether keystrokes currently go to the search box.
    pub is_active: bool,
}

/// Prev/Next control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Prev is enabled iff the page has a previous cursor.
    pub has_previous: bool,
    /// Next is enabled iff the page has a next cursor.
    pub has_next: bool,
}

/// Spinner display information.
#[derive(Debug, Clone)]
pub struct SpinnerInfo {
    pub frame: &'static str,
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No Pokémon match \"zz\"").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
