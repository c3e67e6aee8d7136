//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of everything the view
//! shows: the committed page, its cursors, the loading flags, the error, the
//! search query and the page loader. All writes go through named transition
//! methods so the flags and the data they describe always change together.
//!
//! # State Components
//!
//! - **Items**: Details of the last committed page, in list order
//! - **Cursors**: Previous/next page URLs of that page
//! - **Loading flags**: `initial_loading` and `navigation_loading`
//! - **Error**: Message of the last failed load
//! - **Search**: Query and input mode; filtering is derived, never stored
//! - **Loader**: The in-flight page load, if any
//!
//! # View Model Computation
//!
//! `compute_viewmodel` derives the [`LoadPhase`], filters the items by name,
//! windows them to the visible card rows and formats each card.
//!
//! # Example
//!
//! ```rust
//! use pokedex::app::{AppState, LoadPhase};
//! use pokedex::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), "https://pokeapi.co/api/v2/pokemon?limit=24");
//! assert_eq!(state.phase(), LoadPhase::InitialLoading);
//!
//! let request = state.begin_initial_load();
//! assert_eq!(request.url, "https://pokeapi.co/api/v2/pokemon?limit=24");
//! ```

use super::filter::{filter_by_name, match_ranges};
use super::modes::{Direction, InputMode, LoadPhase};
use crate::domain::{FetchError, ItemDetail};
use crate::fetch::{FetchRequest, LoadedPage, PageLoader};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardView, EmptyState, FooterInfo, GridLayout, HeaderInfo, PaginationInfo, SearchBarInfo,
    SpinnerInfo, UIViewModel,
};

/// Frames of the loading spinner, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TITLE: &str = "Let's Catch Pokémon";
const SEARCH_PLACEHOLDER: &str = "search Pokémon";
const MISSING: &str = "-";

/// Cursor URLs of the committed page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursors {
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl Cursors {
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Previous => self.previous.as_deref(),
            Direction::Next => self.next.as_deref(),
        }
    }
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Current search query. Never triggers a fetch.
    pub search_query: String,

    /// Details of the last committed page, in list order.
    pub items: Vec<ItemDetail>,

    /// Cursors of the last committed page. Replaced wholesale on commit.
    pub cursors: Cursors,

    /// Collection size reported by the last committed page.
    pub total: Option<u64>,

    /// Set from mount until the first load settles.
    pub initial_loading: bool,

    /// Set while a page change or reload is in flight.
    pub navigation_loading: bool,

    /// Message of the last failed load.
    pub error_message: Option<String>,

    /// Set when the host refused network access. No request is issued
    /// until access is granted again.
    pub web_access_denied: bool,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// First visible card row.
    pub scroll_row: usize,

    /// Index into [`SPINNER_FRAMES`].
    pub spinner_frame: usize,

    /// Whether a spinner timer is armed.
    pub ticking: bool,

    /// Last pane size passed to the renderer, as `(rows, cols)`.
    pub viewport: (usize, usize),

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Drives the in-flight page load.
    pub loader: PageLoader,

    /// URL of the most recently started load, for reloads.
    pub last_url: Option<String>,

    /// URL of the first page.
    pub list_url: String,
}

impl AppState {
    /// Creates the pre-mount state: initial loading, nothing fetched yet.
    #[must_use]
    pub fn new(theme: Theme, list_url: impl Into<String>) -> Self {
        Self {
            search_query: String::new(),
            items: Vec::new(),
            cursors: Cursors::default(),
            total: None,
            initial_loading: true,
            navigation_loading: false,
            error_message: None,
            web_access_denied: false,
            input_mode: InputMode::Normal,
            scroll_row: 0,
            spinner_frame: 0,
            ticking: false,
            viewport: (0, 0),
            theme,
            loader: PageLoader::new(),
            last_url: None,
            list_url: list_url.into(),
        }
    }

    /// Derives the screen to draw. See [`LoadPhase`] for the precedence.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        if self.initial_loading {
            LoadPhase::InitialLoading
        } else if self.error_message.is_some() {
            LoadPhase::Error
        } else if self.navigation_loading {
            LoadPhase::NavigationLoading
        } else {
            LoadPhase::Content
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.initial_loading || self.navigation_loading
    }

    /// Items matching the current search query, in page order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&ItemDetail> {
        filter_by_name(&self.items, &self.search_query)
    }

    fn start_load(&mut self, url: &str) -> FetchRequest {
        self.error_message = None;
        self.last_url = Some(url.to_string());
        self.loader.begin(url)
    }

    /// Starts loading the first page. Only sent once web access is granted.
    pub fn begin_initial_load(&mut self) -> FetchRequest {
        self.web_access_denied = false;
        self.initial_loading = true;
        let url = self.list_url.clone();
        self.start_load(&url)
    }

    /// Starts loading the adjacent page, or returns `None` when there is no
    /// cursor in that direction or web access was denied.
    pub fn begin_navigation(&mut self, direction: Direction) -> Option<FetchRequest> {
        if self.web_access_denied {
            return None;
        }
        let url = self.cursors.get(direction)?.to_string();
        self.navigation_loading = true;
        Some(self.start_load(&url))
    }

    /// Re-requests the most recently started URL, or the first page.
    /// Returns `None` while web access is denied.
    pub fn begin_reload(&mut self) -> Option<FetchRequest> {
        if self.web_access_denied {
            return None;
        }
        let url = self
            .last_url
            .clone()
            .unwrap_or_else(|| self.list_url.clone());
        self.navigation_loading = true;
        Some(self.start_load(&url))
    }

    /// Replaces the items and both cursors with a freshly loaded page.
    pub fn commit_page(&mut self, page: LoadedPage) {
        tracing::debug!(
            item_count = page.items.len(),
            has_previous = page.previous.is_some(),
            has_next = page.next.is_some(),
            "committing page"
        );
        self.items = page.items;
        self.cursors = Cursors {
            previous: page.previous,
            next: page.next,
        };
        self.total = page.total;
        self.scroll_row = 0;
        self.error_message = None;
        self.finish_loading();
    }

    /// Records a failed load. The items are dropped, the cursors survive.
    pub fn fail_load(&mut self, error: &FetchError) {
        tracing::debug!(url = %error.url(), error = %error, "page load failed");
        self.fail_with_message(error.to_string());
    }

    /// Shows `message` as the error line and stops loading.
    ///
    /// Leaves typing mode: the error screen only takes normal-mode keys.
    pub fn fail_with_message(&mut self, message: String) {
        self.input_mode = InputMode::Normal;
        self.items.clear();
        self.scroll_row = 0;
        self.error_message = Some(message);
        self.finish_loading();
    }

    /// Records that the host refused network access and shows `message`.
    pub fn deny_web_access(&mut self, message: String) {
        self.web_access_denied = true;
        self.fail_with_message(message);
    }

    fn finish_loading(&mut self) {
        self.initial_loading = false;
        self.navigation_loading = false;
    }

    /// Advances the spinner one frame.
    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Records the pane size so scrolling can clamp to the grid.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
    }

    fn grid_layout(&self) -> GridLayout {
        GridLayout::for_viewport(self.viewport.0, self.viewport.1)
    }

    /// Scrolls the grid down one card row. Returns whether anything moved.
    pub fn scroll_down(&mut self) -> bool {
        let max = self.grid_layout().max_scroll(self.visible_items().len());
        if self.scroll_row < max {
            self.scroll_row += 1;
            true
        } else {
            false
        }
    }

    /// Scrolls the grid up one card row. Returns whether anything moved.
    pub fn scroll_up(&mut self) -> bool {
        let max = self.grid_layout().max_scroll(self.visible_items().len());
        self.scroll_row = self.scroll_row.min(max);
        if self.scroll_row > 0 {
            self.scroll_row -= 1;
            true
        } else {
            false
        }
    }

    /// Sets the search query and rewinds the grid to the top.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.scroll_row = 0;
    }

    /// Computes a renderable UI view model from current state and pane size.
    ///
    /// # Windowing
    ///
    /// The filtered items are laid out row-major in [`GridLayout::columns`]
    /// columns; only the card rows from `scroll_row` onwards that fit in the
    /// pane are included. The offset is clamped here as well because a resize
    /// or a narrower filter can shrink the grid under it.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            rows,
            cols,
            item_count = self.items.len()
        )
        .entered();

        let phase = self.phase();
        let grid = GridLayout::for_viewport(rows, cols);
        let visible = self.visible_items();

        let cards = if phase == LoadPhase::Content {
            let scroll = self.scroll_row.min(grid.max_scroll(visible.len()));
            visible
                .iter()
                .skip(scroll * grid.columns)
                .take(grid.visible_rows * grid.columns)
                .map(|item| self.compute_card(item))
                .collect()
        } else {
            Vec::new()
        };

        let empty_state = (phase == LoadPhase::Content && visible.is_empty())
            .then(|| self.compute_empty_state());

        let spinner = matches!(
            phase,
            LoadPhase::InitialLoading | LoadPhase::NavigationLoading
        )
        .then(|| self.compute_spinner(phase));

        UIViewModel {
            phase,
            header: HeaderInfo {
                title: format!(" {TITLE} ({}) ", visible.len()),
            },
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
                is_active: self.input_mode == InputMode::Search,
            },
            cards,
            grid,
            pagination: PaginationInfo {
                has_previous: self.cursors.previous.is_some(),
                has_next: self.cursors.next.is_some(),
            },
            empty_state,
            spinner,
            error: self.error_message.clone(),
            footer: self.compute_footer(phase),
        }
    }

    fn compute_card(&self, item: &ItemDetail) -> CardView {
        let or_missing =
            |value: Option<u32>| value.map_or_else(|| MISSING.to_string(), |v| v.to_string());

        CardView {
            name: item.name.clone(),
            highlight_ranges: match_ranges(&item.name, &self.search_query),
            image: item
                .image_url
                .clone()
                .unwrap_or_else(|| "no image".to_string()),
            types: item.type_line(),
            attributes: vec![
                ("Height", item.height.to_string()),
                ("Weight", item.weight.to_string()),
                ("Speed", or_missing(item.speed())),
                ("Experience", or_missing(item.base_experience)),
                ("Attack", or_missing(item.attack())),
                (
                    "Abilities",
                    item.primary_ability().unwrap_or(MISSING).to_string(),
                ),
            ],
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.search_query.is_empty() {
            EmptyState {
                message: "No Pokémon on this page".to_string(),
                subtitle: "Try the next or previous page".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No Pokémon match \"{}\"", self.search_query),
                subtitle: "Esc clears the search".to_string(),
            }
        }
    }

    fn compute_spinner(&self, phase: LoadPhase) -> SpinnerInfo {
        let message = match phase {
            LoadPhase::InitialLoading => "Catching Pokémon...",
            _ => "Loading page...",
        };
        SpinnerInfo {
            frame: SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
            message: message.to_string(),
        }
    }

    fn compute_footer(&self, phase: LoadPhase) -> FooterInfo {
        let keybindings = match (phase, self.input_mode) {
            (LoadPhase::Error, _) if self.web_access_denied => "q: quit",
            (LoadPhase::Error, _) => "r: reload  h/l or Ctrl+p/n: page  q: quit",
            (_, InputMode::Search) => "Type to filter  Enter: done  ESC: clear  Ctrl+p/n: page",
            (_, InputMode::Normal) => {
                "h/l or Ctrl+p/n: page  j/k: scroll  /: search  r: reload  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
