//! Input and load-phase state types for the application.
//!
//! These enums decide which keybindings are active and which screen the
//! renderer draws.
//!
//! # State Machine
//!
//! Input is handled in one of two modes:
//! - **Normal**: Paging, scrolling and commands
//! - **Search**: Typed characters edit the name filter
//!
//! Each page load moves the view through [`LoadPhase`]:
//!
//! ```text
//! mount ──► InitialLoading ──┬──► Content ──► NavigationLoading ──┬──► Content
//!                            └──► Error   ◄───────────────────────┘
//! ```

/// Current input handling mode.
///
/// Controls how printable keys are interpreted and which footer hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Paging, scrolling and commands.
    ///
    /// Available keybindings: h/l (page), j/k (scroll), / (search), r (reload), q (quit).
    #[default]
    Normal,

    /// Typing into the search box.
    ///
    /// Every printable key is appended to the query. Enter keeps the query and
    /// returns to [`InputMode::Normal`]; Esc clears it.
    Search,
}

/// Which screen the view is showing, derived from the loading flags and error.
///
/// Variants are listed in precedence order: when several conditions hold at
/// once, the first one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// First page is loading; only the spinner is drawn.
    InitialLoading,
    /// The last load failed; only the error line is drawn.
    Error,
    /// A page change is in flight; header and search stay, the grid is a spinner.
    NavigationLoading,
    /// Cards, pagination controls and search are all live.
    Content,
}

/// Pagination direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}
