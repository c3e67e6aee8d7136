//! Keyboard mapping from host keys to application events.

use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

use super::handler::Event;
use super::modes::{Direction, InputMode};

/// Maps a key press to an application event for the given input mode.
///
/// `Ctrl+n`/`Ctrl+p` page in every mode. Other characters count only when
/// typed plainly (Shift allowed); Ctrl and Alt combinations are dropped.
///
/// # Examples
///
/// ```
/// use pokedex::app::{map_key, Event, InputMode};
/// use zellij_tile::prelude::{BareKey, KeyWithModifier};
///
/// let r = KeyWithModifier::new(BareKey::Char('r'));
/// assert_eq!(map_key(&r, InputMode::Normal), Some(Event::Reload));
/// assert_eq!(map_key(&r, InputMode::Search), Some(Event::Char('r')));
/// ```
#[must_use]
pub fn map_key(key: &KeyWithModifier, mode: InputMode) -> Option<Event> {
    if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::Navigate(Direction::Next));
    }
    if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::Navigate(Direction::Previous));
    }

    let searching = mode == InputMode::Search;

    if let BareKey::Char(c) = key.bare_key {
        let plain = key
            .key_modifiers
            .iter()
            .all(|m| *m == KeyModifier::Shift);
        if !plain {
            return None;
        }
        return Some(match c {
            _ if searching => Event::Char(c),
            'l' => Event::Navigate(Direction::Next),
            'h' => Event::Navigate(Direction::Previous),
            'j' => Event::ScrollDown,
            'k' => Event::ScrollUp,
            '/' => Event::SearchMode,
            'r' => Event::Reload,
            'q' => Event::CloseFocus,
            _ => Event::Char(c),
        });
    }

    Some(match key.bare_key {
        BareKey::Right | BareKey::PageDown => Event::Navigate(Direction::Next),
        BareKey::Left | BareKey::PageUp => Event::Navigate(Direction::Previous),
        BareKey::Down => Event::ScrollDown,
        BareKey::Up => Event::ScrollUp,
        BareKey::Esc if searching => Event::ExitSearch,
        BareKey::Esc => Event::Escape,
        BareKey::Enter if searching => Event::FocusResults,
        BareKey::Backspace => Event::Backspace,
        _ => return None,
    })
}
