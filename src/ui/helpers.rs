//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across components: cursor positioning,
//! width-aware truncation and search-match highlighting. Every width here is
//! counted in characters, never bytes, so names like "flabébé" line up.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `width` characters, marking the cut with a trailing `…`.
///
/// # Example
///
/// ```rust
/// use pokedex::ui::helpers::ellipsize;
///
/// assert_eq!(ellipsize("Abilities: chlorophyll", 12), "Abilities: …");
/// assert_eq!(ellipsize("mew", 12), "mew");
/// ```
#[must_use]
pub fn ellipsize(text: &str, width: usize) -> String {
    if char_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Cuts `text` to `width` characters from the front, keeping its tail.
///
/// Used for URLs, where the end identifies the resource.
#[must_use]
pub fn ellipsize_start(text: &str, width: usize) -> String {
    let len = char_width(text);
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{tail}")
}

/// Splits `text` into `(segment, highlighted)` runs for the given character
/// ranges. Ranges past the end of `text` are clipped.
#[must_use]
pub fn highlight_segments(text: &str, ranges: &[(usize, usize)]) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }
        if start > pos {
            segments.push((chars[pos..start].iter().collect(), false));
        }
        segments.push((chars[start..end].iter().collect(), true));
        pos = end;
    }

    if pos < chars.len() {
        segments.push((chars[pos..].iter().collect(), false));
    }
    segments
}

/// Prints `text` with the given ranges in the match highlight colors.
///
/// Plain runs use `base_fg`, which is restored after each highlight.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
) {
    print!("{}", Theme::fg(base_fg));
    for (segment, highlighted) in highlight_segments(text, ranges) {
        if highlighted {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{segment}");
            print!("{}", Theme::reset());
            print!("{}", Theme::fg(base_fg));
        } else {
            print!("{segment}");
        }
    }
}

/// Prints `text` centered in a `cols`-wide line starting at `row`.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = ellipsize(text, cols);
    let len = char_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_counts_characters() {
        assert_eq!(ellipsize("flabébé", 7), "flabébé");
        assert_eq!(ellipsize("flabébé", 5), "flab…");
        assert_eq!(ellipsize("anything", 0), "");
    }

    #[test]
    fn ellipsize_start_keeps_the_tail() {
        assert_eq!(
            ellipsize_start("https://sprites.test/dream-world/1.svg", 12),
            "…world/1.svg"
        );
        assert_eq!(ellipsize_start("1.svg", 12), "1.svg");
    }

    #[test]
    fn segments_alternate_plain_and_highlighted() {
        assert_eq!(
            highlight_segments("charmander", &[(0, 4)]),
            vec![
                ("char".to_string(), true),
                ("mander".to_string(), false)
            ]
        );
        assert_eq!(
            highlight_segments("bulbasaur", &[(4, 5), (6, 7)]),
            vec![
                ("bulb".to_string(), false),
                ("a".to_string(), true),
                ("s".to_string(), false),
                ("a".to_string(), true),
                ("ur".to_string(), false)
            ]
        );
    }

    #[test]
    fn segments_clip_ranges_to_truncated_text() {
        assert_eq!(
            highlight_segments("char…", &[(3, 9)]),
            vec![("cha".to_string(), false), ("r…".to_string(), true)]
        );
        assert_eq!(
            highlight_segments("mew", &[(5, 8)]),
            vec![("mew".to_string(), false)]
        );
    }
}
