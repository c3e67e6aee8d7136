//! Pokémon card and card grid renderers.
//!
//! A card is a fixed-size framed box:
//!
//! ```text
//! ╭──────────────────────────╮
//! │ …dream-world/1.svg       │
//! │ bulbasaur                │
//! │ grass, poison            │
//! │ Height: 7                │
//! │ Weight: 69               │
//! │ Speed: 45                │
//! │ Experience: 64           │
//! │ Attack: 49               │
//! │ Abilities: overgrow      │
//! ╰──────────────────────────╯
//! ```
//!
//! Cards are placed row-major into [`GridLayout::columns`] columns and the
//! whole grid is centered horizontally.

use crate::ui::helpers::{
    char_width, ellipsize, ellipsize_start, position_cursor, render_highlighted_text,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardView, GridLayout, CARD_GAP, CARD_HEIGHT, CARD_WIDTH};

/// Text columns inside the frame, excluding the one-space side padding.
pub const CARD_INNER_WIDTH: usize = CARD_WIDTH - 4;

/// Plain text of every body line, each exactly [`CARD_INNER_WIDTH`] wide.
///
/// Order: image, name, types, then one line per attribute.
#[must_use]
pub fn card_body(card: &CardView) -> Vec<String> {
    let pad = |text: String| {
        let width = char_width(&text);
        format!("{text}{}", " ".repeat(CARD_INNER_WIDTH.saturating_sub(width)))
    };

    let mut lines = vec![
        pad(ellipsize_start(&card.image, CARD_INNER_WIDTH)),
        pad(ellipsize(&card.name, CARD_INNER_WIDTH)),
        pad(ellipsize(&card.types, CARD_INNER_WIDTH)),
    ];
    lines.extend(
        card.attributes
            .iter()
            .map(|(label, value)| pad(ellipsize(&format!("{label}: {value}"), CARD_INNER_WIDTH))),
    );
    lines
}

/// Prints one card with its top-left corner at (`row`, `col`).
pub fn render_card(row: usize, col: usize, card: &CardView, theme: &Theme) {
    let frame = Theme::fg(&theme.colors.card_border);
    let body = card_body(card);

    position_cursor(row, col);
    print!("{frame}╭{}╮{}", "─".repeat(CARD_WIDTH - 2), Theme::reset());

    for (offset, line) in body.iter().enumerate() {
        position_cursor(row + 1 + offset, col);
        print!("{frame}│ {}", Theme::reset());

        match offset {
            0 => print!("{}{}{line}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
            1 => {
                print!("{}", Theme::bold());
                render_highlighted_text(
                    line,
                    &card.highlight_ranges,
                    theme,
                    &theme.colors.card_title_fg,
                );
            }
            2 => print!("{}{line}", Theme::fg(&theme.colors.type_fg)),
            _ => {
                // Labels are ASCII and never truncated at this width.
                let split = line.find(':').map_or(0, |i| i + 1);
                let (label, value) = line.split_at(split);
                print!("{}{label}", Theme::fg(&theme.colors.card_label_fg));
                print!("{}{value}", Theme::fg(&theme.colors.text_normal));
            }
        }

        print!("{}{frame} │{}", Theme::reset(), Theme::reset());
    }

    position_cursor(row + CARD_HEIGHT - 1, col);
    print!("{frame}╰{}╯{}", "─".repeat(CARD_WIDTH - 2), Theme::reset());
}

/// Column (1-indexed) of the left edge of grid column `index`.
#[must_use]
pub fn card_column(grid: &GridLayout, index: usize, cols: usize) -> usize {
    let grid_width = grid.columns * CARD_WIDTH + grid.columns.saturating_sub(1) * CARD_GAP;
    let margin = cols.saturating_sub(grid_width) / 2;
    margin + 1 + index * (CARD_WIDTH + CARD_GAP)
}

/// Prints `cards` as a grid starting at `row`. Returns the row after the grid.
pub fn render_card_grid(
    row: usize,
    cards: &[CardView],
    grid: &GridLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    for (i, card) in cards.iter().enumerate() {
        let card_row = row + (i / grid.columns) * CARD_HEIGHT;
        render_card(card_row, card_column(grid, i % grid.columns, cols), card, theme);
    }
    row + grid.visible_rows * CARD_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> CardView {
        CardView {
            name: "bulbasaur".to_string(),
            highlight_ranges: vec![],
            image: "https://sprites.test/other/dream-world/1.svg".to_string(),
            types: "grass, poison".to_string(),
            attributes: vec![
                ("Height", "7".to_string()),
                ("Weight", "69".to_string()),
                ("Speed", "45".to_string()),
                ("Experience", "64".to_string()),
                ("Attack", "49".to_string()),
                ("Abilities", "overgrow".to_string()),
            ],
        }
    }

    #[test]
    fn body_fills_the_frame_exactly() {
        let body = card_body(&bulbasaur());

        // Frame top and bottom plus the body make up the card height.
        assert_eq!(body.len() + 2, CARD_HEIGHT);
        assert!(body.iter().all(|l| char_width(l) == CARD_INNER_WIDTH));
        assert_eq!(body[1].trim_end(), "bulbasaur");
        assert_eq!(body[2].trim_end(), "grass, poison");
        assert_eq!(body[5].trim_end(), "Speed: 45");
        assert_eq!(body[8].trim_end(), "Abilities: overgrow");
    }

    #[test]
    fn long_values_are_cut_to_the_card() {
        let mut card = bulbasaur();
        card.name = "fletchinder-the-very-long-name".to_string();
        card.attributes[5].1 = "shield-dust-and-much-more".to_string();

        let body = card_body(&card);
        assert!(body[0].starts_with('…'));
        assert!(body[0].trim_end().ends_with("1.svg"));
        assert!(body[1].ends_with('…'));
        assert!(body[8].starts_with("Abilities: "));
        assert!(body[8].ends_with('…'));
    }

    #[test]
    fn grid_is_centered() {
        let grid = GridLayout {
            columns: 2,
            visible_rows: 1,
        };
        // Grid is 57 wide; 61 columns leave a margin of 2.
        assert_eq!(card_column(&grid, 0, 61), 3);
        assert_eq!(card_column(&grid, 1, 61), 3 + CARD_WIDTH + CARD_GAP);
    }
}
