//! Case-insensitive name filtering and match highlighting.
//!
//! Both functions compare characters after folding each one to its first
//! lowercase form, so a match found by [`filter_by_name`] always has ranges
//! from [`match_ranges`] and the ranges line up with the unfolded text's
//! character positions.

use crate::domain::ItemDetail;

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn folded(text: &str) -> Vec<char> {
    text.chars().map(fold).collect()
}

fn contains(haystack: &[char], needle: &[char]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Keeps the items whose name contains `query`, ignoring case.
///
/// Order is preserved and an empty query keeps everything.
///
/// # Examples
///
/// ```
/// use pokedex::app::filter_by_name;
/// use pokedex::domain::ItemDetail;
///
/// let items: Vec<ItemDetail> = ["bulbasaur", "charmander", "squirtle"]
///     .iter()
///     .enumerate()
///     .map(|(i, n)| {
///         let body = format!(r#"{{"id": {}, "name": "{n}"}}"#, i + 1);
///         ItemDetail::from_json(body.as_bytes()).unwrap()
///     })
///     .collect();
///
/// let hits = filter_by_name(&items, "CHAR");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "charmander");
/// ```
#[must_use]
pub fn filter_by_name<'a>(items: &'a [ItemDetail], query: &str) -> Vec<&'a ItemDetail> {
    let needle = folded(query);
    items
        .iter()
        .filter(|item| contains(&folded(&item.name), &needle))
        .collect()
}

/// Character ranges `(start, end)` of every non-overlapping occurrence of
/// `query` in `text`, ignoring case. End is exclusive.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle = folded(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack = folded(text);
    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            ranges.push((pos, pos + needle.len()));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}
