//! Pokémon domain model and PokeAPI decoding.
//!
//! The list endpoint yields a [`ListPage`] of [`ItemSummary`] records plus the
//! cursor URLs of the adjacent pages; each summary points at a detail endpoint
//! that yields a full [`ItemDetail`]. Wire shapes are private `Raw*` structs so
//! the rest of the crate only sees the flattened domain types.

use serde::Deserialize;

/// Stat name used for the card's "Speed" row.
pub const STAT_SPEED: &str = "speed";

/// Stat name used for the card's "Attack" row.
pub const STAT_ATTACK: &str = "attack";

/// One entry of a list page: enough to issue the detail request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub name: String,
    pub detail_url: String,
}

/// A decoded page of the paginated list endpoint.
///
/// `previous` and `next` are opaque cursor URLs; either is `None` at the
/// boundaries of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    pub items: Vec<ItemSummary>,
    pub previous: Option<String>,
    pub next: Option<String>,
    /// Size of the whole collection, when the endpoint reports it.
    pub total: Option<u64>,
}

/// A named base stat (`hp`, `attack`, `speed`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

/// A full Pokémon record as rendered on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    /// Dream World artwork, falling back to the default front sprite.
    pub image_url: Option<String>,
    /// Type names in slot order.
    pub types: Vec<String>,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    /// Stats in the order the API lists them.
    pub stats: Vec<Stat>,
    /// Ability names in slot order.
    pub abilities: Vec<String>,
}

#[derive(Deserialize)]
struct RawListPage {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    previous: Option<String>,
    #[serde(default)]
    next: Option<String>,
    results: Vec<RawSummary>,
}

#[derive(Deserialize)]
struct RawSummary {
    name: String,
    url: String,
}

#[derive(Deserialize)]
struct RawDetail {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: Option<RawSprites>,
    #[serde(default)]
    types: Vec<RawTypeSlot>,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    base_experience: Option<u32>,
    #[serde(default)]
    stats: Vec<RawStat>,
    #[serde(default)]
    abilities: Vec<RawAbilitySlot>,
}

#[derive(Deserialize)]
struct RawSprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: Option<RawOtherSprites>,
}

#[derive(Deserialize)]
struct RawOtherSprites {
    #[serde(default)]
    dream_world: Option<RawSpriteSet>,
}

#[derive(Deserialize)]
struct RawSpriteSet {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct RawNamed {
    name: String,
}

#[derive(Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    kind: RawNamed,
}

#[derive(Deserialize)]
struct RawStat {
    base_stat: u32,
    stat: RawNamed,
}

#[derive(Deserialize)]
struct RawAbilitySlot {
    ability: RawNamed,
}

/// Treats empty cursor strings like `null`.
fn cursor(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

impl ListPage {
    /// Decodes a list endpoint body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body is not a list page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokedex::domain::ListPage;
    ///
    /// let body = br#"{"previous":null,
    ///     "next":"https://pokeapi.co/api/v2/pokemon?offset=24&limit=24",
    ///     "results":[{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"}]}"#;
    /// let page = ListPage::from_json(body).unwrap();
    /// assert_eq!(page.items[0].name, "bulbasaur");
    /// assert!(page.previous.is_none());
    /// assert!(page.next.is_some());
    /// ```
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let raw: RawListPage = serde_json::from_slice(body)?;
        Ok(Self {
            items: raw
                .results
                .into_iter()
                .map(|r| ItemSummary {
                    name: r.name,
                    detail_url: r.url,
                })
                .collect(),
            previous: cursor(raw.previous),
            next: cursor(raw.next),
            total: raw.count,
        })
    }
}

impl ItemDetail {
    /// Decodes a detail endpoint body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `id` or `name` is missing or the
    /// body is not JSON.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let raw: RawDetail = serde_json::from_slice(body)?;

        let image_url = raw.sprites.and_then(|s| {
            s.other
                .and_then(|o| o.dream_world)
                .and_then(|d| d.front_default)
                .or(s.front_default)
        });

        Ok(Self {
            id: raw.id,
            name: raw.name,
            image_url,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            height: raw.height,
            weight: raw.weight,
            base_experience: raw.base_experience,
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base: s.base_stat,
                })
                .collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
        })
    }

    /// Looks up a base stat by name.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.base)
    }

    #[must_use]
    pub fn speed(&self) -> Option<u32> {
        self.stat(STAT_SPEED)
    }

    #[must_use]
    pub fn attack(&self) -> Option<u32> {
        self.stat(STAT_ATTACK)
    }

    /// Type names joined for display, e.g. `"grass, poison"`.
    #[must_use]
    pub fn type_line(&self) -> String {
        self.types.join(", ")
    }

    /// The first listed ability; cards show only this one.
    #[must_use]
    pub fn primary_ability(&self) -> Option<&str> {
        self.abilities.first().map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! JSON bodies shaped like PokeAPI responses, shared by tests across the crate.

    /// Builds a list page body whose results point at `https://pokeapi.test/pokemon/{name}/`.
    pub fn list_body(names: &[&str], previous: Option<&str>, next: Option<&str>) -> Vec<u8> {
        let results: Vec<serde_json::Value> = names
            .iter()
            .map(|n| {
                serde_json::json!({
                    "name": n,
                    "url": detail_url(n),
                })
            })
            .collect();
        serde_json::json!({
            "count": 1302,
            "previous": previous,
            "next": next,
            "results": results,
        })
        .to_string()
        .into_bytes()
    }

    pub fn detail_url(name: &str) -> String {
        format!("https://pokeapi.test/pokemon/{name}/")
    }

    /// Builds a detail body with the stats in PokeAPI's usual order.
    pub fn detail_body(id: u32, name: &str) -> Vec<u8> {
        serde_json::json!({
            "id": id,
            "name": name,
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "sprites": {
                "front_default": format!("https://sprites.test/{id}.png"),
                "other": {
                    "dream_world": {
                        "front_default": format!("https://sprites.test/dream-world/{id}.svg")
                    }
                }
            },
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "" } },
                { "slot": 2, "type": { "name": "poison", "url": "" } }
            ],
            "stats": [
                { "base_stat": 45, "effort": 0, "stat": { "name": "hp" } },
                { "base_stat": 49, "effort": 0, "stat": { "name": "attack" } },
                { "base_stat": 49, "effort": 0, "stat": { "name": "defense" } },
                { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack" } },
                { "base_stat": 65, "effort": 0, "stat": { "name": "special-defense" } },
                { "base_stat": 45, "effort": 0, "stat": { "name": "speed" } }
            ],
            "abilities": [
                { "ability": { "name": "overgrow" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "chlorophyll" }, "is_hidden": true, "slot": 3 }
            ]
        })
        .to_string()
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{detail_body, list_body};
    use super::*;

    #[test]
    fn list_page_keeps_result_order_and_cursors() {
        let body = list_body(
            &["bulbasaur", "ivysaur", "venusaur"],
            None,
            Some("https://pokeapi.test/pokemon?offset=3&limit=3"),
        );
        let page = ListPage::from_json(&body).unwrap();

        let names: Vec<&str> = page.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
        assert_eq!(page.items[1].detail_url, "https://pokeapi.test/pokemon/ivysaur/");
        assert_eq!(page.previous, None);
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.test/pokemon?offset=3&limit=3")
        );
        assert_eq!(page.total, Some(1302));
    }

    #[test]
    fn empty_cursor_strings_are_absent() {
        let body = br#"{"previous":"","next":"  ","results":[]}"#;
        let page = ListPage::from_json(body).unwrap();
        assert!(page.previous.is_none());
        assert!(page.next.is_none());
        assert!(page.total.is_none());
    }

    #[test]
    fn list_page_without_results_is_rejected() {
        assert!(ListPage::from_json(br#"{"detail":"Not found."}"#).is_err());
    }

    #[test]
    fn detail_decodes_card_fields() {
        let detail = ItemDetail::from_json(&detail_body(1, "bulbasaur")).unwrap();

        assert_eq!(detail.id, 1);
        assert_eq!(detail.name, "bulbasaur");
        assert_eq!(
            detail.image_url.as_deref(),
            Some("https://sprites.test/dream-world/1.svg")
        );
        assert_eq!(detail.type_line(), "grass, poison");
        assert_eq!(detail.height, 7);
        assert_eq!(detail.weight, 69);
        assert_eq!(detail.base_experience, Some(64));
        assert_eq!(detail.primary_ability(), Some("overgrow"));
    }

    #[test]
    fn stats_are_found_by_name_not_position() {
        let body = br#"{
            "id": 25, "name": "pikachu",
            "stats": [
                { "base_stat": 90, "stat": { "name": "speed" } },
                { "base_stat": 55, "stat": { "name": "attack" } }
            ]
        }"#;
        let detail = ItemDetail::from_json(body).unwrap();

        assert_eq!(detail.speed(), Some(90));
        assert_eq!(detail.attack(), Some(55));
        assert_eq!(detail.stat("hp"), None);
    }

    #[test]
    fn missing_dream_world_art_falls_back_to_front_sprite() {
        let body = br#"{
            "id": 1000, "name": "gholdengo", "base_experience": null,
            "sprites": { "front_default": "https://sprites.test/1000.png",
                         "other": { "dream_world": { "front_default": null } } }
        }"#;
        let detail = ItemDetail::from_json(body).unwrap();

        assert_eq!(detail.image_url.as_deref(), Some("https://sprites.test/1000.png"));
        assert_eq!(detail.base_experience, None);
        assert!(detail.types.is_empty());
        assert_eq!(detail.primary_ability(), None);
    }
}
