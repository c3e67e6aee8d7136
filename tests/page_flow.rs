use std::collections::BTreeMap;

use pokedex::fetch::FetchRequest;
use pokedex::{handle_event, Action, AppState, Direction, Event, LoadPhase, Theme};

const LIST_URL: &str = "https://pokeapi.test/pokemon?limit=4";
const PAGE_2: &str = "https://pokeapi.test/pokemon?offset=4&limit=4";
const PAGE_3: &str = "https://pokeapi.test/pokemon?offset=8&limit=4";

fn detail_url(name: &str) -> String {
    format!("https://pokeapi.test/pokemon/{name}/")
}

fn list_body(names: &[&str], previous: Option<&str>, next: Option<&str>) -> Vec<u8> {
    let results: Vec<serde_json::Value> = names
        .iter()
        .map(|n| serde_json::json!({ "name": n, "url": detail_url(n) }))
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

fn detail_body(id: u32, name: &str) -> Vec<u8> {
    serde_json::json!({
        "id": id,
        "name": name,
        "height": 6,
        "weight": 85,
        "base_experience": 62,
        "sprites": { "front_default": format!("https://sprites.test/{id}.png") },
        "types": [{ "slot": 1, "type": { "name": "fire" } }],
        "stats": [
            { "base_stat": 52, "stat": { "name": "attack" } },
            { "base_stat": 65, "stat": { "name": "speed" } }
        ],
        "abilities": [{ "ability": { "name": "blaze" }, "is_hidden": false }]
    })
    .to_string()
    .into_bytes()
}

fn fetches(actions: &[Action]) -> Vec<FetchRequest> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Fetch(r) => Some(r.clone()),
            _ => None,
        })
        .collect()
}

fn respond(
    state: &mut AppState,
    request: &FetchRequest,
    status: u16,
    body: Vec<u8>,
) -> Vec<Action> {
    let event = Event::FetchCompleted {
        status,
        body,
        context: request.context(),
    };
    handle_event(state, &event).unwrap().1
}

fn name_of(request: &FetchRequest) -> &str {
    request
        .url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap()
}

fn names(state: &AppState) -> Vec<&str> {
    state.items.iter().map(|d| d.name.as_str()).collect()
}

/// Answers the list request and then every detail request in `order`.
fn load_page(
    state: &mut AppState,
    list: &FetchRequest,
    pokemon: &[(u32, &str)],
    previous: Option<&str>,
    next: Option<&str>,
    order: &[usize],
) {
    let list_names: Vec<&str> = pokemon.iter().map(|(_, n)| *n).collect();
    let details = fetches(&respond(state, list, 200, list_body(&list_names, previous, next)));
    assert_eq!(details.len(), pokemon.len());
    for &i in order {
        let (id, name) = pokemon[i];
        let request = details
            .iter()
            .find(|r| name_of(r) == name)
            .unwrap();
        respond(state, request, 200, detail_body(id, name));
    }
}

fn mounted() -> (AppState, FetchRequest) {
    let mut state = AppState::new(Theme::default(), LIST_URL);
    let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
    assert!(actions.contains(&Action::ScheduleTick));
    let list = fetches(&actions).remove(0);
    assert_eq!(list.url, LIST_URL);
    (state, list)
}

const FIRE: [(u32, &str); 4] = [
    (4, "charmander"),
    (5, "charmeleon"),
    (6, "charizard"),
    (7, "squirtle"),
];

#[test]
fn details_arriving_out_of_order_commit_in_list_order() {
    let (mut state, list) = mounted();
    load_page(&mut state, &list, &FIRE, None, Some(PAGE_2), &[2, 0, 3, 1]);

    assert_eq!(state.phase(), LoadPhase::Content);
    assert_eq!(names(&state), vec!["charmander", "charmeleon", "charizard", "squirtle"]);
    assert_eq!(state.cursors.next.as_deref(), Some(PAGE_2));
    assert!(state.cursors.previous.is_none());
    assert_eq!(state.items[0].speed(), Some(65));
}

#[test]
fn nothing_is_shown_until_every_detail_arrives() {
    let (mut state, list) = mounted();
    let details = fetches(&respond(
        &mut state,
        &list,
        200,
        list_body(&["charmander", "charmeleon"], None, None),
    ));
    respond(&mut state, &details[1], 200, detail_body(5, "charmeleon"));

    assert_eq!(state.phase(), LoadPhase::InitialLoading);
    assert!(state.items.is_empty());
}

#[test]
fn one_failed_detail_fails_the_page() {
    let (mut state, list) = mounted();
    let details = fetches(&respond(
        &mut state,
        &list,
        200,
        list_body(&["charmander", "charmeleon", "charizard"], None, Some(PAGE_2)),
    ));
    respond(&mut state, &details[0], 200, detail_body(4, "charmander"));
    respond(&mut state, &details[1], 500, b"oops".to_vec());

    assert_eq!(state.phase(), LoadPhase::Error);
    assert_eq!(state.error_message.as_deref(), Some("Failed to fetch data"));
    assert!(state.items.is_empty());

    // The late sibling belongs to a failed load and must not revive it.
    respond(&mut state, &details[2], 200, detail_body(6, "charizard"));
    assert!(state.items.is_empty());
    assert_eq!(state.phase(), LoadPhase::Error);
}

#[test]
fn navigation_replaces_items_and_both_cursors() {
    let (mut state, list) = mounted();
    load_page(&mut state, &list, &FIRE, None, Some(PAGE_2), &[0, 1, 2, 3]);

    let (render, actions) = handle_event(&mut state, &Event::Navigate(Direction::Next)).unwrap();
    assert!(render);
    assert_eq!(state.phase(), LoadPhase::NavigationLoading);
    assert_eq!(names(&state).len(), 4);
    let page_2 = fetches(&actions).remove(0);
    assert_eq!(page_2.url, PAGE_2);

    let water = [(8, "wartortle"), (9, "blastoise")];
    load_page(&mut state, &page_2, &water, Some(LIST_URL), Some(PAGE_3), &[1, 0]);

    assert_eq!(state.phase(), LoadPhase::Content);
    assert_eq!(names(&state), vec!["wartortle", "blastoise"]);
    assert_eq!(state.cursors.previous.as_deref(), Some(LIST_URL));
    assert_eq!(state.cursors.next.as_deref(), Some(PAGE_3));
}

#[test]
fn navigation_without_a_cursor_does_nothing() {
    let (mut state, list) = mounted();
    load_page(&mut state, &list, &FIRE, None, None, &[0, 1, 2, 3]);

    let (render, actions) =
        handle_event(&mut state, &Event::Navigate(Direction::Previous)).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.phase(), LoadPhase::Content);
}

#[test]
fn superseded_load_is_discarded() {
    let (mut state, list) = mounted();
    load_page(&mut state, &list, &FIRE, Some(LIST_URL), Some(PAGE_2), &[0, 1, 2, 3]);

    let (_, next) = handle_event(&mut state, &Event::Navigate(Direction::Next)).unwrap();
    let slow = fetches(&next).remove(0);
    let (_, prev) = handle_event(&mut state, &Event::Navigate(Direction::Previous)).unwrap();
    let fast = fetches(&prev).remove(0);

    // The slow page answers after being superseded.
    let late = respond(&mut state, &slow, 200, list_body(&["pidgey"], None, None));
    assert!(late.is_empty());

    load_page(&mut state, &fast, &FIRE[..2], None, Some(PAGE_2), &[1, 0]);
    assert_eq!(names(&state), vec!["charmander", "charmeleon"]);
    assert!(state.cursors.previous.is_none());
}

#[test]
fn search_narrows_the_page_without_fetching() {
    let (mut state, list) = mounted();
    load_page(&mut state, &list, &FIRE, None, Some(PAGE_2), &[3, 2, 1, 0]);

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "char".chars() {
        let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
        assert!(actions.is_empty());
    }

    let visible: Vec<&str> = state.visible_items().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(visible, vec!["charmander", "charmeleon", "charizard"]);

    handle_event(&mut state, &Event::ExitSearch).unwrap();
    assert_eq!(state.visible_items().len(), 4);
}

#[test]
fn unknown_web_results_are_ignored() {
    let (mut state, _list) = mounted();
    let event = Event::FetchCompleted {
        status: 200,
        body: Vec::new(),
        context: BTreeMap::new(),
    };
    let (render, actions) = handle_event(&mut state, &event).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.phase(), LoadPhase::InitialLoading);
}
