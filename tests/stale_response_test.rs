//! Test for the stale search response race
//!
//! A keystroke supersedes a pending timer immediately, but it cannot cancel
//! a search that is already in flight. Without a guard, a slow superseded
//! search that resolves late overwrites newer results with stale data.
//!
//! Guard: every keystroke and every dispatch bumps the controller's sequence
//! number, and `apply_response` drops any completion whose sequence is not
//! the latest. Arrival order therefore never matters.

use std::time::{Duration, Instant};

use docsearch::api::SearchResultItem;
use docsearch::controller::{Behavior, SearchController};

fn behavior() -> Behavior {
    Behavior {
        debounce_delay: Duration::from_millis(300),
        minimum_search_length: 3,
    }
}

fn items(titles: &[&str]) -> Vec<SearchResultItem> {
    titles
        .iter()
        .map(|title| SearchResultItem {
            title: title.to_string(),
            description: String::new(),
            href: format!("/{}", title),
        })
        .collect()
}

#[test]
fn test_superseded_search_cannot_overwrite_newer_results() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);
    let first = controller.poll(t0 + Duration::from_millis(300)).expect("first dispatch");

    controller.push_char('s', t0 + Duration::from_millis(350));
    let second = controller
        .poll(t0 + Duration::from_millis(650))
        .expect("second dispatch");

    // The newer search resolves first
    controller.apply_response(second.seq, Ok(items(&["cats result"])));
    assert_eq!(controller.results()[0].title, "cats result");

    // The stale one arrives late and must be discarded
    controller.apply_response(first.seq, Ok(items(&["stale cat result"])));
    assert_eq!(controller.results().len(), 1);
    assert_eq!(controller.results()[0].title, "cats result");
    assert!(!controller.is_loading());
}

#[test]
fn test_late_response_after_input_cleared_is_discarded() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);
    let ticket = controller.poll(t0 + Duration::from_millis(300)).expect("dispatch");

    // User wipes the input while the search is in flight
    controller.set_input(String::new(), t0 + Duration::from_millis(350));
    assert!(!controller.is_loading());
    assert!(!controller.is_open());

    controller.apply_response(ticket.seq, Ok(items(&["stale"])));

    assert!(controller.results().is_empty());
    assert!(!controller.is_open());
    assert!(!controller.is_loading());
}

#[test]
fn test_latest_response_applies_regardless_of_stale_arrivals() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);
    let first = controller.poll(t0 + Duration::from_millis(300)).expect("first dispatch");

    controller.push_char('s', t0 + Duration::from_millis(400));
    let second = controller
        .poll(t0 + Duration::from_millis(700))
        .expect("second dispatch");

    // Stale arrives first and is dropped; the controller keeps waiting
    controller.apply_response(first.seq, Ok(items(&["stale"])));
    assert!(controller.is_loading());
    assert!(controller.results().is_empty());

    controller.apply_response(second.seq, Ok(items(&["fresh"])));
    assert!(!controller.is_loading());
    assert_eq!(controller.results()[0].title, "fresh");
    assert!(controller.dropdown_visible());
}

#[test]
fn test_new_search_clears_previous_results_before_opening() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);
    let ticket = controller.poll(t0 + Duration::from_millis(300)).expect("dispatch");
    controller.apply_response(ticket.seq, Ok(items(&["old"])));
    assert!(controller.dropdown_visible());

    // The next keystroke must not flash the old results
    controller.push_char('s', t0 + Duration::from_millis(400));
    assert!(controller.results().is_empty());
    assert!(!controller.is_open());
}
