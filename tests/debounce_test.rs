//! Debounce behavior of the search controller
//!
//! Keystrokes re-arm a single pending timer; a search is dispatched only
//! once the input has been stable for the configured delay and is at least
//! the minimum length. Timing is driven through explicit instants, exactly
//! the way the frame loop drives `poll`.

use std::time::{Duration, Instant};

use docsearch::controller::{Behavior, SearchController};

fn behavior() -> Behavior {
    Behavior {
        debounce_delay: Duration::from_millis(300),
        minimum_search_length: 3,
    }
}

#[test]
fn test_below_threshold_never_searches() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.push_char('c', t0);
    controller.push_char('a', t0);

    // Even an arbitrarily late poll finds no armed timer
    assert_eq!(controller.poll(t0 + Duration::from_secs(60)), None);
    assert!(!controller.is_loading());
    assert!(!controller.is_open());
}

#[test]
fn test_search_fires_only_after_quiet_period() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);

    assert_eq!(controller.poll(t0 + Duration::from_millis(299)), None);

    let ticket = controller
        .poll(t0 + Duration::from_millis(300))
        .expect("deadline elapsed");
    assert_eq!(ticket.term, "cat");

    // The timer is consumed; no second dispatch
    assert_eq!(controller.poll(t0 + Duration::from_secs(10)), None);
}

#[test]
fn test_rapid_keystrokes_invoke_exactly_one_search_with_final_text() {
    // Min length 3, 300ms delay, user types "ca" then "cat" within the window
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.push_char('c', t0);
    controller.push_char('a', t0);
    controller.push_char('t', t0 + Duration::from_millis(100));

    // The "cat" keystroke re-armed the timer; nothing fires at the original
    // deadline
    assert_eq!(controller.poll(t0 + Duration::from_millis(300)), None);

    let ticket = controller
        .poll(t0 + Duration::from_millis(400))
        .expect("final keystroke's deadline elapsed");
    assert_eq!(ticket.term, "cat");

    assert_eq!(controller.poll(t0 + Duration::from_secs(10)), None);
}

#[test]
fn test_keystroke_cancels_pending_timer() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);
    controller.push_char('s', t0 + Duration::from_millis(299));

    // The old deadline passed without firing
    assert_eq!(controller.poll(t0 + Duration::from_millis(300)), None);

    let ticket = controller
        .poll(t0 + Duration::from_millis(599))
        .expect("re-armed deadline elapsed");
    assert_eq!(ticket.term, "cats");
}

#[test]
fn test_shrinking_below_threshold_disarms_timer() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);
    controller.backspace(t0 + Duration::from_millis(100));

    assert_eq!(controller.input(), "ca");
    assert_eq!(controller.poll(t0 + Duration::from_secs(60)), None);
}

#[test]
fn test_dispatch_sets_loading_and_opens_optimistically() {
    let mut controller = SearchController::new(behavior());
    let t0 = Instant::now();

    controller.set_input("cat".to_string(), t0);
    controller.poll(t0 + Duration::from_millis(300)).expect("dispatch");

    assert!(controller.is_loading());
    assert!(controller.is_open());
    // Loading suppresses the dropdown even though the open flag is set
    assert!(!controller.dropdown_visible());
}
