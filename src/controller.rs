//! Search Widget Controller
//!
//! Owns the widget state machine: input text, debounce deadline, dropdown
//! open/loading flags, results, and the sequence number used to discard
//! stale search responses. Everything here is synchronous; the frame loop
//! drives timing by calling `poll` with the current instant and feeds
//! completed searches back through `apply_response`.

use std::time::{Duration, Instant};

use crate::api::SearchResultItem;
use crate::config::BehaviorConfig;
use crate::utils::log_debug;

/// Resolved behavior settings, fixed at construction
#[derive(Debug, Clone, Copy)]
pub struct Behavior {
    pub debounce_delay: Duration,
    pub minimum_search_length: usize,
}

impl From<&BehaviorConfig> for Behavior {
    fn from(config: &BehaviorConfig) -> Self {
        Behavior {
            debounce_delay: Duration::from_millis(config.search_debounce_delay_ms),
            minimum_search_length: config.minimum_search_length,
        }
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Behavior::from(&BehaviorConfig::default())
    }
}

/// A dispatched search: the term to run and the sequence number that decides
/// whether its completion is still current when it comes back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub term: String,
}

#[derive(Debug)]
pub struct SearchController {
    behavior: Behavior,
    input: String,
    results: Vec<SearchResultItem>,
    open: bool,
    loading: bool,
    selected: Option<usize>,
    /// Pending debounce deadline; at most one is armed at a time
    deadline: Option<Instant>,
    /// Bumped on every keystroke and every dispatch, so any response carrying
    /// an older value is known to be superseded
    latest_seq: u64,
}

impl SearchController {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            input: String::new(),
            results: Vec::new(),
            open: false,
            loading: false,
            selected: None,
            deadline: None,
            latest_seq: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Loading suppresses the dropdown even while the open flag is set
    pub fn dropdown_visible(&self) -> bool {
        self.open && !self.loading
    }

    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut text = self.input.clone();
        text.push(c);
        self.set_input(text, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        let mut text = self.input.clone();
        text.pop();
        self.set_input(text, now);
    }

    /// Apply a text change: supersede any pending timer and in-flight search,
    /// clear previous results, close the dropdown, then re-arm the debounce
    /// timer iff the new text is long enough to search
    pub fn set_input(&mut self, text: String, now: Instant) {
        self.input = text;
        self.results.clear();
        self.selected = None;
        self.open = false;
        self.loading = false;
        self.latest_seq += 1;

        if self.input.chars().count() >= self.behavior.minimum_search_length {
            self.deadline = Some(now + self.behavior.debounce_delay);
        } else {
            self.deadline = None;
        }
    }

    /// Check the debounce deadline; when it has elapsed, arm a search
    ///
    /// Marks the controller loading and optimistically open (the dropdown
    /// stays hidden while loading), and returns the ticket the caller must
    /// dispatch to the search service. Returns `None` while the deadline has
    /// not elapsed or no timer is armed.
    pub fn poll(&mut self, now: Instant) -> Option<SearchTicket> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        self.deadline = None;
        self.latest_seq += 1;
        self.loading = true;
        self.open = true;

        Some(SearchTicket {
            seq: self.latest_seq,
            term: self.input.clone(),
        })
    }

    /// Accept a completed search
    ///
    /// Responses carrying a sequence number older than the latest keystroke
    /// or dispatch are dropped, so a slow superseded search can never
    /// overwrite newer results. Failures become an empty result set; loading
    /// is never left stuck on an error.
    pub fn apply_response(
        &mut self,
        seq: u64,
        results: anyhow::Result<Vec<SearchResultItem>>,
    ) {
        if seq != self.latest_seq {
            log_debug(&format!(
                "DEBUG [CONTROLLER]: Discarding stale search response seq={} latest={}",
                seq, self.latest_seq
            ));
            return;
        }

        self.loading = false;
        self.selected = None;
        self.results = match results {
            Ok(items) => items,
            Err(e) => {
                log_debug(&format!("DEBUG [CONTROLLER]: Search failed: {}", e));
                Vec::new()
            }
        };
    }

    /// Reopen the dropdown (input click or key activity); only meaningful
    /// when there are results to show
    pub fn reopen(&mut self) {
        if !self.results.is_empty() {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pointer-down routing: inside the widget reopens, anywhere else
    /// force-closes regardless of state
    pub fn pointer_down(&mut self, inside_widget: bool) {
        if inside_widget {
            self.reopen();
        } else {
            self.open = false;
        }
    }

    pub fn select_next(&mut self) {
        if !self.dropdown_visible() || self.results.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.results.len() => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if !self.dropdown_visible() || self.results.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.results.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn select(&mut self, index: usize) {
        if self.dropdown_visible() && index < self.results.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_href(&self) -> Option<&str> {
        let index = self.selected?;
        self.results.get(index).map(|item| item.href.as_str())
    }
}
