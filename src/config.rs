use serde::Deserialize;

/// Debounce delay applied after the last keystroke before a search fires
pub const DEFAULT_SEARCH_DEBOUNCE_DELAY_MS: u64 = 300;
/// Minimum input length before a search is considered at all
pub const DEFAULT_MINIMUM_SEARCH_LENGTH: usize = 3;
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_NO_RESULTS_TEXT: &str = "No results found";
pub const DEFAULT_SEARCH_ICON: &str = "/";
pub const DEFAULT_LOADING_ICON: &str = "…";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchSpecConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection details for the content API query endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Bearer token for private datasets; public datasets need none
    #[serde(default)]
    pub token: Option<String>,
}

/// Which documents to search and how to shape each result
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSpecConfig {
    pub document_type: String,
    pub searchable_fields: Vec<String>,
    /// GROQ projection appended verbatim to the query, e.g.
    /// `{ "title": title, "description": description, "href": "/posts/" + slug.current }`
    pub result_fragment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_debounce_delay_ms")]
    pub search_debounce_delay_ms: u64,
    #[serde(default = "default_minimum_search_length")]
    pub minimum_search_length: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            search_debounce_delay_ms: default_debounce_delay_ms(),
            minimum_search_length: default_minimum_search_length(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_no_results_text")]
    pub no_results_text: String,
    #[serde(default = "default_search_icon")]
    pub search_icon: String,
    #[serde(default = "default_loading_icon")]
    pub loading_icon: String,
    #[serde(default = "default_highlight_enabled")]
    pub highlight_enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            no_results_text: default_no_results_text(),
            search_icon: default_search_icon(),
            loading_icon: default_loading_icon(),
            highlight_enabled: default_highlight_enabled(),
        }
    }
}

fn default_api_version() -> String {
    "v2021-10-21".to_string()
}

fn default_debounce_delay_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_DELAY_MS
}

fn default_minimum_search_length() -> usize {
    DEFAULT_MINIMUM_SEARCH_LENGTH
}

fn default_placeholder() -> String {
    DEFAULT_SEARCH_PLACEHOLDER.to_string()
}

fn default_no_results_text() -> String {
    DEFAULT_NO_RESULTS_TEXT.to_string()
}

fn default_search_icon() -> String {
    DEFAULT_SEARCH_ICON.to_string()
}

fn default_loading_icon() -> String {
    DEFAULT_LOADING_ICON.to_string()
}

fn default_highlight_enabled() -> bool {
    true
}
