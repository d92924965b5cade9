//! External Services
//!
//! This module contains services that interact with external systems:
//! - search: background search execution over an injected backend

pub mod search;

// Re-export commonly used types for convenience
pub use search::{SearchBackend, SearchRequest, SearchResponse};
