//! Embeddable TUI Search Widget
//!
//! A debounced search-input widget for ratatui applications, backed by a
//! GROQ query builder for document-oriented content APIs. Exposes modules
//! for testing and for embedding the widget in other terminal UIs.

pub mod api;
pub mod config;
pub mod controller;
pub mod logic;
pub mod services;
pub mod ui;
pub mod utils;
