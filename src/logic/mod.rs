//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - query: GROQ query construction with safe parameter binding
//! - highlight: case-insensitive match segmentation for result rendering

pub mod highlight;
pub mod query;
