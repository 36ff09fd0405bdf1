//! Camper Search - proximity, pricing and availability matching for camper rentals
//!
//! This library answers "which campers are available and affordable near a
//! search location" under three rule sets, one per API version.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{SearchEvaluator, is_within_bounding_box, calculate_price, is_available};
pub use crate::models::{Search, Camper, CalendarEntry, SearchMode, Dataset, SearchResponse, SearchResult, MatchResult};
