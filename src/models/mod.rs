// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Search, Camper, CalendarEntry, SearchMode, Dataset};
pub use requests::InlineSearchRequest;
pub use responses::{MatchResult, SearchResult, SearchResponse, HealthResponse, ErrorResponse};
