use crate::models::{SearchMode, SearchResponse, SearchResult};

/// Collect per-search results into the response, preserving their order
///
/// Emits an info summary and, at debug level, the full serialized response.
pub fn assemble_response<I>(mode: SearchMode, results: I) -> SearchResponse
where
    I: IntoIterator<Item = SearchResult>,
{
    let response = SearchResponse {
        results: results.into_iter().collect(),
    };

    let total_matches: usize = response
        .results
        .iter()
        .map(|r| r.search_results.len())
        .sum();

    tracing::info!(
        "Assembled {} response: {} searches, {} matches",
        mode,
        response.results.len(),
        total_matches
    );

    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(&response) {
            Ok(json) => tracing::debug!(mode = %mode, response = %json, "search response"),
            Err(e) => tracing::warn!("Failed to serialize response for logging: {}", e),
        }
    }

    response
}
