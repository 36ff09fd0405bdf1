use crate::models::{Camper, CalendarEntry, Dataset, MatchResult, Search, SearchMode, SearchResponse, SearchResult};
use crate::core::{
    assembler::assemble_response,
    availability::is_available,
    dates::DateError,
    pricing::{calculate_price, DEFAULT_MIN_DISCOUNT_DAYS},
    proximity::{is_within_bounding_box, DEFAULT_RADIUS},
};

/// Search orchestrator - runs the per-search matching pipeline
///
/// # Pipeline Stages
/// 1. Calendar availability (v3 only; unavailable campers are skipped)
/// 2. Bounding box filter
/// 3. Stay pricing (v2 and v3)
/// 4. Stable ascending sort by price (v2 and v3)
#[derive(Debug, Clone, Copy)]
pub struct SearchEvaluator {
    radius: f64,
    min_discount_days: i64,
}

impl SearchEvaluator {
    pub fn new(radius: f64, min_discount_days: i64) -> Self {
        Self { radius, min_discount_days }
    }

    /// Evaluate every search in the dataset and assemble the response
    ///
    /// Results follow the input order of `dataset.searches`. The first
    /// malformed date a rule reads fails the whole evaluation.
    pub fn evaluate(&self, mode: SearchMode, dataset: &Dataset) -> Result<SearchResponse, DateError> {
        let calendars = dataset.calendar_entries();

        let results = dataset
            .searches
            .iter()
            .map(|search| self.evaluate_search(mode, search, &dataset.campers, calendars))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(assemble_response(mode, results))
    }

    /// Match the camper catalog against a single search
    pub fn evaluate_search(
        &self,
        mode: SearchMode,
        search: &Search,
        campers: &[Camper],
        calendars: &[CalendarEntry],
    ) -> Result<SearchResult, DateError> {
        let (start, end) = search.date_range();
        let mut matches = Vec::new();

        for camper in campers {
            if mode.checks_availability() && !is_available(&camper.id, (start, end), calendars)? {
                continue;
            }

            if !is_within_bounding_box(search, camper, self.radius) {
                continue;
            }

            let price = if mode.prices() {
                Some(calculate_price(camper, start, end, self.min_discount_days)?)
            } else {
                None
            };

            matches.push(MatchResult {
                camper_id: camper.id.clone(),
                price,
            });
        }

        if mode.prices() {
            // sort_by is stable, so equal prices keep encounter order
            matches.sort_by(|a, b| a.price.unwrap_or(0.0).total_cmp(&b.price.unwrap_or(0.0)));
        }

        tracing::trace!(
            "Search {} matched {} of {} campers ({})",
            search.id,
            matches.len(),
            campers.len(),
            mode
        );

        Ok(SearchResult {
            search_id: search.id.clone(),
            search_results: matches,
        })
    }
}

impl Default for SearchEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS, DEFAULT_MIN_DISCOUNT_DAYS)
    }
}
