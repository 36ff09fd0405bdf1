use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A single search: an origin location and an optional stay window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Search {
    #[validate(length(min = 1))]
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `YYYY-MM-DD`, parsed only when pricing or availability reads it
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Search {
    /// Requested stay window as a pair, either side possibly absent
    pub fn date_range(&self) -> (Option<&str>, Option<&str>) {
        (self.start_date.as_deref(), self.end_date.as_deref())
    }
}

/// A camper in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Camper {
    #[validate(length(min = 1))]
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub price_per_day: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub weekly_discount: f64,
}

/// Booking calendar entry for a camper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CalendarEntry {
    #[validate(length(min = 1))]
    pub camper_id: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_true")]
    pub camper_is_available: bool,
}

fn default_true() -> bool { true }

/// Rule set applied to a search, one per API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// v1: bounding box only
    ProximityOnly,
    /// v2: bounding box, price, sort by price
    Priced,
    /// v3: v2 plus calendar availability
    PricedWithAvailability,
}

impl SearchMode {
    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            1 => Some(SearchMode::ProximityOnly),
            2 => Some(SearchMode::Priced),
            3 => Some(SearchMode::PricedWithAvailability),
            _ => None,
        }
    }

    pub fn version(&self) -> u8 {
        match self {
            SearchMode::ProximityOnly => 1,
            SearchMode::Priced => 2,
            SearchMode::PricedWithAvailability => 3,
        }
    }

    pub fn prices(&self) -> bool {
        !matches!(self, SearchMode::ProximityOnly)
    }

    pub fn checks_availability(&self) -> bool {
        matches!(self, SearchMode::PricedWithAvailability)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version())
    }
}

/// The three input collections for one evaluation
///
/// `calendars` is `None` when no calendar data exists, which is not an error.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub searches: Vec<Search>,
    pub campers: Vec<Camper>,
    pub calendars: Option<Vec<CalendarEntry>>,
}

impl Dataset {
    pub fn calendar_entries(&self) -> &[CalendarEntry] {
        self.calendars.as_deref().unwrap_or(&[])
    }
}
