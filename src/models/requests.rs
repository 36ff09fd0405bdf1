use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Search, Camper, CalendarEntry, Dataset};

/// Request carrying its own collections instead of the configured data source
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InlineSearchRequest {
    #[validate(nested)]
    pub searches: Vec<Search>,
    #[validate(nested)]
    pub campers: Vec<Camper>,
    #[serde(default)]
    #[validate(nested)]
    pub calendars: Option<Vec<CalendarEntry>>,
}

impl From<InlineSearchRequest> for Dataset {
    fn from(req: InlineSearchRequest) -> Self {
        Dataset {
            searches: req.searches,
            campers: req.campers,
            calendars: req.calendars,
        }
    }
}
