use chrono::NaiveDate;
use thiserror::Error;

/// Calendar date format used by searches and calendar entries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date string that does not match `DATE_FORMAT`
#[derive(Debug, Error)]
#[error("Invalid date {value:?}: {source}")]
pub struct DateError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parse a `YYYY-MM-DD` date
///
/// Dates stay as strings on the records and are only parsed where a rule
/// actually reads them, so a bad date in data nobody looks at is harmless.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DateError {
        value: value.to_string(),
        source,
    })
}
