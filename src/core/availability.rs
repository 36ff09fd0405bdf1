use crate::core::dates::{parse_date, DateError};
use crate::models::CalendarEntry;

/// Check if a camper is free for the requested date range
///
/// Only entries for `camper_id` marked unavailable can block. An undated
/// (or half-dated) request is never blocked. Dates are parsed only for
/// entries that get this far. An entry blocks when either start date falls
/// inside the other range:
///
/// `req_start <= entry_start <= req_end` or `entry_start <= req_start <= entry_end`
///
/// This anchors on start-date containment only, so it is not a full
/// interval intersection test.
pub fn is_available(
    camper_id: &str,
    date_range: (Option<&str>, Option<&str>),
    calendars: &[CalendarEntry],
) -> Result<bool, DateError> {
    for entry in calendars {
        if entry.camper_id != camper_id || entry.camper_is_available {
            continue;
        }

        let (Some(req_start), Some(req_end)) = date_range else {
            continue;
        };

        let req_start = parse_date(req_start)?;
        let req_end = parse_date(req_end)?;
        let entry_start = parse_date(&entry.start_date)?;
        let entry_end = parse_date(&entry.end_date)?;

        if (req_start <= entry_start && entry_start <= req_end)
            || (entry_start <= req_start && req_start <= entry_end)
        {
            return Ok(false);
        }
    }

    Ok(true)
}
