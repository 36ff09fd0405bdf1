use crate::models::{Camper, Search};

/// Default half-width of the search box, in coordinate degrees
pub const DEFAULT_RADIUS: f64 = 0.1;

/// Check if a camper lies inside the search's bounding box
///
/// The box is an axis-aligned coordinate-delta region, not a true distance.
/// Each axis is tested independently and the boundary is excluded.
///
/// # Arguments
/// * `search` - Search providing the box center
/// * `camper` - Camper whose location is tested
/// * `radius` - Half-width of the box in degrees
#[inline]
pub fn is_within_bounding_box(search: &Search, camper: &Camper, radius: f64) -> bool {
    within_delta(search.latitude, search.longitude, camper.latitude, camper.longitude, radius)
}

#[inline]
fn within_delta(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> bool {
    (lat1 - lat2).abs() < radius && (lon1 - lon2).abs() < radius
}
