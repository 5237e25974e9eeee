//! Geographic waypoint type and its wire encoding.
//!
//! The daemon identifies waypoints through repeated `loc` query
//! parameters. Encoding lives here so the client module only deals in
//! ready-made fragments.

use serde::{Deserialize, Serialize};

/// A single waypoint as a latitude/longitude pair in decimal degrees.
///
/// Coordinates are not range-checked; values outside ±90/±180 are sent
/// to the daemon as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Render the `loc` query fragment for this point, latitude first.
    ///
    /// Integral coordinates keep a trailing `.0`, so `35.0` goes on the
    /// wire as `35.0` rather than `35`.
    pub fn query_fragment(&self) -> String {
        format!("loc={:?},{:?}", self.latitude, self.longitude)
    }
}
