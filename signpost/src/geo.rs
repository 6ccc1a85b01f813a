//! # Geo Distance
//!
//! Great-circle distance between two coordinates via the haversine formula.
//!
//! Callers pick the unit by picking the Earth-radius constant; a single query
//! must never mix the two.

use crate::{error::Error, spot::Coordinates};

/// Earth radius for distances in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius for distances in miles.
pub const EARTH_RADIUS_MI: f64 = 3959.0;

/// Checks that a latitude/longitude pair is finite and within
/// [-90, 90] / [-180, 180].
pub fn validate(latitude: f64, longitude: f64) -> Result<(), Error> {
    if !latitude.is_finite()
        || !longitude.is_finite()
        || latitude.abs() > 90.0
        || longitude.abs() > 180.0
    {
        return Err(Error::InvalidCoordinate {
            latitude,
            longitude,
        });
    }

    Ok(())
}

/// Great-circle distance between two points, in the unit implied by
/// `earth_radius`. Fails with [`Error::InvalidCoordinate`] if either point is
/// out of range.
pub fn haversine(a: &Coordinates, b: &Coordinates, earth_radius: f64) -> Result<f64, Error> {
    validate(a.latitude, a.longitude)?;
    validate(b.latitude, b.longitude)?;

    Ok(haversine_unchecked(a, b, earth_radius))
}

/// Haversine without range checks, for callers that already validated their
/// inputs (store records are validated on ingestion).
pub(crate) fn haversine_unchecked(a: &Coordinates, b: &Coordinates, earth_radius: f64) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * earth_radius * h.sqrt().atan2((1.0 - h).sqrt())
}
