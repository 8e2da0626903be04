use crate::entities::Coordinate;
use crate::error::AppResult;

/// Mean Earth radius used for all distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km between two points on a spherical Earth,
/// via the haversine formula.
///
/// Inputs are not range-checked; see [`checked_great_circle_distance_km`].
pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Same as [`great_circle_distance_km`] but fails with
/// `InvalidCoordinate` when either point is out of range.
pub fn checked_great_circle_distance_km(a: Coordinate, b: Coordinate) -> AppResult<f64> {
    a.validate()?;
    b.validate()?;
    Ok(great_circle_distance_km(a, b))
}
