use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::utils::geo::great_circle_distance_km;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Unchecked constructor, out-of-range values are kept as given.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate, rejecting latitudes outside [-90, 90],
    /// longitudes outside [-180, 180] and non-finite values.
    pub fn checked(latitude: f64, longitude: f64) -> AppResult<Self> {
        let coordinate = Self::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> AppResult<()> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);

        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(AppError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

/// An ordered origin/destination pair. Origin and destination may be the
/// same place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub origin: Location,
    pub destination: Location,
}

impl Route {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        origin: Location,
        destination: Location,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin,
            destination,
        }
    }

    /// Great-circle distance between origin and destination in km.
    pub fn distance_km(&self) -> f64 {
        great_circle_distance_km(self.origin.coordinate, self.destination.coordinate)
    }
}
