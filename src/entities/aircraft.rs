use serde::{Deserialize, Serialize};

/// Static performance data for one aircraft type. Figures are approximate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub id: String,
    pub name: String,
    pub cruise_speed_kmh: f64,
    pub range_km: u32,
    pub seats: u32,
    pub fuel_burn_lph: u32,
}

impl AircraftProfile {
    pub fn new(
        id: &str,
        name: &str,
        cruise_speed_kmh: f64,
        range_km: u32,
        seats: u32,
        fuel_burn_lph: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cruise_speed_kmh,
            range_km,
            seats,
            fuel_burn_lph,
        }
    }
}
