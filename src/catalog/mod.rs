//! Process-wide reference tables: aircraft, route presets and airlines.
//!
//! The tables are built once on first access and never mutated.

use std::sync::LazyLock;

use crate::entities::{AircraftProfile, Airline, Location, Route};
use crate::error::{AppError, AppResult};

pub const DEFAULT_AIRCRAFT_ID: &str = "boeing-777x";
pub const DEFAULT_ROUTE_ID: &str = "jakarta-bali";
pub const DEFAULT_AIRLINE_ID: &str = "ga";

static AIRCRAFT: LazyLock<Vec<AircraftProfile>> = LazyLock::new(|| {
    vec![
        AircraftProfile::new("boeing-777x", "Boeing 777X", 905.0, 13_650, 426, 7_200),
        AircraftProfile::new("airbus-a380", "Airbus A380", 945.0, 15_200, 555, 11_700),
        AircraftProfile::new("airbus-a350", "Airbus A350", 903.0, 15_000, 410, 6_200),
    ]
});

static ROUTES: LazyLock<Vec<Route>> = LazyLock::new(|| {
    vec![
        Route::new(
            "jakarta-bali",
            "Jakarta → Bali",
            Location::new("CGK • Jakarta", -6.1256, 106.6559),
            Location::new("DPS • Bali", -8.7482, 115.1675),
        ),
        Route::new(
            "london-dubai",
            "London → Dubai",
            Location::new("LHR • London", 51.4700, -0.4543),
            Location::new("DXB • Dubai", 25.2532, 55.3657),
        ),
    ]
});

static AIRLINES: LazyLock<Vec<Airline>> = LazyLock::new(|| {
    vec![
        airline(
            "ga",
            "Garuda Indonesia",
            "https://upload.wikimedia.org/wikipedia/commons/5/5c/Garuda_Indonesia_logo_2010.svg",
            "Emerald Sky",
            "4 Cabin, 2 Cockpit",
            &["Wi-Fi", "IFE", "Premium Meal"],
        ),
        airline(
            "sq",
            "Singapore Airlines",
            "https://upload.wikimedia.org/wikipedia/commons/0/0c/Singapore_Airlines_Logo.svg",
            "Golden Ribbon",
            "5 Cabin, 2 Cockpit",
            &["Wi-Fi", "IFE", "Book the Cook"],
        ),
        airline(
            "ek",
            "Emirates",
            "https://upload.wikimedia.org/wikipedia/commons/c/cd/Emirates_logo.svg",
            "Expo 2025",
            "6 Cabin, 2 Cockpit",
            &["Wi-Fi", "IFE", "Shower Spa*"],
        ),
    ]
});

fn airline(
    id: &str,
    name: &str,
    logo_url: &str,
    livery: &str,
    crew: &str,
    amenities: &[&str],
) -> Airline {
    Airline {
        id: id.to_string(),
        name: name.to_string(),
        logo_url: logo_url.to_string(),
        livery: livery.to_string(),
        crew: crew.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

/// All aircraft, in display order.
pub fn aircraft_catalog() -> &'static [AircraftProfile] {
    &AIRCRAFT
}

pub fn route_presets() -> &'static [Route] {
    &ROUTES
}

pub fn airlines() -> &'static [Airline] {
    &AIRLINES
}

/// Look up an aircraft by id
pub fn find_aircraft(id: &str) -> AppResult<&'static AircraftProfile> {
    AIRCRAFT
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| AppError::UnknownAircraft(id.to_string()))
}

/// Look up a route preset by id
pub fn find_route(id: &str) -> AppResult<&'static Route> {
    ROUTES
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::UnknownRoute(id.to_string()))
}

/// Look up an airline by id
pub fn find_airline(id: &str) -> AppResult<&'static Airline> {
    AIRLINES
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| AppError::UnknownAirline(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aircraft_catalog() {
        assert_eq!(aircraft_catalog().len(), 3);

        let b777 = find_aircraft("boeing-777x").unwrap();
        assert_eq!(b777.name, "Boeing 777X");
        assert_eq!(b777.cruise_speed_kmh, 905.0);
        assert_eq!(b777.range_km, 13_650);
        assert_eq!(b777.seats, 426);
        assert_eq!(b777.fuel_burn_lph, 7_200);

        assert_eq!(find_aircraft("airbus-a380").unwrap().cruise_speed_kmh, 945.0);
        assert_eq!(find_aircraft("airbus-a350").unwrap().seats, 410);

        for aircraft in aircraft_catalog() {
            assert!(aircraft.cruise_speed_kmh > 0.0);
            assert!(aircraft.seats > 0);
        }
    }

    #[test]
    fn test_route_presets() {
        let route = find_route("london-dubai").unwrap();
        assert_eq!(route.origin.name, "LHR • London");
        assert_eq!(route.destination.coordinate.latitude, 25.2532);
        assert_eq!(route_presets().len(), 2);
    }

    #[test]
    fn test_airlines() {
        let ek = find_airline("ek").unwrap();
        assert_eq!(ek.name, "Emirates");
        assert_eq!(ek.livery, "Expo 2025");
        assert_eq!(airlines().len(), 3);
    }

    #[test]
    fn test_defaults_exist() {
        assert!(find_aircraft(DEFAULT_AIRCRAFT_ID).is_ok());
        assert!(find_route(DEFAULT_ROUTE_ID).is_ok());
        assert!(find_airline(DEFAULT_AIRLINE_ID).is_ok());
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(
            find_aircraft("concorde"),
            Err(AppError::UnknownAircraft("concorde".to_string()))
        );
        assert_eq!(
            find_route("paris-rome"),
            Err(AppError::UnknownRoute("paris-rome".to_string()))
        );
        assert_eq!(
            find_airline("qf"),
            Err(AppError::UnknownAirline("qf".to_string()))
        );
    }
}
