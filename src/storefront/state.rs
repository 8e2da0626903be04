use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, DEFAULT_AIRCRAFT_ID, DEFAULT_AIRLINE_ID, DEFAULT_ROUTE_ID};
use crate::entities::{AircraftProfile, Airline, FareClass, PaymentMethod, Route};
use crate::error::{AppError, AppResult};
use crate::trip::{quote_trip, PassengerInput, TripQuote};

use super::texts::{Language, Texts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppError::UnknownTheme(other.to_string())),
        }
    }
}

/// Everything the storefront lets the visitor pick. The engine never sees
/// this struct, only the plain values pulled out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub language: Language,
    pub theme: Theme,
    pub aircraft_id: String,
    pub route_id: String,
    pub airline_id: String,
    pub passengers: u32,
    pub fare_class: FareClass,
    pub payment_method: PaymentMethod,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            aircraft_id: DEFAULT_AIRCRAFT_ID.to_string(),
            route_id: DEFAULT_ROUTE_ID.to_string(),
            airline_id: DEFAULT_AIRLINE_ID.to_string(),
            passengers: 1,
            fare_class: FareClass::default(),
            payment_method: PaymentMethod::default(),
        }
    }
}

impl AppState {
    pub fn texts(&self) -> &'static Texts {
        self.language.texts()
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn aircraft(&self) -> AppResult<&'static AircraftProfile> {
        catalog::find_aircraft(&self.aircraft_id)
    }

    pub fn route(&self) -> AppResult<&'static Route> {
        catalog::find_route(&self.route_id)
    }

    pub fn airline(&self) -> AppResult<&'static Airline> {
        catalog::find_airline(&self.airline_id)
    }

    /// Switch aircraft, leaving the state untouched if the id is unknown.
    pub fn select_aircraft(&mut self, id: &str) -> AppResult<()> {
        catalog::find_aircraft(id)?;
        self.aircraft_id = id.to_string();
        Ok(())
    }

    pub fn select_route(&mut self, id: &str) -> AppResult<()> {
        catalog::find_route(id)?;
        self.route_id = id.to_string();
        Ok(())
    }

    pub fn select_airline(&mut self, id: &str) -> AppResult<()> {
        catalog::find_airline(id)?;
        self.airline_id = id.to_string();
        Ok(())
    }

    pub fn set_passengers<P: PassengerInput>(&mut self, passengers: P) -> AppResult<()> {
        self.passengers = passengers.passenger_count()?;
        Ok(())
    }

    /// Recompute the quote for the current selection.
    pub fn quote(&self) -> AppResult<TripQuote> {
        let aircraft = self.aircraft()?;
        let route = self.route()?;

        quote_trip(route, aircraft.cruise_speed_kmh, self.fare_class, self.passengers).map_err(
            |e| {
                tracing::warn!(route = %route.id, aircraft = %aircraft.id, "quote rejected: {}", e);
                e
            },
        )
    }

    pub fn recommendation(&self) -> AppResult<&'static str> {
        let aircraft = self.aircraft()?;
        Ok(self.texts().recommendation(aircraft.cruise_speed_kmh))
    }
}
