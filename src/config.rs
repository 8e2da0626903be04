use std::env;
use std::str::FromStr;

use crate::entities::{FareClass, PaymentMethod};
use crate::error::{AppError, AppResult};
use crate::storefront::{AppState, Language, Theme};
use crate::trip::PassengerInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!("HANZ_OUTPUT must be text or json, got {}", other))),
        }
    }
}

/// Settings for the demo binary. The library itself never reads them.
#[derive(Debug, Clone)]
pub struct Config {
    pub state: AppState,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys keep the storefront
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut state = AppState::default();

        if let Some(lang) = lookup("HANZ_LANG") {
            state.language = lang.parse::<Language>()?;
        }
        if let Some(theme) = lookup("HANZ_THEME") {
            state.theme = theme.parse::<Theme>()?;
        }
        if let Some(aircraft) = lookup("HANZ_AIRCRAFT") {
            state.select_aircraft(aircraft.trim())?;
        }
        if let Some(route) = lookup("HANZ_ROUTE") {
            state.select_route(route.trim())?;
        }
        if let Some(airline) = lookup("HANZ_AIRLINE") {
            state.select_airline(airline.trim())?;
        }
        if let Some(passengers) = lookup("HANZ_PASSENGERS") {
            state.passengers = passengers.as_str().passenger_count().map_err(|_| {
                AppError::Config(format!(
                    "HANZ_PASSENGERS must be a whole number of at least 1, got {}",
                    passengers
                ))
            })?;
        }
        if let Some(class) = lookup("HANZ_FARE_CLASS") {
            state.fare_class = class.parse::<FareClass>()?;
        }
        if let Some(method) = lookup("HANZ_PAYMENT") {
            state.payment_method = method.parse::<PaymentMethod>()?;
        }

        let output = match lookup("HANZ_OUTPUT") {
            Some(output) => output.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(Self { state, output })
    }
}
