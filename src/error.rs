use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Cruise speed must be a positive number of km/h, got {0}")]
    InvalidSpeed(f64),

    #[error("Passenger count must be a whole number of at least 1, got {0}")]
    InvalidPassengerCount(String),

    #[error("Coordinate out of range: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Distance must be a non-negative number of km, got {0}")]
    InvalidDistance(f64),

    #[error("Fare for a distance of {0} km is too large to represent")]
    FareOutOfRange(f64),

    #[error("Flight time for a distance of {0} km is too large to represent")]
    DurationOutOfRange(f64),

    #[error("Unknown aircraft: {0}")]
    UnknownAircraft(String),

    #[error("Unknown route preset: {0}")]
    UnknownRoute(String),

    #[error("Unknown airline: {0}")]
    UnknownAirline(String),

    #[error("Unknown fare class: {0}")]
    UnknownFareClass(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;
