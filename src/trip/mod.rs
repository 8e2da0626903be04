//! Trip metrics: flight duration, fares, and the quote that bundles them.

pub mod duration;
pub mod fare;
pub mod quote;

pub use duration::{estimate_flight_time, FlightDuration};
pub use fare::{compute_fare, FareQuote, PassengerInput, MIN_FARE};
pub use quote::{quote_trip, TripQuote};

use crate::error::{AppError, AppResult};

fn check_distance(distance_km: f64) -> AppResult<()> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidDistance(distance_km))
    }
}
