pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod storefront;
pub mod trip;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use storefront::AppState;
pub use trip::{compute_fare, estimate_flight_time, quote_trip, FareQuote, FlightDuration, TripQuote};
pub use utils::geo::{great_circle_distance_km, EARTH_RADIUS_KM};
