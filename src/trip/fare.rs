use serde::{Deserialize, Serialize};

use crate::entities::FareClass;
use crate::error::{AppError, AppResult};

use super::check_distance;

/// Floor for the per-person price, so very short hops never price at zero.
pub const MIN_FARE: u64 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareQuote {
    pub per_person_price: u64,
    pub total_price: u64,
    pub passengers: u32,
    pub fare_class: FareClass,
}

/// Anything a caller may hand in as a passenger count: integers, a float
/// from a numeric widget, or raw form text.
pub trait PassengerInput {
    /// Returns the count, or `InvalidPassengerCount` when it is not a whole
    /// number of at least 1.
    fn passenger_count(self) -> AppResult<u32>;
}

macro_rules! impl_integer_passengers {
    ($($t:ty),*) => {
        $(
            impl PassengerInput for $t {
                fn passenger_count(self) -> AppResult<u32> {
                    u32::try_from(self)
                        .ok()
                        .filter(|n| *n >= 1)
                        .ok_or_else(|| AppError::InvalidPassengerCount(self.to_string()))
                }
            }
        )*
    };
}

impl_integer_passengers!(i32, i64, u32, u64, usize);

impl PassengerInput for f64 {
    fn passenger_count(self) -> AppResult<u32> {
        if self.is_finite() && self.fract() == 0.0 && self >= 1.0 && self <= f64::from(u32::MAX) {
            Ok(self as u32)
        } else {
            Err(AppError::InvalidPassengerCount(self.to_string()))
        }
    }
}

impl PassengerInput for &str {
    fn passenger_count(self) -> AppResult<u32> {
        self.trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| AppError::InvalidPassengerCount(self.to_string()))
    }
}

/// Price a trip for a number of passengers in one fare class.
///
/// The per-person price is rounded once; the total is that rounded price
/// times the passenger count.
pub fn compute_fare<P: PassengerInput>(
    distance_km: f64,
    fare_class: FareClass,
    passengers: P,
) -> AppResult<FareQuote> {
    let passengers = passengers.passenger_count()?;
    check_distance(distance_km)?;

    let raw = (distance_km * fare_class.rate_per_km()).round();
    // 2^64 is the first f64 that no longer fits in a u64
    if raw >= u64::MAX as f64 {
        return Err(AppError::FareOutOfRange(distance_km));
    }
    let per_person_price = (raw as u64).max(MIN_FARE);
    let total_price = per_person_price
        .checked_mul(u64::from(passengers))
        .ok_or(AppError::FareOutOfRange(distance_km))?;

    Ok(FareQuote {
        per_person_price,
        total_price,
        passengers,
        fare_class,
    })
}
