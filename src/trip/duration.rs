use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::check_distance;

/// Whole hours and minutes, `minutes` is always below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDuration {
    pub hours: u64,
    pub minutes: u32,
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Estimate flight time at a steady cruise speed.
///
/// Minutes are rounded to the nearest whole minute; a fraction that rounds
/// up to 60 carries into the hour, so the result is never "2h 60m".
pub fn estimate_flight_time(distance_km: f64, cruise_speed_kmh: f64) -> AppResult<FlightDuration> {
    if !(cruise_speed_kmh.is_finite() && cruise_speed_kmh > 0.0) {
        return Err(AppError::InvalidSpeed(cruise_speed_kmh));
    }
    check_distance(distance_km)?;

    let hours = distance_km / cruise_speed_kmh;
    let mut whole = hours.floor();
    let mut minutes = ((hours - whole) * 60.0).round();

    if minutes >= 60.0 {
        whole += 1.0;
        minutes = 0.0;
    }

    // 2^64 is the first f64 that no longer fits in a u64
    if whole >= u64::MAX as f64 {
        return Err(AppError::DurationOutOfRange(distance_km));
    }

    Ok(FlightDuration {
        hours: whole as u64,
        minutes: minutes as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jakarta_bali_on_777x() {
        let eta = estimate_flight_time(1159.0, 905.0).unwrap();
        assert_eq!(eta, FlightDuration { hours: 1, minutes: 17 });
        assert_eq!(eta.to_string(), "1h 17m");
    }

    #[test]
    fn test_minutes_carry_into_hour() {
        // 2694 / 900 = 2.99333 h, i.e. 2h 59.6m
        let eta = estimate_flight_time(2694.0, 900.0).unwrap();
        assert_eq!(eta, FlightDuration { hours: 3, minutes: 0 });
        assert_eq!(eta.to_string(), "3h 0m");
    }

    #[test]
    fn test_minutes_never_reach_sixty() {
        for km in (0..20_000).step_by(7) {
            let eta = estimate_flight_time(km as f64, 903.0).unwrap();
            assert!(eta.minutes < 60, "{km} km gave {eta}");
        }
    }

    #[test]
    fn test_zero_distance() {
        let eta = estimate_flight_time(0.0, 905.0).unwrap();
        assert_eq!(eta, FlightDuration { hours: 0, minutes: 0 });
    }

    #[test]
    fn test_exact_hours() {
        let eta = estimate_flight_time(1810.0, 905.0).unwrap();
        assert_eq!(eta, FlightDuration { hours: 2, minutes: 0 });
    }

    #[test]
    fn test_hours_beyond_u32() {
        let eta = estimate_flight_time(5e9, 1.0).unwrap();
        assert_eq!(eta, FlightDuration { hours: 5_000_000_000, minutes: 0 });

        // 0.9999 h rounds to 60 minutes and carries
        let eta = estimate_flight_time(5_000_000_000.9999, 1.0).unwrap();
        assert_eq!(eta, FlightDuration { hours: 5_000_000_001, minutes: 0 });
    }

    #[test]
    fn test_hours_too_large() {
        assert_eq!(
            estimate_flight_time(1e300, 1.0),
            Err(AppError::DurationOutOfRange(1e300))
        );
    }

    #[test]
    fn test_invalid_speed() {
        assert_eq!(
            estimate_flight_time(1000.0, 0.0),
            Err(AppError::InvalidSpeed(0.0))
        );
        assert_eq!(
            estimate_flight_time(1000.0, -905.0),
            Err(AppError::InvalidSpeed(-905.0))
        );
        assert!(matches!(
            estimate_flight_time(1000.0, f64::NAN),
            Err(AppError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_invalid_distance() {
        assert_eq!(
            estimate_flight_time(-1.0, 905.0),
            Err(AppError::InvalidDistance(-1.0))
        );
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            estimate_flight_time(5497.4, 945.0),
            estimate_flight_time(5497.4, 945.0)
        );
    }
}
