use serde::{Deserialize, Serialize};

use crate::entities::{FareClass, Route};
use crate::error::AppResult;

use super::{compute_fare, estimate_flight_time, FareQuote, FlightDuration, PassengerInput};

/// Distance, flight time and fare for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripQuote {
    pub distance_km: f64,
    pub duration: FlightDuration,
    pub fare: FareQuote,
}

/// Quote a route: the distance is computed once and shared by the duration
/// and pricing steps.
pub fn quote_trip<P: PassengerInput>(
    route: &Route,
    cruise_speed_kmh: f64,
    fare_class: FareClass,
    passengers: P,
) -> AppResult<TripQuote> {
    let distance_km = route.distance_km();
    let duration = estimate_flight_time(distance_km, cruise_speed_kmh)?;
    let fare = compute_fare(distance_km, fare_class, passengers)?;

    tracing::debug!(
        route = %route.id,
        distance_km,
        %duration,
        per_person = fare.per_person_price,
        total = fare.total_price,
        "quoted trip"
    );

    Ok(TripQuote {
        distance_km,
        duration,
        fare,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_aircraft, find_route};
    use crate::error::AppError;

    #[test]
    fn test_quote_london_dubai_a380() {
        let route = find_route("london-dubai").unwrap();
        let a380 = find_aircraft("airbus-a380").unwrap();

        let quote = quote_trip(route, a380.cruise_speed_kmh, FareClass::Business, 2).unwrap();

        assert!((quote.distance_km - 5497.4).abs() < 1.0);
        // 5497.4 / 945 = 5.817 h
        assert_eq!(quote.duration, FlightDuration { hours: 5, minutes: 49 });
        // 5497.4 * 0.35 = 1924.1
        assert_eq!(quote.fare.per_person_price, 1924);
        assert_eq!(quote.fare.total_price, 3848);
    }

    #[test]
    fn test_quote_is_deterministic() {
        let route = find_route("jakarta-bali").unwrap();
        let first = quote_trip(route, 905.0, FareClass::Economy, 1).unwrap();
        let second = quote_trip(route, 905.0, FareClass::Economy, 1).unwrap();
        assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_quote_propagates_errors() {
        let route = find_route("jakarta-bali").unwrap();
        assert_eq!(
            quote_trip(route, 0.0, FareClass::Economy, 1),
            Err(AppError::InvalidSpeed(0.0))
        );
        assert!(matches!(
            quote_trip(route, 905.0, FareClass::Economy, 0),
            Err(AppError::InvalidPassengerCount(_))
        ));
    }
}
