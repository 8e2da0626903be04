use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::PaymentMethod;
use crate::error::AppResult;
use crate::trip::FareQuote;

use super::state::AppState;

/// What the visitor sees after pressing the checkout button. Nothing is
/// stored and no payment is taken.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    pub reference: Uuid,
    pub created_at: DateTime<Utc>,
    pub airline: String,
    pub aircraft: String,
    pub route: String,
    pub distance_km: f64,
    pub eta: String,
    pub fare: FareQuote,
    pub payment_method: PaymentMethod,
    pub action: String,
}

pub fn checkout(state: &AppState) -> AppResult<BookingSummary> {
    let airline = state.airline()?;
    let aircraft = state.aircraft()?;
    let route = state.route()?;
    let quote = state.quote()?;
    let texts = state.texts();

    let summary = BookingSummary {
        reference: Uuid::new_v4(),
        created_at: Utc::now(),
        airline: airline.name.clone(),
        aircraft: aircraft.name.clone(),
        route: route.name.clone(),
        distance_km: quote.distance_km,
        eta: texts.duration(quote.duration),
        fare: quote.fare,
        payment_method: state.payment_method,
        action: texts.action(state.payment_method).to_string(),
    };

    tracing::info!(
        reference = %summary.reference,
        route = %route.id,
        total = summary.fare.total_price,
        "checkout summary prepared"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FareClass;
    use crate::error::AppError;

    #[test]
    fn test_checkout_summary() {
        let mut state = AppState::default();
        state.select_airline("sq").unwrap();
        state.fare_class = FareClass::Business;
        state.passengers = 3;
        state.payment_method = PaymentMethod::Request;

        let summary = checkout(&state).unwrap();
        assert_eq!(summary.airline, "Singapore Airlines");
        assert_eq!(summary.aircraft, "Boeing 777X");
        assert_eq!(summary.route, "Jakarta → Bali");
        assert_eq!(summary.eta, "1h 5m");
        // 982.65 * 0.35 = 343.9
        assert_eq!(summary.fare.per_person_price, 344);
        assert_eq!(summary.fare.total_price, 1032);
        assert_eq!(summary.action, "Request This Flight");
    }

    #[test]
    fn test_references_are_unique() {
        let state = AppState::default();
        let a = checkout(&state).unwrap();
        let b = checkout(&state).unwrap();
        assert_ne!(a.reference, b.reference);
        assert_eq!(a.fare, b.fare);
    }

    #[test]
    fn test_checkout_serializes() {
        let summary = checkout(&AppState::default()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["fare"]["per_person_price"], 118);
        assert_eq!(json["payment_method"], "card");
        assert_eq!(json["action"], "Pay Now");
    }

    #[test]
    fn test_checkout_unknown_airline() {
        let state = AppState {
            airline_id: "zz".to_string(),
            ..AppState::default()
        };
        assert!(matches!(
            checkout(&state),
            Err(AppError::UnknownAirline(_))
        ));
    }
}
