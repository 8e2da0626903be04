use std::fmt;

use crate::catalog;
use crate::entities::{AircraftProfile, Airline, Route};
use crate::error::AppResult;
use crate::trip::TripQuote;

use super::format::{km, price, thousands};
use super::state::{AppState, Theme};
use super::texts::Texts;

/// Plain-text rendering of every storefront section for one state.
pub struct StorefrontView<'a> {
    state: &'a AppState,
    texts: &'static Texts,
    aircraft: &'static AircraftProfile,
    route: &'static Route,
    airline: &'static Airline,
    quote: TripQuote,
}

impl<'a> StorefrontView<'a> {
    pub fn new(state: &'a AppState) -> AppResult<Self> {
        Ok(Self {
            state,
            texts: state.texts(),
            aircraft: state.aircraft()?,
            route: state.route()?,
            airline: state.airline()?,
            quote: state.quote()?,
        })
    }

    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.texts;
        // The theme button offers the theme you would switch to
        let theme_label = match self.state.theme {
            Theme::Dark => t.light,
            Theme::Light => t.dark,
        };
        writeln!(
            f,
            "[HT] HanzTravel    [{}] [{}]",
            self.state.language.badge(),
            theme_label
        )?;
        writeln!(f)?;
        writeln!(f, "HanzTravel — {}", t.footer_tagline)?;
        writeln!(f, "{}", t.tagline)
    }

    fn aircraft(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.texts;
        let a = self.aircraft;
        writeln!(f, "== {} ==", t.aircraft_title)?;
        for candidate in catalog::aircraft_catalog() {
            let marker = if candidate.id == a.id { '*' } else { ' ' };
            writeln!(f, "  ({}) {}", marker, candidate.name)?;
        }
        writeln!(f, "  {}: {} km/h", t.cruise, a.cruise_speed_kmh)?;
        writeln!(f, "  {}: {} km", t.range, thousands(u64::from(a.range_km)))?;
        writeln!(f, "  {}: {} {}", t.seats, a.seats, t.seats_unit)?;
        writeln!(f, "  {}: {} L/h", t.fuel, thousands(u64::from(a.fuel_burn_lph)))?;
        writeln!(f, "  {}", t.aircraft_note)
    }

    fn route(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.texts;
        let r = self.route;
        writeln!(f, "== {}: {} ==", t.route_title, r.name)?;
        writeln!(
            f,
            "  {} ({:.4}, {:.4}) -> {} ({:.4}, {:.4})",
            r.origin.name,
            r.origin.coordinate.latitude,
            r.origin.coordinate.longitude,
            r.destination.name,
            r.destination.coordinate.latitude,
            r.destination.coordinate.longitude,
        )?;
        writeln!(f, "  {}: {}", t.distance, km(self.quote.distance_km))?;
        writeln!(f, "  {}: {}", t.eta, t.duration(self.quote.duration))?;
        writeln!(f, "  {}: {}", t.weather, t.weather_sample)
    }

    fn recommendation(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.texts;
        writeln!(f, "== {} ==", t.ai_title)?;
        writeln!(f, "  {}", t.ai_hint)?;
        writeln!(f, "  • {}", t.recommendation(self.aircraft.cruise_speed_kmh))
    }

    fn booking(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.texts;
        let state = self.state;
        let fare = &self.quote.fare;

        writeln!(
            f,
            "== {} ==  {} • {}",
            t.booking_title,
            self.aircraft.name,
            t.duration(self.quote.duration)
        )?;
        writeln!(f, "  {}:", t.operator)?;
        for airline in catalog::airlines() {
            let marker = if airline.id == self.airline.id { '*' } else { ' ' };
            writeln!(
                f,
                "    ({}) {} ({}: {})",
                marker, airline.name, t.livery, airline.livery
            )?;
        }
        writeln!(f, "  {}:", t.trip_details)?;
        writeln!(f, "    {}: {}", t.passengers, fare.passengers)?;
        writeln!(f, "    {}: {}", t.class, t.fare_class(fare.fare_class))?;
        writeln!(f, "    {}: {}", t.method, t.payment_method(state.payment_method))?;
        writeln!(f, "  {}", t.security)?;
        writeln!(f, "  {} ({})", t.summary, t.per_person)?;
        writeln!(f, "    {}", price(fare.per_person_price))?;
        writeln!(
            f,
            "    {} {} • {}",
            fare.passengers, t.passengers_unit, fare.fare_class
        )?;
        writeln!(f, "  {}: {}", t.total, price(fare.total_price))?;
        writeln!(f, "  [ {} ]", t.action(state.payment_method))?;
        writeln!(f, "  {}", t.confirmation)
    }

    fn footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.texts;
        writeln!(f, "© 2025 HanzTravel — {}", t.footer_tagline)?;
        writeln!(f, "{}", t.footer_made)
    }
}

impl fmt::Display for StorefrontView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        writeln!(f)?;
        self.aircraft(f)?;
        writeln!(f)?;
        self.route(f)?;
        writeln!(f)?;
        self.recommendation(f)?;
        writeln!(f)?;
        self.booking(f)?;
        writeln!(f)?;
        self.footer(f)
    }
}

/// Render the whole storefront for `state` as text.
pub fn render_storefront(state: &AppState) -> AppResult<String> {
    Ok(StorefrontView::new(state)?.to_string())
}
