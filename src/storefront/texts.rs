use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{FareClass, PaymentMethod};
use crate::error::AppError;
use crate::trip::FlightDuration;

/// Cruise speed above which the luxury recommendation is shown.
pub const LUXURY_SPEED_KMH: f64 = 930.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Id,
            Language::Id => Language::En,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Language::En => &EN,
            Language::Id => &ID,
        }
    }

    /// Label on the language switch button.
    pub fn badge(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "IN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Id => f.write_str("id"),
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "id" => Ok(Language::Id),
            other => Err(AppError::UnknownLanguage(other.to_string())),
        }
    }
}

/// One language pack for the storefront.
#[derive(Debug)]
pub struct Texts {
    pub tagline: &'static str,
    pub light: &'static str,
    pub dark: &'static str,

    pub aircraft_title: &'static str,
    pub cruise: &'static str,
    pub range: &'static str,
    pub seats: &'static str,
    pub fuel: &'static str,
    pub aircraft_note: &'static str,

    pub route_title: &'static str,
    pub distance: &'static str,
    pub eta: &'static str,
    pub weather: &'static str,
    pub weather_sample: &'static str,

    pub booking_title: &'static str,
    pub operator: &'static str,
    pub livery: &'static str,
    pub trip_details: &'static str,
    pub passengers: &'static str,
    pub class: &'static str,
    pub method: &'static str,
    pub economy: &'static str,
    pub business: &'static str,
    pub first: &'static str,
    pub card: &'static str,
    pub request: &'static str,
    pub security: &'static str,
    pub summary: &'static str,
    pub per_person: &'static str,
    pub total: &'static str,
    pub pay_now: &'static str,
    pub request_flight: &'static str,
    pub confirmation: &'static str,

    pub ai_title: &'static str,
    pub ai_hint: &'static str,
    pub tip_luxury: &'static str,
    pub tip_standard: &'static str,

    pub seats_unit: &'static str,
    pub passengers_unit: &'static str,
    pub hour_suffix: &'static str,

    pub footer_tagline: &'static str,
    pub footer_made: &'static str,
}

impl Texts {
    pub fn fare_class(&self, fare_class: FareClass) -> &'static str {
        match fare_class {
            FareClass::Economy => self.economy,
            FareClass::Business => self.business,
            FareClass::First => self.first,
        }
    }

    pub fn payment_method(&self, method: PaymentMethod) -> &'static str {
        match method {
            PaymentMethod::Card => self.card,
            PaymentMethod::Request => self.request,
        }
    }

    /// Checkout button label for the chosen payment method.
    pub fn action(&self, method: PaymentMethod) -> &'static str {
        match method {
            PaymentMethod::Card => self.pay_now,
            PaymentMethod::Request => self.request_flight,
        }
    }

    pub fn duration(&self, duration: FlightDuration) -> String {
        format!("{}{} {}m", duration.hours, self.hour_suffix, duration.minutes)
    }

    /// Aircraft suggestion for the selected cruise speed.
    pub fn recommendation(&self, cruise_speed_kmh: f64) -> &'static str {
        if cruise_speed_kmh > LUXURY_SPEED_KMH {
            self.tip_luxury
        } else {
            self.tip_standard
        }
    }
}

static EN: Texts = Texts {
    tagline: "Visit the World — made with precision and passion",
    light: "Light",
    dark: "Dark",

    aircraft_title: "Airplane Selector",
    cruise: "Cruise Speed",
    range: "Range",
    seats: "Seats",
    fuel: "Fuel Burn",
    aircraft_note: "Interactive 3D previews illustrate proportions only. Specs are approximate for demo purposes.",

    route_title: "Route Visualization",
    distance: "Distance",
    eta: "Estimated Time",
    weather: "Weather",
    weather_sample: "Calm winds, scattered clouds",

    booking_title: "Booking & Payment",
    operator: "Choose Airline / Operator",
    livery: "Livery",
    trip_details: "Trip Details",
    passengers: "Passengers",
    class: "Class",
    method: "Payment Method",
    economy: "Economy",
    business: "Business",
    first: "First",
    card: "Credit / Debit Card",
    request: "Flight Request",
    security: "All payments are processed over secure, encrypted channels.",
    summary: "Fare Summary",
    per_person: "per person",
    total: "Total",
    pay_now: "Pay Now",
    request_flight: "Request This Flight",
    confirmation: "You will receive a confirmation email/itinerary after checkout.",

    ai_title: "AI Recommendations",
    ai_hint: "We suggest the best aircraft and route mix based on your preferences.",
    tip_luxury: "Luxury flights — faster and roomier widebodies recommended.",
    tip_standard: "Standard flights — efficient long-range aircraft suggested.",

    seats_unit: "seats",
    passengers_unit: "passengers",
    hour_suffix: "h",

    footer_tagline: "Visit the World",
    footer_made: "Made with precision and passion",
};

static ID: Texts = Texts {
    tagline: "Jelajahi Dunia — dibuat dengan presisi dan passion",
    light: "Terang",
    dark: "Gelap",

    aircraft_title: "Pemilih Pesawat",
    cruise: "Kecepatan Jelajah",
    range: "Jarak Tempuh",
    seats: "Kursi",
    fuel: "Konsumsi Bahan Bakar",
    aircraft_note: "Pratinjau 3D interaktif hanya untuk ilustrasi. Spesifikasi mendekati untuk tujuan demo.",

    route_title: "Visualisasi Rute",
    distance: "Jarak",
    eta: "Perkiraan Waktu",
    weather: "Cuaca",
    weather_sample: "Angin tenang, awan tersebar",

    booking_title: "Pemesanan & Pembayaran",
    operator: "Pilih Maskapai / Operator",
    livery: "Livery",
    trip_details: "Detail Perjalanan",
    passengers: "Penumpang",
    class: "Kelas",
    method: "Metode Pembayaran",
    economy: "Ekonomi",
    business: "Bisnis",
    first: "Utama",
    card: "Kartu Kredit / Debit",
    request: "Permintaan Penerbangan",
    security: "Semua pembayaran diproses melalui saluran aman dan terenkripsi.",
    summary: "Ringkasan Tarif",
    per_person: "per orang",
    total: "Total",
    pay_now: "Bayar Sekarang",
    request_flight: "Ajukan Penerbangan Ini",
    confirmation: "Anda akan menerima email/itinerary konfirmasi setelah checkout.",

    ai_title: "Rekomendasi AI",
    ai_hint: "Kami menyarankan kombinasi pesawat dan rute terbaik sesuai preferensi Anda.",
    tip_luxury: "Penerbangan mewah — pesawat berbadan lebar yang lebih cepat dan lega direkomendasikan.",
    tip_standard: "Penerbangan standar — pesawat jarak jauh yang efisien disarankan.",

    seats_unit: "kursi",
    passengers_unit: "penumpang",
    hour_suffix: "j",

    footer_tagline: "Kunjungi Dunia",
    footer_made: "Dibuat dengan presisi dan passion",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_language() {
        assert_eq!(Language::En.toggled(), Language::Id);
        assert_eq!(Language::Id.toggled(), Language::En);
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("ID".parse::<Language>(), Ok(Language::Id));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_recommendation_threshold() {
        let en = Language::En.texts();
        assert_eq!(en.recommendation(945.0), en.tip_luxury);
        assert_eq!(en.recommendation(930.0), en.tip_standard);
        assert_eq!(en.recommendation(905.0), en.tip_standard);
    }

    #[test]
    fn test_localized_duration() {
        let eta = FlightDuration { hours: 1, minutes: 5 };
        assert_eq!(Language::En.texts().duration(eta), "1h 5m");
        assert_eq!(Language::Id.texts().duration(eta), "1j 5m");
    }

    #[test]
    fn test_labels() {
        let id = Language::Id.texts();
        assert_eq!(id.fare_class(FareClass::First), "Utama");
        assert_eq!(id.action(PaymentMethod::Request), "Ajukan Penerbangan Ini");
        assert_eq!(Language::En.texts().action(PaymentMethod::Card), "Pay Now");
    }
}
