use serde::{Deserialize, Serialize};

/// Operator shown in the booking panel. Purely decorative, pricing never
/// looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub livery: String,
    pub crew: String,
    pub amenities: Vec<String>,
}
