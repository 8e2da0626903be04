pub mod aircraft;
pub mod airline;
pub mod fare;
pub mod location;

pub use aircraft::AircraftProfile;
pub use airline::Airline;
pub use fare::{FareClass, PaymentMethod};
pub use location::{Coordinate, Location, Route};
