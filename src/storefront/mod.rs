//! Presentation support for the storefront: selection state, language
//! packs, number formatting, checkout summaries and a text renderer.

pub mod checkout;
pub mod format;
pub mod render;
pub mod state;
pub mod texts;

pub use checkout::{checkout, BookingSummary};
pub use render::{render_storefront, StorefrontView};
pub use state::{AppState, Theme};
pub use texts::{Language, Texts};
