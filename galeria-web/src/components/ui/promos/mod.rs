//! Promo calculator cards.
//!
//! The barbería cards validate on demand: a button press checks the form
//! and a missing selection raises a blocking alert without touching state.
//! The videojuegos cards recompute on every input change with zero-price
//! defaults and never alert.

mod bundle_card;
mod combo_card;
mod duo_card;
mod pair_card;
mod price_select;
mod results_panel;
mod threshold_card;
mod trio_card;

pub use bundle_card::{BundleCard, BundleCardProps};
pub use combo_card::{ComboCard, ComboCardProps};
pub use duo_card::{DuoCard, DuoCardProps};
pub use pair_card::{PairCard, PairCardProps};
pub use price_select::{PriceSelect, PriceSelectProps};
pub use results_panel::{ResultsPanel, ResultsPanelProps};
pub use threshold_card::{ThresholdCard, ThresholdCardProps};
pub use trio_card::{TrioCard, TrioCardProps};
