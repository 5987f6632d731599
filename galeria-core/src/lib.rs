#![forbid(unsafe_code)]
//! Domain rules for the Galería Lavalle storefront widgets.
//!
//! Everything in this crate is platform-agnostic: the promo pricing rules,
//! the promo catalog, the store-directory records and the pure
//! filtering/selection state the web front end renders from. No DOM, no
//! wasm, no I/O.

pub mod catalog;
pub mod directory;
pub mod local;
pub mod promo;

pub use catalog::{CatalogItem, PromoCatalog};
pub use directory::DirectoryState;
pub use local::Local;
pub use promo::PromoTotals;
