//! Promo catalog embedded with the app.

use galeria_core::PromoCatalog;
use galeria_core::catalog::CatalogError;

/// Load the promo catalog from the embedded JSON.
///
/// # Errors
/// Returns a parse error when the embedded document does not match the
/// catalog shape; the affected page renders a configuration-error panel.
pub fn load_promo_catalog() -> Result<PromoCatalog, CatalogError> {
    PromoCatalog::from_json(include_str!("../static/assets/data/promos.json"))
}
