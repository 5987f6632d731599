//! Store records for the gallery directory.

use serde::{Deserialize, Serialize};

/// A single store ("local") in the gallery directory.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Local {
    pub id: String,
    pub nombre: String,
    pub rubro: String,
    pub ubicacion: String,
    pub horarios: String,
    pub imagen: String,
    pub url: String,
    /// Accessibility tags shown on the card ("Rampa de acceso", ...).
    #[serde(default)]
    pub accesibilidad: Vec<String>,
    /// Whether the store currently advertises offers.
    #[serde(default)]
    pub ofertas: bool,
    /// Normalized floor-plan coordinates, in percent of the map size.
    pub x: f64,
    pub y: f64,
}

/// Parse the store list from its JSON representation.
///
/// # Errors
/// Returns the underlying decode error when the document is not a valid
/// store list.
pub fn parse_locales(json: &str) -> Result<Vec<Local>, serde_json::Error> {
    serde_json::from_str(json)
}
