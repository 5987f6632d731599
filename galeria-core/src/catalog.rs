//! Promo catalog: the selectable items of the calculator pages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A selectable product, service or game with its list price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub nombre: String,
    /// List price in cents.
    pub precio_cents: i64,
}

/// Items of the barbería page, one list per promo card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberiaCatalog {
    pub productos: Vec<CatalogItem>,
    pub servicios: Vec<CatalogItem>,
    pub combo: Vec<CatalogItem>,
}

/// Items of the videojuegos page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideojuegosCatalog {
    pub juegos: Vec<CatalogItem>,
}

/// The complete promo catalog embedded with the app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCatalog {
    pub barberia: BarberiaCatalog,
    pub videojuegos: VideojuegosCatalog,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PromoCatalog {
    /// Parse the catalog from its JSON representation.
    ///
    /// # Errors
    /// Returns a [`CatalogError::Parse`] when the document does not match
    /// the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up an item by id across every list.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<&CatalogItem> {
        self.barberia
            .productos
            .iter()
            .chain(&self.barberia.servicios)
            .chain(&self.barberia.combo)
            .chain(&self.videojuegos.juegos)
            .find(|item| item.id == id)
    }
}

/// Price of the selected item, if any.
///
/// A `None` selection (placeholder option) yields `None`, which the
/// calculators treat as "nothing chosen".
#[must_use]
pub fn selected_price(items: &[CatalogItem], selected: Option<&str>) -> Option<i64> {
    let id = selected?;
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.precio_cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PromoCatalog {
        PromoCatalog::from_json(
            r#"{
                "barberia": {
                    "productos": [
                        { "id": "cera-mate", "nombre": "Cera mate", "precio_cents": 600000 }
                    ],
                    "servicios": [
                        { "id": "corte", "nombre": "Corte clásico", "precio_cents": 800000 }
                    ],
                    "combo": []
                },
                "videojuegos": {
                    "juegos": [
                        { "id": "carrera-neon", "nombre": "Carrera Neón", "precio_cents": 3900000 }
                    ]
                }
            }"#,
        )
        .expect("sample catalog should parse")
    }

    #[test]
    fn find_item_searches_every_list() {
        let catalog = sample();
        assert_eq!(
            catalog.find_item("corte").map(|i| i.precio_cents),
            Some(800_000)
        );
        assert_eq!(
            catalog.find_item("carrera-neon").map(|i| i.precio_cents),
            Some(3_900_000)
        );
        assert!(catalog.find_item("nope").is_none());
    }

    #[test]
    fn selected_price_ignores_placeholder_and_unknown_ids() {
        let catalog = sample();
        let juegos = &catalog.videojuegos.juegos;
        assert_eq!(selected_price(juegos, Some("carrera-neon")), Some(3_900_000));
        assert_eq!(selected_price(juegos, Some("unknown")), None);
        assert_eq!(selected_price(juegos, None), None);
    }

    #[test]
    fn malformed_catalog_reports_parse_error() {
        let err = PromoCatalog::from_json("[]").expect_err("array is not a catalog");
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
