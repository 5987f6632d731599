//! Pure filtering and selection state for the gallery directory.
//!
//! The state machine is renderer-free: the web layer feeds it events and
//! re-renders from the result, so the rules stay testable on the host.

use crate::local::Local;

/// Filter, selection and hover state layered over the store list.
///
/// Selection is sticky until the next selection or a reset; hover is
/// transient. Both are overlays on the filtered view and never change
/// which stores are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryState {
    query: String,
    rubro: Option<String>,
    selected: Option<String>,
    hovered: Option<String>,
}

impl DirectoryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search query, trimmed and lowercased.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn rubro(&self) -> Option<&str> {
        self.rubro.as_deref()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
    }

    /// Filter by rubro; `None` shows every category.
    pub fn set_rubro(&mut self, rubro: Option<&str>) {
        self.rubro = rubro.map(str::to_lowercase);
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn hover(&mut self, id: &str) {
        self.hovered = Some(id.to_string());
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Drop the query, the rubro filter, the selection and any hover.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether `local` passes the current query and rubro filter.
    #[must_use]
    pub fn matches(&self, local: &Local) -> bool {
        if let Some(rubro) = &self.rubro {
            if local.rubro.to_lowercase() != *rubro {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.as_str();
        local.nombre.to_lowercase().contains(q)
            || local.rubro.to_lowercase().contains(q)
            || local.ubicacion.to_lowercase().contains(q)
    }

    /// The filtered subset, in directory order.
    #[must_use]
    pub fn visible<'a>(&self, locales: &'a [Local]) -> Vec<&'a Local> {
        locales.iter().filter(|local| self.matches(local)).collect()
    }
}

/// Distinct rubros in first-seen order, for the filter buttons.
#[must_use]
pub fn rubros(locales: &[Local]) -> Vec<String> {
    let mut seen = Vec::new();
    for local in locales {
        if !seen.contains(&local.rubro) {
            seen.push(local.rubro.clone());
        }
    }
    seen
}

/// Live-region copy for a result count.
#[must_use]
pub fn results_announcement(count: usize) -> String {
    match count {
        0 => "No se encontraron locales que coincidan con la búsqueda".to_string(),
        1 => "Se encontró 1 local".to_string(),
        n => format!("Se encontraron {n} locales"),
    }
}

/// Live-region copy for a selection.
#[must_use]
pub fn selection_announcement(local: &Local) -> String {
    format!("Seleccionado: {}, {}", local.nombre, local.rubro)
}

/// Live-region copy after a reset.
#[must_use]
pub const fn reset_announcement() -> &'static str {
    "Búsqueda reiniciada. Mostrando todos los locales."
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(id: &str, nombre: &str, rubro: &str, ubicacion: &str) -> Local {
        Local {
            id: id.to_string(),
            nombre: nombre.to_string(),
            rubro: rubro.to_string(),
            ubicacion: ubicacion.to_string(),
            horarios: String::from("Lun a Sáb 10:00–20:00"),
            imagen: format!("/static/assets/img/locales/{id}.jpg"),
            url: format!("https://{id}.example.com"),
            accesibilidad: vec![],
            ofertas: false,
            x: 50.0,
            y: 50.0,
        }
    }

    fn sample() -> Vec<Local> {
        vec![
            local("seven-barber", "Seven Barber", "Barbería", "Pasillo A — Local 3"),
            local("game-store", "Game Store", "Videojuegos", "Pasillo B — Local 7"),
            local("focuz", "Focuz", "Indumentaria", "Pasillo A — Local 2"),
        ]
    }

    #[test]
    fn empty_query_returns_the_full_list() {
        let locales = sample();
        let state = DirectoryState::new();
        assert_eq!(state.visible(&locales).len(), locales.len());
    }

    #[test]
    fn query_matches_name_rubro_and_location() {
        let locales = sample();
        let mut state = DirectoryState::new();

        state.set_query("game");
        let by_name: Vec<_> = state.visible(&locales).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(by_name, ["game-store"]);

        state.set_query("INDUMENTARIA");
        let by_rubro: Vec<_> = state.visible(&locales).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(by_rubro, ["focuz"]);

        state.set_query("pasillo a");
        let by_location: Vec<_> = state.visible(&locales).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(by_location, ["seven-barber", "focuz"]);

        state.set_query("  game  ");
        assert_eq!(state.query(), "game");
    }

    #[test]
    fn rubro_filter_composes_with_the_query() {
        let locales = sample();
        let mut state = DirectoryState::new();
        state.set_rubro(Some("Barbería"));
        assert_eq!(state.visible(&locales).len(), 1);

        state.set_query("game");
        assert!(state.visible(&locales).is_empty());

        state.set_rubro(None);
        assert_eq!(state.visible(&locales).len(), 1);
    }

    #[test]
    fn selection_is_sticky_and_hover_is_transient() {
        let mut state = DirectoryState::new();
        state.select("focuz");
        state.hover("game-store");
        assert_eq!(state.selected(), Some("focuz"));
        assert_eq!(state.hovered(), Some("game-store"));

        state.clear_hover();
        assert_eq!(state.selected(), Some("focuz"));
        assert_eq!(state.hovered(), None);

        state.select("game-store");
        assert_eq!(state.selected(), Some("game-store"));
    }

    #[test]
    fn reset_clears_every_overlay() {
        let locales = sample();
        let mut state = DirectoryState::new();
        state.set_query("game");
        state.set_rubro(Some("Videojuegos"));
        state.select("game-store");
        state.hover("game-store");

        state.reset();
        assert_eq!(state, DirectoryState::new());
        assert_eq!(state.visible(&locales).len(), locales.len());
    }

    #[test]
    fn rubros_are_distinct_and_ordered() {
        let mut locales = sample();
        locales.push(local("cutz", "Cutz", "Barbería", "Pasillo B — Local 1"));
        assert_eq!(rubros(&locales), ["Barbería", "Videojuegos", "Indumentaria"]);
    }

    #[test]
    fn announcements_cover_zero_one_and_many() {
        assert_eq!(
            results_announcement(0),
            "No se encontraron locales que coincidan con la búsqueda"
        );
        assert_eq!(results_announcement(1), "Se encontró 1 local");
        assert_eq!(results_announcement(4), "Se encontraron 4 locales");

        let store = local("focuz", "Focuz", "Indumentaria", "Pasillo A — Local 2");
        assert_eq!(
            selection_announcement(&store),
            "Seleccionado: Focuz, Indumentaria"
        );
    }
}
