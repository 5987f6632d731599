use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/barberia")]
    Barberia,
    #[at("/videojuegos")]
    Videojuegos,
    #[at("/locales")]
    Locales,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Heading shown in the site navigation.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Barberia => "Barbería",
            Self::Videojuegos => "Videojuegos",
            Self::Locales => "Locales",
            Self::NotFound => "Página no encontrada",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/barberia"), Some(Route::Barberia));
        assert_eq!(Route::recognize("/videojuegos"), Some(Route::Videojuegos));
        assert_eq!(Route::recognize("/locales"), Some(Route::Locales));
        assert_eq!(Route::recognize("/algo-raro"), Some(Route::NotFound));
    }

    #[test]
    fn titles_are_spanish_copy() {
        assert_eq!(Route::Locales.title(), "Locales");
        assert_eq!(Route::NotFound.title(), "Página no encontrada");
    }
}
