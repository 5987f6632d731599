use yew::prelude::*;

/// Site banner with skip link and section navigation.
///
/// Navigation uses plain anchors on purpose: every section is its own
/// stateless page and a full load resets its widgets.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Saltar al contenido" }</a>
            <div class="header-content">
                <a class="brand" href="/">{ "Galería Lavalle" }</a>
                <nav aria-label="Secciones">
                    <a href="/barberia">{ "Barbería" }</a>
                    <a href="/videojuegos">{ "Videojuegos" }</a>
                    <a href="/locales">{ "Locales" }</a>
                </nav>
            </div>
        </header>
    }
}
