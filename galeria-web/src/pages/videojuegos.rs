use crate::components::ui::promos::{ComboCard, PairCard, ThresholdCard};
use yew::prelude::*;

/// Videojuegos promos: three live calculator cards over the embedded
/// catalog.
#[function_component(VideojuegosPage)]
pub fn videojuegos_page() -> Html {
    let catalog = use_memo((), |()| crate::catalog::load_promo_catalog());

    match catalog.as_ref() {
        Ok(catalog) => html! {
            <section class="page promos-page" aria-labelledby="videojuegos-title">
                <h2 id="videojuegos-title">{ "Promos del game store" }</h2>
                <PairCard juegos={catalog.videojuegos.juegos.clone()} />
                <ComboCard juegos={catalog.videojuegos.juegos.clone()} />
                <ThresholdCard juegos={catalog.videojuegos.juegos.clone()} />
            </section>
        },
        Err(err) => {
            log::error!("Failed to load the promo catalog: {err}");
            html! {
                <section class="page error-message" role="alert">
                    <p>{ "No se pudo cargar el catálogo de promociones." }</p>
                </section>
            }
        }
    }
}
