use crate::components::ui::promos::{BundleCard, DuoCard, TrioCard};
use yew::prelude::*;

/// Barbería promos: three calculator cards over the embedded catalog.
#[function_component(BarberiaPage)]
pub fn barberia_page() -> Html {
    let catalog = use_memo((), |()| crate::catalog::load_promo_catalog());

    match catalog.as_ref() {
        Ok(catalog) => html! {
            <section class="page promos-page" aria-labelledby="barberia-title">
                <h2 id="barberia-title">{ "Promos de la barbería" }</h2>
                <DuoCard productos={catalog.barberia.productos.clone()} />
                <TrioCard servicios={catalog.barberia.servicios.clone()} />
                <BundleCard items={catalog.barberia.combo.clone()} />
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
