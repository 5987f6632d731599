use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="page" aria-labelledby="nf-title">
            <h2 id="nf-title">{ "Página no encontrada" }</h2>
            <p class="muted">{ "La dirección no corresponde a ninguna sección de la galería." }</p>
            <a class="btn-primary" href="/">{ "Volver al inicio" }</a>
        </section>
    }
}
