use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="page home-page" aria-labelledby="home-title">
            <h2 id="home-title">{ "Bienvenidos a Galería Lavalle" }</h2>
            <p class="muted">{ "Promos de nuestros locales y el mapa interactivo de la galería." }</p>
            <div class="home-links">
                <a class="card home-link" href="/barberia">
                    <h3>{ "Barbería" }</h3>
                    <p>{ "Calculá el descuento de las promos de la barbería." }</p>
                </a>
                <a class="card home-link" href="/videojuegos">
                    <h3>{ "Videojuegos" }</h3>
                    <p>{ "Armá tu compra y mirá cuánto ahorrás." }</p>
                </a>
                <a class="card home-link" href="/locales">
                    <h3>{ "Locales" }</h3>
                    <p>{ "Buscá un local y encontralo en el plano." }</p>
                </a>
            </div>
        </section>
    }
}
