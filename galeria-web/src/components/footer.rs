use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <p class="muted">
                { "Galería Lavalle — Lavalle 1234, todos los días de 9 a 21." }
            </p>
        </footer>
    }
}
