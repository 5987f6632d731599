use crate::components::ui::gallery::GalleryMap;
use yew::prelude::*;

#[function_component(LocalesPage)]
pub fn locales_page() -> Html {
    html! {
        <section class="page locales-page" aria-labelledby="locales-title">
            <h2 id="locales-title">{ "Locales de la galería" }</h2>
            <GalleryMap />
        </section>
    }
}
