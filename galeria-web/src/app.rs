#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <crate::pages::home::HomePage /> },
        Route::Barberia => html! { <crate::pages::barberia::BarberiaPage /> },
        Route::Videojuegos => html! { <crate::pages::videojuegos::VideojuegosPage /> },
        Route::Locales => html! { <crate::pages::locales::LocalesPage /> },
        Route::NotFound => html! { <crate::pages::not_found::NotFoundPage /> },
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <crate::components::header::Header />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <Switch<Route> render={switch} />
            </main>
            <crate::components::footer::Footer />
        </BrowserRouter>
    }
}
