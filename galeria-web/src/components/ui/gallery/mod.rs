//! Interactive directory: SVG floor plan plus searchable card list.
//!
//! `GalleryMap` owns the data lifecycle and the `DirectoryState`;
//! `GalleryView` and its children are presentational, so the host
//! test-suite can render them with sample data.

mod card_list;
mod map_view;
mod search_bar;
pub mod view_model;

pub use card_list::{CardList, CardListProps};
pub use map_view::{MapView, MapViewProps};
pub use search_bar::{SEARCH_DEBOUNCE_MS, SearchBar, SearchBarProps};

use galeria_core::Local;
use galeria_core::directory::{
    self, DirectoryState, reset_announcement, results_announcement, selection_announcement,
};
use std::rc::Rc;
use yew::prelude::*;

/// Lifecycle of the directory data behind the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryPhase {
    Loading,
    Ready(Rc<Vec<Local>>),
    Error(String),
}

#[function_component(GalleryMap)]
pub fn gallery_map() -> Html {
    let phase = use_state(|| GalleryPhase::Loading);
    let state = use_state(DirectoryState::new);

    {
        let phase = phase.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                match crate::data::fetch_locales(crate::data::LOCALES_URL).await {
                    Ok(locales) => phase.set(GalleryPhase::Ready(Rc::new(locales))),
                    Err(err) => {
                        log::error!("Failed to load the store list: {err}");
                        phase.set(GalleryPhase::Error(err.to_string()));
                    }
                }
            });
            #[cfg(not(target_arch = "wasm32"))]
            let _ = &phase;
            || {}
        });
    }

    match &*phase {
        GalleryPhase::Loading => html! { <LoadingPanel /> },
        GalleryPhase::Error(message) => html! { <ErrorPanel message={message.clone()} /> },
        GalleryPhase::Ready(locales) => {
            let on_query = {
                let state = state.clone();
                let locales = locales.clone();
                Callback::from(move |query: String| {
                    let mut next = (*state).clone();
                    next.set_query(&query);
                    crate::a11y::announce(&results_announcement(next.visible(&locales).len()));
                    state.set(next);
                })
            };
            let on_rubro = {
                let state = state.clone();
                let locales = locales.clone();
                Callback::from(move |rubro: Option<String>| {
                    let mut next = (*state).clone();
                    next.set_rubro(rubro.as_deref());
                    crate::a11y::announce(&results_announcement(next.visible(&locales).len()));
                    state.set(next);
                })
            };
            let on_reset = {
                let state = state.clone();
                Callback::from(move |()| {
                    let mut next = (*state).clone();
                    next.reset();
                    crate::a11y::announce(reset_announcement());
                    state.set(next);
                })
            };
            let on_select = {
                let state = state.clone();
                let locales = locales.clone();
                Callback::from(move |id: String| {
                    let mut next = (*state).clone();
                    next.select(&id);
                    if let Some(local) = locales.iter().find(|local| local.id == id) {
                        crate::a11y::announce(&selection_announcement(local));
                    }
                    crate::dom::scroll_into_view_centered(&format!("local-card-{id}"));
                    state.set(next);
                })
            };
            let on_hover = {
                let state = state.clone();
                Callback::from(move |id: String| {
                    let mut next = (*state).clone();
                    next.hover(&id);
                    state.set(next);
                })
            };
            let on_unhover = {
                let state = state.clone();
                Callback::from(move |()| {
                    let mut next = (*state).clone();
                    next.clear_hover();
                    state.set(next);
                })
            };

            html! {
                <GalleryView locales={locales.clone()}
                             state={(*state).clone()}
                             {on_query} {on_rubro} {on_reset}
                             {on_select} {on_hover} {on_unhover} />
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryViewProps {
    pub locales: Rc<Vec<Local>>,
    pub state: DirectoryState,
    pub on_query: Callback<String>,
    pub on_rubro: Callback<Option<String>>,
    pub on_reset: Callback<()>,
    pub on_select: Callback<String>,
    pub on_hover: Callback<String>,
    pub on_unhover: Callback<()>,
}

/// Presentational layout of the ready widget: search controls, the live
/// region, the map and the card list.
#[function_component(GalleryView)]
pub fn gallery_view(props: &GalleryViewProps) -> Html {
    html! {
        <div class="gallery-layout">
            <SearchBar query={props.state.query().to_string()}
                       rubros={directory::rubros(&props.locales)}
                       active_rubro={props.state.rubro().map(str::to_string)}
                       on_query={props.on_query.clone()}
                       on_rubro={props.on_rubro.clone()}
                       on_reset={props.on_reset.clone()} />
            <div id={crate::a11y::ANNOUNCER_ID}
                 aria-live="polite"
                 aria-atomic="true"
                 class="sr-only">
            </div>
            <MapView locales={props.locales.clone()}
                     state={props.state.clone()}
                     on_select={props.on_select.clone()}
                     on_hover={props.on_hover.clone()}
                     on_unhover={props.on_unhover.clone()} />
            <CardList locales={props.locales.clone()}
                      state={props.state.clone()}
                      on_select={props.on_select.clone()}
                      on_hover={props.on_hover.clone()}
                      on_unhover={props.on_unhover.clone()}
                      on_reset={props.on_reset.clone()} />
        </div>
    }
}

#[function_component(LoadingPanel)]
pub fn loading_panel() -> Html {
    html! {
        <div class="gallery-loading" role="status">
            <p>{ "Cargando los locales…" }</p>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorPanelProps {
    pub message: String,
}

/// Inline error state with a manual reload; there is no automatic retry.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let on_retry = Callback::from(|_: MouseEvent| crate::dom::reload());
    html! {
        <div class="error-message" role="alert">
            <p>{ "⚠️ Error al cargar los datos de los locales" }</p>
            <p class="muted">{ props.message.clone() }</p>
            <button type="button" class="btn-primary" onclick={on_retry}>
                { "Intentar de nuevo" }
            </button>
        </div>
    }
}
