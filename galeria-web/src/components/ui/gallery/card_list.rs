use super::view_model::card_highlighted;
use galeria_core::{DirectoryState, Local};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardListProps {
    pub locales: Rc<Vec<Local>>,
    pub state: DirectoryState,
    pub on_select: Callback<String>,
    pub on_hover: Callback<String>,
    pub on_unhover: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Card list over the filtered stores, with a reset action when the
/// filter matches nothing.
#[function_component(CardList)]
pub fn card_list(props: &CardListProps) -> Html {
    let visible = props.state.visible(&props.locales);

    if visible.is_empty() {
        let on_reset = {
            let cb = props.on_reset.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        return html! {
            <div id="locales-list" class="locales-list">
                <div class="no-results">
                    <p>{ "No se encontraron locales que coincidan con tu búsqueda." }</p>
                    <button type="button" class="btn-primary" onclick={on_reset}>
                        { "Ver todos los locales" }
                    </button>
                </div>
            </div>
        };
    }

    let cards = visible.into_iter().map(|local| {
        let id = local.id.clone();
        let highlighted = card_highlighted(&id, props.state.selected(), props.state.hovered());
        let selected = props.state.selected() == Some(id.as_str());

        let onmouseenter = {
            let on_hover = props.on_hover.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| on_hover.emit(id.clone()))
        };
        let onmouseleave = {
            let on_unhover = props.on_unhover.clone();
            Callback::from(move |_: MouseEvent| on_unhover.emit(()))
        };
        let on_view = {
            let on_select = props.on_select.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
        };

        html! {
            <article id={format!("local-card-{id}")}
                     key={id.clone()}
                     class={classes!(
                         "card",
                         "local-card",
                         highlighted.then_some("highlighted"),
                         selected.then_some("selected"),
                     )}
                     data-local-card={id}
                     {onmouseenter} {onmouseleave}>
                <img src={local.imagen.clone()} alt={local.nombre.clone()} loading="lazy" />
                <div class="card-content">
                    <h3 class="card-title">{ local.nombre.clone() }</h3>
                    <p class="local-rubro">{ local.rubro.clone() }</p>
                    <p class="local-ubicacion">
                        <span class="sr-only">{ "Ubicación: " }</span>
                        { format!("📍 {}", local.ubicacion) }
                    </p>
                    <p class="local-horarios">
                        <span class="sr-only">{ "Horarios: " }</span>
                        { format!("🕒 {}", local.horarios) }
                    </p>
                    { if local.ofertas {
                        html! { <span class="ofertas-badge">{ "¡Ofertas disponibles!" }</span> }
                    } else {
                        html! {}
                    }}
                    <div class="local-accesibilidad">
                        <span class="sr-only">{ "Características de accesibilidad: " }</span>
                        { for local.accesibilidad.iter().map(|tag| html! {
                            <span class="accesibilidad-tag">{ tag.clone() }</span>
                        })}
                    </div>
                    <div class="local-actions">
                        <button type="button"
                                class="btn-secondary"
                                aria-label={format!("Ver {} en el mapa", local.nombre)}
                                onclick={on_view}>
                            { "Ver en mapa" }
                        </button>
                        <a href={local.url.clone()}
                           class="btn-primary"
                           aria-label={format!("Visitar sitio web de {}", local.nombre)}>
                            { "Visitar sitio" }
                        </a>
                    </div>
                </div>
            </article>
        }
    });

    html! {
        <div id="locales-list" class="locales-list">
            { for cards }
        </div>
    }
}
