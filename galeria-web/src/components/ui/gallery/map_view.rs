use super::view_model::{next_pin, pin_glyph, pin_style};
use galeria_core::{DirectoryState, Local};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub locales: Rc<Vec<Local>>,
    pub state: DirectoryState,
    pub on_select: Callback<String>,
    pub on_hover: Callback<String>,
    pub on_unhover: Callback<()>,
}

/// Move keyboard focus to the pin for `id`.
fn focus_pin(svg: &web_sys::Element, id: &str) {
    let sel = format!("[data-local-id='{id}']");
    if let Ok(Some(el)) = svg.query_selector(&sel) {
        if let Ok(el) = el.dyn_into::<web_sys::SvgElement>() {
            let _ = el.focus();
        }
    }
}

/// SVG floor plan with one focusable pin per store.
///
/// Filtered-out pins are hidden, not removed, so pin identity is stable
/// across searches. Arrow keys move focus between the visible pins,
/// wrapping at the ends.
#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let svg_ref = use_node_ref();

    let visible_ids: Rc<Vec<String>> = Rc::new(
        props
            .locales
            .iter()
            .filter(|local| props.state.matches(local))
            .map(|local| local.id.clone())
            .collect(),
    );

    let pins: Vec<Html> = props.locales.iter().map(|local| {
        let id = local.id.clone();
        let style = pin_style(&id, props.state.selected(), props.state.hovered());
        let visible = props.state.matches(local);

        let onclick = {
            let on_select = props.on_select.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
        };
        let onmouseenter = {
            let on_hover = props.on_hover.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| on_hover.emit(id.clone()))
        };
        let onmouseleave = {
            let on_unhover = props.on_unhover.clone();
            Callback::from(move |_: MouseEvent| on_unhover.emit(()))
        };
        let onkeydown = {
            let on_select = props.on_select.clone();
            let svg_ref = svg_ref.clone();
            let visible_ids = visible_ids.clone();
            let id = id.clone();
            Callback::from(move |e: KeyboardEvent| {
                let key = e.key();
                if key == "Enter" || key == " " {
                    e.prevent_default();
                    on_select.emit(id.clone());
                    return;
                }
                let forward = match key.as_str() {
                    "ArrowRight" | "ArrowDown" => true,
                    "ArrowLeft" | "ArrowUp" => false,
                    _ => return,
                };
                e.prevent_default();
                if let Some(svg) = svg_ref.cast::<web_sys::Element>() {
                    if let Some(target) = next_pin(&visible_ids, &id, forward) {
                        focus_pin(&svg, target);
                    }
                }
            })
        };

        html! {
            <g key={id.clone()}
               class="map-pin"
               data-local-id={id}
               tabindex="0"
               role="button"
               aria-label={format!("Local {} en {}", local.nombre, local.ubicacion)}
               style={format!("display:{}", if visible { "block" } else { "none" })}
               {onclick} {onmouseenter} {onmouseleave} {onkeydown}>
                <circle cx={format!("{}%", local.x)}
                        cy={format!("{}%", local.y)}
                        r={style.radius.to_string()}
                        fill={style.fill}
                        stroke="white"
                        stroke-width="2" />
                <text x={format!("{}%", local.x)}
                      y={format!("{}%", local.y)}
                      dy="0.35em"
                      text-anchor="middle"
                      fill="white"
                      font-size="10"
                      font-weight="bold">
                    { pin_glyph(&local.nombre) }
                </text>
            </g>
        }
    }).collect();

    html! {
        <div id="map-container" class="map-container">
            <svg class="map-svg"
                 viewBox="0 0 100 100"
                 xmlns="http://www.w3.org/2000/svg"
                 role="img"
                 aria-label="Mapa interactivo de la galería"
                 ref={svg_ref}>
                <rect width="100" height="100" fill="#f8fafc" stroke="#e2e8f0" stroke-width="1" />
                <rect x="10" y="20" width="35" height="60" fill="#e2e8f0" stroke="#94a3b8" stroke-width="1" />
                <text x="27.5" y="15" text-anchor="middle" font-size="8" fill="#64748b">{ "Pasillo A" }</text>
                <rect x="55" y="20" width="35" height="60" fill="#e2e8f0" stroke="#94a3b8" stroke-width="1" />
                <text x="72.5" y="15" text-anchor="middle" font-size="8" fill="#64748b">{ "Pasillo B" }</text>
                <rect x="45" y="30" width="10" height="40" fill="#ddd6fe" stroke="#a78bfa" stroke-width="1" />
                <text x="50" y="27" text-anchor="middle" font-size="6" fill="#7c3aed">{ "Centro" }</text>
                <rect x="45" y="85" width="10" height="10" fill="#fef3c7" stroke="#f59e0b" stroke-width="1" />
                <text x="50" y="92" text-anchor="middle" font-size="6" fill="#d97706">{ "Entrada" }</text>
                { for pins }
            </svg>
        </div>
    }
}
