use super::ResultsPanel;
use galeria_core::promo::{
    BUNDLE_THRESHOLD_CENTS, BundleLine, THRESHOLD_RATE_PCT, ThresholdOutcome,
};
use galeria_core::{CatalogItem, promo};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BundleCardProps {
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineState {
    checked: bool,
    qty: u32,
}

impl Default for LineState {
    fn default() -> Self {
        Self {
            checked: false,
            qty: 1,
        }
    }
}

/// Bundle card: check products, pick quantities, and reach ARS 20.000 to
/// unlock 10% off the whole purchase.
#[function_component(BundleCard)]
pub fn bundle_card(props: &BundleCardProps) -> Html {
    let lines = use_state(|| vec![LineState::default(); props.items.len()]);
    let outcome = use_state(|| None::<ThresholdOutcome>);

    let on_calculate = {
        let items = props.items.clone();
        let lines = lines.clone();
        let outcome = outcome.clone();
        Callback::from(move |_: MouseEvent| {
            let checked: Vec<BundleLine> = items
                .iter()
                .zip(lines.iter())
                .filter(|(_, line)| line.checked)
                .map(|(item, line)| BundleLine {
                    price_cents: item.precio_cents,
                    qty: line.qty,
                })
                .collect();
            if checked.is_empty() {
                crate::dom::alert(
                    "Por favor selecciona al menos un servicio o producto para calcular el descuento.",
                );
                return;
            }
            outcome.set(Some(promo::threshold(
                promo::bundle_subtotal(&checked),
                BUNDLE_THRESHOLD_CENTS,
                THRESHOLD_RATE_PCT,
            )));
        })
    };

    let toggle = |idx: usize| {
        let lines = lines.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*lines).clone();
                if let Some(line) = next.get_mut(idx) {
                    line.checked = input.checked();
                }
                lines.set(next);
            }
        })
    };

    let set_qty = |idx: usize| {
        let lines = lines.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let qty = input.value().parse::<u32>().unwrap_or(1);
                let mut next = (*lines).clone();
                if let Some(line) = next.get_mut(idx) {
                    line.qty = qty;
                }
                lines.set(next);
            }
        })
    };

    let message = match *outcome {
        None => html! {},
        Some(ThresholdOutcome {
            shortfall_cents: None,
            ..
        }) => html! {
            <p class="promo-message promo-message-ok" role="status">
                { "¡Felicitaciones! Tu compra califica para el 10% de descuento." }
            </p>
        },
        Some(ThresholdOutcome {
            shortfall_cents: Some(falta),
            ..
        }) => html! {
            <p class="promo-message promo-message-warn" role="status">
                { format!(
                    "Te faltan {} para obtener el 10% de descuento.",
                    crate::i18n::fmt_currency(falta)
                ) }
            </p>
        },
    };

    html! {
        <article class="card promo-card" aria-labelledby="promo-bundle-title">
            <h3 id="promo-bundle-title">{ "Promo Compra Grande" }</h3>
            <p class="muted">
                { format!(
                    "Sumando {} o más en productos, toda la compra tiene 10% de descuento.",
                    crate::i18n::fmt_currency(BUNDLE_THRESHOLD_CENTS)
                ) }
            </p>
            <ul class="bundle-list">
                { for props.items.iter().enumerate().map(|(idx, item)| {
                    let line = lines.get(idx).copied().unwrap_or_default();
                    let check_id = format!("promo-bundle-item-{idx}");
                    let qty_id = format!("promo-bundle-qty-{idx}");
                    html! {
                        <li class="bundle-line" key={item.id.clone()}>
                            <input type="checkbox"
                                   id={check_id.clone()}
                                   checked={line.checked}
                                   onchange={toggle(idx)} />
                            <label for={check_id}>
                                { format!("{} — {}", item.nombre, crate::i18n::fmt_currency(item.precio_cents)) }
                            </label>
                            <label class="sr-only" for={qty_id.clone()}>
                                { format!("Cantidad de {}", item.nombre) }
                            </label>
                            <input type="number"
                                   id={qty_id}
                                   min="1"
                                   value={line.qty.to_string()}
                                   oninput={set_qty(idx)} />
                        </li>
                    }
                })}
            </ul>
            <button class="btn-primary" onclick={on_calculate}>{ "Calcular descuento" }</button>
            { outcome.map_or_else(|| html! {}, |o| html! { <ResultsPanel totals={o.totals} /> }) }
            { message }
        </article>
    }
}
