use super::{PriceSelect, ResultsPanel};
use galeria_core::catalog::selected_price;
use galeria_core::promo::{THRESHOLD_RATE_PCT, VOLUME_THRESHOLD_CENTS};
use galeria_core::{CatalogItem, promo};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ThresholdCardProps {
    pub juegos: Vec<CatalogItem>,
}

/// Volume card: spending ARS 900.000 or more takes 10% off the purchase.
#[function_component(ThresholdCard)]
pub fn threshold_card(props: &ThresholdCardProps) -> Html {
    let selected = use_state(|| None::<String>);
    let qty = use_state(|| 1_u32);

    let price = selected_price(&props.juegos, selected.as_deref()).unwrap_or(0);
    let subtotal = price * i64::from(*qty);
    let outcome = promo::threshold(subtotal, VOLUME_THRESHOLD_CENTS, THRESHOLD_RATE_PCT);

    let on_pick = {
        let selected = selected.clone();
        Callback::from(move |id: Option<String>| selected.set(id))
    };
    let on_qty = {
        let qty = qty.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                qty.set(input.value().parse().unwrap_or(0));
            }
        })
    };

    let message = match outcome.shortfall_cents {
        None => html! {
            <p class="promo-message promo-message-ok" role="status">
                { "¡Felicitaciones! Tu compra califica para el 10% de descuento." }
            </p>
        },
        Some(falta) => html! {
            <p class="promo-message promo-message-warn" role="status">
                { format!(
                    "Te faltan {} para obtener el 10% de descuento.",
                    crate::i18n::fmt_currency(falta)
                ) }
            </p>
        },
    };

    html! {
        <article class="card promo-card" aria-labelledby="promo-volume-title">
            <h3 id="promo-volume-title">{ "Descuento por volumen" }</h3>
            <p class="muted">
                { format!(
                    "Superando {} de compra, todo el pedido tiene 10% de descuento.",
                    crate::i18n::fmt_currency(VOLUME_THRESHOLD_CENTS)
                ) }
            </p>
            <PriceSelect id="promo-volume-game"
                         label="Juego"
                         items={props.juegos.clone()}
                         on_change={on_pick} />
            <div class="field">
                <label for="promo-volume-qty">{ "Cantidad" }</label>
                <input type="number"
                       id="promo-volume-qty"
                       min="0"
                       value={qty.to_string()}
                       oninput={on_qty} />
            </div>
            <ResultsPanel totals={outcome.totals} />
            { message }
        </article>
    }
}
