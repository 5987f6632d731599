use super::{PriceSelect, ResultsPanel};
use galeria_core::catalog::selected_price;
use galeria_core::{CatalogItem, promo};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PairCardProps {
    pub juegos: Vec<CatalogItem>,
}

/// Pair card: every second copy of the same game is half price.
///
/// Recomputes on every change; an empty selection prices as zero, so the
/// panel is always visible.
#[function_component(PairCard)]
pub fn pair_card(props: &PairCardProps) -> Html {
    let selected = use_state(|| None::<String>);
    let qty = use_state(|| 1_u32);

    let price = selected_price(&props.juegos, selected.as_deref()).unwrap_or(0);
    let totals = promo::pair_half(price, *qty);

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

    html! {
        <article class="card promo-card" aria-labelledby="promo-pair-title">
            <h3 id="promo-pair-title">{ "2x1½ en el mismo juego" }</h3>
            <p class="muted">{ "Cada segunda copia del mismo juego sale a mitad de precio." }</p>
            <PriceSelect id="promo-pair-game"
                         label="Juego"
                         items={props.juegos.clone()}
                         on_change={on_pick} />
            <div class="field">
                <label for="promo-pair-qty">{ "Cantidad" }</label>
                <input type="number"
                       id="promo-pair-qty"
                       min="0"
                       value={qty.to_string()}
                       oninput={on_qty} />
            </div>
            <ResultsPanel totals={totals} />
        </article>
    }
}
