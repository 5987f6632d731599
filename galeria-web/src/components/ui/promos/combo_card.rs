use super::{PriceSelect, ResultsPanel};
use galeria_core::catalog::selected_price;
use galeria_core::{CatalogItem, promo};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ComboCardProps {
    pub juegos: Vec<CatalogItem>,
}

/// Combo card: picking three games makes the cheapest one free.
///
/// Partial selections still show the running subtotal, with no discount
/// until all three slots are filled.
#[function_component(ComboCard)]
pub fn combo_card(props: &ComboCardProps) -> Html {
    let picks = [
        use_state(|| None::<String>),
        use_state(|| None::<String>),
        use_state(|| None::<String>),
    ];

    let prices = [
        selected_price(&props.juegos, picks[0].as_deref()),
        selected_price(&props.juegos, picks[1].as_deref()),
        selected_price(&props.juegos, picks[2].as_deref()),
    ];
    let totals = promo::three_pick(prices);

    let pick = |slot: &UseStateHandle<Option<String>>| {
        let slot = slot.clone();
        Callback::from(move |id: Option<String>| slot.set(id))
    };

    html! {
        <article class="card promo-card" aria-labelledby="promo-combo-title">
            <h3 id="promo-combo-title">{ "Combo de tres juegos" }</h3>
            <p class="muted">{ "Eligiendo tres juegos, el más barato va de regalo." }</p>
            <PriceSelect id="promo-combo-game1"
                         label="Primer juego"
                         items={props.juegos.clone()}
                         on_change={pick(&picks[0])} />
            <PriceSelect id="promo-combo-game2"
                         label="Segundo juego"
                         items={props.juegos.clone()}
                         on_change={pick(&picks[1])} />
            <PriceSelect id="promo-combo-game3"
                         label="Tercer juego"
                         items={props.juegos.clone()}
                         on_change={pick(&picks[2])} />
            <ResultsPanel totals={totals} />
        </article>
    }
}
