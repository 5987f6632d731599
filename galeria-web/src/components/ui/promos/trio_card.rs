use super::{PriceSelect, ResultsPanel};
use galeria_core::catalog::selected_price;
use galeria_core::{CatalogItem, PromoTotals, promo};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TrioCardProps {
    pub servicios: Vec<CatalogItem>,
}

/// "Promo Trío": booking three services, the cheapest one is free.
#[function_component(TrioCard)]
pub fn trio_card(props: &TrioCardProps) -> Html {
    let picks = [
        use_state(|| None::<String>),
        use_state(|| None::<String>),
        use_state(|| None::<String>),
    ];
    let totals = use_state(|| None::<PromoTotals>);

    let on_calculate = {
        let servicios = props.servicios.clone();
        let picks = picks.clone();
        let totals = totals.clone();
        Callback::from(move |_: MouseEvent| {
            let prices: Vec<Option<i64>> = picks
                .iter()
                .map(|pick| selected_price(&servicios, pick.as_deref()))
                .collect();
            match prices[..] {
                [Some(a), Some(b), Some(c)] => {
                    totals.set(Some(promo::cheapest_free([a, b, c])));
                }
                _ => crate::dom::alert(
                    "Por favor selecciona los tres servicios para calcular el descuento.",
                ),
            }
        })
    };

    let pick = |slot: &UseStateHandle<Option<String>>| {
        let slot = slot.clone();
        Callback::from(move |id: Option<String>| slot.set(id))
    };

    html! {
        <article class="card promo-card" aria-labelledby="promo-trio-title">
            <h3 id="promo-trio-title">{ "Promo Trío" }</h3>
            <p class="muted">{ "Reservando tres servicios, el más barato es gratis." }</p>
            <PriceSelect id="promo-trio-service1"
                         label="Primer servicio"
                         items={props.servicios.clone()}
                         on_change={pick(&picks[0])} />
            <PriceSelect id="promo-trio-service2"
                         label="Segundo servicio"
                         items={props.servicios.clone()}
                         on_change={pick(&picks[1])} />
            <PriceSelect id="promo-trio-service3"
                         label="Tercer servicio"
                         items={props.servicios.clone()}
                         on_change={pick(&picks[2])} />
            <button class="btn-primary" onclick={on_calculate}>{ "Calcular descuento" }</button>
            { totals.map_or_else(|| html! {}, |t| html! { <ResultsPanel totals={t} /> }) }
        </article>
    }
}
