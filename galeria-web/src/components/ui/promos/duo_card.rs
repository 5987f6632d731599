use super::{PriceSelect, ResultsPanel};
use galeria_core::catalog::selected_price;
use galeria_core::{CatalogItem, PromoTotals, promo};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DuoCardProps {
    pub productos: Vec<CatalogItem>,
}

/// "Promo Dúo": taking two products, the cheaper one is half price.
#[function_component(DuoCard)]
pub fn duo_card(props: &DuoCardProps) -> Html {
    let first = use_state(|| None::<String>);
    let second = use_state(|| None::<String>);
    let totals = use_state(|| None::<PromoTotals>);

    let on_calculate = {
        let productos = props.productos.clone();
        let first = first.clone();
        let second = second.clone();
        let totals = totals.clone();
        Callback::from(move |_: MouseEvent| {
            let a = selected_price(&productos, first.as_deref());
            let b = selected_price(&productos, second.as_deref());
            match (a, b) {
                (Some(a), Some(b)) => totals.set(Some(promo::cheapest_half(a, b))),
                _ => crate::dom::alert(
                    "Por favor selecciona ambos productos para calcular el descuento.",
                ),
            }
        })
    };

    let pick = |slot: &UseStateHandle<Option<String>>| {
        let slot = slot.clone();
        Callback::from(move |id: Option<String>| slot.set(id))
    };

    html! {
        <article class="card promo-card" aria-labelledby="promo-duo-title">
            <h3 id="promo-duo-title">{ "Promo Dúo" }</h3>
            <p class="muted">{ "Llevando dos productos, el más barato sale a mitad de precio." }</p>
            <PriceSelect id="promo-duo-product1"
                         label="Primer producto"
                         items={props.productos.clone()}
                         on_change={pick(&first)} />
            <PriceSelect id="promo-duo-product2"
                         label="Segundo producto"
                         items={props.productos.clone()}
                         on_change={pick(&second)} />
            <button class="btn-primary" onclick={on_calculate}>{ "Calcular descuento" }</button>
            { totals.map_or_else(|| html! {}, |t| html! { <ResultsPanel totals={t} /> }) }
        </article>
    }
}
