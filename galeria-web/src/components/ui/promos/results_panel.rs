use galeria_core::PromoTotals;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsPanelProps {
    pub totals: PromoTotals,
}

/// Subtotal, discount and final total as formatted currency rows.
#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let totals = props.totals;
    html! {
        <dl class="promo-results">
            <div class="promo-row">
                <dt>{ "Subtotal" }</dt>
                <dd class="promo-subtotal">{ crate::i18n::fmt_currency(totals.subtotal_cents) }</dd>
            </div>
            <div class="promo-row">
                <dt>{ "Descuento" }</dt>
                <dd class="promo-descuento">{ crate::i18n::fmt_currency(totals.discount_cents) }</dd>
            </div>
            <div class="promo-row promo-row-total">
                <dt>{ "Total a pagar" }</dt>
                <dd class="promo-total">{ crate::i18n::fmt_currency(totals.total_cents) }</dd>
            </div>
        </dl>
    }
}
