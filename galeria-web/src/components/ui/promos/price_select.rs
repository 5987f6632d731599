use galeria_core::CatalogItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PriceSelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub items: Vec<CatalogItem>,
    /// Emits the selected item id, or `None` for the placeholder option.
    pub on_change: Callback<Option<String>>,
}

/// Labeled select over catalog items. The price appears in the option
/// text and is mirrored on `data-price` in whole pesos.
#[function_component(PriceSelect)]
pub fn price_select(props: &PriceSelectProps) -> Html {
    let on_change = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = sel.value();
                cb.emit(if value.is_empty() { None } else { Some(value) });
            }
        })
    };

    html! {
        <div class="field">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <select id={props.id.clone()} onchange={on_change}>
                <option value="">{ "Elegí una opción" }</option>
                { for props.items.iter().map(|item| {
                    html! {
                        <option value={item.id.clone()}
                                data-price={(item.precio_cents / 100).to_string()}>
                            { format!("{} — {}", item.nombre, crate::i18n::fmt_currency(item.precio_cents)) }
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
