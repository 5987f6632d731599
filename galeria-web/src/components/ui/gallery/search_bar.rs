use gloo_timers::callback::Timeout;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Delay between the last keystroke and the filter actually running.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    /// The query currently applied to the directory.
    pub query: String,
    pub rubros: Vec<String>,
    /// Active rubro filter, lowercased; `None` means "todos".
    pub active_rubro: Option<String>,
    pub on_query: Callback<String>,
    pub on_rubro: Callback<Option<String>>,
    pub on_reset: Callback<()>,
}

/// Debounced search input plus rubro filter buttons and a reset action.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let input_ref = use_node_ref();
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        // Keep the input in sync when the query is cleared elsewhere,
        // e.g. the no-results panel's reset button.
        let input_ref = input_ref.clone();
        use_effect_with(props.query.clone(), move |query: &String| {
            if query.is_empty() {
                if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                    input.set_value("");
                }
            }
        });
    }

    let oninput = {
        let pending = pending.clone();
        let on_query = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let value = input.value();
                let on_query = on_query.clone();
                let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_query.emit(value));
                if let Some(prev) = pending.borrow_mut().replace(timeout) {
                    prev.cancel();
                }
            }
        })
    };

    let onkeydown = {
        let pending = pending.clone();
        let on_reset = props.on_reset.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                if let Some(prev) = pending.borrow_mut().take() {
                    prev.cancel();
                }
                if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                    input.set_value("");
                }
                on_reset.emit(());
            }
        })
    };

    let on_reset_click = {
        let pending = pending.clone();
        let on_reset = props.on_reset.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prev) = pending.borrow_mut().take() {
                prev.cancel();
            }
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            on_reset.emit(());
        })
    };

    let all_active = props.active_rubro.is_none();
    let on_all = {
        let on_rubro = props.on_rubro.clone();
        Callback::from(move |_: MouseEvent| on_rubro.emit(None))
    };

    let filter_buttons = props.rubros.iter().map(|rubro| {
        let active = props.active_rubro.as_deref() == Some(rubro.to_lowercase().as_str());
        let onclick = {
            let on_rubro = props.on_rubro.clone();
            let rubro = rubro.clone();
            Callback::from(move |_: MouseEvent| on_rubro.emit(Some(rubro.clone())))
        };
        html! {
            <button type="button"
                    key={rubro.clone()}
                    class={classes!("filter-btn", active.then_some("active"))}
                    data-filter={rubro.to_lowercase()}
                    {onclick}>
                { rubro.clone() }
            </button>
        }
    });

    html! {
        <div class="search-bar">
            <div class="field">
                <label for="search-locales" class="sr-only">{ "Buscar locales" }</label>
                <input id="search-locales"
                       type="search"
                       placeholder="Buscar por nombre, rubro o ubicación"
                       aria-describedby="search-help"
                       ref={input_ref}
                       {oninput} {onkeydown} />
                <p id="search-help" class="sr-only">
                    { "Busca locales por nombre o rubro. Los resultados se actualizarán automáticamente." }
                </p>
            </div>
            <div class="filter-buttons" role="group" aria-label="Filtrar por rubro">
                <button type="button"
                        class={classes!("filter-btn", all_active.then_some("active"))}
                        data-filter="all"
                        onclick={on_all}>
                    { "Todos" }
                </button>
                { for filter_buttons }
            </div>
            <button type="button" id="reset-search" class="btn-secondary" onclick={on_reset_click}>
                { "Reiniciar búsqueda" }
            </button>
        </div>
    }
}
