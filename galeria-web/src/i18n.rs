//! Locale formatting for the storefront.
//!
//! Amounts travel as integer cents and render as whole-peso ARS the way
//! `Intl` does it for `es-AR`. The non-wasm path is a deterministic
//! fallback with the same shape, used by the host test-suite.

#[cfg(target_arch = "wasm32")]
use js_sys::{Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const LOCALE: &str = "es-AR";
const CURRENCY: &str = "ARS";

/// Format an amount of cents as whole-peso ARS currency ("$ 12.345").
#[must_use]
pub fn fmt_currency(cents: i64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(raw) = i32::try_from(cents) {
            let amount = f64::from(raw) / 100.0;
            let locales = {
                let arr = js_sys::Array::new();
                arr.push(&JsValue::from_str(LOCALE));
                arr
            };
            let opts = Object::new();
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("style"),
                &JsValue::from_str("currency"),
            );
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("currency"),
                &JsValue::from_str(CURRENCY),
            );
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("minimumFractionDigits"),
                &JsValue::from_f64(0.0),
            );
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("maximumFractionDigits"),
                &JsValue::from_f64(0.0),
            );
            let nf = Intl::NumberFormat::new(&locales, &opts);
            return nf
                .format()
                .call1(&nf, &JsValue::from_f64(amount))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| fallback_ars(cents));
        }
        fallback_ars(cents)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        fallback_ars(cents)
    }
}

fn fallback_ars(cents: i64) -> String {
    let pesos = cents_to_whole_pesos(cents);
    let sign = if pesos < 0 { "-" } else { "" };
    format!("{sign}$ {}", group_thousands(pesos.abs()))
}

/// Round cents to the nearest whole peso, away from zero on ties.
fn cents_to_whole_pesos(cents: i64) -> i64 {
    if cents >= 0 {
        (cents + 50) / 100
    } else {
        -((-cents + 50) / 100)
    }
}

fn group_thousands(mut pesos: i64) -> String {
    let mut groups = Vec::new();
    loop {
        let (rest, group) = (pesos / 1000, pesos % 1000);
        if rest == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
        pesos = rest;
    }
    groups.reverse();
    groups.join(".")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_with_dots() {
        assert_eq!(fmt_currency(0), "$ 0");
        assert_eq!(fmt_currency(800_000), "$ 8.000");
        assert_eq!(fmt_currency(2_000_000), "$ 20.000");
        assert_eq!(fmt_currency(123_456_700), "$ 1.234.567");
    }

    #[test]
    fn currency_rounds_cents_to_whole_pesos() {
        assert_eq!(fmt_currency(225_050), "$ 2.251");
        assert_eq!(fmt_currency(225_049), "$ 2.250");
        assert_eq!(fmt_currency(-99), "-$ 1");
        assert_eq!(fmt_currency(-49), "$ 0");
    }
}
