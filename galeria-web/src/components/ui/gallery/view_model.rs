//! Pure presentation rules for the floor-plan pins.

/// Visual attributes of one floor-plan pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinStyle {
    pub fill: &'static str,
    pub radius: u32,
}

const PIN_DEFAULT: PinStyle = PinStyle {
    fill: "#1e40af",
    radius: 8,
};
const PIN_HOVERED: PinStyle = PinStyle {
    fill: "#f59e0b",
    radius: 10,
};
const PIN_SELECTED: PinStyle = PinStyle {
    fill: "#dc2626",
    radius: 12,
};

/// Resolve the pin appearance under the current overlays.
///
/// Selection wins over hover; hover wins over the default.
#[must_use]
pub fn pin_style(id: &str, selected: Option<&str>, hovered: Option<&str>) -> PinStyle {
    if selected == Some(id) {
        PIN_SELECTED
    } else if hovered == Some(id) {
        PIN_HOVERED
    } else {
        PIN_DEFAULT
    }
}

/// Whether the card for `id` carries the highlighted style.
#[must_use]
pub fn card_highlighted(id: &str, selected: Option<&str>, hovered: Option<&str>) -> bool {
    selected == Some(id) || hovered == Some(id)
}

/// Single-character glyph drawn inside a pin.
#[must_use]
pub fn pin_glyph(nombre: &str) -> String {
    nombre
        .chars()
        .find(|c| c.is_alphanumeric())
        .map_or_else(|| String::from("•"), |c| c.to_uppercase().collect())
}

/// Id of the pin to focus after an arrow key, wrapping at the ends.
#[must_use]
pub fn next_pin<'a>(ids: &'a [String], current: &str, forward: bool) -> Option<&'a str> {
    if ids.is_empty() {
        return None;
    }
    let idx = ids.iter().position(|id| id == current)?;
    let next = if forward {
        (idx + 1) % ids.len()
    } else {
        (idx + ids.len() - 1) % ids.len()
    };
    ids.get(next).map(String::as_str)
}
