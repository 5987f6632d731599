// Accessibility helpers

/// Id of the offscreen live region used for search and selection announcements.
pub const ANNOUNCER_ID: &str = "search-results-announcer";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the
/// page load. Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #1e40af;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region for screen readers
///
/// Updates the text content of the announcer element if present. This
/// provides result-count and selection announcements to assistive
/// technology users.
pub fn announce(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(ANNOUNCER_ID))
    {
        node.set_text_content(Some(msg));
    }
}
