use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::PageError;

pub fn document() -> Result<Document, PageError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(PageError::MissingWindow)
}

/// Event delegation: the element matching `selector` that the event started
/// in, if any. Children added after the listener was attached match too.
pub fn delegate_target(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
}

/// Smoothly scrolls the first element matching `selector` into view.
pub fn scroll_to(selector: &str) -> Result<(), PageError> {
    let target = document()?
        .query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement {
            selector: selector.to_string(),
        })?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// In-page anchors worth scrolling to; bare `#` links act as buttons.
pub fn is_section_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_named_anchors_scroll() {
        assert!(is_section_anchor("#section--1"));
        assert!(!is_section_anchor("#"));
        assert!(!is_section_anchor(""));
        assert!(!is_section_anchor("https://example.com"));
    }
}
