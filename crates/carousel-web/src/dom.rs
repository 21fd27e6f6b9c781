use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Structural query scoped to one element. A missing match and a bad
/// selector both collapse to `None`; the caller treats either as "feature
/// not active".
#[inline]
pub fn query_html(scope: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    scope
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}
