//! Edge-card fade driven by an `IntersectionObserver` rooted at the grid.

use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use carousel_core::{is_fully_visible, FULL_VISIBILITY_RATIO};

use crate::constants::{CARD_FADE_TRANSITION, CARD_SELECTOR};
use crate::dom;

/// Observe every card in the grid and fade it with its intersection ratio.
pub fn observe_cards(grid: &web::HtmlElement) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<web::IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if let Ok(card) = entry.target().dyn_into::<web::HtmlElement>() {
                    let opacity = if is_fully_visible(entry.intersection_ratio()) {
                        "1"
                    } else {
                        "0"
                    };
                    dom::set_style(&card, "opacity", opacity);
                    dom::set_style(&card, "transition", CARD_FADE_TRANSITION);
                }
            }
        },
    )
        as Box<dyn FnMut(_, _)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root(Some(grid.as_ref()));
    options.set_threshold(&JsValue::from(FULL_VISIBILITY_RATIO));

    let observer = match web::IntersectionObserver::new_with_options(
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("[carousel] intersection observer unavailable: {:?}", e);
            return;
        }
    };
    closure.forget();

    if let Ok(cards) = grid.query_selector_all(CARD_SELECTOR) {
        for i in 0..cards.length() {
            if let Some(card) = cards.item(i) {
                if let Ok(el) = card.dyn_into::<web::Element>() {
                    observer.observe(&el);
                }
            }
        }
    }
}
