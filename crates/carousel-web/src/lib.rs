#![cfg(target_arch = "wasm32")]
//! WASM entry point: discovers the product grids on the page and attaches
//! one carousel controller to each.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod carousel;
mod constants;
mod dom;
mod events;
mod observer;

use constants::GRID_SELECTOR;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let grids = document
        .query_selector_all(GRID_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut attached = 0usize;
    for i in 0..grids.length() {
        if let Some(node) = grids.item(i) {
            if let Ok(grid) = node.dyn_into::<web::HtmlElement>() {
                if attach_carousel(grid) {
                    attached += 1;
                }
            }
        }
    }
    log::info!("[carousel] attached {} controller(s)", attached);
    Ok(())
}

/// Attach one controller and run the initial synchronization pass. A grid
/// whose shell lacks a rail or thumb is left on native scrolling.
fn attach_carousel(grid: web::HtmlElement) -> bool {
    let parts = match carousel::locate(grid) {
        Some(parts) => parts,
        None => {
            log::info!("[carousel] grid without scrollbar rail/thumb, skipping");
            return false;
        }
    };
    let wiring = events::CarouselWiring {
        parts: Rc::new(parts),
        state: carousel::SharedState::default(),
    };
    events::wire_carousel(&wiring);
    observer::observe_cards(&wiring.parts.grid);
    carousel::sync_scrollbar(&wiring.parts, &wiring.state);
    true
}
