//! Event wiring for one carousel controller.
//!
//! Session-ending listeners are attached at the window level, not the
//! element level, so a drag keeps tracking correctly even when the pointer
//! leaves the narrow thumb or grid hit area.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use carousel_core::{offset_for_thumb, NAV_SCROLL_STEP_PX};

use crate::carousel::{self, CarouselParts, SharedState};
use crate::constants::GRABBING_CLASS;
use crate::dom;

pub struct CarouselWiring {
    pub parts: Rc<CarouselParts>,
    pub state: SharedState,
}

pub fn wire_carousel(w: &CarouselWiring) {
    wire_scroll_sync(w);
    wire_content_drag(w);
    wire_click_suppression(w);
    wire_thumb_drag(w);
    wire_nav_buttons(w);
}

/// Re-synchronize the scrollbar on grid scroll and window resize.
fn wire_scroll_sync(w: &CarouselWiring) {
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            carousel::sync_scrollbar(&parts, &state);
        }) as Box<dyn FnMut()>);
        let _ = w
            .parts
            .grid
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            carousel::sync_scrollbar(&parts, &state);
        }) as Box<dyn FnMut()>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn wire_content_drag(w: &CarouselWiring) {
    // mousedown on the grid begins a session (primary button only)
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            let x = ev.page_x() as f32 - parts.grid.offset_left() as f32;
            let offset = parts.grid.scroll_left() as f32;
            state.borrow_mut().content_drag.begin(x, offset);
            let _ = parts.grid.class_list().add_1(GRABBING_CLASS);
            carousel::begin_immediate_scroll(&parts.grid);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .parts
            .grid
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // window mousemove applies the walk while a session is active
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if !state.borrow().content_drag.active {
                return;
            }
            ev.prevent_default();
            let x = ev.page_x() as f32 - parts.grid.offset_left() as f32;
            let target = state.borrow_mut().content_drag.target_offset(x);
            if let Some(offset) = target {
                parts.grid.set_scroll_left(offset as i32);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // window mouseup/mouseleave ends the session and restores eased scroll
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            state.borrow_mut().content_drag.end();
            let _ = parts.grid.class_list().remove_1(GRABBING_CLASS);
            carousel::restore_eased_scroll(&parts.grid);
        }) as Box<dyn FnMut()>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            let _ = wnd
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Capture-phase click listener on the grid: a session that moved past the
/// drag threshold must not be misread as a link activation.
fn wire_click_suppression(w: &CarouselWiring) {
    let state = w.state.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if state.borrow().content_drag.moved {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = w.parts.grid.add_event_listener_with_callback_and_bool(
        "click",
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}

fn wire_thumb_drag(w: &CarouselWiring) {
    // mousedown on the thumb
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            begin_thumb_drag(&parts, &state, ev.page_x() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .parts
            .thumb
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touchstart on the thumb; non-passive so preventDefault is honored
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(touch) = ev.touches().get(0) {
                begin_thumb_drag(&parts, &state, touch.page_x() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = w
            .parts
            .thumb
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
        closure.forget();
    }

    // window mousemove/touchmove tracks the thumb and derives the offset
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            on_thumb_move(&parts, &state, ev.page_x() as f32);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                on_thumb_move(&parts, &state, touch.page_x() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let options = web::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
        }
        closure.forget();
    }

    // window mouseup/touchend ends the session
    {
        let parts = w.parts.clone();
        let state = w.state.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            state.borrow_mut().thumb_drag.end();
            carousel::restore_eased_scroll(&parts.grid);
        }) as Box<dyn FnMut()>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            let _ =
                wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn begin_thumb_drag(parts: &CarouselParts, state: &SharedState, page_x: f32) {
    {
        let mut s = state.borrow_mut();
        let origin = s.thumb_offset;
        s.thumb_drag.begin(page_x, origin);
    }
    carousel::begin_immediate_scroll(&parts.grid);
    log::info!("[drag] begin thumb drag");
}

fn on_thumb_move(parts: &CarouselParts, state: &SharedState, page_x: f32) {
    let rail_width = parts.rail.client_width() as f32;
    let thumb_width = parts.thumb.client_width() as f32;
    let new_offset = state
        .borrow()
        .thumb_drag
        .thumb_offset_for_pointer(page_x, rail_width - thumb_width);
    if let Some(new_offset) = new_offset {
        dom::set_style(&parts.thumb, "left", &format!("{}px", new_offset));
        state.borrow_mut().thumb_offset = new_offset;
        let m = carousel::metrics(&parts.grid);
        let track_offset = offset_for_thumb(m, rail_width, thumb_width, new_offset);
        parts.grid.set_scroll_left(track_offset as i32);
    }
}

/// Fixed-step eased scrolling. The feature is active only when both buttons
/// are present in the markup.
fn wire_nav_buttons(w: &CarouselWiring) {
    if let (Some(prev), Some(next)) = (&w.parts.prev, &w.parts.next) {
        wire_nav_step(prev, &w.parts.grid, -NAV_SCROLL_STEP_PX);
        wire_nav_step(next, &w.parts.grid, NAV_SCROLL_STEP_PX);
    }
}

fn wire_nav_step(button: &web::HtmlElement, grid: &web::HtmlElement, step: f64) {
    let grid = grid.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let options = web::ScrollToOptions::new();
        options.set_left(step);
        options.set_behavior(web::ScrollBehavior::Smooth);
        grid.scroll_by_with_scroll_to_options(&options);
    }) as Box<dyn FnMut()>);
    let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
