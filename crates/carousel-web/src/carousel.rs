//! One controller instance per product grid: element discovery, shared
//! session state, and the synchronize pass that writes scrollbar geometry
//! back to the DOM.

use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use carousel_core::{ContentDrag, NavButtonState, ScrollbarLayout, ThumbDrag, TrackMetrics};

use crate::constants::{
    NAV_DISABLED_OPACITY, NAV_ENABLED_OPACITY, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR,
    RAIL_SELECTOR, SHELL_SELECTOR, THUMB_SELECTOR,
};
use crate::dom;

/// Elements one controller drives. `prev`/`next` are optional; a grid whose
/// shell lacks a rail or thumb never gets a controller.
pub struct CarouselParts {
    pub grid: web::HtmlElement,
    pub rail: web::HtmlElement,
    pub thumb: web::HtmlElement,
    pub prev: Option<web::HtmlElement>,
    pub next: Option<web::HtmlElement>,
}

/// Mutable session state shared by one controller's event closures. Each
/// carousel on the page owns its own cell, so multiple instances never
/// interfere.
#[derive(Default)]
pub struct CarouselState {
    pub content_drag: ContentDrag,
    pub thumb_drag: ThumbDrag,
    /// Thumb offset last written to the DOM, in rail pixels.
    pub thumb_offset: f32,
}

pub type SharedState = Rc<RefCell<CarouselState>>;

/// Locate the scrollbar and nav elements belonging to a grid, relative to
/// its enclosing shell (falling back to the direct parent).
pub fn locate(grid: web::HtmlElement) -> Option<CarouselParts> {
    let shell = grid
        .closest(SHELL_SELECTOR)
        .ok()
        .flatten()
        .or_else(|| grid.parent_element())?;
    let rail = dom::query_html(&shell, RAIL_SELECTOR)?;
    let thumb = dom::query_html(&shell, THUMB_SELECTOR)?;
    let prev = dom::query_html(&shell, PREV_BUTTON_SELECTOR);
    let next = dom::query_html(&shell, NEXT_BUTTON_SELECTOR);
    Some(CarouselParts {
        grid,
        rail,
        thumb,
        prev,
        next,
    })
}

/// Current track measurements, read straight off the grid element.
pub fn metrics(grid: &web::HtmlElement) -> TrackMetrics {
    TrackMetrics {
        visible: grid.client_width() as f32,
        total: grid.scroll_width() as f32,
        offset: grid.scroll_left() as f32,
    }
}

/// One synchronization pass: derive thumb geometry and button states from
/// the current scroll position and write them out. Runs on scroll, on
/// resize, after programmatic scrolls, and once at attach time.
pub fn sync_scrollbar(parts: &CarouselParts, state: &SharedState) {
    let m = metrics(&parts.grid);
    let layout = carousel_core::layout(m, parts.rail.client_width() as f32);
    apply_layout(parts, state, &layout);
}

fn apply_layout(parts: &CarouselParts, state: &SharedState, layout: &ScrollbarLayout) {
    match layout.thumb {
        Some(thumb) => {
            dom::set_style(&parts.rail, "opacity", "1");
            dom::set_style(&parts.thumb, "display", "block");
            dom::set_style(&parts.thumb, "width", &format!("{}px", thumb.width));
            dom::set_style(&parts.thumb, "left", &format!("{}px", thumb.offset));
            state.borrow_mut().thumb_offset = thumb.offset;
        }
        None => {
            // Content fits: no interaction possible.
            dom::set_style(&parts.thumb, "display", "none");
            dom::set_style(&parts.rail, "opacity", "0");
        }
    }
    if let Some(prev) = &parts.prev {
        apply_nav_state(prev, layout.prev);
    }
    if let Some(next) = &parts.next {
        apply_nav_state(next, layout.next);
    }
}

/// Map button enablement to its visual encoding.
pub fn apply_nav_state(button: &web::HtmlElement, state: NavButtonState) {
    match state {
        NavButtonState::Enabled => {
            dom::set_style(button, "opacity", NAV_ENABLED_OPACITY);
            dom::set_style(button, "pointer-events", "auto");
        }
        NavButtonState::Disabled => {
            dom::set_style(button, "opacity", NAV_DISABLED_OPACITY);
            dom::set_style(button, "pointer-events", "none");
        }
    }
}

// Easing/snap toggles shared by both drag kinds. A drag has to track the
// pointer 1:1, so smooth scrolling and snap are off while a session is
// active and restored on release.

pub fn begin_immediate_scroll(grid: &web::HtmlElement) {
    dom::set_style(grid, "scroll-behavior", "auto");
    dom::set_style(grid, "scroll-snap-type", "none");
}

pub fn restore_eased_scroll(grid: &web::HtmlElement) {
    dom::set_style(grid, "scroll-behavior", "smooth");
    dom::set_style(grid, "scroll-snap-type", "x mandatory");
}
