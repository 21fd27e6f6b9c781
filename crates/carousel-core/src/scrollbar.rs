//! Scrollbar geometry and nav-button enablement.
//!
//! Pure functions over track measurements. The web layer feeds in plain
//! scalars read off the DOM and applies the returned layout as inline
//! styles, so none of this math touches a rendering surface.

use crate::constants::{EDGE_TOLERANCE_PX, MIN_THUMB_WIDTH_PX};

/// Horizontal measurements of a scrollable track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMetrics {
    /// Width of the visible viewport.
    pub visible: f32,
    /// Total scrollable content width.
    pub total: f32,
    /// Current scroll offset from the left edge.
    pub offset: f32,
}

impl TrackMetrics {
    /// Largest offset the browser will accept for these measurements.
    pub fn max_offset(&self) -> f32 {
        (self.total - self.visible).max(0.0)
    }

    /// Whether the content overflows the viewport at all.
    pub fn overflows(&self) -> bool {
        self.total > self.visible
    }
}

/// Width and offset of the thumb inside the rail, in rail pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbGeometry {
    pub width: f32,
    pub offset: f32,
}

/// Enablement of one nav button; mapped to opacity/pointer-events only at
/// the DOM boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavButtonState {
    Enabled,
    Disabled,
}

/// Everything one synchronization pass writes back to the DOM. `thumb` is
/// `None` when the content fits and rail and thumb are hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarLayout {
    pub thumb: Option<ThumbGeometry>,
    pub prev: NavButtonState,
    pub next: NavButtonState,
}

/// Derive the full scrollbar state for the current scroll position.
pub fn layout(metrics: TrackMetrics, rail_width: f32) -> ScrollbarLayout {
    if !metrics.overflows() {
        return ScrollbarLayout {
            thumb: None,
            prev: NavButtonState::Disabled,
            next: NavButtonState::Disabled,
        };
    }
    let width = thumb_width(metrics, rail_width);
    ScrollbarLayout {
        thumb: Some(ThumbGeometry {
            width,
            offset: thumb_offset(metrics, rail_width, width),
        }),
        prev: prev_state(metrics),
        next: next_state(metrics),
    }
}

/// Thumb width proportional to the visible fraction, floored so it stays
/// grabbable and capped at the rail itself.
pub fn thumb_width(metrics: TrackMetrics, rail_width: f32) -> f32 {
    let ratio = metrics.visible / metrics.total;
    (rail_width * ratio).max(MIN_THUMB_WIDTH_PX).min(rail_width)
}

/// Thumb offset inside the rail for the current scroll position.
pub fn thumb_offset(metrics: TrackMetrics, rail_width: f32, thumb_width: f32) -> f32 {
    let span = rail_width - thumb_width;
    let max_offset = metrics.max_offset();
    if span <= 0.0 || max_offset <= 0.0 {
        return 0.0;
    }
    span * (metrics.offset / max_offset).clamp(0.0, 1.0)
}

/// Inverse of [`thumb_offset`]: the track offset a thumb position maps to.
/// Round-trips with it up to clamping. A zero span (content fits exactly)
/// maps to offset 0 rather than dividing by zero.
pub fn offset_for_thumb(
    metrics: TrackMetrics,
    rail_width: f32,
    thumb_width: f32,
    thumb_offset: f32,
) -> f32 {
    let span = rail_width - thumb_width;
    if span <= 0.0 {
        return 0.0;
    }
    metrics.max_offset() * (thumb_offset / span).clamp(0.0, 1.0)
}

/// Prev is disabled once the offset is within tolerance of the left edge.
pub fn prev_state(metrics: TrackMetrics) -> NavButtonState {
    if metrics.offset <= EDGE_TOLERANCE_PX {
        NavButtonState::Disabled
    } else {
        NavButtonState::Enabled
    }
}

/// Next is disabled once the right edge is within tolerance of view.
pub fn next_state(metrics: TrackMetrics) -> NavButtonState {
    if metrics.offset + metrics.visible >= metrics.total - EDGE_TOLERANCE_PX {
        NavButtonState::Disabled
    } else {
        NavButtonState::Enabled
    }
}
