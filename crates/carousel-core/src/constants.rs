// Carousel interaction tuning constants

/// Smallest width the thumb will render at, so it stays grabbable on very
/// long tracks.
pub const MIN_THUMB_WIDTH_PX: f32 = 60.0;

/// Scroll positions within this many pixels of an edge count as the edge,
/// absorbing sub-pixel scroll noise in button enablement.
pub const EDGE_TOLERANCE_PX: f32 = 10.0;

/// Multiplier from pointer travel to scroll travel during a content drag.
pub const DRAG_GAIN: f32 = 1.5;

/// Pointer walk below this is still a click, not a drag.
pub const DRAG_MOVE_THRESHOLD_PX: f32 = 5.0;

/// Fixed step applied by the prev/next buttons; settling on item
/// boundaries is left to native scroll snapping.
pub const NAV_SCROLL_STEP_PX: f64 = 350.0;

/// Intersection ratio at which a card counts as fully visible.
pub const FULL_VISIBILITY_RATIO: f64 = 0.99;
