// Host-side tests for the tuning constants and their relationships.

use carousel_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Pixel quantities are positive
    assert!(MIN_THUMB_WIDTH_PX > 0.0);
    assert!(EDGE_TOLERANCE_PX > 0.0);
    assert!(DRAG_MOVE_THRESHOLD_PX > 0.0);
    assert!(NAV_SCROLL_STEP_PX > 0.0);

    // The drag gain amplifies pointer travel
    assert!(DRAG_GAIN >= 1.0);

    // Visibility ratio is a ratio
    assert!(FULL_VISIBILITY_RATIO > 0.0 && FULL_VISIBILITY_RATIO <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn click_threshold_sits_inside_the_edge_tolerance() {
    // A walk that still counts as a click must not be big enough to flip
    // button enablement on its own.
    assert!(DRAG_MOVE_THRESHOLD_PX < EDGE_TOLERANCE_PX);
}
