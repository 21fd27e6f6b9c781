//! Edge-card visibility: cards partially clipped by the track viewport fade
//! out, fully visible cards fade back in. Cosmetic only; no effect on the
//! scroll math.

use crate::constants::FULL_VISIBILITY_RATIO;

/// Whether an intersection ratio counts as fully visible.
pub fn is_fully_visible(intersection_ratio: f64) -> bool {
    intersection_ratio >= FULL_VISIBILITY_RATIO
}
