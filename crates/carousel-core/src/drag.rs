//! Transient pointer-drag sessions.
//!
//! A session starts on pointer-down and is ended by any pointer-up/leave
//! in the window. The two session kinds are independent state with no
//! cross-locking; the single-threaded event loop serializes their writes
//! to the shared scroll offset.

use crate::constants::{DRAG_GAIN, DRAG_MOVE_THRESHOLD_PX};

/// In-progress drag of the content track itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentDrag {
    pub active: bool,
    pub origin_x: f32,
    pub origin_offset: f32,
    /// Set once the pointer has walked past the click threshold; the next
    /// click on the track is suppressed while this is set. Only `begin`
    /// clears it, so a drag-release is never misread as a link activation.
    pub moved: bool,
}

impl ContentDrag {
    pub fn begin(&mut self, x: f32, offset: f32) {
        self.active = true;
        self.origin_x = x;
        self.origin_offset = offset;
        self.moved = false;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// Offset the track should jump to for the current pointer position, or
    /// `None` while the walk is still inside the click threshold. Marks the
    /// session moved once the threshold is crossed. Clamping to the scroll
    /// bounds is left to the browser.
    pub fn target_offset(&mut self, x: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let walk = (x - self.origin_x) * DRAG_GAIN;
        if walk.abs() <= DRAG_MOVE_THRESHOLD_PX {
            return None;
        }
        self.moved = true;
        Some(self.origin_offset - walk)
    }
}

/// In-progress drag of the scrollbar thumb.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThumbDrag {
    pub active: bool,
    pub origin_x: f32,
    pub origin_thumb_offset: f32,
}

impl ThumbDrag {
    pub fn begin(&mut self, x: f32, thumb_offset: f32) {
        self.active = true;
        self.origin_x = x;
        self.origin_thumb_offset = thumb_offset;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// New thumb offset for the current pointer position, clamped into the
    /// rail. `max_thumb_offset` is rail width minus thumb width; a
    /// degenerate rail collapses to offset 0.
    pub fn thumb_offset_for_pointer(&self, x: f32, max_thumb_offset: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let delta = x - self.origin_x;
        Some((self.origin_thumb_offset + delta).clamp(0.0, max_thumb_offset.max(0.0)))
    }
}
