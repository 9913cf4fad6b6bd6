use crate::constants::{SCROLL_END_FRACTION, SCROLL_START_FRACTION};

/// Maps a section's on-screen position to scroll progress.
///
/// `start` and `end` are viewport-height fractions: progress is 0 while the
/// section top is below `start * vh` and 1 once its bottom has risen to
/// `end * vh`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f32,
    pub end: f32,
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self {
            start: SCROLL_START_FRACTION,
            end: SCROLL_END_FRACTION,
        }
    }
}

impl ScrollRange {
    /// `section_top` is the section's bounding-rect top relative to the
    /// viewport, in CSS pixels.
    pub fn progress(&self, section_top: f32, section_height: f32, viewport_height: f32) -> f32 {
        let start_px = self.start * viewport_height;
        let end_px = self.end * viewport_height;
        // top travels from start_px down to (end_px - height)
        let distance = start_px - (end_px - section_height.max(0.0));
        if !(distance > 0.0) {
            return if section_top <= start_px { 1.0 } else { 0.0 };
        }
        let p = (start_px - section_top) / distance;
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0)
        }
    }
}
