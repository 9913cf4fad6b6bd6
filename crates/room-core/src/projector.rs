//! Fixed 30° isometric projection from room units to screen pixels.
//!
//! The projector caches its scale and offset, so it must be re-derived with
//! [`IsoProjector::resize`] whenever the viewport changes.

use crate::constants::{
    ILLUSTRATION_ANCHOR_SCREEN, ILLUSTRATION_SCALE_FRACTION, ISO_ANGLE_RAD, LOADER_CENTER,
    LOADER_SCALE_FRACTION,
};
use glam::{Vec2, Vec3};

/// Places a room-space point at a fraction of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub room_point: Vec3,
    pub screen_fraction: Vec2,
}

/// How the room sits in the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    /// Pixels per room unit, as a fraction of `min(width, height)`.
    pub scale_fraction: f32,
    /// Screen position of the room origin when no anchor is set.
    pub center_fraction: Vec2,
    pub anchor: Option<Anchor>,
}

impl Framing {
    pub fn loader() -> Self {
        Self {
            scale_fraction: LOADER_SCALE_FRACTION,
            center_fraction: Vec2::from(LOADER_CENTER),
            anchor: None,
        }
    }

    /// Centres the middle of the room box in the viewport.
    pub fn illustration(room_center: Vec3) -> Self {
        Self {
            scale_fraction: ILLUSTRATION_SCALE_FRACTION,
            center_fraction: Vec2::splat(0.5),
            anchor: Some(Anchor {
                room_point: room_center,
                screen_fraction: Vec2::from(ILLUSTRATION_ANCHOR_SCREEN),
            }),
        }
    }
}

impl Default for Framing {
    fn default() -> Self {
        Self::loader()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IsoProjector {
    framing: Framing,
    viewport: Vec2,
    scale: f32,
    offset: Vec2,
}

impl IsoProjector {
    pub fn new(width: f32, height: f32, framing: Framing) -> Self {
        let mut p = Self {
            framing,
            viewport: Vec2::ONE,
            scale: 1.0,
            offset: Vec2::ZERO,
        };
        p.resize(width, height);
        p
    }

    /// Re-derive scale and offset for a new viewport size (CSS pixels).
    pub fn resize(&mut self, width: f32, height: f32) {
        let sanitize = |v: f32| if v.is_finite() { v.max(1.0) } else { 1.0 };
        self.viewport = Vec2::new(sanitize(width), sanitize(height));
        self.scale = self.viewport.min_element() * self.framing.scale_fraction;
        self.offset = match self.framing.anchor {
            None => self.viewport * self.framing.center_fraction,
            Some(anchor) => {
                let unshifted = iso_basis(anchor.room_point) * self.scale;
                self.viewport * anchor.screen_fraction - unshifted
            }
        };
    }

    #[inline]
    pub fn project(&self, p: Vec3) -> Vec2 {
        iso_basis(p) * self.scale + self.offset
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}

/// Unit-scale isometric mapping without offset.
#[inline]
fn iso_basis(p: Vec3) -> Vec2 {
    let (sin, cos) = ISO_ANGLE_RAD.sin_cos();
    Vec2::new((p.x - p.y) * cos, (p.x + p.y) * sin - p.z)
}
