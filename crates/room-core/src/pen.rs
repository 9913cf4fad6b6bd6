//! Blueprint drawing primitives: lines that grow toward their end point with a
//! glowing pen tip, sequenced outlines, dashed reference lines and markers.
//!
//! Every colour goes through [`Pen::ink`], which applies the scene-wide
//! dissolve so the whole drawing can fade uniformly.

use crate::constants::{
    CROSS_ALPHA, CROSS_LINE_WIDTH, DASH_LINE_WIDTH, DASH_PATTERN, PEN_TIP_INNER_ALPHA,
    PEN_TIP_INNER_RADIUS, PEN_TIP_OUTER_ALPHA, PEN_TIP_OUTER_RADIUS,
};
use crate::palette::Rgba;
use crate::projector::IsoProjector;
use crate::surface::{GradientStop, Rect, Stroke, Surface};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// A straight edge in room units.
pub type Segment = (Vec3, Vec3);

/// Edges visiting `corners` in order and closing back to the first one.
pub fn closed_outline(corners: &[Vec3]) -> SmallVec<[Segment; 8]> {
    let n = corners.len();
    (0..n).map(|i| (corners[i], corners[(i + 1) % n])).collect()
}

/// Edges visiting `points` in order without closing.
pub fn polyline(points: &[Vec3]) -> SmallVec<[Segment; 8]> {
    points.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Axis-aligned horizontal rectangle at height `z`.
pub fn floor_rect(x: f32, y: f32, w: f32, d: f32, z: f32) -> [Vec3; 4] {
    [
        Vec3::new(x, y, z),
        Vec3::new(x + w, y, z),
        Vec3::new(x + w, y + d, z),
        Vec3::new(x, y + d, z),
    ]
}

/// Rectangle on the `y = y0` wall plane spanning `x0..x1`, `z0..z1`.
pub fn wall_rect_y(y0: f32, x0: f32, x1: f32, z0: f32, z1: f32) -> [Vec3; 4] {
    [
        Vec3::new(x0, y0, z0),
        Vec3::new(x1, y0, z0),
        Vec3::new(x1, y0, z1),
        Vec3::new(x0, y0, z1),
    ]
}

/// Local progress this close to 0 or 1 snaps to it.
const LOCAL_SNAP: f32 = 1e-5;

#[inline]
fn snap_local(t: f32) -> f32 {
    if t >= 1.0 - LOCAL_SNAP {
        1.0
    } else if t <= LOCAL_SNAP {
        0.0
    } else {
        t
    }
}

/// Local progress of a sub-phase that starts at `start` and lasts `span` of
/// the parent progress, clamped to \[0, 1\].
#[inline]
pub fn stage(progress: f32, start: f32, span: f32) -> f32 {
    if !(progress > start) {
        return if span <= 0.0 && progress >= start { 1.0 } else { 0.0 };
    }
    if span <= 0.0 || progress >= start + span {
        return 1.0;
    }
    snap_local((progress - start) / span)
}

/// Local progress of segment `index` when `count` segments share `progress`
/// equally: segment `i` runs over `i / count ..= (i + 1) / count`.
#[inline]
pub fn sequence_progress(progress: f32, index: usize, count: usize) -> f32 {
    if count == 0 || !(progress > 0.0) {
        return 0.0;
    }
    snap_local(progress * count as f32 - index as f32)
}

pub struct Pen<'a> {
    surface: &'a mut dyn Surface,
    projector: &'a IsoProjector,
    accent: Rgba,
    visibility: f32,
}

impl<'a> Pen<'a> {
    /// `visibility` is `1 - dissolve`.
    pub fn new(
        surface: &'a mut dyn Surface,
        projector: &'a IsoProjector,
        accent: Rgba,
        visibility: f32,
    ) -> Self {
        Self {
            surface,
            projector,
            accent,
            visibility: visibility.clamp(0.0, 1.0),
        }
    }

    /// `1 - dissolve` as given at construction.
    pub fn visibility(&self) -> f32 {
        self.visibility
    }

    pub fn viewport(&self) -> Vec2 {
        self.projector.viewport()
    }

    #[inline]
    pub fn project(&self, p: Vec3) -> Vec2 {
        self.projector.project(p)
    }

    /// Accent colour at `alpha`, faded by the dissolve.
    #[inline]
    pub fn ink(&self, alpha: f32) -> Rgba {
        self.accent.with_alpha(alpha * self.visibility)
    }

    /// Run `draw` with a surface-wide alpha multiplier, restoring it afterwards.
    pub fn with_global_alpha(&mut self, alpha: f32, draw: impl FnOnce(&mut Pen<'a>)) {
        self.surface.set_global_alpha(alpha.clamp(0.0, 1.0));
        draw(self);
        self.surface.set_global_alpha(1.0);
    }

    /// Growing line from `a` toward `b`. Nothing at `progress <= 0`, a prefix
    /// plus pen tip while growing, the full edge without tip at `progress >= 1`.
    pub fn line(&mut self, a: Vec3, b: Vec3, progress: f32, width: f32, alpha: f32) {
        if !(progress > 0.0) {
            return;
        }
        let t = snap_local(progress.min(1.0));
        if t <= 0.0 {
            return;
        }
        let from = self.project(a);
        let to = self.project(b);
        let end = from + (to - from) * t;
        let stroke = Stroke::solid(self.ink(alpha), width);
        self.surface.stroke_line(from, end, &stroke);
        if t < 1.0 {
            self.pen_tip(end);
        }
    }

    /// Draw `segments` one after another, each owning an equal share of `progress`.
    pub fn line_seq(&mut self, segments: &[Segment], progress: f32, width: f32, alpha: f32) {
        if !(progress > 0.0) {
            return;
        }
        let n = segments.len();
        for (i, (a, b)) in segments.iter().enumerate() {
            let local = sequence_progress(progress, i, n);
            self.line(*a, *b, local, width, alpha);
        }
    }

    /// Reference line: grows like [`Pen::line`] but dashed, thin and without a tip.
    pub fn dashed(&mut self, a: Vec3, b: Vec3, progress: f32, alpha: f32) {
        if !(progress > 0.0) {
            return;
        }
        let t = progress.min(1.0);
        let from = self.project(a);
        let to = self.project(b);
        let stroke = Stroke {
            color: self.ink(alpha),
            width: DASH_LINE_WIDTH,
            dash: Some(DASH_PATTERN),
        };
        self.surface.stroke_line(from, from + (to - from) * t, &stroke);
    }

    /// "+" marker of half-size `size` scaled by its own progress.
    pub fn cross(&mut self, at: Vec3, progress: f32, size: f32) {
        if !(progress > 0.0) {
            return;
        }
        let t = progress.min(1.0);
        let s = size * t;
        let c = self.project(at);
        let stroke = Stroke::solid(self.ink(CROSS_ALPHA * t), CROSS_LINE_WIDTH);
        self.surface
            .stroke_line(c - Vec2::new(s, 0.0), c + Vec2::new(s, 0.0), &stroke);
        self.surface
            .stroke_line(c - Vec2::new(0.0, s), c + Vec2::new(0.0, s), &stroke);
    }

    /// Flat translucent fill of a projected quad.
    pub fn fill_quad(&mut self, corners: [Vec3; 4], alpha: f32) {
        let pts = corners.map(|c| self.project(c));
        let color = self.ink(alpha);
        self.surface.fill_polygon(&pts, color);
    }

    pub fn ring(&mut self, center: Vec3, radius: f32, width: f32, alpha: f32) {
        let c = self.project(center);
        let stroke = Stroke::solid(self.ink(alpha), width);
        self.surface.stroke_circle(c, radius.max(0.0), &stroke);
    }

    pub fn ellipse(&mut self, center: Vec3, radii: Vec2, rotation: f32, width: f32, alpha: f32) {
        let c = self.project(center);
        let stroke = Stroke::solid(self.ink(alpha), width);
        self.surface
            .stroke_ellipse(c, radii.max(Vec2::ZERO), rotation, &stroke);
    }

    /// Quadratic curve given in screen space.
    pub fn curve(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, width: f32, alpha: f32) {
        let stroke = Stroke::solid(self.ink(alpha), width);
        self.surface.stroke_curve(from, ctrl, to, &stroke);
    }

    pub fn dot(&mut self, at: Vec2, radius: f32, alpha: f32) {
        let color = self.ink(alpha);
        self.surface.fill_circle(at, radius, color);
    }

    /// Radial accent glow fading to transparent; `stops` are `(offset, alpha)`.
    pub fn radial_glow(&mut self, center: Vec2, radius: f32, stops: &[(f32, f32)], area: Rect) {
        if !(radius > 0.0) {
            return;
        }
        let mut colors: SmallVec<[GradientStop; 4]> = stops
            .iter()
            .map(|(offset, alpha)| GradientStop {
                offset: *offset,
                color: self.ink(*alpha),
            })
            .collect();
        colors.push(GradientStop {
            offset: 1.0,
            color: self.accent.transparent(),
        });
        self.surface
            .fill_radial_gradient(center, radius, &colors, area);
    }

    pub fn label(&mut self, text: &str, at: Vec3, font_px: f32, alpha: f32) {
        let p = self.project(at);
        let color = self.ink(alpha);
        self.surface.fill_text(text, p, font_px, color);
    }

    fn pen_tip(&mut self, at: Vec2) {
        let inner = self.ink(PEN_TIP_INNER_ALPHA);
        let outer = self.ink(PEN_TIP_OUTER_ALPHA);
        self.surface.fill_circle(at, PEN_TIP_INNER_RADIUS, inner);
        self.surface.fill_circle(at, PEN_TIP_OUTER_RADIUS, outer);
    }
}
