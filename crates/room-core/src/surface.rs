//! Drawing backend abstraction.
//!
//! The scene only ever talks to a [`Surface`]; the web crate backs it with a
//! Canvas2D context, the native crate with an SVG document, and tests with a
//! [`Recorder`]. All coordinates are CSS pixels.

use crate::palette::Rgba;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_viewport(viewport: Vec2) -> Self {
        Self::new(Vec2::ZERO, viewport)
    }

    pub fn centered(center: Vec2, half_extent: f32) -> Self {
        Self::new(center - Vec2::splat(half_extent), Vec2::splat(half_extent * 2.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Minimal 2D drawing vocabulary needed by the blueprint scene.
pub trait Surface {
    /// Erase everything inside the viewport.
    fn clear(&mut self, viewport: Vec2);

    /// Multiplier applied to every following draw until reset to 1.
    fn set_global_alpha(&mut self, alpha: f32);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke);

    /// Ellipse with radii `radii`, rotated by `rotation` radians.
    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, stroke: &Stroke);

    /// Quadratic Bézier from `from` to `to` through control point `ctrl`.
    fn stroke_curve(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke);

    /// Closed polygon fill.
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);

    /// Fill `area` with a radial gradient centred at `center`.
    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        area: Rect,
    );

    /// Horizontally centred label.
    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba);
}

/// One recorded call against a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    GlobalAlpha(f32),
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    StrokeCircle { center: Vec2, radius: f32, stroke: Stroke },
    Ellipse { center: Vec2, radii: Vec2, rotation: f32, stroke: Stroke },
    Curve { from: Vec2, ctrl: Vec2, to: Vec2, stroke: Stroke },
    Polygon { points: Vec<Vec2>, color: Rgba },
    RadialGradient { center: Vec2, radius: f32, stops: Vec<GradientStop>, area: Rect },
    Text { text: String, at: Vec2, font_px: f32, color: Rgba },
}

/// Surface that only remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Solid and dashed line segments, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, &Stroke)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line { from, to, stroke } => Some((*from, *to, stroke)),
            _ => None,
        })
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// Everything except global-alpha bookkeeping and clears.
    pub fn visible_call_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| !matches!(c, DrawCall::Clear | DrawCall::GlobalAlpha(_)))
            .count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _viewport: Vec2) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.calls.push(DrawCall::GlobalAlpha(alpha));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        self.calls.push(DrawCall::StrokeCircle {
            center,
            radius,
            stroke: *stroke,
        });
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, stroke: &Stroke) {
        self.calls.push(DrawCall::Ellipse {
            center,
            radii,
            rotation,
            stroke: *stroke,
        });
    }

    fn stroke_curve(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke) {
        self.calls.push(DrawCall::Curve {
            from,
            ctrl,
            to,
            stroke: *stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        area: Rect,
    ) {
        self.calls.push(DrawCall::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
            area,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            at,
            font_px,
            color,
        });
    }
}
