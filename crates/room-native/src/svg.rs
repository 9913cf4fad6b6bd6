//! SVG backend for [`Surface`]: every draw call becomes one element, so a frame
//! can be diffed or viewed in a browser without running the page.

use glam::Vec2;
use room_core::{GradientStop, Rect, Rgba, Stroke, Surface};
use std::fmt::Write;

const LABEL_FONT: &str = "Montserrat, sans-serif";

pub struct SvgSurface {
    size: Vec2,
    background: Rgba,
    defs: String,
    body: String,
    global_alpha: f32,
    gradients: usize,
}

impl SvgSurface {
    pub fn new(size: Vec2, background: Rgba) -> Self {
        Self {
            size,
            background,
            defs: String::new(),
            body: String::new(),
            global_alpha: 1.0,
            gradients: 0,
        }
    }

    /// Complete standalone document for the current frame.
    pub fn document(&self) -> String {
        let (w, h) = (self.size.x, self.size.y);
        let mut out = String::with_capacity(self.body.len() + self.defs.len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#
        );
        if !self.defs.is_empty() {
            let _ = writeln!(out, "<defs>\n{}</defs>", self.defs);
        }
        let _ = writeln!(
            out,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            self.background.to_hex()
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn alpha(&self, color: Rgba) -> f32 {
        (color.a * self.global_alpha).clamp(0.0, 1.0)
    }

    fn stroke_attrs(&self, stroke: &Stroke) -> String {
        let mut attrs = format!(
            r#"fill="none" stroke="{}" stroke-opacity="{:.4}" stroke-width="{:.2}""#,
            stroke.color.to_hex(),
            self.alpha(stroke.color),
            stroke.width
        );
        if let Some([on, off]) = stroke.dash {
            let _ = write!(attrs, r#" stroke-dasharray="{on} {off}""#);
        }
        attrs
    }

    fn fill_attrs(&self, color: Rgba) -> String {
        format!(
            r#"fill="{}" fill-opacity="{:.4}""#,
            color.to_hex(),
            self.alpha(color)
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn clear(&mut self, viewport: Vec2) {
        self.size = viewport;
        self.defs.clear();
        self.body.clear();
        self.gradients = 0;
        self.global_alpha = 1.0;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        let attrs = self.stroke_attrs(stroke);
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {attrs}/>"#,
            from.x, from.y, to.x, to.y
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let attrs = self.fill_attrs(color);
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {attrs}/>"#,
            center.x,
            center.y,
            radius.max(0.0)
        );
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        let attrs = self.stroke_attrs(stroke);
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {attrs}/>"#,
            center.x,
            center.y,
            radius.max(0.0)
        );
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, stroke: &Stroke) {
        let attrs = self.stroke_attrs(stroke);
        let _ = writeln!(
            self.body,
            r#"<ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" transform="rotate({:.3} {:.2} {:.2})" {attrs}/>"#,
            center.x,
            center.y,
            radii.x.max(0.0),
            radii.y.max(0.0),
            rotation.to_degrees(),
            center.x,
            center.y
        );
    }

    fn stroke_curve(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke) {
        let attrs = self.stroke_attrs(stroke);
        let _ = writeln!(
            self.body,
            r#"<path d="M{:.2} {:.2} Q{:.2} {:.2} {:.2} {:.2}" {attrs}/>"#,
            from.x, from.y, ctrl.x, ctrl.y, to.x, to.y
        );
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        if points.len() < 3 {
            return;
        }
        let mut pts = String::new();
        for p in points {
            let _ = write!(pts, "{:.2},{:.2} ", p.x, p.y);
        }
        let attrs = self.fill_attrs(color);
        let _ = writeln!(self.body, r#"<polygon points="{}" {attrs}/>"#, pts.trim_end());
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        area: Rect,
    ) {
        if !(radius > 0.0) {
            return;
        }
        let id = format!("glow{}", self.gradients);
        self.gradients += 1;
        let _ = writeln!(
            self.defs,
            r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{:.2}" cy="{:.2}" r="{:.2}">"#,
            center.x, center.y, radius
        );
        for stop in stops {
            let _ = writeln!(
                self.defs,
                r#"<stop offset="{:.3}" stop-color="{}" stop-opacity="{:.4}"/>"#,
                stop.offset.clamp(0.0, 1.0),
                stop.color.to_hex(),
                self.alpha(stop.color)
            );
        }
        self.defs.push_str("</radialGradient>\n");
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="url(#{id})"/>"#,
            area.origin.x, area.origin.y, area.size.x, area.size.y
        );
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba) {
        let attrs = self.fill_attrs(color);
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="{LABEL_FONT}" font-weight="300" font-size="{:.1}" text-anchor="middle" {attrs}>{}</text>"#,
            at.x,
            at.y,
            font_px,
            escape(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_core::{
        Element, Palette, ProgressRecord, Recorder, SceneConfig, SceneRenderer, Schedule,
    };

    fn sampled(schedule: &Schedule, t: f32) -> ProgressRecord {
        let mut record = ProgressRecord::new();
        schedule.sample(t, &mut record);
        record
    }

    #[test]
    fn one_svg_line_per_recorded_line() {
        let schedule = Schedule::loader().unwrap();
        let renderer = SceneRenderer::new(SceneConfig::loader(), 1024.0, 768.0);
        for t in [0.5, 1.8, 3.0, 4.2] {
            let record = sampled(&schedule, t);
            let mut rec = Recorder::new();
            renderer.render(&mut rec, &record);
            let palette = Palette::default();
            let mut svg = SvgSurface::new(Vec2::new(1024.0, 768.0), palette.background);
            renderer.render(&mut svg, &record);
            let doc = svg.document();
            assert_eq!(doc.matches("<line ").count(), rec.lines().count(), "t={t}");
        }
    }

    #[test]
    fn document_is_well_formed_and_painted() {
        let mut svg = SvgSurface::new(Vec2::new(200.0, 100.0), Palette::default().background);
        svg.clear(Vec2::new(200.0, 100.0));
        svg.fill_text("a < b & c", Vec2::new(10.0, 10.0), 10.0, Palette::default().accent);
        let doc = svg.document();
        assert!(doc.starts_with("<svg "));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert!(doc.contains(r##"fill="#0a0a08""##));
        assert!(doc.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn global_alpha_scales_opacity() {
        let accent = Palette::default().accent;
        let mut svg = SvgSurface::new(Vec2::splat(10.0), accent);
        svg.set_global_alpha(0.5);
        svg.fill_circle(Vec2::ZERO, 1.0, accent.with_alpha(0.5));
        assert!(svg.document().contains(r#"fill-opacity="0.2500""#));
    }

    #[test]
    fn glow_emits_gradient_definition() {
        let schedule = Schedule::loader().unwrap();
        let renderer = SceneRenderer::new(SceneConfig::loader(), 800.0, 600.0);
        let record = sampled(&schedule, 4.3);
        assert!(record.get(Element::Glow) > 0.0);
        let mut svg = SvgSurface::new(Vec2::new(800.0, 600.0), Palette::default().background);
        renderer.render(&mut svg, &record);
        let doc = svg.document();
        assert!(doc.contains("<radialGradient id=\"glow0\""));
        assert!(doc.contains("url(#glow0)"));
    }
}
