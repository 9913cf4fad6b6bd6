use crate::constants::{LABEL_FONT_FAMILY, LABEL_FONT_WEIGHT};
use crate::layout;
use glam::Vec2;
use room_core::{GradientStop, Rect, Rgba, Stroke, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas2D backend. Draw calls are in CSS pixels; the context transform maps
/// them onto a backing store scaled by the (capped) device pixel ratio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    css_size: Vec2,
    dpr: f64,
    dashed: bool,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let mut surface = Self {
            canvas,
            ctx,
            css_size: Vec2::ONE,
            dpr: 1.0,
            dashed: false,
        };
        surface.sync_backing_size();
        Ok(surface)
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn css_size(&self) -> Vec2 {
        self.css_size
    }

    /// Match the backing store to the element's CSS box and re-apply the DPR
    /// transform (setting the canvas size resets it). Returns the CSS size.
    pub fn sync_backing_size(&mut self) -> Vec2 {
        let raw_dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let dpr = layout::capped_dpr(raw_dpr);
        let rect = self.canvas.get_bounding_client_rect();
        let (w_px, h_px) = layout::backing_size(rect.width(), rect.height(), dpr);
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).ok();
        self.dpr = dpr;
        self.dashed = false;
        self.css_size = Vec2::new(rect.width().max(1.0) as f32, rect.height().max(1.0) as f32);
        log::debug!(
            "[canvas] backing {}x{} @ dpr {:.2}",
            w_px,
            h_px,
            self.dpr
        );
        self.css_size
    }

    fn apply_stroke(&mut self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
        match stroke.dash {
            Some([on, off]) => {
                let pattern = js_sys::Array::of2(
                    &JsValue::from_f64(on as f64),
                    &JsValue::from_f64(off as f64),
                );
                self.ctx.set_line_dash(&pattern).ok();
                self.dashed = true;
            }
            None if self.dashed => {
                self.ctx.set_line_dash(&js_sys::Array::new()).ok();
                self.dashed = false;
            }
            None => {}
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Vec2) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.x as f64, viewport.y as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .ok();
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .ok();
        self.ctx.stroke();
    }

    fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx
            .ellipse(
                center.x as f64,
                center.y as f64,
                radii.x.max(0.0) as f64,
                radii.y.max(0.0) as f64,
                rotation as f64,
                0.0,
                TAU,
            )
            .ok();
        self.ctx.stroke();
    }

    fn stroke_curve(&mut self, from: Vec2, ctrl: Vec2, to: Vec2, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx
            .quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
        area: Rect,
    ) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, radius.max(0.0) as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[canvas] radial gradient failed: {:?}", e);
                return;
            }
        };
        for stop in stops {
            gradient
                .add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_css())
                .ok();
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(
            area.origin.x as f64,
            area.origin.y as f64,
            area.size.x as f64,
            area.size.y as f64,
        );
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font_px: f32, color: Rgba) {
        self.ctx
            .set_font(&layout::label_font(font_px, LABEL_FONT_WEIGHT, LABEL_FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_text(text, at.x as f64, at.y as f64).ok();
    }
}
