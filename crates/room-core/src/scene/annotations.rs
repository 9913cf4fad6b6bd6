// Drafting annotations and light: corner marks, dimension lines with labels,
// and the warm wash coming through the window.

use super::RoomGeometry;
use crate::constants::CROSS_DEFAULT_SIZE;
use crate::pen::{stage, Pen};
use crate::surface::Rect;
use glam::Vec3;

/// Millimetre label grouped in thousands, e.g. `7 000 mm`.
pub fn millimetre_label(room_units: f32) -> String {
    let mm = (room_units * 1000.0).round().max(0.0) as u64;
    let digits = mm.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out.push_str(" mm");
    out
}

pub fn draw_dimensions(pen: &mut Pen, room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (w, d, h) = (room.width, room.depth, room.height);

    let corners = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(w, 0.0, 0.0),
        Vec3::new(0.0, d, 0.0),
        Vec3::new(w, d, 0.0),
        Vec3::new(0.0, 0.0, h),
        Vec3::new(w, 0.0, h),
    ];
    for (i, c) in corners.iter().enumerate() {
        let cp = ((progress - i as f32 * 0.05) / 0.5).max(0.0);
        pen.cross(*c, cp, CROSS_DEFAULT_SIZE);
    }

    let dp = stage(progress, 0.2, 0.8);
    let dash_alpha = 0.3;

    // width, measured in front of the room
    pen.dashed(Vec3::new(0.0, d + 0.6, 0.0), Vec3::new(w, d + 0.6, 0.0), dp, dash_alpha);
    pen.line(Vec3::new(0.0, d + 0.4, 0.0), Vec3::new(0.0, d + 0.8, 0.0), dp, 0.5, 0.25);
    pen.line(Vec3::new(w, d + 0.4, 0.0), Vec3::new(w, d + 0.8, 0.0), dp, 0.5, 0.25);

    // height, right of the room
    pen.dashed(Vec3::new(w + 0.6, 0.0, 0.0), Vec3::new(w + 0.6, 0.0, h), dp, dash_alpha);
    pen.line(Vec3::new(w + 0.4, 0.0, 0.0), Vec3::new(w + 0.8, 0.0, 0.0), dp, 0.5, 0.25);
    pen.line(Vec3::new(w + 0.4, 0.0, h), Vec3::new(w + 0.8, 0.0, h), dp, 0.5, 0.25);

    if progress > 0.5 {
        let tp = stage(progress, 0.5, 0.5);
        let font_px = (pen.viewport().x * 0.008).clamp(9.0, 11.0);
        pen.label(
            &millimetre_label(w),
            Vec3::new(w / 2.0, d + 1.0, 0.0),
            font_px,
            0.35 * tp,
        );
        pen.label(
            &millimetre_label(h),
            Vec3::new(w + 1.0, 0.0, h / 2.0),
            font_px,
            0.35 * tp,
        );
    }
}

/// Daylight wash from the window plus a beam falling onto the floor.
pub fn draw_glow(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let g = progress.min(1.0);
    let viewport = pen.viewport();
    let center = pen.project(Vec3::new(3.0, 0.0, 2.1));
    let radius = viewport.min_element() * 0.5 * g;
    pen.radial_glow(
        center,
        radius,
        &[(0.0, 0.08 * g), (0.4, 0.03 * g)],
        Rect::from_viewport(viewport),
    );

    if progress > 0.3 {
        let bp = stage(progress, 0.3, 0.7);
        pen.fill_quad(
            [
                Vec3::new(1.5, 0.0, 2.5),
                Vec3::new(4.5, 0.0, 2.5),
                Vec3::new(5.0, 3.5, 0.0),
                Vec3::new(1.0, 3.0, 0.0),
            ],
            0.5 * 0.06 * bp,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::millimetre_label;

    #[test]
    fn labels_group_thousands() {
        assert_eq!(millimetre_label(7.0), "7 000 mm");
        assert_eq!(millimetre_label(3.8), "3 800 mm");
        assert_eq!(millimetre_label(12.25), "12 250 mm");
        assert_eq!(millimetre_label(0.5), "500 mm");
    }
}
