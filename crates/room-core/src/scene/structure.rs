// Shell of the room: grid, floor, walls, ceiling and the openings cut into them.

use super::RoomGeometry;
use crate::pen::{closed_outline, floor_rect, polyline, stage, wall_rect_y, Pen};
use glam::Vec3;

pub fn draw_grid(pen: &mut Pen, room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (w, d) = (room.width, room.depth);
    let alpha = progress.min(1.0) * 0.15 * pen.visibility();
    pen.with_global_alpha(alpha, |pen| {
        for i in 0..=(w.floor() as u32) {
            let x = i as f32;
            pen.line(Vec3::new(x, 0.0, 0.0), Vec3::new(x, d, 0.0), 1.0, 0.3, 0.12);
        }
        for j in 0..=(d.floor() as u32) {
            let y = j as f32;
            pen.line(Vec3::new(0.0, y, 0.0), Vec3::new(w, y, 0.0), 1.0, 0.3, 0.12);
        }
    });
}

pub fn draw_floor(pen: &mut Pen, room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let outline = closed_outline(&floor_rect(0.0, 0.0, room.width, room.depth, 0.0));
    pen.line_seq(&outline, progress, 1.5, 0.8);
}

/// Wall on the `x = 0` plane, spanning the room depth.
pub fn draw_wall_left(pen: &mut Pen, room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (d, wh) = (room.depth, room.height);
    let h = wh * progress.min(1.0);
    pen.line(Vec3::ZERO, Vec3::new(0.0, 0.0, h), 1.0, 1.5, 0.9);
    pen.line(Vec3::new(0.0, d, 0.0), Vec3::new(0.0, d, h), 1.0, 1.5, 0.9);
    if progress >= 1.0 {
        pen.line(Vec3::new(0.0, 0.0, wh), Vec3::new(0.0, d, wh), 1.0, 1.5, 0.9);
    }
    if progress > 0.6 {
        let fill = stage(progress, 0.6, 0.4) * 0.035;
        pen.fill_quad(
            [
                Vec3::ZERO,
                Vec3::new(0.0, d, 0.0),
                Vec3::new(0.0, d, h),
                Vec3::new(0.0, 0.0, h),
            ],
            fill,
        );
    }
}

/// Wall on the `y = 0` plane, spanning the room width.
pub fn draw_wall_right(pen: &mut Pen, room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (w, wh) = (room.width, room.height);
    let h = wh * progress.min(1.0);
    pen.line(Vec3::ZERO, Vec3::new(0.0, 0.0, h), 1.0, 1.3, 0.85);
    pen.line(Vec3::new(w, 0.0, 0.0), Vec3::new(w, 0.0, h), 1.0, 1.3, 0.85);
    if progress >= 1.0 {
        pen.line(Vec3::new(0.0, 0.0, wh), Vec3::new(w, 0.0, wh), 1.0, 1.3, 0.85);
    }
    if progress > 0.6 {
        let fill = stage(progress, 0.6, 0.4) * 0.03;
        pen.fill_quad(wall_rect_y(0.0, 0.0, w, 0.0, h), fill);
    }
}

pub fn draw_ceiling(pen: &mut Pen, room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let outline = closed_outline(&floor_rect(0.0, 0.0, room.width, room.depth, room.height));
    pen.line_seq(&outline, progress, 0.7, 0.35);
}

/// Large window centred on the `y = 0` wall.
pub fn draw_window(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (x1, x2, z1, z2) = (1.5, 4.5, 1.2, 3.0);
    let frame = wall_rect_y(0.0, x1, x2, z1, z2);
    pen.line_seq(&closed_outline(&frame), progress, 1.4, 0.9);

    // mullions
    let mp = stage(progress, 0.5, 0.5);
    let (mx, mz) = ((x1 + x2) / 2.0, (z1 + z2) / 2.0);
    pen.line(Vec3::new(mx, 0.0, z1), Vec3::new(mx, 0.0, z2), mp, 0.8, 0.6);
    pen.line(Vec3::new(x1, 0.0, mz), Vec3::new(x2, 0.0, mz), mp, 0.8, 0.6);

    // sill
    let sp = stage(progress, 0.7, 0.3);
    pen.line(
        Vec3::new(x1 - 0.15, 0.1, z1),
        Vec3::new(x2 + 0.15, 0.1, z1),
        sp,
        0.9,
        0.7,
    );

    if progress > 0.8 {
        pen.fill_quad(frame, stage(progress, 0.8, 0.2) * 0.06);
    }
}

/// Door on the `x = 0` wall near the front corner.
pub fn draw_door(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (y1, y2, dz) = (3.5, 4.5, 2.8);
    let jambs = polyline(&[
        Vec3::new(0.0, y1, 0.0),
        Vec3::new(0.0, y1, dz),
        Vec3::new(0.0, y2, dz),
        Vec3::new(0.0, y2, 0.0),
    ]);
    pen.line_seq(&jambs, progress, 1.2, 0.8);

    if progress > 0.7 {
        let hp = stage(progress, 0.7, 0.3);
        pen.ring(Vec3::new(0.0, y1 + 0.15, 1.3), 2.5 * hp, 0.8, 0.6 * hp);
    }
}
