// Furniture and decor. Positions are fixed room-unit constants; each piece
// builds up outline -> structure -> details as its progress advances.

use super::RoomGeometry;
use crate::pen::{closed_outline, floor_rect, polyline, stage, wall_rect_y, Pen};
use crate::surface::Rect;
use glam::{Vec2, Vec3};

pub fn draw_table(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (tx, ty, tw, td, th) = (2.5, 2.0, 2.2, 1.4, 1.05);
    pen.line_seq(
        &closed_outline(&floor_rect(tx, ty, tw, td, th)),
        progress,
        1.3,
        0.85,
    );

    // legs drop from the top once the outline is underway
    let lp = stage(progress, 0.4, 0.6);
    let ins = 0.12;
    for (lx, ly) in [
        (tx + ins, ty + ins),
        (tx + tw - ins, ty + ins),
        (tx + tw - ins, ty + td - ins),
        (tx + ins, ty + td - ins),
    ] {
        if lp > 0.0 {
            pen.line(
                Vec3::new(lx, ly, th),
                Vec3::new(lx, ly, th - th * lp),
                1.0,
                0.7,
                0.5,
            );
        }
    }

    if progress <= 0.7 {
        return;
    }
    let ip = stage(progress, 0.7, 0.3);

    // laptop base
    pen.line_seq(
        &closed_outline(&floor_rect(tx + 0.4, ty + 0.3, 0.9, 0.7, th)),
        ip,
        0.6,
        0.35,
    );
    // screen hinges up
    if ip > 0.5 {
        let scr = (ip - 0.5) * 2.0;
        let top = th + 0.6 * scr;
        pen.line(
            Vec3::new(tx + 0.4, ty + 0.3, th),
            Vec3::new(tx + 0.4, ty + 0.25, top),
            1.0,
            0.6,
            0.35,
        );
        pen.line(
            Vec3::new(tx + 1.3, ty + 0.3, th),
            Vec3::new(tx + 1.3, ty + 0.25, top),
            1.0,
            0.6,
            0.35,
        );
        if scr > 0.8 {
            pen.line(
                Vec3::new(tx + 0.4, ty + 0.25, th + 0.6),
                Vec3::new(tx + 1.3, ty + 0.25, th + 0.6),
                1.0,
                0.6,
                0.35,
            );
        }
    }

    // mug
    if ip > 0.3 {
        let mug = stage(ip, 0.3, 0.7);
        let base = Vec3::new(tx + 1.7, ty + 0.6, th);
        pen.ring(base, 4.0 * mug, 0.7, 0.35 * mug);
        pen.line(base, base + Vec3::new(0.0, 0.0, 0.2 * mug), 1.0, 0.5, 0.25);
    }
}

/// Which side of the seat carries the backrest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackSide {
    Near,
    Far,
}

/// Two chairs share one progress value.
pub fn draw_chairs(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    draw_chair(pen, Vec2::new(3.1, 1.1), BackSide::Near, progress);
    draw_chair(pen, Vec2::new(3.1, 3.3), BackSide::Far, progress);
}

fn draw_chair(pen: &mut Pen, at: Vec2, back: BackSide, progress: f32) {
    let (cx, cy) = (at.x, at.y);
    let (cw, cd, sh, back_h) = (0.55, 0.55, 0.6, 1.15);

    pen.line_seq(
        &closed_outline(&floor_rect(cx, cy, cw, cd, sh)),
        progress,
        0.9,
        0.65,
    );

    let lp = stage(progress, 0.3, 0.5);
    if lp > 0.0 {
        for (lx, ly) in [(cx, cy), (cx + cw, cy), (cx + cw, cy + cd), (cx, cy + cd)] {
            pen.line(
                Vec3::new(lx, ly, sh),
                Vec3::new(lx, ly, sh - sh * lp),
                1.0,
                0.6,
                0.4,
            );
        }
    }

    let bp = stage(progress, 0.6, 0.4);
    if bp <= 0.0 {
        return;
    }
    let by = match back {
        BackSide::Near => cy,
        BackSide::Far => cy + cd,
    };
    let post_top = back_h * bp + sh * (1.0 - bp);
    pen.line(Vec3::new(cx, by, sh), Vec3::new(cx, by, post_top), 1.0, 0.9, 0.65);
    pen.line(
        Vec3::new(cx + cw, by, sh),
        Vec3::new(cx + cw, by, post_top),
        1.0,
        0.9,
        0.65,
    );
    if bp > 0.7 {
        pen.line(
            Vec3::new(cx, by, back_h),
            Vec3::new(cx + cw, by, back_h),
            stage(bp, 0.7, 0.3),
            0.9,
            0.65,
        );
    }
}

/// Bookshelf against the `x = 0` wall.
pub fn draw_shelf(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (y1, y2, top) = (0.5, 1.8, 2.8);
    let levels = 5;
    let level_h = top / levels as f32;
    let built = top * progress.min(1.0);

    pen.line(Vec3::new(0.0, y1, 0.0), Vec3::new(0.0, y1, built), 1.0, 1.0, 0.8);
    pen.line(Vec3::new(0.0, y2, 0.0), Vec3::new(0.0, y2, built), 1.0, 1.0, 0.8);

    for i in 0..=levels {
        let z = level_h * i as f32;
        if z > built {
            break;
        }
        let sp = stage(progress, i as f32 * 0.1, 0.5);
        pen.line(Vec3::new(0.0, y1, z), Vec3::new(0.0, y2, z), sp, 0.7, 0.55);
        // depth return stops halfway across the 0.35 board
        pen.line(
            Vec3::new(0.0, y1, z),
            Vec3::new(0.175, y1, z),
            sp,
            0.4,
            0.25,
        );
    }

    if progress <= 0.6 {
        return;
    }
    let bp = stage(progress, 0.6, 0.4);
    // (y, base z, spine height)
    let books: [(f32, f32, f32); 12] = [
        (y1 + 0.1, 0.05, 0.45),
        (y1 + 0.25, 0.05, 0.5),
        (y1 + 0.4, 0.05, 0.38),
        (y1 + 0.55, 0.05, 0.42),
        (y1 + 0.7, 0.05, 0.47),
        (y1 + 0.9, 0.05, 0.35),
        (y1 + 0.15, level_h + 0.05, 0.48),
        (y1 + 0.35, level_h + 0.05, 0.4),
        (y1 + 0.55, level_h + 0.05, 0.44),
        (y1 + 0.8, level_h + 0.05, 0.38),
        (y1 + 0.1, level_h * 2.0 + 0.05, 0.42),
        (y1 + 0.3, level_h * 2.0 + 0.05, 0.5),
    ];
    for (i, (by, bz, bh)) in books.iter().enumerate() {
        let book = ((bp - i as f32 * 0.04) * 2.5).clamp(0.0, 1.0);
        if book > 0.0 {
            pen.line(
                Vec3::new(0.0, *by, *bz),
                Vec3::new(0.0, *by, bz + bh * book),
                1.0,
                0.5,
                0.3,
            );
        }
    }
}

/// Floor lamp in the far corner.
pub fn draw_lamp(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (lx, ly) = (6.0, 4.2);
    let base = Vec3::new(lx, ly, 0.0);

    let bp = (progress * 2.0).min(1.0);
    pen.ellipse(
        base,
        Vec2::new(7.0, 4.0) * bp,
        -std::f32::consts::FRAC_PI_6,
        0.7,
        0.5 * bp,
    );

    if progress > 0.2 {
        let pp = stage(progress, 0.2, 0.5);
        pen.line(base, Vec3::new(lx, ly, 2.8 * pp), 1.0, 1.0, 0.8);
    }

    if progress <= 0.65 {
        return;
    }
    let sp = stage(progress, 0.65, 0.35);
    let shade = polyline(&[
        Vec3::new(lx - 0.4, ly - 0.3, 3.2),
        Vec3::new(lx, ly, 2.8),
        Vec3::new(lx + 0.4, ly + 0.3, 3.2),
        Vec3::new(lx + 0.4, ly - 0.2, 3.2),
        Vec3::new(lx - 0.4, ly - 0.3, 3.2),
        Vec3::new(lx - 0.4, ly + 0.2, 3.2),
    ]);
    pen.line_seq(&shade, sp, 0.9, 0.7);

    if sp > 0.8 {
        let ga = stage(sp, 0.8, 0.2);
        let center = pen.project(Vec3::new(lx, ly, 2.6));
        pen.radial_glow(
            center,
            40.0 * ga,
            &[(0.0, 0.1 * ga)],
            Rect::centered(center, 50.0),
        );
    }
}

/// Potted plant by the window wall.
pub fn draw_plant(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (px, py) = (6.2, 0.6);
    let pot = closed_outline(&[
        Vec3::new(px - 0.2, py - 0.15, 0.0),
        Vec3::new(px - 0.25, py - 0.2, 0.4),
        Vec3::new(px + 0.25, py + 0.2, 0.4),
        Vec3::new(px + 0.2, py + 0.15, 0.0),
    ]);
    pen.line_seq(&pot, progress, 0.8, 0.6);

    if progress <= 0.4 {
        return;
    }
    let sp = stage(progress, 0.4, 0.6);
    // (dx, dy, stem height)
    let stems: [(f32, f32, f32); 4] = [
        (-0.1, -0.08, 0.9),
        (0.05, 0.05, 1.1),
        (-0.15, 0.1, 0.8),
        (0.12, -0.06, 1.0),
    ];
    for (i, (dx, dy, h)) in stems.iter().enumerate() {
        let stem = ((sp - i as f32 * 0.12) * 2.0).clamp(0.0, 1.0);
        if stem <= 0.0 {
            continue;
        }
        let tip = Vec3::new(px + dx, py + dy, 0.4 + h * stem);
        pen.line(Vec3::new(px, py, 0.4), tip, 1.0, 0.6, 0.45);
        if stem > 0.7 {
            let lp = stage(stem, 0.7, 0.3);
            let start = pen.project(tip);
            let end = pen.project(Vec3::new(px + dx * 3.0, py + dy * 2.5, 0.4 + h - 0.1));
            let ctrl = Vec2::new(start.x + (end.x - start.x) * 0.5 + 5.0, start.y - 8.0);
            pen.curve(start, ctrl, end, 0.6, 0.35 * lp);
        }
    }
}

/// Framed picture on the `y = 0` wall right of the window.
pub fn draw_picture(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (x1, x2, z1, z2) = (5.3, 6.5, 2.0, 2.9);
    pen.line_seq(
        &closed_outline(&wall_rect_y(0.0, x1, x2, z1, z2)),
        progress,
        0.9,
        0.6,
    );
    if progress > 0.6 {
        let m = 0.1;
        pen.line_seq(
            &closed_outline(&wall_rect_y(0.0, x1 + m, x2 - m, z1 + m, z2 - m)),
            stage(progress, 0.6, 0.4),
            0.5,
            0.3,
        );
    }
}

pub fn draw_rug(pen: &mut Pen, _room: &RoomGeometry, progress: f32) {
    if !(progress > 0.0) {
        return;
    }
    let (rx, ry, rw, rd, z) = (2.0, 1.5, 3.2, 2.2, 0.01);
    pen.line_seq(
        &closed_outline(&floor_rect(rx, ry, rw, rd, z)),
        progress,
        0.7,
        0.35,
    );
    if progress > 0.5 {
        let m = 0.25;
        pen.line_seq(
            &closed_outline(&floor_rect(rx + m, ry + m, rw - 2.0 * m, rd - 2.0 * m, z)),
            stage(progress, 0.5, 0.5),
            0.5,
            0.2,
        );
    }
}
