// Integration tests for the isometric projector.

use glam::{Vec2, Vec3};
use room_core::{Framing, IsoProjector, SceneConfig};

fn axis_angle_deg(p: &IsoProjector, a: Vec3, b: Vec3) -> f32 {
    let o = p.project(Vec3::ZERO);
    let da = p.project(a) - o;
    let db = p.project(b) - o;
    da.angle_between(db).abs().to_degrees()
}

#[test]
fn doubling_the_viewport_doubles_screen_distances() {
    let small = IsoProjector::new(800.0, 600.0, Framing::loader());
    let large = IsoProjector::new(1600.0, 1200.0, Framing::loader());
    assert!((large.scale() / small.scale() - 2.0).abs() < 1e-5);

    let a = Vec3::new(1.0, 2.0, 0.5);
    let b = Vec3::new(6.0, 4.5, 3.0);
    let ds = small.project(a).distance(small.project(b));
    let dl = large.project(a).distance(large.project(b));
    assert!((dl / ds - 2.0).abs() < 1e-4);
}

#[test]
fn axis_angles_are_viewport_invariant() {
    for (w, h) in [(320.0, 640.0), (1024.0, 768.0), (3840.0, 2160.0)] {
        let p = IsoProjector::new(w, h, Framing::loader());
        let xy = axis_angle_deg(&p, Vec3::X, Vec3::Y);
        let xz = axis_angle_deg(&p, Vec3::X, Vec3::Z);
        let yz = axis_angle_deg(&p, Vec3::Y, Vec3::Z);
        assert!((xy - 120.0).abs() < 1e-3, "x/y {xy}");
        assert!((xz - 120.0).abs() < 1e-3, "x/z {xz}");
        assert!((yz - 120.0).abs() < 1e-3, "y/z {yz}");
    }
}

#[test]
fn x_axis_runs_thirty_degrees_below_horizontal() {
    let p = IsoProjector::new(1000.0, 1000.0, Framing::loader());
    let d = p.project(Vec3::X) - p.project(Vec3::ZERO);
    let deg = d.y.atan2(d.x).to_degrees();
    assert!((deg - 30.0).abs() < 1e-3);
    let up = p.project(Vec3::Z) - p.project(Vec3::ZERO);
    assert!(up.x.abs() < 1e-4 && up.y < 0.0);
}

#[test]
fn resize_changes_projection_of_the_same_point() {
    let mut p = IsoProjector::new(1000.0, 800.0, Framing::loader());
    let corner = Vec3::new(7.0, 5.5, 3.8);
    let before = p.project(corner);
    p.resize(500.0, 900.0);
    let after = p.project(corner);
    assert_ne!(before, after);
    assert_eq!(after, IsoProjector::new(500.0, 900.0, Framing::loader()).project(corner));
}

#[test]
fn illustration_centres_the_room() {
    let config = SceneConfig::illustration();
    let p = IsoProjector::new(640.0, 480.0, config.framing);
    let c = p.project(config.room.center());
    assert!(c.distance(Vec2::new(320.0, 240.0)) < 1e-3);
    assert!((p.scale() - 480.0 * 0.06).abs() < 1e-4);
}
