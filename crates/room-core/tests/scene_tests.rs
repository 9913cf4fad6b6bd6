// Integration tests for the room drawers and the scene renderer.

use glam::Vec3;
use room_core::pen::Pen;
use room_core::{
    draw_element, DrawCall, Element, ProgressRecord, Recorder, SceneConfig, SceneRenderer,
    Schedule, IsoProjector, Palette,
};

fn draw_one(element: Element, progress: f32) -> Recorder {
    let config = SceneConfig::loader();
    let renderer = SceneRenderer::new(config.clone(), 1280.0, 720.0);
    let mut rec = Recorder::new();
    {
        let mut pen = Pen::new(&mut rec, renderer.projector(), config.palette.accent, 1.0);
        draw_element(&mut pen, &config.room, element, progress);
    }
    rec
}

#[test]
fn drawers_are_silent_at_or_below_zero() {
    for element in Element::ALL {
        for p in [0.0, -0.0, -0.25, -5.0, f32::NAN] {
            let rec = draw_one(element, p);
            assert!(rec.is_empty(), "{element} drew at {p}");
        }
    }
}

#[test]
fn every_drawable_element_draws_when_complete() {
    for element in Element::ALL.into_iter().filter(|e| e.is_drawable()) {
        let rec = draw_one(element, 1.0);
        assert!(rec.visible_call_count() > 0, "{element} drew nothing");
    }
}

#[test]
fn floor_at_half_has_two_full_edges() {
    let rec = draw_one(Element::Floor, 0.5);
    assert_eq!(rec.lines().count(), 2);
    assert_eq!(rec.filled_circles().count(), 0);
}

#[test]
fn floor_past_half_grows_third_edge() {
    let full = draw_one(Element::Floor, 1.0);
    let full_lengths: Vec<f32> = full.lines().map(|(a, b, _)| a.distance(b)).collect();
    assert_eq!(full_lengths.len(), 4);

    let rec = draw_one(Element::Floor, 0.6);
    let lengths: Vec<f32> = rec.lines().map(|(a, b, _)| a.distance(b)).collect();
    assert_eq!(lengths.len(), 3);
    assert!((lengths[0] - full_lengths[0]).abs() < 1e-3);
    assert!((lengths[1] - full_lengths[1]).abs() < 1e-3);
    // (0.6 - 0.5) / 0.25 of the third edge
    assert!((lengths[2] / full_lengths[2] - 0.4).abs() < 1e-3);
    // one pen tip: inner dot and halo
    assert_eq!(rec.filled_circles().count(), 2);
}

#[test]
fn fully_dissolved_scene_only_clears() {
    let renderer = SceneRenderer::new(SceneConfig::loader(), 800.0, 600.0);
    let mut record = ProgressRecord::new();
    for e in Element::ALL {
        record.set(e, 1.0);
    }
    let mut rec = Recorder::new();
    renderer.render(&mut rec, &record);
    assert_eq!(rec.calls, vec![DrawCall::Clear]);
}

#[test]
fn empty_record_renders_nothing_visible() {
    let renderer = SceneRenderer::new(SceneConfig::illustration(), 800.0, 600.0);
    let mut rec = Recorder::new();
    renderer.render(&mut rec, &ProgressRecord::new());
    assert_eq!(rec.visible_call_count(), 0);
}

#[test]
fn finished_illustration_draws_room_and_dust() {
    let schedule = Schedule::illustration().unwrap();
    let mut record = ProgressRecord::new();
    schedule.sample(schedule.total_duration(), &mut record);

    let renderer = SceneRenderer::new(SceneConfig::illustration(), 800.0, 600.0);
    let mut rec = Recorder::new();
    renderer.render(&mut rec, &record);
    assert!(matches!(rec.calls.first(), Some(DrawCall::Clear)));
    // no partially drawn lines anywhere: the only filled circles are dust motes
    assert_eq!(rec.filled_circles().count(), renderer.dust().len());
    assert!(rec.lines().count() > 30);
}

fn polygons(rec: &Recorder) -> Vec<f32> {
    rec.calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Polygon { color, .. } => Some(color.a),
            _ => None,
        })
        .collect()
}

fn gradients(rec: &Recorder) -> usize {
    rec.calls
        .iter()
        .filter(|c| matches!(c, DrawCall::RadialGradient { .. }))
        .count()
}

#[test]
fn finished_elements_carry_no_pen_tips() {
    for element in Element::ALL.into_iter().filter(|e| e.is_drawable()) {
        let rec = draw_one(element, 1.0);
        assert_eq!(rec.filled_circles().count(), 0, "{element} left a pen tip");
    }
}

#[test]
fn table_legs_wait_for_their_stage() {
    // top outline only: first edge full, second growing
    assert_eq!(draw_one(Element::Table, 0.39).lines().count(), 2);
    // two full top edges plus four legs
    let rec = draw_one(Element::Table, 0.5);
    assert_eq!(rec.lines().count(), 6);
    assert_eq!(rec.filled_circles().count(), 0);
}

#[test]
fn chair_backrest_and_top_rail_are_staged() {
    // per chair: 3 seat edges + 4 legs
    assert_eq!(draw_one(Element::Chair, 0.6).lines().count(), 14);
    // + 2 backrest posts
    assert_eq!(draw_one(Element::Chair, 0.65).lines().count(), 18);
    // 4 seat edges + 4 legs + 2 posts, rail still waiting (backrest stage 0.65)
    assert_eq!(draw_one(Element::Chair, 0.86).lines().count(), 20);
    // rail appears past backrest stage 0.7
    assert_eq!(draw_one(Element::Chair, 0.95).lines().count(), 22);
}

#[test]
fn window_glass_fills_only_past_its_stage() {
    assert!(polygons(&draw_one(Element::Window, 0.8)).is_empty());
    let fills = polygons(&draw_one(Element::Window, 0.9));
    assert_eq!(fills.len(), 1);
    assert!((fills[0] - 0.5 * 0.06).abs() < 1e-5);
}

#[test]
fn wall_fill_starts_after_point_six() {
    for element in [Element::WallLeft, Element::WallRight] {
        assert!(polygons(&draw_one(element, 0.6)).is_empty(), "{element}");
        assert_eq!(polygons(&draw_one(element, 0.8)).len(), 1, "{element}");
    }
    let fill = polygons(&draw_one(Element::WallLeft, 0.8))[0];
    assert!((fill - 0.5 * 0.035).abs() < 1e-5);
}

#[test]
fn lamp_glow_follows_the_shade() {
    // shade stage (0.9 - 0.65) / 0.35 is below 0.8
    assert_eq!(gradients(&draw_one(Element::Lamp, 0.9)), 0);
    assert_eq!(gradients(&draw_one(Element::Lamp, 0.97)), 1);
}

#[test]
fn grid_fades_with_the_dissolve() {
    let config = SceneConfig::loader();
    let projector = IsoProjector::new(800.0, 600.0, config.framing);
    let mut rec = Recorder::new();
    {
        let mut pen = Pen::new(&mut rec, &projector, Palette::default().accent, 0.5);
        draw_element(&mut pen, &config.room, Element::Grid, 1.0);
    }
    assert!(matches!(rec.calls.first(), Some(DrawCall::GlobalAlpha(a)) if (a - 0.075).abs() < 1e-6));
    for (_, _, stroke) in rec.lines() {
        assert!((stroke.color.a - 0.06).abs() < 1e-6);
    }
    let origin = projector.project(Vec3::ZERO);
    assert!(rec.lines().any(|(a, _, _)| a == origin));
}
