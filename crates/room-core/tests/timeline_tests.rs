// Integration tests for schedule sampling and the two drivers.

use room_core::{
    DriverState, Element, LoaderDriver, ProgressRecord, Schedule, ScrollDriver, TickOutcome,
};

#[test]
fn sampling_before_start_is_all_zero() {
    for schedule in [Schedule::loader().unwrap(), Schedule::illustration().unwrap()] {
        let mut record = ProgressRecord::new();
        for e in Element::ALL {
            record.set(e, 0.7);
        }
        schedule.sample(0.0, &mut record);
        assert!(record.is_zero());
        schedule.sample(-3.0, &mut record);
        assert!(record.is_zero());
    }
}

#[test]
fn sampling_at_the_end_completes_every_drawable() {
    let schedule = Schedule::illustration().unwrap();
    let mut record = ProgressRecord::new();
    schedule.sample(schedule.total_duration(), &mut record);
    for e in Element::ALL.into_iter().filter(|e| e.is_drawable()) {
        assert_eq!(record.get(e), 1.0, "{e}");
    }
    assert_eq!(record.visibility(), 1.0);

    let loader = Schedule::loader().unwrap();
    loader.sample(loader.total_duration(), &mut record);
    assert_eq!(record.get(Element::Dissolve), 1.0);
    assert_eq!(record.get(Element::Particles), 0.0);
    assert_eq!(record.visibility(), 0.0);
}

#[test]
fn sampled_values_stay_in_unit_range() {
    let schedule = Schedule::loader().unwrap();
    let mut record = ProgressRecord::new();
    for i in 0..=700 {
        schedule.sample(i as f32 * 0.01, &mut record);
        for (e, v) in record.iter() {
            assert!((0.0..=1.0).contains(&v), "{e}={v} at step {i}");
        }
    }
}

#[test]
fn scrubbing_is_direction_independent() {
    let positions = [0.0, 0.1, 0.35, 0.5, 0.62, 0.9, 1.0];
    let mut forward = ScrollDriver::new(Schedule::illustration().unwrap());
    let forward_records: Vec<ProgressRecord> = positions
        .iter()
        .map(|p| {
            forward.scrub(*p);
            forward.record().clone()
        })
        .collect();

    let mut backward = ScrollDriver::new(Schedule::illustration().unwrap());
    // jump around first so any hidden accumulation would show
    for p in [1.0, 0.2, 0.8, 0.05] {
        backward.scrub(p);
    }
    for (p, expected) in positions.iter().zip(&forward_records).rev() {
        backward.scrub(*p);
        assert_eq!(backward.record(), expected, "at {p}");
    }
}

#[test]
fn scroll_completion_is_reported_once() {
    let mut d = ScrollDriver::new(Schedule::illustration().unwrap());
    let mut reported = 0;
    for pass in 0..3 {
        for i in 0..=20 {
            let p = if pass % 2 == 0 { i as f32 / 20.0 } else { 1.0 - i as f32 / 20.0 };
            if d.scrub(p).completed_now {
                reported += 1;
            }
        }
    }
    assert_eq!(reported, 1);
    assert_eq!(d.state(), DriverState::Complete);
}

#[test]
fn loader_completes_exactly_once() {
    let mut d = LoaderDriver::new(Schedule::loader().unwrap());
    d.start();
    assert_eq!(d.state(), DriverState::Running);

    let mut completed = 0;
    let mut frames_after = 0;
    for _ in 0..1000 {
        match d.tick(1.0 / 60.0) {
            TickOutcome::Continue => assert_eq!(completed, 0),
            TickOutcome::Completed => completed += 1,
            TickOutcome::Halted => frames_after += 1,
        }
    }
    assert_eq!(completed, 1);
    assert!(frames_after > 0);
    assert_eq!(d.state(), DriverState::Complete);
    assert_eq!(d.progress(), 1.0);
    assert_eq!(d.logo_opacity(), 1.0);
    assert_eq!(d.tagline_opacity(), 1.0);
    // restart is ignored once complete
    d.start();
    assert_eq!(d.tick(1.0), TickOutcome::Halted);
}

#[test]
fn loader_progress_tracks_elapsed_time() {
    let mut d = LoaderDriver::new(Schedule::loader().unwrap());
    d.start();
    let total = d.schedule().total_duration();
    d.tick(total / 2.0);
    assert!((d.progress() - 0.5).abs() < 1e-5);
    assert_eq!(d.logo_opacity(), 0.0);
    // one giant step lands on the end
    assert_eq!(d.tick(1e6), TickOutcome::Completed);
}
