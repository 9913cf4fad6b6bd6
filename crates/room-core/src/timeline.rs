//! Declarative reveal schedule.
//!
//! A [`Schedule`] is a list of tweens on named progress values. Sampling it at
//! a time `t` is a pure function, so the same schedule can be played by the
//! wall clock (loader) or scrubbed back and forth by scroll position.

use crate::error::ScheduleError;
use crate::progress::{Element, ProgressRecord};
use smallvec::SmallVec;

/// Easing curves of the power family used by the site's tween engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic in.
    Power1In,
    /// Quadratic out; the tween engine's default.
    Power1Out,
    /// Cubic in.
    Power2In,
    /// Cubic out.
    #[default]
    Power2Out,
    Power2InOut,
}

impl Ease {
    /// Map linear progress in \[0, 1\] to eased progress in \[0, 1\].
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Ease::Linear => t,
            Ease::Power1In => t * t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Drive `element` to `target` between `start` and `start + duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub element: Element,
    pub target: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    #[inline]
    fn local(&self, t: f32) -> f32 {
        if self.duration > 0.0 {
            ((t - self.start) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Opacity ramp for host-page overlay content (logo, tagline) keyed by label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub label: &'static str,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Cue {
    pub fn value_at(&self, t: f32) -> f32 {
        if !(t >= self.start) {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply((t - self.start) / self.duration)
    }
}

#[derive(Clone, Copy, Debug)]
struct Resolved {
    tween: Tween,
    from: f32,
}

type Track = SmallVec<[Resolved; 3]>;

#[derive(Clone, Debug)]
pub struct Schedule {
    tracks: Vec<Track>,
    cues: SmallVec<[Cue; 4]>,
    total: f32,
}

pub const LOGO_CUE: &str = "logo";
pub const TAGLINE_CUE: &str = "tagline";

// (element, target, start s, duration s, ease, loader only)
const LOADER_TWEENS: [(Element, f32, f32, f32, Ease, bool); 20] = [
    // blueprint grid + floor
    (Element::Grid, 1.0, 0.0, 0.8, Ease::Power2Out, false),
    (Element::Particles, 0.5, 0.0, 1.0, Ease::Power1In, false),
    (Element::Floor, 1.0, 0.25, 0.8, Ease::Power2InOut, false),
    // walls rise
    (Element::WallRight, 1.0, 0.7, 1.0, Ease::Power2Out, false),
    (Element::WallLeft, 1.0, 0.85, 1.0, Ease::Power2Out, false),
    (Element::Ceiling, 1.0, 1.6, 0.6, Ease::Power2Out, false),
    // openings
    (Element::Window, 1.0, 1.6, 0.8, Ease::Power2InOut, false),
    (Element::Door, 1.0, 2.0, 0.6, Ease::Power2Out, false),
    // furniture
    (Element::Rug, 1.0, 2.2, 0.6, Ease::Power2Out, false),
    (Element::Table, 1.0, 2.3, 0.9, Ease::Power2Out, false),
    (Element::Shelf, 1.0, 2.4, 0.9, Ease::Power2Out, false),
    (Element::Chair, 1.0, 2.6, 0.8, Ease::Power2Out, false),
    (Element::Lamp, 1.0, 2.8, 0.8, Ease::Power2Out, false),
    (Element::Plant, 1.0, 3.0, 0.7, Ease::Power2Out, false),
    (Element::Picture, 1.0, 3.1, 0.5, Ease::Power2Out, false),
    // annotations + light
    (Element::Dimensions, 1.0, 3.3, 0.7, Ease::Power2Out, false),
    (Element::Glow, 1.0, 3.6, 1.2, Ease::Power2InOut, false),
    (Element::Particles, 0.8, 3.8, 0.8, Ease::Power1In, false),
    // dissolve
    (Element::Dissolve, 1.0, 4.4, 0.8, Ease::Power2In, true),
    (Element::Particles, 0.0, 4.6, 0.5, Ease::Power1Out, true),
];
const LOADER_HOLD_UNTIL: f32 = 5.7;

impl Schedule {
    pub fn builder() -> ScheduleBuilder {
        ScheduleBuilder::default()
    }

    /// Full loader choreography: build, light, dissolve, logo, hold.
    pub fn loader() -> Result<Self, ScheduleError> {
        let mut b = Self::builder();
        for (element, target, start, duration, ease, _) in LOADER_TWEENS {
            b = b.tween(element, target, start, duration, ease);
        }
        b.cue(LOGO_CUE, 4.6, 0.6, Ease::Power2Out)
            .cue(TAGLINE_CUE, 4.85, 0.4, Ease::Power2Out)
            .hold_until(LOADER_HOLD_UNTIL)
            .build()
    }

    /// Same offsets as the loader, ending on the fully lit room (no dissolve).
    pub fn illustration() -> Result<Self, ScheduleError> {
        let mut b = Self::builder();
        for (element, target, start, duration, ease, loader_only) in LOADER_TWEENS {
            if !loader_only {
                b = b.tween(element, target, start, duration, ease);
            }
        }
        b.build()
    }

    /// Seconds until the schedule is over (last tween, cue or hold).
    pub fn total_duration(&self) -> f32 {
        self.total
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn tweens(&self) -> impl Iterator<Item = &Tween> + '_ {
        self.tracks.iter().flatten().map(|r| &r.tween)
    }

    /// Value of `element` at time `t` (seconds). Each tween starts from the
    /// previous tween's target on the same element.
    pub fn value_at(&self, element: Element, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t };
        let mut value = 0.0;
        for r in &self.tracks[element.index()] {
            if t < r.tween.start {
                break;
            }
            let eased = r.tween.ease.apply(r.tween.local(t));
            value = r.from + (r.tween.target - r.from) * eased;
        }
        value
    }

    /// Overwrite every field of `record` with its value at time `t`.
    pub fn sample(&self, t: f32, record: &mut ProgressRecord) {
        for element in Element::ALL {
            record.set(element, self.value_at(element, t));
        }
    }

    /// Opacity of the overlay cue named `label` at `t`, if the schedule has one.
    pub fn cue_value(&self, label: &str, t: f32) -> Option<f32> {
        self.cues
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value_at(t))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScheduleBuilder {
    tweens: Vec<Tween>,
    cues: SmallVec<[Cue; 4]>,
    hold_until: f32,
}

impl ScheduleBuilder {
    pub fn tween(
        mut self,
        element: Element,
        target: f32,
        start: f32,
        duration: f32,
        ease: Ease,
    ) -> Self {
        self.tweens.push(Tween {
            element,
            target,
            start,
            duration,
            ease,
        });
        self
    }

    pub fn cue(mut self, label: &'static str, start: f32, duration: f32, ease: Ease) -> Self {
        self.cues.push(Cue {
            label,
            start,
            duration,
            ease,
        });
        self
    }

    /// Keep the schedule running (idle) until at least `t` seconds.
    pub fn hold_until(mut self, t: f32) -> Self {
        self.hold_until = t;
        self
    }

    pub fn build(self) -> Result<Schedule, ScheduleError> {
        let valid_time = |v: f32| v.is_finite() && v >= 0.0;
        if !valid_time(self.hold_until) {
            return Err(ScheduleError::InvalidHold(self.hold_until));
        }
        for t in &self.tweens {
            if !valid_time(t.start) || !valid_time(t.duration) {
                return Err(ScheduleError::InvalidTiming {
                    element: t.element,
                    start: t.start,
                    duration: t.duration,
                });
            }
            if !(0.0..=1.0).contains(&t.target) {
                return Err(ScheduleError::TargetOutOfRange {
                    element: t.element,
                    target: t.target,
                });
            }
        }
        for c in &self.cues {
            if !valid_time(c.start) || !valid_time(c.duration) {
                return Err(ScheduleError::InvalidCue {
                    label: c.label,
                    start: c.start,
                    duration: c.duration,
                });
            }
        }

        let mut tracks: Vec<Track> = vec![Track::new(); Element::COUNT];
        let mut sorted = self.tweens;
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));
        for tween in sorted {
            let track = &mut tracks[tween.element.index()];
            let from = match track.last() {
                Some(prev) => {
                    if tween.start + 1e-4 < prev.tween.end() {
                        return Err(ScheduleError::Overlap {
                            element: tween.element,
                            at: tween.start,
                        });
                    }
                    prev.tween.target
                }
                None => 0.0,
            };
            track.push(Resolved { tween, from });
        }

        let last_tween = tracks
            .iter()
            .flatten()
            .map(|r| r.tween.end())
            .fold(0.0_f32, f32::max);
        let last_cue = self
            .cues
            .iter()
            .map(|c| c.start + c.duration)
            .fold(0.0_f32, f32::max);
        let total = last_tween.max(last_cue).max(self.hold_until);
        log::debug!(
            "[schedule] {} tweens, {} cues, total {:.2}s",
            tracks.iter().map(|t| t.len()).sum::<usize>(),
            self.cues.len(),
            total
        );
        Ok(Schedule {
            tracks,
            cues: self.cues,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_endpoints_and_are_monotonic() {
        let eases = [
            Ease::Linear,
            Ease::Power1In,
            Ease::Power1Out,
            Ease::Power2In,
            Ease::Power2Out,
            Ease::Power2InOut,
        ];
        for e in eases {
            assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = e.apply(i as f32 / 100.0);
                assert!(v + 1e-6 >= prev, "{e:?} not monotonic at {i}");
                prev = v;
            }
        }
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn loader_timing_matches_choreography() {
        let s = Schedule::loader().unwrap();
        assert!((s.total_duration() - 5.7).abs() < 1e-5);
        assert_eq!(s.tweens().count(), 20);
        assert_eq!(s.value_at(Element::Floor, 0.25), 0.0);
        assert_eq!(s.value_at(Element::Floor, 1.05), 1.0);
        assert!((s.value_at(Element::Particles, 2.0) - 0.5).abs() < 1e-6);
        assert!((s.value_at(Element::Particles, 4.6) - 0.8).abs() < 1e-6);
        assert_eq!(s.value_at(Element::Particles, 5.1), 0.0);
        assert_eq!(s.cue_value(LOGO_CUE, 4.0), Some(0.0));
        assert_eq!(s.cue_value(LOGO_CUE, 5.3), Some(1.0));
        assert_eq!(s.cue_value("missing", 5.0), None);
    }

    #[test]
    fn illustration_never_dissolves() {
        let s = Schedule::illustration().unwrap();
        assert!((s.total_duration() - 4.8).abs() < 1e-5);
        assert_eq!(s.tweens().count(), 18);
        assert!(s.tweens().all(|t| t.element != Element::Dissolve));
        assert_eq!(s.value_at(Element::Dissolve, 100.0), 0.0);
        assert!((s.value_at(Element::Particles, 100.0) - 0.8).abs() < 1e-6);
        assert!(s.cues().is_empty());
    }

    #[test]
    fn builder_rejects_bad_input() {
        let err = Schedule::builder()
            .tween(Element::Lamp, 1.0, -1.0, 1.0, Ease::Linear)
            .build()
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTiming { .. }));

        let err = Schedule::builder()
            .tween(Element::Lamp, 1.5, 0.0, 1.0, Ease::Linear)
            .build()
            .unwrap_err();
        assert!(matches!(err, ScheduleError::TargetOutOfRange { .. }));

        let err = Schedule::builder()
            .tween(Element::Lamp, 1.0, 0.0, 1.0, Ease::Linear)
            .tween(Element::Lamp, 0.0, 0.5, 1.0, Ease::Linear)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Overlap {
                element: Element::Lamp,
                at: 0.5
            }
        );

        let err = Schedule::builder()
            .hold_until(f32::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidHold(_)));
    }

    #[test]
    fn zero_duration_tween_jumps() {
        let s = Schedule::builder()
            .tween(Element::Rug, 1.0, 1.0, 0.0, Ease::Linear)
            .build()
            .unwrap();
        assert_eq!(s.value_at(Element::Rug, 0.99), 0.0);
        assert_eq!(s.value_at(Element::Rug, 1.0), 1.0);
    }
}
