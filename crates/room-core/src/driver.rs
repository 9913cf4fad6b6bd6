//! Drivers that own a [`ProgressRecord`] and move it along a [`Schedule`].
//!
//! [`LoaderDriver`] is fed wall-clock deltas and finishes exactly once.
//! [`ScrollDriver`] is fed scroll progress and can be scrubbed either way.

use crate::progress::ProgressRecord;
use crate::timeline::{Schedule, LOGO_CUE, TAGLINE_CUE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
    Complete,
}

/// What the frame loop should do after a loader tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Draw this frame and request another.
    Continue,
    /// The schedule just finished; draw the last frame and stop.
    Completed,
    /// Nothing to do (not started, already finished or stopped).
    Halted,
}

/// Wall-clock driven, one-shot playback of a schedule.
#[derive(Clone, Debug)]
pub struct LoaderDriver {
    schedule: Schedule,
    record: ProgressRecord,
    elapsed: f32,
    state: DriverState,
    stopped: bool,
}

impl LoaderDriver {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            record: ProgressRecord::new(),
            elapsed: 0.0,
            state: DriverState::Idle,
            stopped: false,
        }
    }

    /// Enter running. Has no effect once complete or stopped.
    pub fn start(&mut self) {
        if self.state == DriverState::Idle && !self.stopped {
            log::info!(
                "[loader] start, {:.2}s schedule",
                self.schedule.total_duration()
            );
            self.state = DriverState::Running;
        }
    }

    pub fn tick(&mut self, dt_sec: f32) -> TickOutcome {
        if self.stopped || self.state != DriverState::Running {
            return TickOutcome::Halted;
        }
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed += dt_sec;
        }
        let total = self.schedule.total_duration();
        if self.elapsed >= total {
            self.elapsed = total;
            self.schedule.sample(total, &mut self.record);
            self.state = DriverState::Complete;
            log::info!("[loader] complete");
            return TickOutcome::Completed;
        }
        self.schedule.sample(self.elapsed, &mut self.record);
        TickOutcome::Continue
    }

    /// Tear down from any state; every later tick is `Halted`.
    pub fn stop(&mut self) {
        if !self.stopped {
            log::debug!("[loader] stop in {:?}", self.state);
        }
        self.stopped = true;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Overall progress for the loader bar, 0..=1.
    pub fn progress(&self) -> f32 {
        let total = self.schedule.total_duration();
        if total > 0.0 {
            (self.elapsed / total).clamp(0.0, 1.0)
        } else if self.state == DriverState::Complete {
            1.0
        } else {
            0.0
        }
    }

    pub fn logo_opacity(&self) -> f32 {
        self.schedule
            .cue_value(LOGO_CUE, self.elapsed)
            .unwrap_or(0.0)
    }

    pub fn tagline_opacity(&self) -> f32 {
        self.schedule
            .cue_value(TAGLINE_CUE, self.elapsed)
            .unwrap_or(0.0)
    }
}

/// Result of one scroll scrub.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrubOutcome {
    pub state: DriverState,
    /// True only on the first scrub that reaches the end.
    pub completed_now: bool,
}

/// Scroll-driven playback; the record is a pure function of scroll progress.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    schedule: Schedule,
    record: ProgressRecord,
    progress: f32,
    state: DriverState,
    completed_once: bool,
}

impl ScrollDriver {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            record: ProgressRecord::new(),
            progress: 0.0,
            state: DriverState::Idle,
            completed_once: false,
        }
    }

    pub fn scrub(&mut self, progress: f32) -> ScrubOutcome {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.progress = p;
        self.schedule
            .sample(p * self.schedule.total_duration(), &mut self.record);

        let state = if p <= 0.0 {
            DriverState::Idle
        } else if p >= 1.0 {
            DriverState::Complete
        } else {
            DriverState::Running
        };
        if state != self.state {
            log::debug!("[scroll] {:?} -> {:?} at {:.3}", self.state, state, p);
        }
        self.state = state;

        let completed_now = state == DriverState::Complete && !self.completed_once;
        if completed_now {
            self.completed_once = true;
            log::info!("[scroll] illustration complete");
        }
        ScrubOutcome {
            state,
            completed_now,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn has_completed(&self) -> bool {
        self.completed_once
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Element;

    #[test]
    fn loader_ignores_ticks_before_start() {
        let mut d = LoaderDriver::new(Schedule::loader().unwrap());
        assert_eq!(d.tick(1.0), TickOutcome::Halted);
        assert_eq!(d.state(), DriverState::Idle);
        assert!(d.record().is_zero());
    }

    #[test]
    fn stop_halts_a_running_loader() {
        let mut d = LoaderDriver::new(Schedule::loader().unwrap());
        d.start();
        assert_eq!(d.tick(0.5), TickOutcome::Continue);
        d.stop();
        assert!(d.is_stopped());
        assert_eq!(d.tick(0.5), TickOutcome::Halted);
        d.start();
        assert_eq!(d.tick(0.5), TickOutcome::Halted);
        assert!((d.elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn bad_deltas_do_not_advance() {
        let mut d = LoaderDriver::new(Schedule::loader().unwrap());
        d.start();
        d.tick(f32::NAN);
        d.tick(-3.0);
        assert_eq!(d.elapsed(), 0.0);
    }

    #[test]
    fn scroll_state_follows_progress() {
        let mut d = ScrollDriver::new(Schedule::illustration().unwrap());
        assert_eq!(d.scrub(-0.5).state, DriverState::Idle);
        assert_eq!(d.scrub(0.3).state, DriverState::Running);
        let done = d.scrub(2.0);
        assert_eq!(done.state, DriverState::Complete);
        assert!(done.completed_now);
        assert_eq!(d.record().get(Element::Lamp), 1.0);
        assert_eq!(d.scrub(0.9).state, DriverState::Running);
        assert!(!d.scrub(1.0).completed_now);
        assert!(d.has_completed());
    }
}
