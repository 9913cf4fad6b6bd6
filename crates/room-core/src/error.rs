use crate::progress::Element;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("tween for {element} has invalid timing (start={start}, duration={duration})")]
    InvalidTiming {
        element: Element,
        start: f32,
        duration: f32,
    },
    #[error("tween for {element} targets {target}, outside [0, 1]")]
    TargetOutOfRange { element: Element, target: f32 },
    #[error("tweens for {element} overlap at {at}s")]
    Overlap { element: Element, at: f32 },
    #[error("cue {label:?} has invalid timing (start={start}, duration={duration})")]
    InvalidCue {
        label: &'static str,
        start: f32,
        duration: f32,
    },
    #[error("hold time {0} is not a finite non-negative number")]
    InvalidHold(f32),
}
