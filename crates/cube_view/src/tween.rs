use cubemath::Float;
use web_time::Duration;

use crate::interpolate::InterpolateFn;

/// Whether a [`Tween`] has reached its target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TweenStatus {
    /// More frames are needed.
    Pending,
    /// The value has reached its target.
    Done,
}

/// Number that moves from one value to another over a fixed duration along
/// an easing curve. It only changes when advanced.
#[derive(Debug, Copy, Clone)]
pub struct Tween {
    from: Float,
    to: Float,
    duration: Duration,
    /// Linear progress in the range 0.0 to 1.0.
    progress: Float,
    easing: InterpolateFn,
}

impl Tween {
    /// Constructs a tween at its starting value.
    pub fn new(from: Float, to: Float, duration: Duration, easing: InterpolateFn) -> Self {
        Self {
            from,
            to,
            duration,
            progress: 0.0,
            easing,
        }
    }

    /// Steps the tween forward by `delta`. A tween with zero duration
    /// finishes on its first step.
    pub fn advance(&mut self, delta: Duration) -> TweenStatus {
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (self.progress + delta.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.status()
    }
    /// Jumps to the end of the tween.
    pub fn finish(&mut self) {
        self.progress = 1.0;
    }

    /// Returns whether the tween has finished.
    pub fn status(&self) -> TweenStatus {
        match self.progress >= 1.0 {
            true => TweenStatus::Done,
            false => TweenStatus::Pending,
        }
    }
    /// Returns the linear progress, from 0.0 to 1.0.
    pub fn progress(&self) -> Float {
        self.progress
    }
    /// Returns the current value. This is exactly the target value once the
    /// tween is done.
    pub fn value(&self) -> Float {
        match self.status() {
            TweenStatus::Done => self.to,
            TweenStatus::Pending => self.from + (self.to - self.from) * (self.easing)(self.progress),
        }
    }
    /// Returns the target value.
    pub fn target(&self) -> Float {
        self.to
    }
}
