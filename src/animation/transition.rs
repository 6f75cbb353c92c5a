//! A single scripted camera move from one pose to another.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::camera::pose::CameraPose;
use crate::util::easing::EasingFunction;

/// Timed interpolation of camera position from a start pose to an end pose.
///
/// Progress is a pure function of wall-clock time since `start_time`, so
/// sparse ticks lengthen the steps but never the total duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionJob {
    /// Camera pose captured when the transition began.
    pub start_pose: CameraPose,
    /// Pose the camera lands on.
    pub end_pose: CameraPose,
    /// When the transition began.
    pub start_time: Instant,
    /// Total length of the move.
    pub duration: Duration,
    /// Curve applied to raw progress before interpolating.
    pub easing: EasingFunction,
}

impl TransitionJob {
    /// Transition starting at `start_time`.
    pub fn new(
        start_pose: CameraPose,
        end_pose: CameraPose,
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_pose,
            end_pose,
            start_time,
            duration,
            easing,
        }
    }

    /// Normalized progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the transition has reached its end pose at `now`.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated camera position at raw progress `t`.
    ///
    /// Exactly the end position once `t` reaches 1.
    pub fn position_at(&self, t: f32) -> Vec3 {
        if t >= 1.0 {
            return self.end_pose.position;
        }
        let eased = self.easing.evaluate(t);
        let start = self.start_pose.position;
        start + (self.end_pose.position - start) * eased
    }
}
