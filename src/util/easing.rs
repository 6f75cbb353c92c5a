//! Easing curves applied to camera transition progress.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]`, fixes both endpoints and is
//! non-decreasing, so a transition eased by any of them still moves each
//! position axis monotonically from start to target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing). The gallery's stock behavior.
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Hermite smoothstep (slow start and end).
    SmoothStep,
    /// Cubic Bezier-style ease with configurable inner control values.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value, clamped to `[0, 1]`.
        c1: f32,
        /// Second inner control value, clamped to `[0, 1]`.
        c2: f32,
    },
}

impl EasingFunction {
    /// Gentle ease-out suitable for camera fly-throughs.
    pub const EASE_OUT: EasingFunction =
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the easing function at progress `t`.
    ///
    /// Input and cubic control values are clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let c1 = unit(*c1);
                let c2 = unit(*c2);
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

/// Clamp to `[0, 1]`; NaN becomes 0.
fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
