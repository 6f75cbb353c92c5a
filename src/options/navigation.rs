use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Scripted camera transition and info panel parameters.
pub struct NavigationOptions {
    /// Duration of a jump to a viewpoint, in seconds.
    #[schemars(title = "Transition Time", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub transition_seconds: f32,
    /// How long the info panel stays visible, in seconds.
    #[schemars(title = "Info Panel Time", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub info_panel_seconds: f32,
    /// Progress curve for position interpolation.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Orbit radius after landing on an explicit-Euler viewpoint.
    #[schemars(skip)]
    pub resume_focus_distance: f32,
    /// Multiplier on an entity's largest extent when framing it.
    #[schemars(skip)]
    pub frame_offset_scale: f32,
    /// Extra distance added when framing an entity.
    #[schemars(skip)]
    pub frame_offset_padding: f32,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            transition_seconds: 1.5,
            info_panel_seconds: 5.0,
            easing: EasingFunction::Linear,
            resume_focus_distance: 2.0,
            frame_offset_scale: 2.0,
            frame_offset_padding: 2.0,
        }
    }
}

impl NavigationOptions {
    /// Transition length as a [`Duration`].
    ///
    /// Negative or NaN values collapse to zero; values too large for a
    /// [`Duration`] saturate.
    pub fn transition_duration(&self) -> Duration {
        seconds(self.transition_seconds)
    }

    /// Info panel visibility as a [`Duration`].
    pub fn info_panel_duration(&self) -> Duration {
        seconds(self.info_panel_seconds)
    }
}

fn seconds(value: f32) -> Duration {
    if value > 0.0 {
        Duration::try_from_secs_f32(value).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_follow_seconds() {
        let options = NavigationOptions::default();
        assert_eq!(options.transition_duration(), Duration::from_millis(1500));
        assert_eq!(options.info_panel_duration(), Duration::from_secs(5));
    }

    #[test]
    fn bad_seconds_collapse_to_zero() {
        for value in [-1.0, 0.0, f32::NAN, f32::NEG_INFINITY] {
            let options = NavigationOptions {
                transition_seconds: value,
                ..Default::default()
            };
            assert_eq!(options.transition_duration(), Duration::ZERO, "{value}");
        }
    }

    #[test]
    fn huge_seconds_saturate() {
        for value in [1e30, f32::INFINITY] {
            let options = NavigationOptions {
                transition_seconds: value,
                info_panel_seconds: value,
                ..Default::default()
            };
            assert_eq!(options.transition_duration(), Duration::MAX, "{value}");
            assert_eq!(options.info_panel_duration(), Duration::MAX, "{value}");
        }
    }
}
