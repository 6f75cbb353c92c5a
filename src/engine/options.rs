//! Options methods for GalleryEngine

use super::GalleryEngine;
use crate::options::Options;

impl GalleryEngine {
    /// Current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the camera, controller and animator.
    /// A transition already in flight keeps its duration and easing.
    pub fn apply_options(&mut self) {
        self.apply_camera();
        self.animator.configure(&self.options.navigation);
    }

    /// Push camera options to the projection and controller.
    fn apply_camera(&mut self) {
        let co = &self.options.camera;
        self.camera.fovy = co.fovy;
        self.camera.znear = co.znear;
        self.camera.zfar = co.zfar;
        self.controller.configure(co);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::{Duration, Instant};

    use super::*;
    use crate::content::GalleryContent;
    use crate::session::InteractionMode;

    #[test]
    fn camera_options_reach_projection() {
        let mut engine =
            GalleryEngine::new(Options::default(), GalleryContent::default(), 800.0, 600.0);
        let mut options = Options::default();
        options.camera.fovy = 45.0;
        options.camera.zfar = 200.0;
        options.navigation.transition_seconds = 0.5;
        engine.set_options(options);

        assert_eq!(engine.camera().fovy, 45.0);
        assert_eq!(engine.camera().zfar, 200.0);
        assert_eq!(engine.options().navigation.transition_seconds, 0.5);
    }

    #[test]
    fn nan_polar_angle_from_toml_builds_an_engine() {
        let options = Options::from_toml("[camera]\nmin_polar_angle = nan").unwrap();
        let mut engine =
            GalleryEngine::new(options, GalleryContent::builtin().unwrap(), 800.0, 600.0);
        let now = Instant::now();
        let _ = engine.frame(now);
        let _ = engine.frame(now + Duration::from_millis(16));
        assert!(engine.camera().eye.is_finite());
    }

    #[test]
    fn oversized_transition_time_saturates() {
        let options = Options::from_toml("[navigation]\ntransition_seconds = 1e30").unwrap();
        let mut engine =
            GalleryEngine::new(options, GalleryContent::builtin().unwrap(), 800.0, 600.0);
        let start = engine.camera().eye;
        let now = Instant::now();
        assert!(engine.go_to_viewpoint("Room 1", now));
        let _ = engine.frame(now + Duration::from_secs(60));
        assert_eq!(engine.mode(), InteractionMode::Transitioning);
        assert!(engine.camera().eye.is_finite());
        assert!((engine.camera().eye - start).length() < 1e-3);
        assert_ne!(engine.camera().eye, Vec3::new(4.03, 2.21, -1.64));
    }
}
