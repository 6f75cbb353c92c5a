use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Frame rate the damping factor is calibrated against.
const REFERENCE_FPS: f32 = 60.0;
/// Keeps the polar angle off the poles so `look_at` never degenerates.
const POLAR_EPSILON: f32 = 1e-6;
/// ln(1 / 0.95): one unit of scroll scales distance by 0.95^zoom_speed.
const ZOOM_STEP: f32 = 0.051_293_3;
/// Pending input below this magnitude is treated as settled.
const SETTLE_EPSILON: f32 = 1e-6;

/// Damped orbit camera around a look-at target.
///
/// Input (drag, scroll) accumulates into pending deltas; every frame a
/// time-normalized fraction of what remains is applied to the spherical
/// offset of the camera from its target. Distance and polar angle are
/// clamped on every update.
#[derive(Debug, Clone)]
pub struct OrbitController {
    target: Vec3,
    enabled: bool,

    theta_delta: f32,
    phi_delta: f32,
    zoom_log: f32,
    pan_offset: Vec3,

    viewport_height: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    damping_factor: f32,
    min_distance: f32,
    max_distance: f32,
    min_polar_angle: f32,
    max_polar_angle: f32,
}

impl OrbitController {
    /// Controller orbiting `options.initial_target`, enabled.
    pub fn new(options: &CameraOptions, viewport_height: f32) -> Self {
        let mut controller = Self {
            target: Vec3::from_array(options.initial_target),
            enabled: true,
            theta_delta: 0.0,
            phi_delta: 0.0,
            zoom_log: 0.0,
            pan_offset: Vec3::ZERO,
            viewport_height: 1.0,
            rotate_speed: 0.0,
            pan_speed: 0.0,
            zoom_speed: 0.0,
            damping_factor: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
        };
        controller.configure(options);
        controller.resize(viewport_height);
        controller
    }

    /// Apply speed, damping, and constraint settings.
    ///
    /// Non-finite values fall back to the defaults.
    pub fn configure(&mut self, options: &CameraOptions) {
        let fallback = CameraOptions::default();
        self.rotate_speed = finite_or(options.rotate_speed, fallback.rotate_speed);
        self.pan_speed = finite_or(options.pan_speed, fallback.pan_speed);
        self.zoom_speed = finite_or(options.zoom_speed, fallback.zoom_speed);
        self.damping_factor =
            finite_or(options.damping_factor, fallback.damping_factor).clamp(0.0, 1.0);
        self.min_distance = finite_or(options.min_distance, fallback.min_distance).max(0.0);
        self.max_distance =
            finite_or(options.max_distance, fallback.max_distance).max(self.min_distance);
        self.min_polar_angle =
            finite_or(options.min_polar_angle, fallback.min_polar_angle).clamp(0.0, PI);
        self.max_polar_angle = finite_or(options.max_polar_angle, fallback.max_polar_angle)
            .clamp(self.min_polar_angle, PI);
    }

    /// Viewport height in pixels; drag speeds are relative to it.
    pub fn resize(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height.max(1.0);
    }

    /// Current look-at target.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the look-at target without animating.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Whether input is currently accepted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Resume accepting input.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop accepting input and drop whatever motion is still pending.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.clear_pending();
    }

    /// Whether damped motion is still being applied.
    pub fn has_pending_motion(&self) -> bool {
        self.theta_delta != 0.0
            || self.phi_delta != 0.0
            || self.zoom_log != 0.0
            || self.pan_offset != Vec3::ZERO
    }

    /// Orbit by a drag of `delta` pixels. Ignored while disabled.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        let scale = TAU / self.viewport_height * self.rotate_speed;
        self.theta_delta -= delta.x * scale;
        self.phi_delta -= delta.y * scale;
    }

    /// Pan the target by a drag of `delta` pixels, in the camera's screen
    /// plane. Ignored while disabled.
    pub fn pan(&mut self, delta: Vec2, camera: &Camera) {
        if !self.enabled {
            return;
        }
        let target_distance = (camera.eye - self.target).length()
            * (camera.fovy.to_radians() * 0.5).tan();
        let scale = 2.0 * target_distance / self.viewport_height * self.pan_speed;
        self.pan_offset += camera.right() * (-delta.x * scale)
            + camera.up() * (delta.y * scale);
    }

    /// Dolly toward (positive) or away from (negative) the target.
    /// Ignored while disabled.
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.zoom_log -= delta * ZOOM_STEP * self.zoom_speed;
    }

    /// Advance damped motion by `dt_seconds` and write the camera pose.
    ///
    /// Returns `true` if the camera moved. Does nothing while disabled.
    pub fn apply_frame_update(&mut self, camera: &mut Camera, dt_seconds: f32) -> bool {
        if !self.enabled {
            return false;
        }

        let offset = camera.eye - self.target;
        let radius = offset.length();
        let (mut theta, mut phi) = if radius > SETTLE_EPSILON {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI * 0.5)
        };

        let applied = self.frame_fraction(dt_seconds);
        theta += self.theta_delta * applied;
        phi = self.clamp_polar(phi + self.phi_delta * applied);
        let radius = (radius.max(SETTLE_EPSILON) * (self.zoom_log * applied).exp())
            .clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset * applied;

        let remaining = 1.0 - applied;
        self.theta_delta = settle(self.theta_delta * remaining);
        self.phi_delta = settle(self.phi_delta * remaining);
        self.zoom_log = settle(self.zoom_log * remaining);
        self.pan_offset *= remaining;
        if self.pan_offset.length() < SETTLE_EPSILON {
            self.pan_offset = Vec3::ZERO;
        }

        let eye = self.target + spherical_offset(radius, phi, theta);
        let moved = eye.distance_squared(camera.eye) > SETTLE_EPSILON * SETTLE_EPSILON;
        camera.eye = eye;
        camera.look_at(self.target);
        moved
    }

    /// Re-seat the orbit in front of the camera after a scripted move.
    ///
    /// The new target sits along the camera's forward vector at
    /// `focus_distance` (clamped to the distance limits), with the polar
    /// angle clamped so the next update leaves the eye where it is.
    pub fn resume_from(&mut self, camera: &Camera, focus_distance: f32) {
        let distance = focus_distance.clamp(self.min_distance, self.max_distance);
        let back = -camera.forward();
        let theta = back.x.atan2(back.z);
        let phi = self.clamp_polar(back.y.clamp(-1.0, 1.0).acos());
        self.target = camera.eye - spherical_offset(distance, phi, theta);
        self.clear_pending();
    }

    fn clear_pending(&mut self) {
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.zoom_log = 0.0;
        self.pan_offset = Vec3::ZERO;
    }

    fn clamp_polar(&self, phi: f32) -> f32 {
        phi.clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON)
    }

    /// Share of pending input consumed over `dt_seconds`, calibrated so one
    /// 60 Hz frame consumes exactly `damping_factor`.
    fn frame_fraction(&self, dt_seconds: f32) -> f32 {
        if !dt_seconds.is_finite() || dt_seconds <= 0.0 {
            return 0.0;
        }
        if self.damping_factor >= 1.0 {
            return 1.0;
        }
        1.0 - (1.0 - self.damping_factor).powf(dt_seconds * REFERENCE_FPS)
    }
}

fn spherical_offset(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let sin_phi = phi.sin();
    Vec3::new(
        radius * sin_phi * theta.sin(),
        radius * phi.cos(),
        radius * sin_phi * theta.cos(),
    )
}

fn settle(value: f32) -> f32 {
    if value.abs() < SETTLE_EPSILON {
        0.0
    } else {
        value
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn setup() -> (OrbitController, Camera) {
        let options = CameraOptions::default();
        let controller = OrbitController::new(&options, 600.0);
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, options.fovy, 1.5);
        (controller, camera)
    }

    fn run(controller: &mut OrbitController, camera: &mut Camera, frames: usize, dt: f32) {
        for _ in 0..frames {
            let _ = controller.apply_frame_update(camera, dt);
        }
    }

    #[test]
    fn idle_update_keeps_camera_still() {
        let (mut controller, mut camera) = setup();
        let before = camera.eye;
        assert!(!controller.apply_frame_update(&mut camera, FRAME));
        assert!((camera.eye - before).length() < 1e-4);
    }

    #[test]
    fn zoom_distance_is_clamped() {
        let (mut controller, mut camera) = setup();
        controller.zoom(500.0);
        run(&mut controller, &mut camera, 600, FRAME);
        assert!((camera.eye.length() - 2.0).abs() < 1e-3);

        controller.zoom(-5000.0);
        run(&mut controller, &mut camera, 600, FRAME);
        assert!((camera.eye.length() - 50.0).abs() < 1e-2);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let (mut controller, mut camera) = setup();
        // Dragging up pushes the camera below the target.
        controller.rotate(Vec2::new(0.0, -5000.0));
        run(&mut controller, &mut camera, 600, FRAME);
        let phi = (camera.eye.y / camera.eye.length()).acos();
        assert!(phi <= PI / 1.5 + 1e-4, "phi = {phi}");

        controller.rotate(Vec2::new(0.0, 5000.0));
        run(&mut controller, &mut camera, 600, FRAME);
        let phi = (camera.eye.y / camera.eye.length()).acos();
        assert!(phi < 1e-3, "phi = {phi}");
    }

    #[test]
    fn damping_applies_a_fraction_per_frame() {
        let (mut controller, mut camera) = setup();
        controller.rotate(Vec2::new(-100.0, 0.0));
        let total = 100.0 * TAU / 600.0 * 0.8;

        let _ = controller.apply_frame_update(&mut camera, FRAME);
        let theta = camera.eye.x.atan2(camera.eye.z);
        assert!((theta - total * 0.05).abs() < 1e-4);

        run(&mut controller, &mut camera, 2000, FRAME);
        let theta = camera.eye.x.atan2(camera.eye.z);
        assert!((theta - total).abs() < 1e-3);
        assert!(!controller.has_pending_motion());
    }

    #[test]
    fn damping_is_frame_rate_independent() {
        let (mut fast, mut fast_cam) = setup();
        let (mut slow, mut slow_cam) = setup();
        fast.rotate(Vec2::new(-120.0, 30.0));
        slow.rotate(Vec2::new(-120.0, 30.0));

        run(&mut fast, &mut fast_cam, 120, 1.0 / 120.0);
        run(&mut slow, &mut slow_cam, 30, 1.0 / 30.0);

        assert!((fast_cam.eye - slow_cam.eye).length() < 1e-3);
    }

    #[test]
    fn disabled_controller_ignores_input() {
        let (mut controller, mut camera) = setup();
        controller.disable();
        controller.rotate(Vec2::new(300.0, 0.0));
        controller.zoom(10.0);
        let before = camera.eye;
        assert!(!controller.apply_frame_update(&mut camera, FRAME));
        assert_eq!(camera.eye, before);
        assert!(!controller.has_pending_motion());
    }

    #[test]
    fn disabling_mid_drag_drops_pending_motion() {
        let (mut controller, mut camera) = setup();
        controller.rotate(Vec2::new(300.0, 0.0));
        let _ = controller.apply_frame_update(&mut camera, FRAME);
        controller.disable();
        controller.enable();
        let before = camera.eye;
        run(&mut controller, &mut camera, 10, FRAME);
        assert!((camera.eye - before).length() < 1e-4);
    }

    #[test]
    fn pan_moves_target_in_screen_plane() {
        let (mut controller, mut camera) = setup();
        controller.pan(Vec2::new(-50.0, 0.0), &camera);
        run(&mut controller, &mut camera, 2000, FRAME);
        assert!(controller.target().x > 0.0);
        assert!(controller.target().y.abs() < 1e-4);
        assert!((camera.eye.x - controller.target().x).abs() < 1e-3);
    }

    #[test]
    fn resume_keeps_eye_and_direction() {
        let (mut controller, _) = setup();
        let camera = Camera::new(Vec3::new(5.0, 1.0, 5.0), Vec3::new(0.0, 1.0, 0.0), 60.0, 1.5);
        controller.resume_from(&camera, 3.0);
        let expected = camera.eye + camera.forward() * 3.0;
        assert!((controller.target() - expected).length() < 1e-4);

        let mut moved = camera.clone();
        let _ = controller.apply_frame_update(&mut moved, FRAME);
        assert!((moved.eye - camera.eye).length() < 1e-4);
    }

    #[test]
    fn resume_clamps_focus_distance() {
        let (mut controller, _) = setup();
        let camera = Camera::new(Vec3::new(5.0, 1.0, 5.0), Vec3::new(0.0, 1.0, 0.0), 60.0, 1.5);
        controller.resume_from(&camera, 0.5);
        assert!((controller.target().distance(camera.eye) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn non_finite_options_fall_back_to_defaults() {
        let options = CameraOptions {
            damping_factor: f32::NAN,
            min_distance: f32::NAN,
            max_distance: f32::INFINITY,
            min_polar_angle: f32::NAN,
            max_polar_angle: f32::NEG_INFINITY,
            ..CameraOptions::default()
        };
        let mut controller = OrbitController::new(&options, 600.0);
        let defaults = CameraOptions::default();
        assert_eq!(controller.damping_factor, defaults.damping_factor);
        assert_eq!(controller.min_distance, defaults.min_distance);
        assert_eq!(controller.max_distance, defaults.max_distance);
        assert_eq!(controller.min_polar_angle, defaults.min_polar_angle);
        assert_eq!(controller.max_polar_angle, defaults.max_polar_angle);

        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 60.0, 1.5);
        controller.rotate(Vec2::new(40.0, 300.0));
        controller.zoom(3.0);
        run(&mut controller, &mut camera, 120, FRAME);
        assert!(camera.eye.is_finite());
    }
}
