//! Drives scripted camera transitions one render tick at a time.

use log::debug;
use web_time::{Duration, Instant};

use super::transition::TransitionJob;
use crate::camera::controller::OrbitController;
use crate::camera::core::Camera;
use crate::camera::pose::{CameraPose, PoseOrientation};
use crate::options::NavigationOptions;
use crate::session::InteractionSession;
use crate::util::easing::EasingFunction;

/// What a call to [`TransitionAnimator::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No transition was in flight.
    Idle,
    /// The camera moved and the transition continues.
    InFlight {
        /// Raw progress after this tick, in `[0, 1)`.
        progress: f32,
    },
    /// The camera landed on the end pose and the session is free again.
    Completed,
}

/// Starts and advances [`TransitionJob`]s on behalf of the session.
///
/// Position is interpolated over the duration. Explicit Euler orientation
/// is snapped once, when the transition starts; look-at orientation is
/// re-aimed at its target on every tick.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    easing: EasingFunction,
    resume_focus_distance: f32,
}

impl TransitionAnimator {
    /// Animator using the navigation easing and resume distance.
    pub fn new(options: &NavigationOptions) -> Self {
        Self {
            easing: options.easing,
            resume_focus_distance: options.resume_focus_distance,
        }
    }

    /// Pick up changed navigation options. In-flight jobs keep their easing.
    pub fn configure(&mut self, options: &NavigationOptions) {
        self.easing = options.easing;
        self.resume_focus_distance = options.resume_focus_distance;
    }

    /// Begin moving the camera from where it is now to `target`.
    ///
    /// Replaces any transition already in flight; the replaced job never
    /// completes.
    pub fn start_transition(
        &self,
        session: &mut InteractionSession,
        controller: &mut OrbitController,
        camera: &mut Camera,
        target: &CameraPose,
        duration: Duration,
        now: Instant,
    ) {
        let start_pose = camera.pose();
        if let PoseOrientation::Euler(angles) = target.orientation {
            camera.set_euler(angles);
        }

        let job = TransitionJob::new(start_pose, *target, now, duration, self.easing);
        if let Some(superseded) = session.begin_transition(job, controller) {
            debug!(
                "transition to {} superseded",
                superseded.end_pose.position
            );
        }
        debug!(
            "transition {} -> {} over {:.2}s",
            start_pose.position,
            target.position,
            duration.as_secs_f32()
        );
    }

    /// Advance the in-flight transition to `now` and write the camera.
    ///
    /// On completion the session returns to free and the orbit controller
    /// is re-seated in front of the camera.
    pub fn tick(
        &self,
        session: &mut InteractionSession,
        controller: &mut OrbitController,
        camera: &mut Camera,
        now: Instant,
    ) -> TickOutcome {
        let Some(job) = session.active_transition() else {
            return TickOutcome::Idle;
        };

        let progress = job.progress(now);
        let end = job.end_pose;
        camera.eye = job.position_at(progress);
        if let PoseOrientation::LookAt(target) = end.orientation {
            camera.look_at(target);
        }

        if progress < 1.0 {
            return TickOutcome::InFlight { progress };
        }

        let focus_distance = match end.orientation {
            PoseOrientation::LookAt(target) => target.distance(end.position),
            PoseOrientation::Euler(_) => self.resume_focus_distance,
        };
        let _ = session.complete_transition(controller);
        controller.resume_from(camera, focus_distance);
        debug!("transition landed at {}", camera.eye);
        TickOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::camera::pose::EulerDegrees;
    use crate::options::CameraOptions;
    use crate::session::InteractionMode;

    struct Rig {
        animator: TransitionAnimator,
        session: InteractionSession,
        controller: OrbitController,
        camera: Camera,
    }

    impl Rig {
        fn new() -> Self {
            let options = CameraOptions::default();
            Self {
                animator: TransitionAnimator::new(&NavigationOptions::default()),
                session: InteractionSession::new(),
                controller: OrbitController::new(&options, 600.0),
                camera: Camera::new(
                    Vec3::from_array(options.initial_position),
                    Vec3::ZERO,
                    options.fovy,
                    1.5,
                ),
            }
        }

        fn start(&mut self, target: &CameraPose, duration: Duration, now: Instant) {
            self.animator.start_transition(
                &mut self.session,
                &mut self.controller,
                &mut self.camera,
                target,
                duration,
                now,
            );
        }

        fn tick(&mut self, now: Instant) -> TickOutcome {
            self.animator.tick(
                &mut self.session,
                &mut self.controller,
                &mut self.camera,
                now,
            )
        }
    }

    #[test]
    fn idle_without_transition() {
        let mut rig = Rig::new();
        assert_eq!(rig.tick(Instant::now()), TickOutcome::Idle);
    }

    #[test]
    fn position_moves_monotonically_and_lands_exactly() {
        let mut rig = Rig::new();
        let start = rig.camera.eye;
        let end = Vec3::new(4.03, 2.21, -1.64);
        let t0 = Instant::now();
        let duration = Duration::from_millis(1500);
        rig.start(&CameraPose::look_at(end, Vec3::ZERO), duration, t0);

        let mut previous = start;
        for step in 1..30 {
            let now = t0 + duration * step / 30;
            assert!(matches!(rig.tick(now), TickOutcome::InFlight { .. }));
            let eye = rig.camera.eye;
            for axis in 0..3 {
                let dir = (end[axis] - start[axis]).signum();
                assert!((eye[axis] - previous[axis]) * dir >= -1e-5);
            }
            previous = eye;
        }

        assert_eq!(rig.tick(t0 + duration), TickOutcome::Completed);
        assert_eq!(rig.camera.eye, end);
        assert_eq!(rig.session.mode(), InteractionMode::Free);
    }

    #[test]
    fn sparse_ticks_still_finish_on_time() {
        let mut rig = Rig::new();
        let end = Vec3::new(-5.65, 1.98, 3.39);
        let t0 = Instant::now();
        rig.start(&CameraPose::look_at(end, Vec3::ZERO), Duration::from_secs(1), t0);
        assert_eq!(rig.tick(t0 + Duration::from_secs(7)), TickOutcome::Completed);
        assert_eq!(rig.camera.eye, end);
    }

    #[test]
    fn latest_transition_wins() {
        let mut rig = Rig::new();
        let t0 = Instant::now();
        let duration = Duration::from_millis(1500);
        let a = Vec3::new(10.0, 10.0, 10.0);
        let b = Vec3::new(-3.0, 1.0, 2.0);

        rig.start(&CameraPose::look_at(a, Vec3::ZERO), duration, t0);
        let _ = rig.tick(t0 + Duration::from_millis(100));
        let t1 = t0 + Duration::from_millis(200);
        rig.start(&CameraPose::look_at(b, Vec3::ZERO), duration, t1);

        // Still in flight at A's original end time.
        assert!(matches!(rig.tick(t0 + duration), TickOutcome::InFlight { .. }));
        assert_eq!(rig.tick(t1 + duration), TickOutcome::Completed);
        assert_eq!(rig.camera.eye, b);
        assert_eq!(rig.tick(t1 + duration * 2), TickOutcome::Idle);
    }

    #[test]
    fn euler_orientation_snaps_at_start() {
        let mut rig = Rig::new();
        let angles = EulerDegrees::new(0.0, 90.0, 0.0);
        let t0 = Instant::now();
        rig.start(
            &CameraPose::euler(Vec3::new(3.98, 2.04, 3.23), angles),
            Duration::from_secs(1),
            t0,
        );
        let snapped = rig.camera.rotation;
        assert!((rig.camera.forward() - Vec3::NEG_X).length() < 1e-5);

        let _ = rig.tick(t0 + Duration::from_millis(400));
        assert_eq!(rig.camera.rotation, snapped);
    }

    #[test]
    fn controller_is_suspended_until_landing() {
        let mut rig = Rig::new();
        let t0 = Instant::now();
        let end = Vec3::new(3.12, 2.4, -5.85);
        rig.start(
            &CameraPose::euler(end, EulerDegrees::new(-10.0, 30.0, 0.0)),
            Duration::from_secs(1),
            t0,
        );
        assert!(!rig.controller.is_enabled());

        rig.controller.rotate(Vec2::new(500.0, 0.0));
        assert!(!rig.controller.has_pending_motion());

        assert_eq!(rig.tick(t0 + Duration::from_secs(1)), TickOutcome::Completed);
        assert!(rig.controller.is_enabled());
        let expected = end + rig.camera.forward() * 2.0;
        assert!((rig.controller.target() - expected).length() < 1e-3);
    }

    #[test]
    fn look_at_landing_orbits_the_look_at_target() {
        let mut rig = Rig::new();
        let t0 = Instant::now();
        let focus = Vec3::new(5.04, 0.16, 4.76);
        rig.start(
            &CameraPose::look_at(Vec3::new(8.95, 1.02, 6.11), focus),
            Duration::from_secs(1),
            t0,
        );
        let _ = rig.tick(t0 + Duration::from_secs(2));
        assert!((rig.controller.target() - focus).length() < 1e-3);
    }
}
