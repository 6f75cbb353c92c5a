//! The gallery engine: one owning object for camera, session, content and
//! interactive entities, split across impl blocks by concern.

mod accessors;
/// The engine's interactive vocabulary.
pub mod command;
/// Pick-to-reaction decisions.
pub mod dispatch;
mod navigation;
mod options;
/// Info panel collaborator.
pub mod panel;

use glam::{Vec2, Vec3};
use log::debug;
use web_time::Instant;

use self::command::GalleryCommand;
use self::panel::{InfoPanel, LogPanel};
use crate::animation::animator::{TickOutcome, TransitionAnimator};
use crate::camera::controller::OrbitController;
use crate::camera::core::Camera;
use crate::content::GalleryContent;
use crate::error::GalleryError;
use crate::options::Options;
use crate::scene::EntityRegistry;
use crate::session::InteractionSession;

/// Longest frame step fed to the orbit damping (a backgrounded tab can
/// return after seconds).
const MAX_FRAME_STEP: f32 = 0.25;

/// The gallery's camera navigation and interaction core.
///
/// Owns the live camera, the orbit controller, the interaction session,
/// the transition animator, the gallery content with its viewpoints, and
/// the registered interactive entities. Nothing is global; the host holds
/// one engine and drives it.
///
/// # Frame loop
///
/// Call [`frame`](Self::frame) once per displayed frame with the current
/// time, then read [`camera`](Self::camera) or
/// [`camera_uniform`](Self::camera_uniform) to draw. Call
/// [`resize`](Self::resize) when the viewport changes.
///
/// # Input
///
/// Feed [`GalleryCommand`]s (usually from an
/// [`InputProcessor`](crate::input::InputProcessor)) to
/// [`execute`](Self::execute). Free-camera commands are dropped while a
/// scripted transition runs.
///
/// # Scene
///
/// Marker buttons from the content are registered at construction. Once the
/// host has loaded its meshes, hand them to
/// [`register_meshes`](Self::register_meshes).
pub struct GalleryEngine {
    camera: Camera,
    controller: OrbitController,
    session: InteractionSession,
    animator: TransitionAnimator,
    content: GalleryContent,
    entities: EntityRegistry,
    panel: Box<dyn InfoPanel>,
    options: Options,
    viewport: Vec2,
    last_frame: Option<Instant>,
}

// =============================================================================
// Construction
// =============================================================================

impl GalleryEngine {
    /// Engine over `content` with a viewport of `width` × `height` pixels.
    ///
    /// Marker buttons are registered immediately; exhibits follow once
    /// meshes are loaded. Info panel requests go to the log until
    /// [`set_panel`](Self::set_panel) is called.
    pub fn new(options: Options, content: GalleryContent, width: f32, height: f32) -> Self {
        let viewport = Vec2::new(width.max(0.0), height.max(0.0));
        let mut camera = Camera::new(
            Vec3::from_array(options.camera.initial_position),
            Vec3::from_array(options.camera.initial_target),
            options.camera.fovy,
            aspect_ratio(viewport),
        );
        camera.znear = options.camera.znear;
        camera.zfar = options.camera.zfar;

        let controller = OrbitController::new(&options.camera, viewport.y);
        let animator = TransitionAnimator::new(&options.navigation);

        let mut entities = EntityRegistry::new();
        let markers = entities.extend(content.marker_entities());
        debug!("registered {markers} navigation markers");

        Self {
            camera,
            controller,
            session: InteractionSession::new(),
            animator,
            content,
            entities,
            panel: Box::new(LogPanel),
            options,
            viewport,
            last_frame: None,
        }
    }

    /// Engine over the built-in gallery with default options.
    pub fn builtin(width: f32, height: f32) -> Result<Self, GalleryError> {
        Ok(Self::new(
            Options::default(),
            GalleryContent::builtin()?,
            width,
            height,
        ))
    }

    /// Route info panel requests to `panel`.
    pub fn set_panel(&mut self, panel: Box<dyn InfoPanel>) {
        self.panel = panel;
    }
}

// =============================================================================
// Frame loop
// =============================================================================

impl GalleryEngine {
    /// Advance the camera to `now`.
    ///
    /// While a transition is in flight only the animator writes the camera;
    /// otherwise the orbit controller applies its damped motion. Returns
    /// `true` if the camera moved.
    pub fn frame(&mut self, now: Instant) -> bool {
        let dt = self
            .last_frame
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32())
            .min(MAX_FRAME_STEP);
        self.last_frame = Some(now);

        if self.session.is_free() {
            return self.controller.apply_frame_update(&mut self.camera, dt);
        }
        match self.animator.tick(
            &mut self.session,
            &mut self.controller,
            &mut self.camera,
            now,
        ) {
            TickOutcome::Idle => false,
            TickOutcome::InFlight { .. } | TickOutcome::Completed => true,
        }
    }

    /// Apply one command.
    pub fn execute(&mut self, command: GalleryCommand, now: Instant) {
        if command.is_free_camera_input() && !self.session.is_free() {
            debug!("dropping {command:?} during transition");
            return;
        }
        match command {
            GalleryCommand::RotateCamera { delta } => self.controller.rotate(delta),
            GalleryCommand::PanCamera { delta } => self.controller.pan(delta, &self.camera),
            GalleryCommand::Zoom { delta } => self.controller.zoom(delta),
            GalleryCommand::Pick { x, y } => {
                let _ = self.handle_click(Vec2::new(x, y), now);
            }
            GalleryCommand::GoToViewpoint { key } => {
                let _ = self.go_to_viewpoint(&key, now);
            }
            GalleryCommand::FrameEntity { id } => {
                let _ = self.frame_entity(&id, now);
            }
        }
    }
}

fn aspect_ratio(viewport: Vec2) -> f32 {
    if viewport.x > 0.0 && viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    }
}
