//! Interaction session state: who may write the camera this tick.
//!
//! The session is either `Free` (the orbit controller drives the camera) or
//! `Transitioning` (a scripted [`TransitionJob`] does). The job lives inside
//! the session, so a free session can never hold one. Entering and leaving
//! the transitioning state suspends and resumes the orbit controller.

use crate::animation::transition::TransitionJob;
use crate::camera::controller::OrbitController;

/// Which subsystem currently owns the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// User input drives the camera through the orbit controller.
    #[default]
    Free,
    /// A scripted transition drives the camera; user input is dropped.
    Transitioning,
}

/// Process-wide interaction state, owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct InteractionSession {
    active: Option<TransitionJob>,
}

impl InteractionSession {
    /// A free session with no transition in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> InteractionMode {
        if self.active.is_some() {
            InteractionMode::Transitioning
        } else {
            InteractionMode::Free
        }
    }

    /// Whether user input may move the camera.
    pub fn is_free(&self) -> bool {
        self.active.is_none()
    }

    /// The in-flight transition, if any.
    pub fn active_transition(&self) -> Option<&TransitionJob> {
        self.active.as_ref()
    }

    /// Enter `Transitioning` with `job`, suspending the orbit controller.
    ///
    /// Any job already in flight is replaced and returned without its
    /// completion ever running.
    pub fn begin_transition(
        &mut self,
        job: TransitionJob,
        controller: &mut OrbitController,
    ) -> Option<TransitionJob> {
        controller.disable();
        self.active.replace(job)
    }

    /// Return to `Free`, resuming the orbit controller.
    ///
    /// Returns the finished job, or `None` if nothing was in flight.
    pub fn complete_transition(
        &mut self,
        controller: &mut OrbitController,
    ) -> Option<TransitionJob> {
        let finished = self.active.take()?;
        controller.enable();
        Some(finished)
    }
}
