//! Read-only query methods and scene lifecycle helpers for
//! [`GalleryEngine`].

use glam::Vec2;
use log::info;

use super::GalleryEngine;
use crate::camera::controller::OrbitController;
use crate::camera::core::{Camera, CameraUniform};
use crate::content::{GalleryContent, ViewpointRegistry};
use crate::error::GalleryError;
use crate::scene::{tag_exhibits, EntityRegistry, InteractiveEntity, SceneMesh};
use crate::session::{InteractionMode, InteractionSession};

// ── Camera ──

impl GalleryEngine {
    /// The live camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The orbit controller.
    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    /// Snapshot for host renderers.
    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(&self.camera)
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Update the viewport after a window or canvas resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
        self.camera.aspect = super::aspect_ratio(self.viewport);
        self.controller.resize(self.viewport.y);
    }
}

// ── Session ──

impl GalleryEngine {
    /// The interaction session.
    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    /// Whether the camera is free or in a scripted transition.
    pub fn mode(&self) -> InteractionMode {
        self.session.mode()
    }

    /// Whether a scripted transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        !self.session.is_free()
    }
}

// ── Content and entities ──

impl GalleryEngine {
    /// Loaded gallery content.
    pub fn content(&self) -> &GalleryContent {
        &self.content
    }

    /// All viewpoints.
    pub fn viewpoints(&self) -> &ViewpointRegistry {
        &self.content.viewpoints
    }

    /// Registered interactive entities.
    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    /// Register entities, skipping duplicate ids. Returns how many were
    /// added.
    pub fn register_entities(
        &mut self,
        entities: impl IntoIterator<Item = InteractiveEntity>,
    ) -> usize {
        self.entities.extend(entities)
    }

    /// Tag the loaded meshes and register the exhibits among them.
    ///
    /// Called once the asset loader finishes. A failed load passes an empty
    /// slice and leaves only the markers pickable.
    pub fn register_meshes(&mut self, meshes: &[SceneMesh]) -> usize {
        let exhibits = tag_exhibits(meshes, &self.content.exhibits);
        let added = self.entities.extend(exhibits);
        info!(
            "scene loaded: {} meshes, {added} exhibits, {} pickable entities",
            meshes.len(),
            self.entities.len()
        );
        added
    }

    /// Unregister one entity.
    pub fn remove_entity(&mut self, id: &str) -> Result<InteractiveEntity, GalleryError> {
        self.entities.remove(id)
    }

    /// Unregister everything (scene teardown).
    pub fn clear_entities(&mut self) {
        self.entities.clear();
    }
}
