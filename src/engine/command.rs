//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a mouse gesture, a
//! key press, a room button or a programmatic call, is a `GalleryCommand`.
//! Consumers construct commands and pass them to
//! [`GalleryEngine::execute`](super::GalleryEngine::execute).

use glam::Vec2;

/// A single interactive operation on the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryCommand {
    // ── Free camera ─────────────────────────────────────────────────
    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Picking ─────────────────────────────────────────────────────
    /// Resolve a click at a screen position and react to what was hit.
    Pick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (origin at the top).
        y: f32,
    },

    // ── Navigation ──────────────────────────────────────────────────
    /// Fly to a registered viewpoint.
    GoToViewpoint {
        /// Viewpoint key.
        key: String,
    },

    /// Fly to a spot framing an interactive entity and show its info.
    FrameEntity {
        /// Entity id.
        id: String,
    },
}

impl GalleryCommand {
    /// Whether this command drives the free camera directly.
    ///
    /// These are dropped while a scripted transition runs.
    #[must_use]
    pub fn is_free_camera_input(&self) -> bool {
        matches!(
            self,
            Self::RotateCamera { .. } | Self::PanCamera { .. } | Self::Zoom { .. }
        )
    }
}
