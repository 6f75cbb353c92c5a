//! Camera system for the gallery viewer.
//!
//! Provides the live camera, the poses it can be sent to, and the damped
//! orbit controller that drives it between scripted moves.

/// Damped orbit controller for free user navigation.
pub mod controller;
/// Core camera struct and host uniform snapshot.
pub mod core;
/// Camera poses and their two orientation forms.
pub mod pose;

pub use controller::OrbitController;
pub use self::core::{Camera, CameraUniform};
pub use pose::{CameraPose, EulerDegrees, PoseOrientation};
