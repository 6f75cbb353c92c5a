use glam::{Mat4, Quat, Vec3};

use super::pose::{CameraPose, EulerDegrees, PoseOrientation};

/// Perspective camera defined by eye position, rotation, and projection
/// parameters.
///
/// The camera looks down its local -Z axis with +Y up. Rotation is stored
/// directly so explicit Euler viewpoints keep their roll until the orbit
/// controller re-aims the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform-buffer layout of the camera for host renderers.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Camera at `eye` aimed at `target`.
    pub fn new(eye: Vec3, target: Vec3, fovy: f32, aspect: f32) -> Self {
        let mut camera = Self {
            eye,
            rotation: Quat::IDENTITY,
            aspect,
            fovy,
            znear: 0.1,
            zfar: 1000.0,
        };
        camera.look_at(target);
        camera
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Camera-space up direction in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Camera-space right direction in world space.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Re-aim the camera at `target`, keeping world +Y as up.
    ///
    /// Degenerate targets (on the eye, or straight above/below it) leave the
    /// rotation untouched.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.eye).try_normalize() else {
            return;
        };
        if dir.cross(Vec3::Y).length_squared() < 1e-12 {
            return;
        }
        let view = Mat4::look_at_rh(self.eye, target, Vec3::Y);
        self.rotation = Quat::from_mat4(&view).inverse().normalize();
    }

    /// Set rotation from explicit Euler angles.
    pub fn set_euler(&mut self, angles: EulerDegrees) {
        self.rotation = angles.to_quat();
    }

    /// Apply a pose's position and orientation at once.
    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.eye = pose.position;
        match pose.orientation {
            PoseOrientation::LookAt(target) => self.look_at(target),
            PoseOrientation::Euler(angles) => self.set_euler(angles),
        }
    }

    /// Current pose, expressed with explicit Euler orientation.
    pub fn pose(&self) -> CameraPose {
        CameraPose::euler(self.eye, EulerDegrees::from_quat(self.rotation))
    }

    /// World-to-view matrix.
    pub fn build_view(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.eye).inverse()
    }

    /// Projection matrix ([0,1] depth range).
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

impl CameraUniform {
    /// Snapshot the given camera's current state.
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.build_matrix().to_cols_array_2d(),
            position: camera.eye.to_array(),
            aspect: camera.aspect,
            forward: camera.forward().to_array(),
            fovy: camera.fovy,
        }
    }
}
