use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Euler angles in degrees, applied in X → Y → Z order (intrinsic).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerDegrees {
    /// Rotation about the X axis, in degrees.
    pub x: f32,
    /// Rotation about the Y axis, in degrees.
    pub y: f32,
    /// Rotation about the Z axis, in degrees.
    pub z: f32,
}

impl EulerDegrees {
    /// Euler angles from three degree values.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The rotation these angles describe.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.x.to_radians(),
            self.y.to_radians(),
            self.z.to_radians(),
        )
    }

    /// Decompose a rotation back into XYZ degrees.
    pub fn from_quat(rotation: Quat) -> Self {
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        Self::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}

/// How a pose orients the camera. A pose carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoseOrientation {
    /// Aim the camera at a world-space point.
    LookAt(Vec3),
    /// Set the camera rotation directly.
    Euler(EulerDegrees),
}

/// Camera position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation at that position.
    pub orientation: PoseOrientation,
}

impl CameraPose {
    /// Pose at `position` aimed at `target`.
    pub fn look_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            orientation: PoseOrientation::LookAt(target),
        }
    }

    /// Pose at `position` with explicit Euler angles.
    pub fn euler(position: Vec3, angles: EulerDegrees) -> Self {
        Self {
            position,
            orientation: PoseOrientation::Euler(angles),
        }
    }

    /// Look-at target, if this pose is aimed at a point.
    pub fn look_at_target(&self) -> Option<Vec3> {
        match self.orientation {
            PoseOrientation::LookAt(target) => Some(target),
            PoseOrientation::Euler(_) => None,
        }
    }

    /// Explicit Euler angles, if this pose sets them.
    pub fn euler_angles(&self) -> Option<EulerDegrees> {
        match self.orientation {
            PoseOrientation::Euler(angles) => Some(angles),
            PoseOrientation::LookAt(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_round_trips_through_quat() {
        let angles = EulerDegrees::new(-18.4, 70.3, 17.4);
        let back = EulerDegrees::from_quat(angles.to_quat());
        assert!((back.x - angles.x).abs() < 1e-3);
        assert!((back.y - angles.y).abs() < 1e-3);
        assert!((back.z - angles.z).abs() < 1e-3);
    }

    #[test]
    fn yaw_ninety_turns_forward_to_negative_x() {
        let rotation = EulerDegrees::new(0.0, 90.0, 0.0).to_quat();
        let forward = rotation * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn pose_exposes_one_orientation() {
        let pose = CameraPose::look_at(Vec3::ONE, Vec3::ZERO);
        assert_eq!(pose.look_at_target(), Some(Vec3::ZERO));
        assert_eq!(pose.euler_angles(), None);

        let pose = CameraPose::euler(Vec3::ONE, EulerDegrees::default());
        assert_eq!(pose.look_at_target(), None);
        assert_eq!(pose.euler_angles(), Some(EulerDegrees::default()));
    }
}
