use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and free-orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 3.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Fraction of the remaining input delta applied per 60 Hz frame.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Closest the camera may orbit to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the camera may orbit from its target.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Lowest polar angle from world +Y, in radians.
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Highest polar angle from world +Y, in radians.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Eye position at startup.
    #[schemars(skip)]
    pub initial_position: [f32; 3],
    /// Orbit target at startup.
    #[schemars(skip)]
    pub initial_target: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.8,
            pan_speed: 1.0,
            zoom_speed: 1.0,
            damping_factor: 0.05,
            min_distance: 2.0,
            max_distance: 50.0,
            min_polar_angle: 0.0,
            max_polar_angle: std::f32::consts::PI / 1.5,
            initial_position: [18.57, 4.02, 1.02],
            initial_target: [0.0, 0.0, 0.0],
        }
    }
}
