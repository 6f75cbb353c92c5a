//! Pick rays from screen positions.

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;

/// Half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray from the camera eye through a normalized-device-coordinate point
    /// (x right, y up, both in `[-1, 1]`).
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let half_height = (camera.fovy.to_radians() * 0.5).tan();
        let local = Vec3::new(
            ndc.x * half_height * camera.aspect,
            ndc.y * half_height,
            -1.0,
        );
        Self::new(camera.eye, camera.rotation * local)
    }

    /// Ray from the camera through a screen pixel.
    ///
    /// Returns `None` for an empty viewport.
    pub fn from_screen(camera: &Camera, screen: Vec2, viewport: Vec2) -> Option<Self> {
        screen_to_ndc(screen, viewport).map(|ndc| Self::from_ndc(camera, ndc))
    }
}

/// Map a pixel position (origin top-left, y down) to normalized device
/// coordinates (y up).
pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        screen.x / viewport.x * 2.0 - 1.0,
        -(screen.y / viewport.y) * 2.0 + 1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 60.0, 2.0)
    }

    #[test]
    fn ndc_corners_and_center() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_ndc(Vec2::new(400.0, 300.0), viewport), Some(Vec2::ZERO));
        assert_eq!(screen_to_ndc(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(screen_to_ndc(viewport, viewport), Some(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn empty_viewport_has_no_ray() {
        assert!(Ray::from_screen(&camera(), Vec2::ZERO, Vec2::new(0.0, 600.0)).is_none());
    }

    #[test]
    fn center_ray_follows_forward() {
        let ray = Ray::from_ndc(&camera(), Vec2::ZERO);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 10.0));
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn edge_rays_span_the_field_of_view() {
        let camera = camera();
        let top = Ray::from_ndc(&camera, Vec2::new(0.0, 1.0));
        let angle = top.direction.angle_between(camera.forward());
        assert!((angle - 30f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn screen_ray_projects_back_to_same_pixel() {
        let camera = Camera::new(Vec3::new(4.0, 3.0, 6.0), Vec3::new(0.0, 1.0, 0.0), 60.0, 1.5);
        let viewport = Vec2::new(1200.0, 800.0);
        let pixel = Vec2::new(900.0, 200.0);
        let ray = Ray::from_screen(&camera, pixel, viewport).unwrap();

        let clip = camera.build_matrix().project_point3(ray.at(5.0));
        let back = Vec2::new((clip.x + 1.0) * 0.5 * viewport.x, (1.0 - clip.y) * 0.5 * viewport.y);
        assert!((back - pixel).length() < 0.05, "{back}");
    }
}
