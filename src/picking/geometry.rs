//! Pickable shapes and their ray intersection tests.

use glam::{Quat, Vec2, Vec3};

use super::ray::Ray;

/// Hits closer than this to the ray origin (when leaving a box) are
/// discarded.
const EXIT_EPSILON: f32 = 0.001;

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two corners given in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing all `points`, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box center.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Slab test. Returns the entry distance, or the exit distance when the
    /// ray starts inside.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        const EPSILON: f32 = 1e-8;

        // Near-zero components become a huge inverse rather than infinity
        let inv = |d: f32| {
            if d.abs() < EPSILON {
                1.0 / EPSILON.copysign(d)
            } else {
                1.0 / d
            }
        };
        let inv_dir = Vec3::new(inv(ray.direction.x), inv(ray.direction.y), inv(ray.direction.z));

        let t_min = (self.min - ray.origin) * inv_dir;
        let t_max = (self.max - ray.origin) * inv_dir;

        let t1 = t_min.min(t_max);
        let t2 = t_min.max(t_max);

        let t_near = t1.max_element();
        let t_far = t2.min_element();

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        if t_near < 0.0 {
            (t_far > EXIT_EPSILON).then_some(t_far)
        } else {
            Some(t_near)
        }
    }
}

/// Shape an interactive entity is picked by.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundingGeometry {
    /// Axis-aligned box.
    Box(Aabb),
    /// Sphere.
    Sphere {
        /// Center in world space.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
    /// Double-sided rectangle in its local XY plane (normal +Z).
    Quad {
        /// Center in world space.
        center: Vec3,
        /// Orientation of the local plane.
        rotation: Quat,
        /// Half width (local X) and half height (local Y).
        half_extents: Vec2,
    },
    /// Several shapes picked as one; the nearest part counts.
    Composite(Vec<BoundingGeometry>),
}

impl BoundingGeometry {
    /// Axis-aligned quad facing +Z, `width` by `height`, centered at
    /// `center`.
    pub fn quad(center: Vec3, width: f32, height: f32) -> Self {
        Self::Quad {
            center,
            rotation: Quat::IDENTITY,
            half_extents: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Distance along `ray` to the nearest intersection, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Self::Box(aabb) => aabb.intersect(ray),
            Self::Sphere { center, radius } => intersect_sphere(ray, *center, *radius),
            Self::Quad {
                center,
                rotation,
                half_extents,
            } => intersect_quad(ray, *center, *rotation, *half_extents),
            Self::Composite(parts) => parts
                .iter()
                .filter_map(|part| part.intersect(ray))
                .min_by(f32::total_cmp),
        }
    }

    /// World-space bounds, or `None` for an empty composite.
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Self::Box(aabb) => Some(*aabb),
            Self::Sphere { center, radius } => {
                Some(Aabb::new(*center - Vec3::splat(*radius), *center + Vec3::splat(*radius)))
            }
            Self::Quad {
                center,
                rotation,
                half_extents,
            } => {
                let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
                Aabb::from_points(corners.iter().map(|&(sx, sy)| {
                    *center
                        + *rotation
                            * Vec3::new(sx * half_extents.x, sy * half_extents.y, 0.0)
                }))
            }
            Self::Composite(parts) => parts
                .iter()
                .filter_map(Self::bounds)
                .reduce(|acc, b| acc.union(&b)),
        }
    }
}

fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

fn intersect_quad(ray: &Ray, center: Vec3, rotation: Quat, half_extents: Vec2) -> Option<f32> {
    let normal = rotation * Vec3::Z;
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-8 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let local = rotation.inverse() * (ray.at(t) - center);
    (local.x.abs() <= half_extents.x && local.y.abs() <= half_extents.y).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_x() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::X)
    }

    #[test]
    fn test_box_hit() {
        let aabb = Aabb::new(Vec3::new(5.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let t = aabb.intersect(&ray_x()).unwrap();
        assert!((t - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_box_miss() {
        let aabb = Aabb::new(Vec3::new(5.0, 2.0, 2.0), Vec3::new(10.0, 3.0, 3.0));
        assert!(aabb.intersect(&ray_x()).is_none());
    }

    #[test]
    fn test_box_behind_origin() {
        let aabb = Aabb::new(Vec3::new(-10.0, -1.0, -1.0), Vec3::new(-5.0, 1.0, 1.0));
        assert!(aabb.intersect(&ray_x()).is_none());
    }

    #[test]
    fn test_box_from_inside_reports_exit() {
        let aabb = Aabb::new(Vec3::new(-2.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let t = aabb.intersect(&ray_x()).unwrap();
        assert!((t - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_axis_parallel_ray_outside_slab() {
        // Direction has exact zero y/z components.
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        let aabb = Aabb::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(aabb.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_and_miss() {
        let hit = BoundingGeometry::Sphere { center: Vec3::new(8.0, 0.0, 0.0), radius: 1.0 };
        assert!((hit.intersect(&ray_x()).unwrap() - 7.0).abs() < 1e-4);

        let miss = BoundingGeometry::Sphere { center: Vec3::new(8.0, 3.0, 0.0), radius: 1.0 };
        assert!(miss.intersect(&ray_x()).is_none());
    }

    #[test]
    fn test_quad_is_double_sided() {
        let quad = BoundingGeometry::quad(Vec3::new(0.0, 0.0, -4.0), 0.4, 0.4);
        let front = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let back = Ray::new(Vec3::new(0.0, 0.0, -8.0), Vec3::Z);
        assert!((quad.intersect(&front).unwrap() - 4.0).abs() < 1e-4);
        assert!((quad.intersect(&back).unwrap() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_quad_edges_and_edge_on() {
        let quad = BoundingGeometry::quad(Vec3::new(0.0, 0.0, -4.0), 0.4, 0.4);
        let outside = Ray::new(Vec3::new(0.3, 0.0, 0.0), Vec3::NEG_Z);
        assert!(quad.intersect(&outside).is_none());
        let edge_on = Ray::new(Vec3::new(-1.0, 0.0, -4.0), Vec3::X);
        assert!(quad.intersect(&edge_on).is_none());
    }

    #[test]
    fn test_rotated_quad() {
        let quad = BoundingGeometry::Quad {
            center: Vec3::new(5.0, 0.0, 0.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            half_extents: Vec2::new(1.0, 1.0),
        };
        assert!((quad.intersect(&ray_x()).unwrap() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_composite_takes_nearest_part() {
        let composite = BoundingGeometry::Composite(vec![
            BoundingGeometry::Sphere { center: Vec3::new(12.0, 0.0, 0.0), radius: 1.0 },
            BoundingGeometry::Box(Aabb::new(Vec3::new(4.0, -1.0, -1.0), Vec3::new(5.0, 1.0, 1.0))),
        ]);
        assert!((composite.intersect(&ray_x()).unwrap() - 4.0).abs() < 1e-4);
        assert!(BoundingGeometry::Composite(Vec::new()).intersect(&ray_x()).is_none());
    }

    #[test]
    fn test_bounds() {
        let quad = BoundingGeometry::quad(Vec3::new(1.0, 2.0, 3.0), 0.4, 0.2);
        let bounds = quad.bounds().unwrap();
        assert!((bounds.min - Vec3::new(0.8, 1.9, 3.0)).length() < 1e-5);
        assert!((bounds.max - Vec3::new(1.2, 2.1, 3.0)).length() < 1e-5);

        let composite = BoundingGeometry::Composite(vec![
            BoundingGeometry::Sphere { center: Vec3::ZERO, radius: 1.0 },
            BoundingGeometry::Box(Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0))),
        ]);
        let bounds = composite.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-1.0));
        assert_eq!(bounds.max, Vec3::splat(3.0));
        assert_eq!(bounds.center(), Vec3::splat(1.0));
        assert_eq!(bounds.size(), Vec3::splat(4.0));
    }
}
