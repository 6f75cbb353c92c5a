//! Screen click to nearest interactive entity.

use glam::{Vec2, Vec3};

use super::ray::Ray;
use crate::camera::core::Camera;
use crate::scene::InteractiveEntity;

/// Closest entity along a pick ray.
#[derive(Debug, Clone, Copy)]
pub struct PickHit<'a> {
    /// The entity that was hit.
    pub entity: &'a InteractiveEntity,
    /// Ray parameter of the hit (world units from the eye).
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Nearest entity intersected by `ray`.
///
/// Only strictly closer hits replace the current best, so equal distances
/// resolve to the entity that comes first in `entities`.
pub fn nearest_hit<'a>(ray: &Ray, entities: &'a [InteractiveEntity]) -> Option<PickHit<'a>> {
    let mut best: Option<(f32, &InteractiveEntity)> = None;
    for entity in entities {
        let Some(t) = entity.geometry.intersect(ray) else {
            continue;
        };
        if best.is_none_or(|(best_t, _)| t < best_t) {
            best = Some((t, entity));
        }
    }
    best.map(|(distance, entity)| PickHit {
        entity,
        distance,
        point: ray.at(distance),
    })
}

/// Resolve a click at `screen` (pixels, origin top-left) in a viewport of
/// size `viewport` to the nearest interactive entity under it.
///
/// Returns `None` when nothing is hit, when `entities` is empty, or when
/// the viewport has no area.
pub fn resolve_pick<'a>(
    screen: Vec2,
    viewport: Vec2,
    camera: &Camera,
    entities: &'a [InteractiveEntity],
) -> Option<&'a InteractiveEntity> {
    if entities.is_empty() {
        return None;
    }
    let ray = Ray::from_screen(camera, screen, viewport)?;
    nearest_hit(&ray, entities).map(|hit| hit.entity)
}
