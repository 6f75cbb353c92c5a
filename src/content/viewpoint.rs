use rustc_hash::FxHashMap;

use crate::camera::pose::CameraPose;
use crate::error::GalleryError;

/// A named camera pose with optional descriptive text.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    /// Unique key (room name or marker number).
    pub key: String,
    /// Where the camera goes.
    pub pose: CameraPose,
    /// Display label; the key is used when absent.
    pub label: Option<String>,
    /// Longer description.
    pub description: Option<String>,
}

impl Viewpoint {
    /// Viewpoint without label or description.
    pub fn new(key: impl Into<String>, pose: CameraPose) -> Self {
        Self {
            key: key.into(),
            pose,
            label: None,
            description: None,
        }
    }

    /// Label if set, otherwise the key.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// Viewpoints by key, remembering declaration order.
///
/// Filled once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ViewpointRegistry {
    viewpoints: Vec<Viewpoint>,
    by_key: FxHashMap<String, usize>,
}

impl ViewpointRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a viewpoint. Keys must be unique.
    pub fn insert(&mut self, viewpoint: Viewpoint) -> Result<(), GalleryError> {
        if self.by_key.contains_key(&viewpoint.key) {
            return Err(GalleryError::DuplicateViewpoint(viewpoint.key));
        }
        let _ = self
            .by_key
            .insert(viewpoint.key.clone(), self.viewpoints.len());
        self.viewpoints.push(viewpoint);
        Ok(())
    }

    /// Look up a viewpoint.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Viewpoint> {
        self.by_key.get(key).map(|&idx| &self.viewpoints[idx])
    }

    /// Whether `key` is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Viewpoints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Viewpoint> {
        self.viewpoints.iter()
    }

    /// Number of viewpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.viewpoints.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn room(key: &str, x: f32) -> Viewpoint {
        Viewpoint::new(key, CameraPose::look_at(Vec3::new(x, 1.0, 0.0), Vec3::ZERO))
    }

    #[test]
    fn lookup_and_order() {
        let mut registry = ViewpointRegistry::new();
        registry.insert(room("Room 2", 2.0)).unwrap();
        registry.insert(room("Room 1", 1.0)).unwrap();

        assert_eq!(registry.get("Room 1").unwrap().pose.position.x, 1.0);
        assert!(registry.get("Room 9").is_none());
        let keys: Vec<_> = registry.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, ["Room 2", "Room 1"]);
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut registry = ViewpointRegistry::new();
        registry.insert(room("Room 1", 1.0)).unwrap();
        let err = registry.insert(room("Room 1", 5.0)).unwrap_err();
        assert!(matches!(err, GalleryError::DuplicateViewpoint(key) if key == "Room 1"));
        assert_eq!(registry.get("Room 1").unwrap().pose.position.x, 1.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn display_name_falls_back_to_key() {
        let mut vp = room("3", 0.0);
        assert_eq!(vp.display_name(), "3");
        vp.label = Some("Sebastopol Cannon".into());
        assert_eq!(vp.display_name(), "Sebastopol Cannon");
    }
}
