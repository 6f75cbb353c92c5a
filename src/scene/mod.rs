//! Interactive scene entities and their creation from loaded meshes.
//!
//! The asset loader hands over named meshes once loading finishes. Meshes
//! whose names mark them as exhibits are turned into [`InteractiveEntity`]
//! records here, once; picking afterwards only looks at
//! [`EntityKind`].

mod entity;

pub use entity::{EntityKind, EntityMetadata, EntityRegistry, InteractiveEntity};

use crate::content::ExhibitCatalog;
use crate::picking::geometry::{Aabb, BoundingGeometry};

/// Mesh name prefixes that mark an exhibit.
pub const EXHIBIT_PREFIXES: [&str; 2] = ["art_", "statue_"];

// ---------------------------------------------------------------------------
// SceneMesh
// ---------------------------------------------------------------------------

/// A named mesh from the loaded scene, reduced to what picking needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMesh {
    /// Node name from the asset.
    pub name: String,
    /// World-space pick shape (descendants folded into a composite).
    pub geometry: BoundingGeometry,
}

impl SceneMesh {
    /// Mesh picked by its world-space bounding box.
    pub fn with_bounds(name: impl Into<String>, bounds: Aabb) -> Self {
        Self {
            name: name.into(),
            geometry: BoundingGeometry::Box(bounds),
        }
    }
}

/// Whether a mesh name marks an exhibit.
#[must_use]
pub fn is_exhibit_mesh(name: &str) -> bool {
    EXHIBIT_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Exhibit entities for every exhibit mesh, in mesh order.
///
/// Entity ids are the mesh names. Metadata comes from `catalog`, falling
/// back to the mesh name when the catalogue has no entry.
pub fn tag_exhibits(meshes: &[SceneMesh], catalog: &ExhibitCatalog) -> Vec<InteractiveEntity> {
    meshes
        .iter()
        .filter(|mesh| is_exhibit_mesh(&mesh.name))
        .map(|mesh| {
            InteractiveEntity::exhibit(
                mesh.name.clone(),
                mesh.geometry.clone(),
                catalog.metadata_for(&mesh.name),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::content::MISSING_DESCRIPTION;

    fn mesh(name: &str) -> SceneMesh {
        SceneMesh::with_bounds(name, Aabb::new(Vec3::ZERO, Vec3::ONE))
    }

    #[test]
    fn prefixes() {
        assert!(is_exhibit_mesh("art_lion"));
        assert!(is_exhibit_mesh("statue_ibex"));
        assert!(!is_exhibit_mesh("wall_north"));
        assert!(!is_exhibit_mesh("my_art_piece"));
        assert!(!is_exhibit_mesh(""));
    }

    #[test]
    fn only_exhibit_meshes_are_tagged() {
        let mut catalog = ExhibitCatalog::new();
        catalog.insert("art_lion", EntityMetadata::new("Lion of Judah", "String art."));

        let meshes = [mesh("floor"), mesh("art_lion"), mesh("statue_ibex")];
        let entities = tag_exhibits(&meshes, &catalog);

        assert_eq!(entities.len(), 2);
        assert!(entities.iter().all(|e| e.kind == EntityKind::Exhibit));
        assert_eq!(entities[0].id, "art_lion");
        assert_eq!(entities[0].metadata.title, "Lion of Judah");
        assert_eq!(entities[1].metadata.title, "statue_ibex");
        assert_eq!(entities[1].metadata.description, MISSING_DESCRIPTION);
    }

    #[test]
    fn empty_load_yields_no_entities() {
        assert!(tag_exhibits(&[], &ExhibitCatalog::new()).is_empty());
    }
}
