use log::warn;
use rustc_hash::FxHashMap;

use crate::error::GalleryError;
use crate::picking::geometry::BoundingGeometry;

// ---------------------------------------------------------------------------
// EntityKind / EntityMetadata
// ---------------------------------------------------------------------------

/// What selecting an entity does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// Selecting it moves the camera to a viewpoint.
    NavigationMarker {
        /// Key into the viewpoint registry.
        viewpoint: String,
    },
    /// Selecting it only shows its metadata.
    Exhibit,
}

/// Text shown in the info panel for an entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityMetadata {
    /// Panel heading.
    pub title: String,
    /// Panel body.
    pub description: String,
    /// Artist credit, if catalogued.
    pub artist: Option<String>,
    /// Year of the work, if catalogued.
    pub year: Option<String>,
}

impl EntityMetadata {
    /// Metadata with only a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            artist: None,
            year: None,
        }
    }

    /// Panel body with the credit line ("artist (year)") above the
    /// description when either is known.
    #[must_use]
    pub fn panel_text(&self) -> String {
        let credit = match (&self.artist, &self.year) {
            (Some(artist), Some(year)) => format!("{artist} ({year})"),
            (Some(artist), None) => artist.clone(),
            (None, Some(year)) => format!("({year})"),
            (None, None) => return self.description.clone(),
        };
        if self.description.is_empty() {
            credit
        } else {
            format!("{credit}\n{}", self.description)
        }
    }
}

// ---------------------------------------------------------------------------
// InteractiveEntity
// ---------------------------------------------------------------------------

/// A scene object the pick pipeline can select.
///
/// The kind is fixed when the entity is created; picking never inspects
/// names.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveEntity {
    /// Unique id within the session.
    pub id: String,
    /// Marker or exhibit.
    pub kind: EntityKind,
    /// Shape tested against pick rays.
    pub geometry: BoundingGeometry,
    /// Info panel text.
    pub metadata: EntityMetadata,
}

impl InteractiveEntity {
    /// An exhibit entity.
    pub fn exhibit(
        id: impl Into<String>,
        geometry: BoundingGeometry,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id: id.into(),
            kind: EntityKind::Exhibit,
            geometry,
            metadata,
        }
    }

    /// A navigation marker pointing at `viewpoint`.
    pub fn navigation_marker(
        id: impl Into<String>,
        viewpoint: impl Into<String>,
        geometry: BoundingGeometry,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id: id.into(),
            kind: EntityKind::NavigationMarker {
                viewpoint: viewpoint.into(),
            },
            geometry,
            metadata,
        }
    }

    /// Viewpoint key for navigation markers.
    #[must_use]
    pub fn viewpoint_key(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::NavigationMarker { viewpoint } => Some(viewpoint),
            EntityKind::Exhibit => None,
        }
    }

    /// Whether this is a navigation marker.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        matches!(self.kind, EntityKind::NavigationMarker { .. })
    }
}

// ---------------------------------------------------------------------------
// EntityRegistry
// ---------------------------------------------------------------------------

/// Interactive entities in registration order.
///
/// Registration order is also the pick tie-break order.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<InteractiveEntity>,
    index: FxHashMap<String, usize>,
}

impl EntityRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Ids must be unique.
    pub fn register(&mut self, entity: InteractiveEntity) -> Result<(), GalleryError> {
        if self.index.contains_key(&entity.id) {
            return Err(GalleryError::DuplicateEntity(entity.id));
        }
        let _ = self.index.insert(entity.id.clone(), self.entities.len());
        self.entities.push(entity);
        Ok(())
    }

    /// Append many entities, skipping (and logging) duplicate ids. Returns
    /// how many were added.
    pub fn extend(&mut self, entities: impl IntoIterator<Item = InteractiveEntity>) -> usize {
        let mut added = 0;
        for entity in entities {
            match self.register(entity) {
                Ok(()) => added += 1,
                Err(e) => warn!("skipping entity: {e}"),
            }
        }
        added
    }

    /// Remove an entity by id.
    pub fn remove(&mut self, id: &str) -> Result<InteractiveEntity, GalleryError> {
        let idx = self
            .index
            .remove(id)
            .ok_or_else(|| GalleryError::UnknownEntity(id.to_owned()))?;
        let entity = self.entities.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Ok(entity)
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InteractiveEntity> {
        self.index.get(id).map(|&idx| &self.entities[idx])
    }

    /// Whether an entity with this id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All entities in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[InteractiveEntity] {
        &self.entities
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no entities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove everything (scene teardown).
    pub fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
    }
}
