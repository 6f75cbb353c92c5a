//! Gallery content: viewpoints, numbered navigation markers, and the
//! exhibit catalogue.
//!
//! Content is authored as TOML and loaded once at startup:
//!
//! ```toml
//! [[viewpoints]]
//! key = "Room 1"
//! position = [4.03, 2.21, -1.64]
//! rotation = [-103.9, -69.6, -104.7]   # or: look_at = [x, y, z]
//!
//! [[markers]]
//! number = 3
//! button_position = [1.9, 1.2, -2.07]
//! camera_position = [3.8, 1.9, 3.35]
//! rotation = [-6.9, -3.8, -0.5]
//! title = "Sebastopol Cannon"
//! description = "..."
//!
//! [[exhibits]]
//! mesh = "art_heritage"
//! title = "African Heritage"
//! artist = "Afewerk Tekle"
//! year = "1964"
//! description = "..."
//! ```
//!
//! Each marker contributes a viewpoint keyed by its number and a
//! clickable [`InteractiveEntity`].

mod catalog;
mod viewpoint;

use std::path::Path;

pub use catalog::{ExhibitCatalog, MISSING_DESCRIPTION};
use glam::Vec3;
use log::info;
use serde::Deserialize;
pub use viewpoint::{Viewpoint, ViewpointRegistry};

use crate::camera::pose::{CameraPose, EulerDegrees};
use crate::error::GalleryError;
use crate::picking::geometry::BoundingGeometry;
use crate::scene::{EntityMetadata, InteractiveEntity};

/// Edge length of a marker button quad.
pub const MARKER_SIZE: f32 = 0.4;

const BUILTIN: &str = include_str!("../../assets/content/gallery.toml");

/// A numbered on-scene button.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDefinition {
    /// Marker number; also its viewpoint key.
    pub number: u32,
    /// Center of the button quad.
    pub button_position: Vec3,
    /// Info panel text.
    pub metadata: EntityMetadata,
}

impl MarkerDefinition {
    /// Viewpoint key this marker navigates to.
    #[must_use]
    pub fn viewpoint_key(&self) -> String {
        self.number.to_string()
    }

    /// Entity id of the button.
    #[must_use]
    pub fn entity_id(&self) -> String {
        format!("NavigationButton{}", self.number)
    }

    /// The clickable button entity.
    #[must_use]
    pub fn to_entity(&self) -> InteractiveEntity {
        InteractiveEntity::navigation_marker(
            self.entity_id(),
            self.viewpoint_key(),
            BoundingGeometry::quad(self.button_position, MARKER_SIZE, MARKER_SIZE),
            self.metadata.clone(),
        )
    }
}

/// Parsed and validated gallery content.
#[derive(Debug, Clone, Default)]
pub struct GalleryContent {
    /// All viewpoints, rooms first, then markers.
    pub viewpoints: ViewpointRegistry,
    /// Numbered markers in declaration order.
    pub markers: Vec<MarkerDefinition>,
    /// Exhibit metadata by mesh name.
    pub exhibits: ExhibitCatalog,
}

impl GalleryContent {
    /// The gallery shipped with the crate.
    pub fn builtin() -> Result<Self, GalleryError> {
        Self::from_toml(BUILTIN)
    }

    /// Parse content from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, GalleryError> {
        let raw: RawContent =
            toml::from_str(text).map_err(|e| GalleryError::ContentParse(e.to_string()))?;
        let content = raw.validate()?;
        info!(
            "loaded gallery content: {} viewpoints, {} markers, {} exhibits",
            content.viewpoints.len(),
            content.markers.len(),
            content.exhibits.len()
        );
        Ok(content)
    }

    /// Load content from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Button entities for every marker.
    #[must_use]
    pub fn marker_entities(&self) -> Vec<InteractiveEntity> {
        self.markers.iter().map(MarkerDefinition::to_entity).collect()
    }
}

// ---------------------------------------------------------------------------
// TOML shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContent {
    #[serde(default)]
    viewpoints: Vec<RawViewpoint>,
    #[serde(default)]
    markers: Vec<RawMarker>,
    #[serde(default)]
    exhibits: Vec<RawExhibit>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawViewpoint {
    key: String,
    position: [f32; 3],
    look_at: Option<[f32; 3]>,
    rotation: Option<[f32; 3]>,
    label: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMarker {
    number: u32,
    button_position: [f32; 3],
    camera_position: [f32; 3],
    look_at: Option<[f32; 3]>,
    rotation: Option<[f32; 3]>,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawExhibit {
    mesh: String,
    title: String,
    #[serde(default)]
    description: String,
    artist: Option<String>,
    year: Option<String>,
}

impl RawContent {
    fn validate(self) -> Result<GalleryContent, GalleryError> {
        let mut content = GalleryContent::default();

        for raw in self.viewpoints {
            let pose = pose_from(&raw.key, raw.position, raw.look_at, raw.rotation)?;
            content.viewpoints.insert(Viewpoint {
                key: raw.key,
                pose,
                label: raw.label,
                description: raw.description,
            })?;
        }

        for raw in self.markers {
            let key = raw.number.to_string();
            let pose = pose_from(&key, raw.camera_position, raw.look_at, raw.rotation)?;
            content.viewpoints.insert(Viewpoint {
                key,
                pose,
                label: Some(raw.title.clone()),
                description: Some(raw.description.clone()),
            })?;
            content.markers.push(MarkerDefinition {
                number: raw.number,
                button_position: Vec3::from_array(raw.button_position),
                metadata: EntityMetadata::new(raw.title, raw.description),
            });
        }

        for raw in self.exhibits {
            content.exhibits.insert(
                raw.mesh,
                EntityMetadata {
                    title: raw.title,
                    description: raw.description,
                    artist: raw.artist,
                    year: raw.year,
                },
            );
        }

        Ok(content)
    }
}

fn pose_from(
    key: &str,
    position: [f32; 3],
    look_at: Option<[f32; 3]>,
    rotation: Option<[f32; 3]>,
) -> Result<CameraPose, GalleryError> {
    let position = Vec3::from_array(position);
    match (look_at, rotation) {
        (Some(target), None) => {
            let target = Vec3::from_array(target);
            if target.distance_squared(position) < 1e-12 {
                return Err(invalid(key, "look_at coincides with position"));
            }
            Ok(CameraPose::look_at(position, target))
        }
        (None, Some([x, y, z])) => Ok(CameraPose::euler(position, EulerDegrees::new(x, y, z))),
        (Some(_), Some(_)) => Err(invalid(key, "both look_at and rotation given")),
        (None, None) => Err(invalid(key, "needs look_at or rotation")),
    }
}

fn invalid(key: &str, reason: &'static str) -> GalleryError {
    GalleryError::InvalidPose {
        key: key.to_owned(),
        reason,
    }
}
