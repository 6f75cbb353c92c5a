//! Deciding what a pick means.
//!
//! Dispatch is split in two: [`react_to_pick`] is a pure decision over the
//! picked entity and the viewpoint registry, and the engine then applies
//! the resulting [`NavigationReaction`] (panel first, then camera).

use glam::Vec3;

use super::panel::PanelContent;
use crate::camera::pose::CameraPose;
use crate::content::ViewpointRegistry;
use crate::options::NavigationOptions;
use crate::picking::geometry::Aabb;
use crate::scene::{EntityKind, EntityMetadata, InteractiveEntity};

/// Vertical share of the framing offset.
const FRAME_RISE: f32 = 0.3;

/// What the engine should do in response to a pick.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationReaction {
    /// Nothing was hit.
    Nothing,
    /// An exhibit was hit: show its information, leave the camera alone.
    ShowInfo(PanelContent),
    /// A marker was hit: show its information and fly to its viewpoint.
    Navigate {
        /// Viewpoint key.
        viewpoint: String,
        /// Where the camera goes.
        pose: CameraPose,
        /// Marker information.
        info: PanelContent,
    },
    /// A marker points at a viewpoint that does not exist. Its information
    /// is still shown; the camera stays put.
    MissingViewpoint {
        /// The dangling key.
        viewpoint: String,
        /// Marker information.
        info: PanelContent,
    },
}

impl NavigationReaction {
    /// Panel content to show, if any.
    #[must_use]
    pub fn info(&self) -> Option<&PanelContent> {
        match self {
            Self::Nothing => None,
            Self::ShowInfo(info)
            | Self::Navigate { info, .. }
            | Self::MissingViewpoint { info, .. } => Some(info),
        }
    }

    /// Target pose, if the camera should move.
    #[must_use]
    pub fn destination(&self) -> Option<&CameraPose> {
        match self {
            Self::Navigate { pose, .. } => Some(pose),
            _ => None,
        }
    }
}

/// Panel text for an entity's metadata.
#[must_use]
pub fn panel_content(metadata: &EntityMetadata) -> PanelContent {
    PanelContent {
        title: metadata.title.clone(),
        body: metadata.panel_text(),
    }
}

/// Decide the reaction to picking `entity` (or nothing).
#[must_use]
pub fn react_to_pick(
    entity: Option<&InteractiveEntity>,
    viewpoints: &ViewpointRegistry,
) -> NavigationReaction {
    let Some(entity) = entity else {
        return NavigationReaction::Nothing;
    };
    let info = panel_content(&entity.metadata);
    match &entity.kind {
        EntityKind::Exhibit => NavigationReaction::ShowInfo(info),
        EntityKind::NavigationMarker { viewpoint } => match viewpoints.get(viewpoint) {
            Some(target) => NavigationReaction::Navigate {
                viewpoint: viewpoint.clone(),
                pose: target.pose,
                info,
            },
            None => NavigationReaction::MissingViewpoint {
                viewpoint: viewpoint.clone(),
                info,
            },
        },
    }
}

/// Pose that frames `bounds`: up and out along the (+X, +Z) diagonal by
/// a distance proportional to the largest extent, looking at the center.
#[must_use]
pub fn framing_pose(bounds: &Aabb, options: &NavigationOptions) -> CameraPose {
    let center = bounds.center();
    let offset =
        bounds.size().max_element() * options.frame_offset_scale + options.frame_offset_padding;
    let eye = center + Vec3::new(offset, offset * FRAME_RISE, offset);
    CameraPose::look_at(eye, center)
}
