//! Picking, pick reactions and scripted camera moves for
//! [`GalleryEngine`].

use glam::Vec2;
use log::{debug, warn};
use web_time::Instant;

use super::dispatch::{framing_pose, panel_content, react_to_pick, NavigationReaction};
use super::panel::PanelContent;
use super::GalleryEngine;
use crate::camera::pose::CameraPose;
use crate::picking::resolver::resolve_pick;
use crate::scene::InteractiveEntity;

impl GalleryEngine {
    /// Entity under a screen position, if any.
    pub fn pick(&self, screen: Vec2) -> Option<&InteractiveEntity> {
        resolve_pick(screen, self.viewport, &self.camera, self.entities.as_slice())
    }

    /// Resolve a click and react to it. Returns the reaction that was
    /// applied.
    pub fn handle_click(&mut self, screen: Vec2, now: Instant) -> NavigationReaction {
        let reaction = react_to_pick(self.pick(screen), &self.content.viewpoints);
        self.apply_reaction(&reaction, now);
        reaction
    }

    /// React to a pick of the entity registered as `id` (or to nothing).
    pub fn handle_pick(&mut self, id: Option<&str>, now: Instant) -> NavigationReaction {
        let entity = id.and_then(|id| {
            let entity = self.entities.get(id);
            if entity.is_none() {
                warn!("pick of unregistered entity '{id}'");
            }
            entity
        });
        let reaction = react_to_pick(entity, &self.content.viewpoints);
        self.apply_reaction(&reaction, now);
        reaction
    }

    /// Carry out a reaction: the panel is shown first, then the camera
    /// transition starts and runs alongside it.
    pub fn apply_reaction(&mut self, reaction: &NavigationReaction, now: Instant) {
        if let Some(info) = reaction.info() {
            self.show_info(info);
        }
        match reaction {
            NavigationReaction::Navigate { viewpoint, pose, .. } => {
                debug!("marker -> viewpoint '{viewpoint}'");
                self.start_transition(pose, now);
            }
            NavigationReaction::MissingViewpoint { viewpoint, .. } => {
                warn!("navigation marker points at unknown viewpoint '{viewpoint}'");
            }
            NavigationReaction::Nothing | NavigationReaction::ShowInfo(_) => {}
        }
    }

    /// Fly to `target` over the configured transition time, replacing any
    /// transition in flight.
    pub fn start_transition(&mut self, target: &CameraPose, now: Instant) {
        let duration = self.options.navigation.transition_duration();
        self.animator.start_transition(
            &mut self.session,
            &mut self.controller,
            &mut self.camera,
            target,
            duration,
            now,
        );
    }

    /// Fly to the viewpoint registered as `key`. Unknown keys are logged
    /// and ignored. Returns whether a transition started.
    pub fn go_to_viewpoint(&mut self, key: &str, now: Instant) -> bool {
        let Some(pose) = self.content.viewpoints.get(key).map(|vp| vp.pose) else {
            warn!("no viewpoint named '{key}'");
            return false;
        };
        self.start_transition(&pose, now);
        true
    }

    /// Fly to a spot that frames the entity `id` and show its information.
    /// Returns whether a transition started.
    pub fn frame_entity(&mut self, id: &str, now: Instant) -> bool {
        let Some(entity) = self.entities.get(id) else {
            warn!("cannot frame unknown entity '{id}'");
            return false;
        };
        let Some(bounds) = entity.geometry.bounds() else {
            warn!("entity '{id}' has no extent to frame");
            return false;
        };
        let pose = framing_pose(&bounds, &self.options.navigation);
        let info = panel_content(&entity.metadata);
        self.show_info(&info);
        self.start_transition(&pose, now);
        true
    }

    fn show_info(&mut self, info: &PanelContent) {
        let auto_hide = self.options.navigation.info_panel_duration();
        self.panel.show(info, auto_hide);
    }
}
