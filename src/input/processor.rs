//! Converts raw platform events into gallery commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! click-versus-drag detection, held buttons, modifier keys) and the
//! keybinding table. It is the only thing that sits between raw window or
//! DOM events and the engine's
//! [`execute`](crate::GalleryEngine::execute) method.

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::command::GalleryCommand;
use crate::options::KeybindingOptions;

/// Converts raw input events into [`GalleryCommand`]s.
///
/// Left drag orbits, right drag or shift + left drag pans, the wheel
/// zooms. A left press and release without a drag becomes
/// [`GalleryCommand::Pick`].
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd, Instant::now());
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Digit4") {
///     engine.execute(cmd, Instant::now());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Cursor tracking and click detection.
    state: InputState,
    /// Button currently driving a drag.
    held: Option<MouseButton>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → viewpoint mapping.
    keybindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default keybindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom keybindings.
    #[must_use]
    pub fn with_keybindings(keybindings: KeybindingOptions) -> Self {
        Self {
            keybindings,
            ..Self::new()
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        (self.state.mouse_pos.x, self.state.mouse_pos.y)
    }

    /// Whether a mouse button is held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.held.is_some()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Replace the keybinding table.
    pub fn set_keybindings(&mut self, keybindings: KeybindingOptions) {
        self.keybindings = keybindings;
    }

    /// Release any held button without producing a click (pointer left
    /// the canvas, focus lost).
    pub fn release_mouse_state(&mut self) {
        self.held = None;
        self.state.cancel_press();
    }

    /// Look up a key press and return the viewpoint jump bound to it.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<GalleryCommand> {
        self.keybindings
            .lookup(key)
            .map(|viewpoint| GalleryCommand::GoToViewpoint {
                key: viewpoint.to_owned(),
            })
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<GalleryCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(GalleryCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved: compute delta, possibly produce a camera command.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<GalleryCommand> {
        let delta = self.state.handle_mouse_position(x, y);
        if delta == glam::Vec2::ZERO {
            return None;
        }
        match self.held? {
            MouseButton::Left if !self.shift_pressed => {
                Some(GalleryCommand::RotateCamera { delta })
            }
            MouseButton::Left | MouseButton::Right => {
                Some(GalleryCommand::PanCamera { delta })
            }
            MouseButton::Middle => None,
        }
    }

    /// Mouse button press/release: track state, produce a pick on a
    /// clean left click.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<GalleryCommand> {
        if pressed {
            if self.held.is_none() {
                self.held = Some(button);
                self.state.handle_mouse_down();
            }
            return None;
        }

        if self.held != Some(button) {
            return None;
        }
        self.held = None;
        let click = self.state.process_mouse_up();
        match (button, click) {
            (MouseButton::Left, ClickResult::Click { position }) => {
                Some(GalleryCommand::Pick {
                    x: position.x,
                    y: position.y,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton { button, pressed: true }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton { button, pressed: false }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn click_becomes_pick() {
        let mut input = InputProcessor::new();
        assert!(input.handle_event(moved(120.0, 80.0)).is_none());
        assert!(input.handle_event(press(MouseButton::Left)).is_none());
        assert_eq!(
            input.handle_event(release(MouseButton::Left)),
            Some(GalleryCommand::Pick { x: 120.0, y: 80.0 })
        );
    }

    #[test]
    fn left_drag_orbits_and_does_not_pick() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(100.0, 100.0));
        let _ = input.handle_event(press(MouseButton::Left));
        assert_eq!(
            input.handle_event(moved(110.0, 95.0)),
            Some(GalleryCommand::RotateCamera { delta: Vec2::new(10.0, -5.0) })
        );
        assert!(input.handle_event(release(MouseButton::Left)).is_none());
    }

    #[test]
    fn shift_left_and_right_drag_pan() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: true });
        let _ = input.handle_event(press(MouseButton::Left));
        assert!(matches!(
            input.handle_event(moved(4.0, 0.0)),
            Some(GalleryCommand::PanCamera { .. })
        ));
        let _ = input.handle_event(release(MouseButton::Left));

        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: false });
        let _ = input.handle_event(press(MouseButton::Right));
        assert!(matches!(
            input.handle_event(moved(9.0, 3.0)),
            Some(GalleryCommand::PanCamera { .. })
        ));
        // Right click never picks.
        assert!(input.handle_event(release(MouseButton::Right)).is_none());
    }

    #[test]
    fn hover_without_button_does_nothing() {
        let mut input = InputProcessor::new();
        assert!(input.handle_event(moved(10.0, 10.0)).is_none());
        assert!(input.handle_event(moved(50.0, 10.0)).is_none());
    }

    #[test]
    fn scroll_zooms() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(GalleryCommand::Zoom { delta: 1.5 })
        );
    }

    #[test]
    fn keys_jump_to_viewpoints() {
        let input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("Digit4"),
            Some(GalleryCommand::GoToViewpoint { key: "Room 1".into() })
        );
        assert!(input.handle_key_press("KeyZ").is_none());
    }

    #[test]
    fn released_state_does_not_pick() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(press(MouseButton::Left));
        input.release_mouse_state();
        assert!(!input.mouse_pressed());
        assert!(input.handle_event(release(MouseButton::Left)).is_none());
    }
}
