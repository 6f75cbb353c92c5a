use glam::Vec2;

/// Movement beyond this many pixels from the press point makes a drag.
const CLICK_SLOP: f32 = 1.0;

/// Result of releasing a mouse button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// The press turned into a drag, or there was no matching press.
    NoAction,
    /// Press and release without a drag.
    Click {
        /// Release position in physical pixels.
        position: Vec2,
    },
}

/// Tracks cursor position and click-versus-drag state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known cursor position.
    pub mouse_pos: Vec2,
    press_origin: Option<Vec2>,
    is_dragging: bool,
}

impl InputState {
    /// Record a press at the current cursor position.
    pub fn handle_mouse_down(&mut self) {
        self.press_origin = Some(self.mouse_pos);
        self.is_dragging = false;
    }

    /// Update the cursor position and return the movement since the last
    /// update. Marks a drag once the cursor leaves the click slop.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) -> Vec2 {
        let position = Vec2::new(x, y);
        let delta = position - self.mouse_pos;
        self.mouse_pos = position;
        if let Some(origin) = self.press_origin {
            if origin.distance_squared(position) > CLICK_SLOP * CLICK_SLOP {
                self.is_dragging = true;
            }
        }
        delta
    }

    /// Process a release and report whether it was a click.
    pub fn process_mouse_up(&mut self) -> ClickResult {
        let pressed = self.press_origin.take().is_some();
        let was_dragging = std::mem::take(&mut self.is_dragging);
        if pressed && !was_dragging {
            ClickResult::Click {
                position: self.mouse_pos,
            }
        } else {
            ClickResult::NoAction
        }
    }

    /// Forget the current press without reporting a click.
    pub fn cancel_press(&mut self) {
        self.press_origin = None;
        self.is_dragging = false;
    }
}
