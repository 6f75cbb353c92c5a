//! Browser façade for wasm hosts.
//!
//! The page owns the canvas, the renderer and the asset loader. It forwards
//! DOM pointer, wheel and keyboard events to a [`WebGallery`], calls
//! [`WebGallery::frame`] from `requestAnimationFrame`, and uploads
//! [`WebGallery::view_uniform`] to its camera buffer.

use glam::{Vec2, Vec3};
use js_sys::Function;
use log::warn;
use wasm_bindgen::prelude::*;
use web_time::{Duration, Instant};

use crate::camera::core::CameraUniform;
use crate::content::GalleryContent;
use crate::engine::panel::{InfoPanel, PanelContent};
use crate::engine::GalleryEngine;
use crate::input::{InputEvent, InputProcessor, MouseButton};
use crate::options::Options;
use crate::picking::geometry::Aabb;
use crate::scene::SceneMesh;

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Panel that forwards to a JS callback `(title, description, seconds)`.
struct JsPanel {
    callback: Function,
}

impl InfoPanel for JsPanel {
    fn show(&mut self, content: &PanelContent, auto_hide: Duration) {
        if let Err(err) = self.callback.call3(
            &JsValue::NULL,
            &JsValue::from_str(&content.title),
            &JsValue::from_str(&content.body),
            &JsValue::from_f64(auto_hide.as_secs_f64()),
        ) {
            warn!("info panel callback failed: {err:?}");
        }
    }
}

/// A gallery engine plus its input processor, driven from JS.
#[wasm_bindgen]
pub struct WebGallery {
    engine: GalleryEngine,
    input: InputProcessor,
}

#[wasm_bindgen]
impl WebGallery {
    /// Gallery over a `width` × `height` canvas.
    ///
    /// `content` is a gallery TOML document; the built-in gallery is used
    /// when it is blank. `on_info` receives `(title, description, seconds)`
    /// whenever the info panel should appear.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        content: &str,
        on_info: Function,
    ) -> Result<WebGallery, JsValue> {
        let content = if content.trim().is_empty() {
            GalleryContent::builtin()
        } else {
            GalleryContent::from_toml(content)
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut engine = GalleryEngine::new(Options::default(), content, width, height);
        engine.set_panel(Box::new(JsPanel { callback: on_info }));
        Ok(Self {
            engine,
            input: InputProcessor::new(),
        })
    }

    /// Advance one animation frame. Returns `true` if the camera moved.
    pub fn frame(&mut self) -> bool {
        self.engine.frame(Instant::now())
    }

    /// `pointermove` in canvas pixels.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.dispatch(InputEvent::CursorMoved { x, y });
    }

    /// `pointerdown` with the DOM button index.
    pub fn pointer_down(&mut self, button: i16) {
        self.dispatch_button(button, true);
    }

    /// `pointerup` with the DOM button index.
    pub fn pointer_up(&mut self, button: i16) {
        self.dispatch_button(button, false);
    }

    /// `wheel` with the DOM `deltaY` (positive scrolls away from the user).
    pub fn wheel(&mut self, delta_y: f32) {
        self.dispatch(InputEvent::Scroll { delta: -delta_y });
    }

    /// `keydown` with the DOM `KeyboardEvent.code`.
    pub fn key_down(&mut self, code: &str) {
        if let Some(command) = self.input.handle_key_press(code) {
            self.engine.execute(command, Instant::now());
        }
    }

    /// Shift modifier state.
    pub fn set_shift(&mut self, shift: bool) {
        self.dispatch(InputEvent::ModifiersChanged { shift });
    }

    /// Canvas resized.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Register a loaded mesh by name and world bounds (`[x, y, z]` corner
    /// arrays). Returns whether it became a pickable exhibit.
    pub fn register_mesh(
        &mut self,
        name: &str,
        min: &[f32],
        max: &[f32],
    ) -> Result<bool, JsValue> {
        let (Some(min), Some(max)) = (corner(min), corner(max)) else {
            return Err(JsValue::from_str("mesh bounds need three components per corner"));
        };
        let mesh = SceneMesh::with_bounds(name, Aabb::new(min, max));
        let added = self.engine.register_meshes(&[mesh]);
        Ok(added > 0)
    }

    /// Camera uniform as a flat float array.
    pub fn view_uniform(&self) -> Vec<f32> {
        let uniform = self.engine.camera_uniform();
        bytemuck::cast_slice::<CameraUniform, f32>(std::slice::from_ref(&uniform)).to_vec()
    }

    /// Camera world position `[x, y, z]`.
    pub fn camera_position(&self) -> Vec<f32> {
        self.engine.camera().eye.to_array().to_vec()
    }

    /// Whether a scripted transition is running.
    pub fn is_transitioning(&self) -> bool {
        self.engine.is_transitioning()
    }

    /// Fly to a viewpoint by key. Returns `false` for unknown keys.
    pub fn go_to_viewpoint(&mut self, key: &str) -> bool {
        self.engine.go_to_viewpoint(key, Instant::now())
    }

    /// Fly to frame an entity by id. Returns `false` for unknown ids.
    pub fn frame_entity(&mut self, id: &str) -> bool {
        self.engine.frame_entity(id, Instant::now())
    }

    /// Keys of every viewpoint, in content order.
    pub fn viewpoint_keys(&self) -> Vec<String> {
        self.engine
            .viewpoints()
            .iter()
            .map(|viewpoint| viewpoint.key.clone())
            .collect()
    }

    /// Pick at a canvas position without acting on it. Returns the entity
    /// id, if any.
    pub fn pick(&self, x: f32, y: f32) -> Option<String> {
        self.engine.pick(Vec2::new(x, y)).map(|entity| entity.id.clone())
    }
}

impl WebGallery {
    fn dispatch(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.engine.execute(command, Instant::now());
        }
    }

    fn dispatch_button(&mut self, index: i16, pressed: bool) {
        let Some(button) = MouseButton::from_dom_index(index) else {
            return;
        };
        self.dispatch(InputEvent::MouseButton { button, pressed });
    }
}

fn corner(values: &[f32]) -> Option<Vec3> {
    match *values {
        [x, y, z] => Some(Vec3::new(x, y, z)),
        _ => None,
    }
}
