use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard shortcuts that jump to viewpoints.
pub struct KeybindingOptions {
    /// Maps key string → viewpoint key (e.g. `"Digit4"` → `"Room 1"`).
    ///
    /// Key strings use the `KeyboardEvent.code` / `winit::keyboard::KeyCode`
    /// debug format.
    pub viewpoints: HashMap<String, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let viewpoints = HashMap::from([
            ("Digit1".into(), "Collider 1".into()),
            ("Digit2".into(), "Collider 2".into()),
            ("Digit3".into(), "Collider 3".into()),
            ("Digit4".into(), "Room 1".into()),
            ("Digit5".into(), "Room 2".into()),
            ("Digit6".into(), "Room 3".into()),
        ]);
        Self { viewpoints }
    }
}

impl KeybindingOptions {
    /// Look up the viewpoint bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.viewpoints.get(key).map(String::as_str)
    }
}
