//! Input handling: event types, the click/drag state machine, and the
//! input processor that converts raw events into gallery commands.

/// Platform-agnostic input events.
pub mod event;
/// Cursor tracking and click-versus-drag detection.
pub(crate) mod mouse;
/// Converts raw events into gallery commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
