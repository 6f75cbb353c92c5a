// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera navigation and pointer picking core for 3D virtual galleries.
//!
//! Galleria reconciles free orbit/pan/zoom camera control with scripted
//! jump-to-viewpoint transitions, and resolves screen clicks to the
//! interactive objects of a loaded scene (numbered navigation markers and
//! tagged exhibits). Rendering and asset loading stay with the host; the
//! engine owns the camera and tells the host what to show.
//!
//! # Key entry points
//!
//! - [`GalleryEngine`] - the owning application object; call
//!   [`frame`](GalleryEngine::frame) once per displayed frame
//! - [`InputProcessor`] - turns raw pointer/keyboard events into
//!   [`GalleryCommand`]s
//! - [`GalleryContent`] - viewpoints, markers and the exhibit catalogue
//! - [`Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the host's frame callback. The
//! [`InteractionSession`](session::InteractionSession) decides each tick
//! whether the [`OrbitController`](camera::OrbitController) or the
//! [`TransitionAnimator`](animation::TransitionAnimator) writes the
//! camera. Picks go through the [`picking`] resolver and the
//! [`engine::dispatch`] decision, which shows information through the
//! host's [`InfoPanel`] and may start a transition.

pub mod animation;
pub mod camera;
pub mod content;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod session;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use content::GalleryContent;
pub use engine::command::GalleryCommand;
pub use engine::panel::{InfoPanel, PanelContent};
pub use engine::GalleryEngine;
pub use error::GalleryError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
pub use session::InteractionMode;
