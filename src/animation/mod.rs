//! Scripted camera transitions.
//!
//! A [`TransitionJob`] describes one timed move; the [`TransitionAnimator`]
//! starts jobs inside the [`InteractionSession`](crate::session::InteractionSession)
//! and advances them once per rendered frame.

pub mod animator;
pub mod transition;

pub use animator::{TickOutcome, TransitionAnimator};
pub use transition::TransitionJob;
