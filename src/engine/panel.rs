//! The info panel collaborator.

use log::info;
use web_time::Duration;

/// Text shown to the user about a picked entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContent {
    /// Heading.
    pub title: String,
    /// Body text, possibly several lines.
    pub body: String,
}

/// Host-side panel that displays entity information.
///
/// The engine only ever writes to the panel; it never reads state back.
pub trait InfoPanel {
    /// Show `content`, hiding it again after `auto_hide`.
    fn show(&mut self, content: &PanelContent, auto_hide: Duration);
}

/// Panel that writes to the log. Used when the host supplies none.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPanel;

impl InfoPanel for LogPanel {
    fn show(&mut self, content: &PanelContent, auto_hide: Duration) {
        info!(
            "[{:.1}s] {}: {}",
            auto_hide.as_secs_f32(),
            content.title,
            content.body
        );
    }
}
