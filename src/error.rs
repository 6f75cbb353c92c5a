//! Crate-level error types.

use std::fmt;

/// Errors produced by the galleria crate.
///
/// Only configuration and registration paths return these. Navigation
/// faults at runtime (a marker pointing at a missing viewpoint, an empty
/// scene, a superseded transition) degrade silently and are logged instead.
#[derive(Debug)]
pub enum GalleryError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Gallery content (viewpoints, markers, exhibits) failed to parse.
    ContentParse(String),
    /// A content entry describes a pose that is not exactly one of
    /// look-at or explicit Euler.
    InvalidPose {
        /// Key of the offending viewpoint or marker.
        key: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Two viewpoints share the same key.
    DuplicateViewpoint(String),
    /// Two interactive entities share the same id.
    DuplicateEntity(String),
    /// No interactive entity is registered under this id.
    UnknownEntity(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ContentParse(msg) => {
                write!(f, "content parse error: {msg}")
            }
            Self::InvalidPose { key, reason } => {
                write!(f, "invalid pose for '{key}': {reason}")
            }
            Self::DuplicateViewpoint(key) => {
                write!(f, "duplicate viewpoint key '{key}'")
            }
            Self::DuplicateEntity(id) => {
                write!(f, "duplicate interactive entity id '{id}'")
            }
            Self::UnknownEntity(id) => {
                write!(f, "no interactive entity with id '{id}'")
            }
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
