//! Domain layer - Core editing logic
//!
//! Contains the editor entities, value objects, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod editor;
pub mod error;
pub mod language;

// Re-export common types
pub use config::AppConfig;
pub use editor::{
    AlreadyInProgress, RewriteCoordinator, RewriteKind, RewriteStatus, Selection,
    SelectionRangeError, SpeechEvent, TextBuffer, TranscriptMerger, UndoHistory,
};
pub use error::*;
pub use language::Language;
