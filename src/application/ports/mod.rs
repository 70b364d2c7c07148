//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod rewriter;

// Re-export common types
pub use clipboard::{ClipboardDevice, ClipboardError};
pub use config::ConfigStore;
pub use rewriter::{RewriteError, TextRewriter};
