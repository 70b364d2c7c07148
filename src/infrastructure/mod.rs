//! Infrastructure layer - Adapter implementations
//!
//! Concrete implementations of the application port traits.

pub mod clipboard;
pub mod config;
pub mod rewrite;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use rewrite::HttpRewriter;
