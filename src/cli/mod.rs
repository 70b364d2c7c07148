//! CLI layer - argument parsing, command handling, and presentation

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

pub use args::EditorOptions;
