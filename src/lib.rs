//! VoicePad - interactive voice-note editor core
//!
//! This crate provides the text-capture core that backs a voice-note
//! editor: one shared buffer reconciling manual edits, incremental speech
//! transcripts, and asynchronous AI rewrites, with linear undo and
//! selection-based clipboard semantics.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Buffer, history, transcript merging, rewrite state machine
//! - **Application**: The editor session facade and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP backend, clipboard, config)
//! - **CLI**: Command-line interface and the interactive editor loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
