//! Editor domain: buffer, history, selection clipboard, transcript
//! merging, and the rewrite state machine

pub mod buffer;
pub mod clipboard;
pub mod history;
pub mod rewrite;
pub mod transcript;

pub use buffer::{Selection, SelectionRangeError, TextBuffer};
pub use history::{Snapshot, UndoHistory};
pub use rewrite::{AlreadyInProgress, RewriteCoordinator, RewriteKind, RewriteStatus};
pub use transcript::{SpeechEvent, TranscriptMerger};
