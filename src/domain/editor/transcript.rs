//! Speech transcript merging

/// One recognition event from the speech collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechEvent {
    pub transcript: String,
    /// Recognition streams emit interim results too; only final ones merge
    pub is_final: bool,
}

impl SpeechEvent {
    /// A finalized utterance
    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }

    /// An interim partial result
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }
}

/// Appends finalized transcript fragments to the buffer content,
/// suppressing the repeated identical results that recognition streams
/// are known to emit.
///
/// Duplicate detection compares only the immediately preceding accepted
/// fragment; a phrase legitimately spoken twice in a row is suppressed too.
#[derive(Debug, Default)]
pub struct TranscriptMerger {
    last: Option<String>,
}

impl TranscriptMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fragment into `current`, returning the new content or
    /// `None` when the fragment is empty or repeats the last accepted one.
    ///
    /// A single space separates the fragment from existing content unless
    /// the content is empty or already ends with whitespace.
    pub fn merge(&mut self, current: &str, transcript: &str) -> Option<String> {
        if transcript.is_empty() || self.last.as_deref() == Some(transcript) {
            return None;
        }
        self.last = Some(transcript.to_owned());

        let needs_separator = !current.is_empty() && !current.ends_with(char::is_whitespace);
        let mut merged = String::with_capacity(current.len() + transcript.len() + 1);
        merged.push_str(current);
        if needs_separator {
            merged.push(' ');
        }
        merged.push_str(transcript);
        Some(merged)
    }

    /// The last accepted fragment, if any
    pub fn last_fragment(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
