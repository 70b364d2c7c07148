//! Rewrite request state machine

use std::fmt;
use thiserror::Error;

/// The two independent rewrite request kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewriteKind {
    Enhance,
    Translate,
}

impl RewriteKind {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enhance => "enhance",
            Self::Translate => "translate",
        }
    }
}

impl fmt::Display for RewriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle of one rewrite slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteStatus {
    #[default]
    Idle,
    Pending,
    Applied,
    Failed,
    Superseded,
}

impl RewriteStatus {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Applied => "applied",
            Self::Failed => "failed",
            Self::Superseded => "superseded",
        }
    }
}

impl fmt::Display for RewriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when a rewrite is issued while the same kind is still pending
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("A {kind} request is already in progress")]
pub struct AlreadyInProgress {
    pub kind: RewriteKind,
}

#[derive(Debug, Default)]
struct RewriteSlot {
    status: RewriteStatus,
    /// Content the request was issued against, kept for supersession checks
    issued_against: Option<String>,
}

/// Guards the two asynchronous rewrite slots.
///
/// State machine per kind:
///   IDLE -> PENDING (begin)
///   PENDING -> APPLIED (settle_ok, buffer unchanged since issue)
///   PENDING -> SUPERSEDED (settle_ok, buffer changed since issue)
///   PENDING -> FAILED (settle_err)
///
/// The terminal statuses accept a new `begin`; only `Pending` rejects one.
/// Supersession compares the captured pre-image of the content, never
/// timestamps, so it is robust to arbitrary interleaving.
#[derive(Debug, Default)]
pub struct RewriteCoordinator {
    enhance: RewriteSlot,
    translate: RewriteSlot,
}

impl RewriteCoordinator {
    /// Create a coordinator with both slots idle
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: RewriteKind) -> &RewriteSlot {
        match kind {
            RewriteKind::Enhance => &self.enhance,
            RewriteKind::Translate => &self.translate,
        }
    }

    fn slot_mut(&mut self, kind: RewriteKind) -> &mut RewriteSlot {
        match kind {
            RewriteKind::Enhance => &mut self.enhance,
            RewriteKind::Translate => &mut self.translate,
        }
    }

    /// The current status of a slot
    pub fn status(&self, kind: RewriteKind) -> RewriteStatus {
        self.slot(kind).status
    }

    /// Whether a request of this kind is in flight
    pub fn is_pending(&self, kind: RewriteKind) -> bool {
        self.status(kind) == RewriteStatus::Pending
    }

    /// Mark a slot pending, capturing the content the request was issued
    /// against. Fails while that slot is already pending.
    pub fn begin(&mut self, kind: RewriteKind, issued_against: &str) -> Result<(), AlreadyInProgress> {
        let slot = self.slot_mut(kind);
        if slot.status == RewriteStatus::Pending {
            return Err(AlreadyInProgress { kind });
        }
        slot.status = RewriteStatus::Pending;
        slot.issued_against = Some(issued_against.to_owned());
        Ok(())
    }

    /// Settle a successful response. Returns `Applied` when the current
    /// content still matches the captured pre-image, `Superseded` when
    /// newer edits arrived in the interim; the caller applies the result
    /// only on `Applied`.
    pub fn settle_ok(&mut self, kind: RewriteKind, current_content: &str) -> RewriteStatus {
        let slot = self.slot_mut(kind);
        debug_assert_eq!(slot.status, RewriteStatus::Pending);
        let unchanged = slot.issued_against.as_deref() == Some(current_content);
        slot.issued_against = None;
        slot.status = if unchanged {
            RewriteStatus::Applied
        } else {
            RewriteStatus::Superseded
        };
        slot.status
    }

    /// Settle a failed response; content is left untouched by the caller
    pub fn settle_err(&mut self, kind: RewriteKind) {
        let slot = self.slot_mut(kind);
        debug_assert_eq!(slot.status, RewriteStatus::Pending);
        slot.issued_against = None;
        slot.status = RewriteStatus::Failed;
    }
}
