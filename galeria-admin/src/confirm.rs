//! Two-step delete confirmation
//!
//! Per-record state machine: the first click arms a confirmation that holds
//! for a fixed window; a second click inside the window confirms, a click
//! after the window has lapsed only re-arms it.

use std::time::Duration;
use tokio::time::Instant;

/// How long an armed confirmation stays valid
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(3);

/// Confirmation state for one listed record
#[derive(Debug, Default)]
pub enum DeleteConfirm {
    /// Initial state; the next click arms confirmation
    #[default]
    Armed,
    /// Waiting for the confirming click
    ConfirmPending { since: Instant },
}

/// Outcome of a delete click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Confirmation is now pending; nothing was deleted
    Pending,
    /// The click confirmed the deletion
    Confirmed,
}

impl DeleteConfirm {
    /// Register a click and advance the state machine
    pub fn click(&mut self) -> ClickOutcome {
        let now = Instant::now();
        match self {
            DeleteConfirm::Armed => {
                *self = DeleteConfirm::ConfirmPending { since: now };
                ClickOutcome::Pending
            }
            DeleteConfirm::ConfirmPending { since }
                if now.duration_since(*since) <= CONFIRM_WINDOW =>
            {
                *self = DeleteConfirm::Armed;
                ClickOutcome::Confirmed
            }
            // Window lapsed; this click starts a fresh confirmation
            DeleteConfirm::ConfirmPending { .. } => {
                *self = DeleteConfirm::ConfirmPending { since: now };
                ClickOutcome::Pending
            }
        }
    }

    /// Whether a confirmation is currently pending and still inside the window
    pub fn is_pending(&self) -> bool {
        match self {
            DeleteConfirm::Armed => false,
            DeleteConfirm::ConfirmPending { since } => {
                Instant::now().duration_since(*since) <= CONFIRM_WINDOW
            }
        }
    }
}
