//! Single-slot store for the one deletion awaiting a yes/no answer.

use crate::model::{Entry, Name};
use tracing::{debug, info};

/// A deletion the user still has to confirm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingAction {
    pub candidates: Vec<Entry>,
    pub unmatched: Vec<Name>,
}

/// Holds at most one [`PendingAction`].
///
/// Owned by the session and lent to the delete and confirm handlers; every
/// access goes through the methods below. A new pending action always replaces
/// the old one wholesale.
#[derive(Debug, Default)]
pub struct PendingConfirmation {
    slot: Option<PendingAction>,
}

impl PendingConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending(&mut self, candidates: Vec<Entry>, unmatched: Vec<Name>) {
        if self.slot.is_some() {
            info!("Replacing outstanding deletion confirmation");
        }
        debug!(
            candidates = candidates.len(),
            unmatched = unmatched.len(),
            "Deletion confirmation pending"
        );
        self.slot = Some(PendingAction {
            candidates,
            unmatched,
        });
    }

    pub fn has_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Copy of the pending action; mutating it does not touch the slot.
    pub fn get_pending(&self) -> Option<PendingAction> {
        self.slot.clone()
    }

    /// Empty the slot. Calling it with nothing pending is a no-op.
    pub fn clear_pending(&mut self) {
        if self.slot.take().is_some() {
            debug!("Deletion confirmation cleared");
        }
    }

    /// Read and clear in one step, so nothing can slip in between.
    pub fn take_pending(&mut self) -> Option<PendingAction> {
        let action = self.get_pending();
        self.clear_pending();
        action
    }
}
