//! Delete requests: resolve the target, apply the policy, then execute or park it.

use crate::deletion::messages;
use crate::deletion::pending::PendingConfirmation;
use crate::deletion::policy::{decide, Decision};
use crate::deletion::target::{resolve, DeletionTarget};
use crate::error::CommandError;
use crate::model::{Entry, EntryStore, Name};
use tracing::{info, warn};

/// Handle one delete request end to end.
///
/// The store is only mutated on an `Execute` decision. A confirmation request
/// replaces whatever was pending before.
pub fn request_deletion(
    target: &DeletionTarget,
    live_view: &[Entry],
    store: &mut dyn EntryStore,
    pending: &mut PendingConfirmation,
) -> Result<String, CommandError> {
    let outcome = resolve(target, live_view, &*store)?;
    match decide(outcome, target.confirmed()) {
        Decision::Execute { matched, unmatched } => {
            Ok(remove_entries(store, &matched, &unmatched))
        }
        Decision::RequestConfirmation { matched, unmatched } => {
            info!(
                candidates = matched.len(),
                "Ambiguous deletion, asking for confirmation"
            );
            let preview = messages::confirmation_preview(&matched, &unmatched);
            pending.set_pending(matched, unmatched);
            Ok(preview)
        }
        Decision::Fail(err) => {
            info!(error = %err, "Deletion rejected");
            Err(err)
        }
    }
}

/// Remove each entry by id and describe what went.
///
/// Entries already gone from the store are skipped and left out of the message.
pub(crate) fn remove_entries(
    store: &mut dyn EntryStore,
    entries: &[Entry],
    unmatched: &[Name],
) -> String {
    let mut deleted = Vec::with_capacity(entries.len());
    for entry in entries {
        if store.remove(entry.id) {
            deleted.push(entry.clone());
        } else {
            warn!(entry_id = %entry.id, "Entry vanished before it could be deleted");
        }
    }
    info!(deleted = deleted.len(), "Entries deleted");

    if deleted.is_empty() {
        return messages::MESSAGE_PENDING_GONE.to_string();
    }
    messages::deletion_success(&deleted, unmatched)
}
