//! User-facing text produced by deletion and confirmation.

use crate::model::{Entry, Name};

pub const MESSAGE_NO_PENDING: &str = "No pending confirmation to respond to.";
pub const MESSAGE_INVALID_RESPONSE: &str =
    "Invalid command. Please enter 'yes' to confirm or 'no' to abort.";
pub const MESSAGE_ABORTED: &str = "Delete aborted.";
pub const MESSAGE_PENDING_GONE: &str =
    "Nothing was deleted: the persons awaiting confirmation are no longer in the address book.";

fn join_names<'a>(names: impl Iterator<Item = &'a Name>) -> String {
    names.map(Name::as_str).collect::<Vec<_>>().join(", ")
}

fn not_found_note(unmatched: &[Name]) -> Option<String> {
    if unmatched.is_empty() {
        None
    } else {
        Some(format!(
            "Note: The following persons were not found: {}",
            join_names(unmatched.iter())
        ))
    }
}

/// Success text for a completed deletion, with a trailing not-found note when needed.
pub fn deletion_success(deleted: &[Entry], unmatched: &[Name]) -> String {
    let mut message = match deleted {
        [single] => format!("Deleted Person: {}", single.person),
        many => format!(
            "Deleted {} persons: {}",
            many.len(),
            join_names(many.iter().map(Entry::name))
        ),
    };
    if let Some(note) = not_found_note(unmatched) {
        message.push('\n');
        message.push_str(&note);
    }
    message
}

/// Numbered preview of exactly what a `yes` would delete.
pub fn confirmation_preview(candidates: &[Entry], unmatched: &[Name]) -> String {
    let mut lines = vec![
        format!(
            "This will delete {} persons. Enter 'yes' to confirm or 'no' to abort.",
            candidates.len()
        ),
        "Persons to be deleted:".to_string(),
    ];
    lines.extend(
        candidates
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {}", i + 1, entry.name())),
    );
    if let Some(note) = not_found_note(unmatched) {
        lines.push(note);
    }
    lines.join("\n")
}
