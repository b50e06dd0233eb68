//! Confirmation responder: answers a pending deletion with yes, no, or something invalid.

use crate::deletion::messages;
use crate::deletion::pending::PendingConfirmation;
use crate::deletion::request::remove_entries;
use crate::model::EntryStore;
use tracing::{debug, info};

/// A follow-up to a confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationResponse {
    Yes,
    No,
    /// Any other bare token typed while a confirmation is outstanding.
    Invalid(String),
}

impl ConfirmationResponse {
    /// `yes`/`y` and `no`/`n`, case-insensitive. Anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "yes" | "y" => Some(ConfirmationResponse::Yes),
            "no" | "n" => Some(ConfirmationResponse::No),
            _ => None,
        }
    }
}

/// Apply `response` to whatever is pending.
///
/// Always returns a message: an empty slot or an invalid token is reported,
/// never treated as a failure. An invalid token leaves the pending action in
/// place so the user can answer again.
pub fn respond(
    response: &ConfirmationResponse,
    store: &mut dyn EntryStore,
    pending: &mut PendingConfirmation,
) -> String {
    if !pending.has_pending() {
        debug!(?response, "Confirmation response with nothing pending");
        return messages::MESSAGE_NO_PENDING.to_string();
    }

    match response {
        ConfirmationResponse::No => {
            pending.clear_pending();
            info!("Pending deletion aborted");
            messages::MESSAGE_ABORTED.to_string()
        }
        ConfirmationResponse::Invalid(token) => {
            debug!(token = %token, "Invalid confirmation response, keeping pending deletion");
            messages::MESSAGE_INVALID_RESPONSE.to_string()
        }
        ConfirmationResponse::Yes => match pending.take_pending() {
            Some(action) => {
                info!(
                    candidates = action.candidates.len(),
                    "Pending deletion confirmed"
                );
                remove_entries(store, &action.candidates, &action.unmatched)
            }
            None => messages::MESSAGE_NO_PENDING.to_string(),
        },
    }
}
