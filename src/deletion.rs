//! Deletion domain: resolve ambiguous targets, decide whether to confirm first,
//! and carry a confirmation across to the next command.
//!
//! Flow of a delete request: [`resolve`] → [`decide`] → execute or park in
//! [`PendingConfirmation`]. A later `yes`/`no` flows through [`respond`].

mod messages;
pub mod pending;
pub mod policy;
mod request;
pub mod respond;
pub mod target;

pub use messages::{
    confirmation_preview, deletion_success, MESSAGE_ABORTED, MESSAGE_INVALID_RESPONSE,
    MESSAGE_NO_PENDING, MESSAGE_PENDING_GONE,
};
pub use pending::{PendingAction, PendingConfirmation};
pub use policy::{decide, Decision};
pub use request::request_deletion;
pub use respond::{respond, ConfirmationResponse};
pub use target::{resolve, Classification, DeletionTarget, ResolvedOutcome};
