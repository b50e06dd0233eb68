//! Confirmation policy: execute now, ask first, or fail.

use crate::deletion::target::ResolvedOutcome;
use crate::error::CommandError;
use crate::model::{Entry, Name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Execute {
        matched: Vec<Entry>,
        unmatched: Vec<Name>,
    },
    RequestConfirmation {
        matched: Vec<Entry>,
        unmatched: Vec<Name>,
    },
    Fail(CommandError),
}

/// Decide what to do with a resolved outcome.
///
/// Rules, first match wins:
/// 1. nothing matched: fail naming every unmatched identifier
/// 2. exactly one match: execute, confirmation flag ignored
/// 3. several matches, pre-confirmed: execute
/// 4. several matches otherwise: request confirmation
pub fn decide(outcome: ResolvedOutcome, confirmed: bool) -> Decision {
    let ResolvedOutcome { matched, unmatched } = outcome;
    match matched.len() {
        0 => Decision::Fail(CommandError::PersonsNotFound(
            unmatched.iter().map(|n| n.to_string()).collect(),
        )),
        1 => Decision::Execute { matched, unmatched },
        _ if confirmed => Decision::Execute { matched, unmatched },
        _ => Decision::RequestConfirmation { matched, unmatched },
    }
}
