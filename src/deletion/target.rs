//! Deletion targets and the resolver that turns them into concrete entries.

use crate::error::CommandError;
use crate::model::{Entry, EntryId, EntryStore, Name};
use std::collections::HashSet;
use tracing::debug;

/// What the user asked to delete. Built once by the parser and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionTarget {
    /// 1-based position in the live view.
    ByPosition(usize),
    ByName { name: Name, confirmed: bool },
    ByNameList { names: Vec<Name>, confirmed: bool },
}

impl DeletionTarget {
    /// Whether the caller pre-confirmed inline. Positional targets never need it.
    pub fn confirmed(&self) -> bool {
        match self {
            DeletionTarget::ByPosition(_) => false,
            DeletionTarget::ByName { confirmed, .. }
            | DeletionTarget::ByNameList { confirmed, .. } => *confirmed,
        }
    }
}

/// How a resolved outcome should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Unambiguous,
    Ambiguous,
    NotFound,
}

/// Entries a target resolved to, plus the identifiers that matched nothing.
///
/// Lives for a single request only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOutcome {
    pub matched: Vec<Entry>,
    pub unmatched: Vec<Name>,
}

impl ResolvedOutcome {
    pub fn classification(&self) -> Classification {
        match self.matched.len() {
            0 => Classification::NotFound,
            1 => Classification::Unambiguous,
            _ => Classification::Ambiguous,
        }
    }
}

/// Resolve `target` against the live view (positions) or the full store (names).
///
/// An out-of-range position is an error rather than an empty outcome.
pub fn resolve(
    target: &DeletionTarget,
    live_view: &[Entry],
    store: &dyn EntryStore,
) -> Result<ResolvedOutcome, CommandError> {
    let outcome = match target {
        DeletionTarget::ByPosition(index) => {
            let entry = index
                .checked_sub(1)
                .and_then(|zero_based| live_view.get(zero_based))
                .ok_or(CommandError::InvalidPersonIndex {
                    index: *index,
                    shown: live_view.len(),
                })?;
            ResolvedOutcome {
                matched: vec![entry.clone()],
                unmatched: Vec::new(),
            }
        }
        DeletionTarget::ByName { name, .. } => {
            let matched = entries_named(store, name);
            let unmatched = if matched.is_empty() {
                vec![name.clone()]
            } else {
                Vec::new()
            };
            ResolvedOutcome { matched, unmatched }
        }
        DeletionTarget::ByNameList { names, .. } => resolve_name_list(names, store),
    };

    debug!(
        matched = outcome.matched.len(),
        unmatched = outcome.unmatched.len(),
        classification = ?outcome.classification(),
        "Deletion target resolved"
    );
    Ok(outcome)
}

fn entries_named(store: &dyn EntryStore, name: &Name) -> Vec<Entry> {
    store.find_matching(&|entry: &Entry| entry.name().matches_ignore_case(name))
}

/// Every store entry per name, in input order; an entry named twice is scheduled once.
fn resolve_name_list(names: &[Name], store: &dyn EntryStore) -> ResolvedOutcome {
    let mut seen: HashSet<EntryId> = HashSet::new();
    let mut outcome = ResolvedOutcome::default();

    for name in names {
        let hits = entries_named(store, name);
        if hits.is_empty() {
            if !outcome.unmatched.iter().any(|n| n.matches_ignore_case(name)) {
                outcome.unmatched.push(name.clone());
            }
            continue;
        }
        for entry in hits {
            if seen.insert(entry.id) {
                outcome.matched.push(entry);
            }
        }
    }
    outcome
}
