//! In-memory address book: ordered entries plus the live (filtered, optionally sorted) view.

use crate::model::person::{Entry, EntryId, Person};
use crate::model::predicate::KeywordPredicate;
use std::cmp::Ordering;
use tracing::debug;

/// Entry store seam used by name-based deletion.
///
/// Deletion never touches the book directly; it only looks entries up by an
/// identity predicate and removes them by id.
pub trait EntryStore {
    /// All entries satisfying `predicate`, in store order.
    fn find_matching(&self, predicate: &dyn Fn(&Entry) -> bool) -> Vec<Entry>;

    /// Remove the entry with `id`. Returns false when no such entry is stored.
    fn remove(&mut self, id: EntryId) -> bool;
}

#[derive(Debug, Default)]
pub struct AddressBook {
    entries: Vec<Entry>,
    next_id: u64,
    filter: Option<KeywordPredicate>,
    sort_by_name: bool,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `person` under a fresh id and reset the live view to show everyone.
    pub fn add(&mut self, person: Person) -> Entry {
        self.next_id += 1;
        let entry = Entry {
            id: EntryId(self.next_id),
            person,
        };
        debug!(entry_id = %entry.id, name = %entry.person.name, "Entry added");
        self.entries.push(entry.clone());
        self.filter = None;
        entry
    }

    /// Full store, insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.entries.iter().any(|e| e.person.is_same_person(person))
    }

    pub fn has_name(&self, person: &Person) -> bool {
        self.entries.iter().any(|e| e.person.is_same_name(person))
    }

    pub fn has_address(&self, person: &Person) -> bool {
        self.entries
            .iter()
            .any(|e| e.person.address == person.address)
    }

    pub fn set_filter(&mut self, predicate: KeywordPredicate) {
        self.filter = Some(predicate);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn sort_by_name(&mut self) {
        self.sort_by_name = true;
    }

    /// The currently displayed subset. Positional addressing resolves against this.
    pub fn live_view(&self) -> Vec<Entry> {
        let mut view: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| self.filter.as_ref().map_or(true, |p| p.test(&e.person)))
            .cloned()
            .collect();
        if self.sort_by_name {
            view.sort_by(|a, b| compare_for_listing(&a.person, &b.person));
        }
        view
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Listing order: name, phone, address, email, price (numeric), property type.
pub fn compare_for_listing(a: &Person, b: &Person) -> Ordering {
    cmp_ignore_case(a.name.as_str(), b.name.as_str())
        .then_with(|| a.phone.as_str().cmp(b.phone.as_str()))
        .then_with(|| cmp_ignore_case(a.address.as_str(), b.address.as_str()))
        .then_with(|| cmp_ignore_case(a.email.as_str(), b.email.as_str()))
        .then_with(|| a.price.cmp_amount(&b.price))
        .then_with(|| cmp_ignore_case(a.property_type.as_str(), b.property_type.as_str()))
}

impl EntryStore for AddressBook {
    fn find_matching(&self, predicate: &dyn Fn(&Entry) -> bool) -> Vec<Entry> {
        self.entries.iter().filter(|e| predicate(e)).cloned().collect()
    }

    fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        debug!(entry_id = %id, removed, "Entry removal");
        removed
    }
}
