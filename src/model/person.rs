//! Person records and the stored entries that wrap them.

use crate::model::fields::{Address, Email, Intention, Name, Phone, Price, PropertyType, Tag};
use std::collections::BTreeSet;
use std::fmt;

/// A contact in the address book. Field values are validated and immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub property_type: PropertyType,
    pub price: Price,
    pub intention: Intention,
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Same identity and data fields, tags excluded.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.property_type == other.property_type
            && self.price == other.price
            && self.intention == other.intention
    }

    pub fn is_same_name(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Property Type: {}; Price: {}; Intention: {}; Tags: ",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.property_type,
            self.price,
            self.intention
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

/// Book-assigned identity of a stored entry.
///
/// Two entries may hold equal persons (or share a name) and still be distinct;
/// deletion always goes through this id, never through field equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A person as stored in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub person: Person,
}

impl Entry {
    pub fn name(&self) -> &Name {
        &self.person.name
    }
}
