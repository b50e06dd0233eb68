//! Contact model: validated fields, persons, stored entries and the in-memory book.

pub mod book;
pub mod fields;
pub mod person;
pub mod predicate;
pub mod sample;

pub use book::{compare_for_listing, AddressBook, EntryStore};
pub use fields::{Address, Email, Intention, Name, Phone, Price, PropertyType, Tag};
pub use person::{Entry, EntryId, Person};
pub use predicate::KeywordPredicate;
