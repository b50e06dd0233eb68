//! propbook: a contact book for property buyers, sellers and renters.
//!
//! Deleting by name can match several contacts at once; such deletions are
//! parked until the next input confirms or aborts them.

pub mod cli;
pub mod command;
pub mod config;
pub mod deletion;
pub mod error;
pub mod logging;
pub mod model;
