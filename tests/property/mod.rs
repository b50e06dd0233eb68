//! Property-based tests for the deletion and confirmation protocol

mod deletion_invariants;
