//! Invariants of positional deletion and the confirm/abort round trip.

use propbook::deletion::{
    request_deletion, respond, ConfirmationResponse, DeletionTarget, PendingConfirmation,
};
use propbook::model::sample::sample_persons;
use propbook::model::{AddressBook, Entry, Name, Phone};
use proptest::prelude::*;

const NAME_POOL: [&str; 3] = ["Alice Tan", "Bob Lee", "Carol Ng"];

fn book_of(name_indices: &[usize]) -> AddressBook {
    let template = sample_persons().remove(0);
    let mut book = AddressBook::new();
    for (i, &n) in name_indices.iter().enumerate() {
        let mut person = template.clone();
        person.name = Name::new(NAME_POOL[n]).unwrap();
        person.phone = Phone::new(format!("9{:07}", i)).unwrap();
        book.add(person);
    }
    book
}

fn names_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..NAME_POOL.len(), 1..8)
}

fn by_name(query: usize) -> DeletionTarget {
    DeletionTarget::ByName {
        name: Name::new(NAME_POOL[query]).unwrap(),
        confirmed: false,
    }
}

/// Matching entries for `query`, in store order.
fn expected_matches(book: &AddressBook, query: usize) -> Vec<Entry> {
    book.entries()
        .iter()
        .filter(|e| e.person.name.as_str() == NAME_POOL[query])
        .cloned()
        .collect()
}

#[test]
fn test_positional_delete_removes_exactly_that_entry() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &names_strategy().prop_flat_map(|names| {
                let len = names.len();
                (Just(names), 1..=len)
            }),
            |(names, index)| {
                let mut book = book_of(&names);
                let mut pending = PendingConfirmation::new();
                let view = book.live_view();
                let target_entry = view[index - 1].clone();

                request_deletion(
                    &DeletionTarget::ByPosition(index),
                    &view,
                    &mut book,
                    &mut pending,
                )
                .unwrap();

                prop_assert_eq!(book.len(), names.len() - 1);
                prop_assert!(book.entries().iter().all(|e| e.id != target_entry.id));
                prop_assert!(!pending.has_pending());
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_ambiguous_request_then_abort_is_a_no_op() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(names_strategy(), 0..NAME_POOL.len()), |(names, query)| {
            let mut book = book_of(&names);
            let matches = expected_matches(&book, query);
            prop_assume!(matches.len() > 1);

            let before = book.entries().to_vec();
            let mut pending = PendingConfirmation::new();
            let view = book.live_view();
            let preview = request_deletion(&by_name(query), &view, &mut book, &mut pending).unwrap();

            prop_assert!(pending.has_pending());
            prop_assert_eq!(book.entries(), before.as_slice());
            for (i, entry) in matches.iter().enumerate() {
                let expected_line = format!("{}. {}", i + 1, entry.person.name);
                prop_assert!(preview.contains(&expected_line));
            }

            respond(&ConfirmationResponse::No, &mut book, &mut pending);
            prop_assert!(!pending.has_pending());
            prop_assert_eq!(book.entries(), before.as_slice());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_confirm_removes_exactly_the_previewed_entries() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(names_strategy(), 0..NAME_POOL.len(), 0..3usize),
            |(names, query, invalid_responses)| {
                let mut book = book_of(&names);
                let matches = expected_matches(&book, query);
                prop_assume!(matches.len() > 1);

                let mut pending = PendingConfirmation::new();
                let view = book.live_view();
                request_deletion(&by_name(query), &view, &mut book, &mut pending).unwrap();
                let parked = pending.get_pending();

                // Any number of invalid answers leaves the pending action untouched
                for _ in 0..invalid_responses {
                    respond(
                        &ConfirmationResponse::Invalid("maybe".to_string()),
                        &mut book,
                        &mut pending,
                    );
                    prop_assert_eq!(&pending.get_pending(), &parked);
                }

                respond(&ConfirmationResponse::Yes, &mut book, &mut pending);
                prop_assert!(!pending.has_pending());
                prop_assert_eq!(book.len(), names.len() - matches.len());
                prop_assert!(book
                    .entries()
                    .iter()
                    .all(|e| e.person.name.as_str() != NAME_POOL[query]));
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_single_match_never_parks() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(names_strategy(), 0..NAME_POOL.len()), |(names, query)| {
            let mut book = book_of(&names);
            let matches = expected_matches(&book, query);
            prop_assume!(matches.len() == 1);

            let mut pending = PendingConfirmation::new();
            let view = book.live_view();
            request_deletion(&by_name(query), &view, &mut book, &mut pending).unwrap();

            prop_assert!(!pending.has_pending());
            prop_assert_eq!(book.len(), names.len() - 1);
            Ok(())
        })
        .unwrap();
}
