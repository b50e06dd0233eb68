//! End-to-end deletion and confirmation flows through the route table.

use super::test_utils::{names_in, session_with};
use propbook::deletion::{MESSAGE_ABORTED, MESSAGE_INVALID_RESPONSE, MESSAGE_NO_PENDING};
use propbook::error::{ApiError, CommandError};

#[test]
fn test_duplicate_names_wait_for_yes() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Bob Lee", "22222222"), ("Alice Tan", "33333333")]);

    let preview = session.execute_line("delete name=Alice Tan").unwrap();
    assert!(preview.contains("1. Alice Tan\n2. Alice Tan"), "{}", preview);
    assert!(session.has_pending());
    assert_eq!(names_in(&session), vec!["Alice Tan", "Bob Lee", "Alice Tan"]);

    let done = session.execute_line("yes").unwrap();
    assert!(done.starts_with("Deleted 2 persons: Alice Tan, Alice Tan"));
    assert!(!session.has_pending());
    assert_eq!(names_in(&session), vec!["Bob Lee"]);
}

#[test]
fn test_single_match_deletes_immediately() {
    let session = session_with(&[("Bob Lee", "22222222"), ("Carol Ng", "44444444")]);

    let message = session.execute_line("delete name=bob lee").unwrap();
    assert!(message.starts_with("Deleted Person: Bob Lee; Phone: 22222222"));
    assert!(!session.has_pending());
    assert_eq!(names_in(&session), vec!["Carol Ng"]);
}

#[test]
fn test_unknown_name_is_rejected() {
    let session = session_with(&[("Bob Lee", "22222222")]);

    let err = session.execute_line("delete name=Zed Unknown").unwrap_err();
    assert!(matches!(
        &err,
        ApiError::Command(CommandError::PersonsNotFound(names)) if names == &vec!["Zed Unknown".to_string()]
    ));
    assert!(err.to_string().contains("Zed Unknown"));
    assert_eq!(names_in(&session), vec!["Bob Lee"]);
}

#[test]
fn test_partial_name_list_notes_missing_names() {
    let session = session_with(&[("Alice", "11111111"), ("Bob Lee", "22222222")]);

    let message = session.execute_line("delete name=Alice name=Zed").unwrap();
    assert!(message.starts_with("Deleted Person: Alice"));
    assert!(message.ends_with("\nNote: The following persons were not found: Zed"));
    assert_eq!(names_in(&session), vec!["Bob Lee"]);
}

#[test]
fn test_yes_with_nothing_pending() {
    let session = session_with(&[("Bob Lee", "22222222")]);

    assert_eq!(session.execute_line("yes").unwrap(), MESSAGE_NO_PENDING);
    assert_eq!(names_in(&session), vec!["Bob Lee"]);
}

#[test]
fn test_abort_leaves_store_untouched() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Alice Tan", "33333333")]);
    let before = session.live_view();

    session.execute_line("delete name=Alice Tan").unwrap();
    assert_eq!(session.execute_line("NO").unwrap(), MESSAGE_ABORTED);

    assert!(!session.has_pending());
    assert_eq!(session.live_view(), before);
}

#[test]
fn test_invalid_response_keeps_pending_for_retry() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Alice Tan", "33333333"), ("Bob Lee", "22222222")]);

    session.execute_line("delete name=Alice Tan").unwrap();
    assert_eq!(session.execute_line("perhaps").unwrap(), MESSAGE_INVALID_RESPONSE);
    assert!(session.has_pending());

    // Non-mutating commands in between do not disturb the pending deletion
    session.execute_line("list").unwrap();
    assert!(session.has_pending());

    session.execute_line("y").unwrap();
    assert_eq!(names_in(&session), vec!["Bob Lee"]);
}

#[test]
fn test_inline_confirmation_skips_prompt() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Alice Tan", "33333333"), ("Bob Lee", "22222222")]);

    let message = session.execute_line("delete name=Alice Tan confirm=yes").unwrap();
    assert!(message.starts_with("Deleted 2 persons"));
    assert!(!session.has_pending());
    assert_eq!(names_in(&session), vec!["Bob Lee"]);
}

#[test]
fn test_new_request_replaces_pending() {
    let session = session_with(&[
        ("Alice Tan", "11111111"),
        ("Alice Tan", "33333333"),
        ("Bob Lee", "22222222"),
        ("Bob Lee", "44444444"),
    ]);

    session.execute_line("delete name=Alice Tan").unwrap();
    let preview = session.execute_line("delete name=Bob Lee").unwrap();
    assert!(preview.contains("1. Bob Lee\n2. Bob Lee"));

    session.execute_line("yes").unwrap();
    assert_eq!(names_in(&session), vec!["Alice Tan", "Alice Tan"]);
}

#[test]
fn test_name_list_never_schedules_an_entry_twice() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Bob Lee", "22222222"), ("Carol Ng", "44444444")]);

    let preview = session
        .execute_line("delete name=Alice Tan name=Bob Lee name=alice tan")
        .unwrap();
    assert!(preview.starts_with("This will delete 2 persons."));
    assert!(preview.contains("1. Alice Tan\n2. Bob Lee"));

    session.execute_line("yes").unwrap();
    assert_eq!(names_in(&session), vec!["Carol Ng"]);
}

#[test]
fn test_candidate_removed_before_confirmation_is_skipped() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Alice Tan", "33333333"), ("Bob Lee", "22222222")]);

    session.execute_line("delete name=Alice Tan").unwrap();
    // Positional delete of the first Alice while the prompt is outstanding
    session.execute_line("delete 1").unwrap();
    assert!(session.has_pending());

    let message = session.execute_line("yes").unwrap();
    assert!(message.starts_with("Deleted Person: Alice Tan; Phone: 33333333"));
    assert_eq!(names_in(&session), vec!["Bob Lee"]);
}

#[test]
fn test_positional_delete_against_filtered_view() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Bob Lee", "22222222"), ("Carol Ng", "44444444")]);

    session.execute_line("find name=carol bob").unwrap();
    let message = session.execute_line("delete 2").unwrap();
    assert!(message.starts_with("Deleted Person: Carol Ng"));

    session.execute_line("list").unwrap();
    assert_eq!(names_in(&session), vec!["Alice Tan", "Bob Lee"]);
}

#[test]
fn test_out_of_range_position_after_filter() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Bob Lee", "22222222")]);

    session.execute_line("find name=bob").unwrap();
    assert!(matches!(
        session.execute_line("delete 2"),
        Err(ApiError::Command(CommandError::InvalidPersonIndex { index: 2, shown: 1 }))
    ));
    assert!(!session.has_pending());
}
