//! Command grammar as seen from a session: parse errors surface before any state changes.

use super::test_utils::{add_line, empty_session, names_in, session_with};
use propbook::cli::{Cli, Commands, OutputFormat};
use propbook::error::{ApiError, ParseError};
use clap::Parser;

#[test]
fn test_invalid_confirmation_value_rejected_before_resolution() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Alice Tan", "33333333")]);

    assert!(matches!(
        session.execute_line("delete name=Alice Tan confirm=sure"),
        Err(ApiError::Parse(ParseError::InvalidConfirmation(_)))
    ));
    assert!(!session.has_pending());
    assert_eq!(names_in(&session).len(), 2);
}

#[test]
fn test_confirmation_with_position_rejected() {
    let session = session_with(&[("Alice Tan", "11111111")]);
    assert!(matches!(
        session.execute_line("delete 1 confirm=yes"),
        Err(ApiError::Parse(ParseError::ConfirmationNotAllowed))
    ));
    assert_eq!(names_in(&session).len(), 1);
}

#[test]
fn test_help_and_list_work_while_pending() {
    let session = session_with(&[("Alice Tan", "11111111"), ("Alice Tan", "33333333")]);
    session.execute_line("delete name=Alice Tan").unwrap();

    assert!(session.execute_line("help").unwrap().contains("delete"));
    assert!(session.has_pending());
}

#[test]
fn test_add_then_find_by_intention() {
    let session = empty_session();
    session.execute_line(&add_line("Alice Tan", "11111111")).unwrap();
    session
        .execute_line(
            "add intent=rent name=Bob Lee phone=22222222 email=bob@example.com \
             address=2 Rent Road type=hdb price=2,500 tag=urgent",
        )
        .unwrap();

    let found = session.execute_line("find intent=rent").unwrap();
    assert!(found.starts_with("1 persons listed!"));
    assert_eq!(names_in(&session), vec!["Bob Lee"]);

    let found = session.execute_line("find tag=URG price=100").unwrap();
    assert!(found.starts_with("2 persons listed!"));
}

#[test]
fn test_cli_surface() {
    let cli = Cli::try_parse_from(["propbook", "run", "delete name=Alice", "yes", "--format", "json"]).unwrap();
    match cli.command {
        Some(Commands::Run { lines, format }) => {
            assert_eq!(lines, vec!["delete name=Alice", "yes"]);
            assert_eq!(format, OutputFormat::Json);
        }
        other => panic!("unexpected command {:?}", other),
    }

    let cli = Cli::try_parse_from(["propbook"]).unwrap();
    assert!(cli.command.is_none(), "no subcommand means the interactive shell");

    assert!(Cli::try_parse_from(["propbook", "--quiet", "--verbose"]).is_err());
}
