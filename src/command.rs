//! Line-oriented command interpreter.
//!
//! A line is split into a command word and its arguments; the word picks the
//! argument parser. Bare single tokens that are not command words are answers
//! to an outstanding confirmation prompt.

pub mod add;
pub mod delete;
pub mod find;
pub mod tokenizer;

use crate::deletion::{ConfirmationResponse, DeletionTarget};
use crate::error::ParseError;
use crate::model::{KeywordPredicate, Person};

pub const LIST_WORD: &str = "list";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const HELP: &str = "Commands:\n\
     add intent=sell|rent name=NAME phone=PHONE email=EMAIL address=ADDRESS type=TYPE price=PRICE [tag=TAG]...\n\
     list\n\
     find [name=|phone=|email=|address=|tag=|price=|type=|intent=]KEYWORDS...\n\
     delete INDEX | delete name=NAME [name=NAME]... [confirm=yes|no]\n\
     yes | no  (answer a pending deletion)\n\
     help\n\
     exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Person),
    List,
    Find(KeywordPredicate),
    Delete(DeletionTarget),
    Confirm(ConfirmationResponse),
    Help,
    Exit,
}

/// Parse one line. `confirmation_pending` decides where an unrecognised bare
/// token goes: to the responder's invalid path, or back as an unknown command.
pub fn parse_command(input: &str, confirmation_pending: bool) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: HELP.to_string(),
        });
    }

    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => (&trimmed[..split], &trimmed[split..]),
        None => (trimmed, ""),
    };

    match word {
        add::COMMAND_WORD => add::parse(args).map(Command::Add),
        delete::COMMAND_WORD => delete::parse(args).map(Command::Delete),
        find::COMMAND_WORD => find::parse(args).map(Command::Find),
        LIST_WORD => Ok(Command::List),
        HELP_WORD => Ok(Command::Help),
        EXIT_WORD => Ok(Command::Exit),
        _ if args.is_empty() => match ConfirmationResponse::from_token(word) {
            Some(response) => Ok(Command::Confirm(response)),
            None if confirmation_pending => {
                Ok(Command::Confirm(ConfirmationResponse::Invalid(word.to_string())))
            }
            None => Err(ParseError::UnknownCommand(word.to_string())),
        },
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}
