//! CLI help and command-name contract for logging and routing.

use crate::command::{add, delete, find, Command, HELP};

/// Command name for log fields (e.g. "delete", "confirm").
pub fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Add(_) => add::COMMAND_WORD,
        Command::List => crate::command::LIST_WORD,
        Command::Find(_) => find::COMMAND_WORD,
        Command::Delete(_) => delete::COMMAND_WORD,
        Command::Confirm(_) => "confirm",
        Command::Help => crate::command::HELP_WORD,
        Command::Exit => crate::command::EXIT_WORD,
    }
}

/// Full help: the command summary followed by each detailed usage.
pub fn help_text() -> String {
    [HELP, add::USAGE, find::USAGE, delete::USAGE].join("\n\n")
}
