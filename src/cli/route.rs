//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::help::{command_name, help_text};
use crate::cli::presentation::format_person_table;
use crate::command::{parse_command, Command};
use crate::config::{BookConfig, BookSettings};
use crate::deletion::{request_deletion, respond, ConfirmationResponse, DeletionTarget, PendingConfirmation};
use crate::error::{ApiError, CommandError};
use crate::model::sample::sample_address_book;
use crate::model::{AddressBook, KeywordPredicate, Person};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

pub const MESSAGE_EXIT: &str = "Exiting propbook. Goodbye!";

const WARNING_SAME_NAME: &str =
    "WARNING: A person with the same name already exists in the address book";
const WARNING_SAME_ADDRESS: &str =
    "WARNING: A person with the same address already exists in the address book";

/// Session state for one interactive or scripted run.
///
/// Commands that touch the pending confirmation hold the book and the pending
/// slot together for their whole duration.
pub struct RunContext {
    book: RwLock<AddressBook>,
    pending: Mutex<PendingConfirmation>,
    settings: BookSettings,
}

impl RunContext {
    pub fn new(book: AddressBook, settings: BookSettings) -> Self {
        Self {
            book: RwLock::new(book),
            pending: Mutex::new(PendingConfirmation::new()),
            settings,
        }
    }

    /// Fresh session per config: sample persons when `book.sample_data` is set.
    pub fn from_config(config: &BookConfig) -> Self {
        let book = if config.book.sample_data {
            sample_address_book()
        } else {
            AddressBook::new()
        };
        info!(entries = book.len(), "Session started");
        Self::new(book, config.book.clone())
    }

    pub fn has_pending(&self) -> bool {
        self.pending.lock().has_pending()
    }

    /// Snapshot of the displayed list.
    pub fn live_view(&self) -> Vec<crate::model::Entry> {
        self.book.read().live_view()
    }

    pub fn len(&self) -> usize {
        self.book.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.read().is_empty()
    }

    /// Parse one input line against the current confirmation state.
    pub fn parse_line(&self, line: &str) -> Result<Command, ApiError> {
        Ok(parse_command(line, self.has_pending())?)
    }

    /// Parse then execute one line.
    pub fn execute_line(&self, line: &str) -> Result<String, ApiError> {
        let command = self.parse_line(line)?;
        self.execute(&command)
    }

    pub fn execute(&self, command: &Command) -> Result<String, ApiError> {
        debug!(command = command_name(command), "Executing command");
        match command {
            Command::Add(person) => self.handle_add(person),
            Command::List => Ok(self.handle_list()),
            Command::Find(predicate) => Ok(self.handle_find(predicate)),
            Command::Delete(target) => self.handle_delete(target),
            Command::Confirm(response) => Ok(self.handle_confirm(response)),
            Command::Help => Ok(help_text()),
            Command::Exit => Ok(MESSAGE_EXIT.to_string()),
        }
    }

    fn handle_add(&self, person: &Person) -> Result<String, ApiError> {
        let mut book = self.book.write();
        if book.has_person(person) {
            return Err(CommandError::DuplicatePerson.into());
        }
        let same_name = book.has_name(person);
        let same_address = book.has_address(person);
        let entry = book.add(person.clone());

        let mut message = format!("New person added: {}", entry.person);
        if same_name {
            message.push('\n');
            message.push_str(WARNING_SAME_NAME);
        }
        if same_address {
            message.push('\n');
            message.push_str(WARNING_SAME_ADDRESS);
        }
        Ok(message)
    }

    fn handle_list(&self) -> String {
        let mut book = self.book.write();
        book.clear_filter();
        if self.settings.sort_on_list {
            book.sort_by_name();
        }
        let view = book.live_view();
        format!(
            "Listed all {} persons\n{}",
            view.len(),
            format_person_table(&view)
        )
    }

    fn handle_find(&self, predicate: &KeywordPredicate) -> String {
        let mut book = self.book.write();
        book.set_filter(predicate.clone());
        let view = book.live_view();
        format!(
            "{} persons listed!\n{}",
            view.len(),
            format_person_table(&view)
        )
    }

    fn handle_delete(&self, target: &DeletionTarget) -> Result<String, ApiError> {
        let mut book = self.book.write();
        let mut pending = self.pending.lock();
        let live_view = book.live_view();
        Ok(request_deletion(target, &live_view, &mut *book, &mut pending)?)
    }

    fn handle_confirm(&self, response: &ConfirmationResponse) -> String {
        let mut book = self.book.write();
        let mut pending = self.pending.lock();
        respond(response, &mut *book, &mut pending)
    }
}
