//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; the route table dispatches to the deletion and model services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, help_text};
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_person_table, format_transcript_json, format_transcript_text, TranscriptLine,
};
pub use route::{RunContext, MESSAGE_EXIT};
