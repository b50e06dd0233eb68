//! Presentation: person tables and machine-readable transcripts.

use crate::error::ApiError;
use crate::model::Entry;
use comfy_table::Table;
use serde::Serialize;

pub fn format_person_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No persons to show.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec![
        "#", "Name", "Phone", "Email", "Address", "Type", "Price", "Intention", "Tags",
    ]);
    for (i, entry) in entries.iter().enumerate() {
        let person = &entry.person;
        let tags = person
            .tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            (i + 1).to_string(),
            person.name.to_string(),
            person.phone.to_string(),
            person.email.to_string(),
            person.address.to_string(),
            person.property_type.to_string(),
            person.price.to_string(),
            person.intention.as_str().to_string(),
            tags,
        ]);
    }
    table.to_string()
}

/// One executed line in `run`/`script` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptLine {
    pub input: String,
    pub ok: bool,
    pub output: String,
}

pub fn format_transcript_text(lines: &[TranscriptLine]) -> String {
    lines
        .iter()
        .map(|l| format!("> {}\n{}", l.input, l.output))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_transcript_json(lines: &[TranscriptLine]) -> Result<String, ApiError> {
    serde_json::to_string_pretty(lines).map_err(|e| ApiError::Io(e.into()))
}
