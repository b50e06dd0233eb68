//! `delete` arguments: a position, or one or more `name=` values with an optional `confirm=`.

use crate::command::tokenizer::{tokenize, PREFIX_CONFIRM, PREFIX_NAME};
use crate::deletion::DeletionTarget;
use crate::error::ParseError;
use crate::model::Name;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the person at the given position in the displayed list, \
     or every person with the given name(s). Deleting more than one person asks for confirmation \
     unless confirm=yes is given.\n\
     Parameters: INDEX (must be a positive integer) or name=NAME [name=NAME]... [confirm=yes|no]\n\
     Example: delete 1\n\
     Example: delete name=John Doe\n\
     Example: delete name=John Doe name=Mary Jane confirm=yes";

fn invalid_format() -> ParseError {
    ParseError::InvalidFormat {
        usage: USAGE.to_string(),
    }
}

pub fn parse(args: &str) -> Result<DeletionTarget, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_CONFIRM]);
    map.verify_no_duplicate_prefixes_for(&[PREFIX_CONFIRM])?;

    let raw_names = map.all_values(PREFIX_NAME);
    if raw_names.is_empty() {
        if map.is_present(PREFIX_CONFIRM) {
            return Err(ParseError::ConfirmationNotAllowed);
        }
        return parse_index(map.preamble()).map(DeletionTarget::ByPosition);
    }

    if !map.preamble().is_empty() {
        return Err(invalid_format());
    }

    let mut names = raw_names
        .into_iter()
        .map(Name::new)
        .collect::<Result<Vec<_>, _>>()?;
    let confirmed = parse_confirmation(map.value(PREFIX_CONFIRM))?;

    if names.len() == 1 {
        Ok(DeletionTarget::ByName {
            name: names.remove(0),
            confirmed,
        })
    } else {
        Ok(DeletionTarget::ByNameList { names, confirmed })
    }
}

/// 1-based position. Blank input is a format error rather than a bad index.
pub fn parse_index(raw: &str) -> Result<usize, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_format());
    }
    match trimmed.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::InvalidIndex(trimmed.to_string())),
    }
}

/// `yes`/`y` confirm; `no`/`n`/empty/absent do not; anything else is rejected.
pub fn parse_confirmation(value: Option<&str>) -> Result<bool, ParseError> {
    let Some(raw) = value else {
        return Ok(false);
    };
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" | "" => Ok(false),
        _ => Err(ParseError::InvalidConfirmation(raw.trim().to_string())),
    }
}
