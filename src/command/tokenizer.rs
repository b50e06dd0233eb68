//! Prefix tokenizer: splits `name=Alice Tan phone=123` style arguments.
//!
//! A prefix only counts at the start of the input or right after whitespace, so
//! `x=` inside a value is left alone. A value runs up to the next recognised
//! prefix and is trimmed. Text before the first prefix is the preamble.

use crate::error::ParseError;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("name=");
pub const PREFIX_PHONE: Prefix = Prefix("phone=");
pub const PREFIX_EMAIL: Prefix = Prefix("email=");
pub const PREFIX_ADDRESS: Prefix = Prefix("address=");
pub const PREFIX_PROPERTY_TYPE: Prefix = Prefix("type=");
pub const PREFIX_PRICE: Prefix = Prefix("price=");
pub const PREFIX_INTENTION: Prefix = Prefix("intent=");
pub const PREFIX_TAG: Prefix = Prefix("tag=");
pub const PREFIX_CONFIRM: Prefix = Prefix("confirm=");

/// Tokenized arguments: preamble plus every value seen per prefix, in input order.
#[derive(Debug, Clone, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Reject any of `prefixes` that was given more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.values.get(*p).map_or(false, |v| v.len() > 1))
            .map(Prefix::as_str)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefix(duplicated.join(" ")))
        }
    }
}

fn starts_token(args: &str, index: usize) -> bool {
    index == 0
        || args[..index]
            .chars()
            .next_back()
            .map_or(false, char::is_whitespace)
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(move |(index, _)| starts_token(args, *index))
                .map(move |(index, _)| (index, *prefix))
        })
        .collect();
    positions.sort_by_key(|(index, _)| *index);

    let preamble_end = positions.first().map_or(args.len(), |(index, _)| *index);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }
    map
}
