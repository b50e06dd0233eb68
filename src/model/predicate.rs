//! Keyword predicate used by `find` to narrow the live view.

use crate::model::person::Person;
use std::collections::BTreeSet;

/// Keyword lists per field. A person matches when any keyword is a case-insensitive
/// substring of the corresponding field (OR across every field).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordPredicate {
    pub names: Vec<String>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub addresses: Vec<String>,
    pub tags: Vec<String>,
    pub prices: Vec<String>,
    pub property_types: Vec<String>,
    pub intentions: Vec<String>,
}

/// Splits raw values on whitespace, lowercases, and drops repeats while keeping first-seen order.
pub fn split_normalize_dedup<'a, I>(raw_values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for value in raw_values {
        for token in value.split_whitespace() {
            let token = token.to_lowercase();
            if seen.insert(token.clone()) {
                out.push(token);
            }
        }
    }
    out
}

fn any_contains(keywords: &[String], field: &str) -> bool {
    if keywords.is_empty() {
        return false;
    }
    let field = field.to_lowercase();
    keywords.iter().any(|k| field.contains(k.as_str()))
}

impl KeywordPredicate {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
            && self.phones.is_empty()
            && self.emails.is_empty()
            && self.addresses.is_empty()
            && self.tags.is_empty()
            && self.prices.is_empty()
            && self.property_types.is_empty()
            && self.intentions.is_empty()
    }

    pub fn test(&self, person: &Person) -> bool {
        any_contains(&self.names, person.name.as_str())
            || any_contains(&self.phones, person.phone.as_str())
            || any_contains(&self.emails, person.email.as_str())
            || any_contains(&self.addresses, person.address.as_str())
            || person
                .tags
                .iter()
                .any(|tag| any_contains(&self.tags, tag.as_str()))
            || any_contains(&self.prices, person.price.as_str())
            || any_contains(&self.property_types, person.property_type.as_str())
            || any_contains(&self.intentions, person.intention.as_str())
    }
}
