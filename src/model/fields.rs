//! Validated field values for a person record.
//!
//! Every type here is an immutable newtype whose constructor is the only way in,
//! so holding a value is proof that it passed validation.

use crate::error::FieldError;
use regex::Regex;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("field pattern is a valid regex"))
}

/// Declares a string newtype validated against a full-match regex.
macro_rules! text_field {
    ($(#[$doc:meta])* $ty:ident, $field:literal, $pattern:literal, $message:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(String);

        impl $ty {
            pub const MESSAGE_CONSTRAINTS: &'static str = $message;

            pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(FieldError::constraint($field, Self::MESSAGE_CONSTRAINTS))
                }
            }

            pub fn is_valid(test: &str) -> bool {
                static PATTERN: OnceLock<Regex> = OnceLock::new();
                compiled(&PATTERN, $pattern).is_match(test)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

text_field!(
    /// A person's full name. Not unique across the book.
    Name,
    "name",
    r"^\p{L}[\p{L}\p{M}\p{N} .'-]*$",
    "Names must start with a letter and should only contain letters, numbers, accents, \
     spaces, periods, apostrophes, or hyphens"
);

text_field!(
    /// A phone number.
    Phone,
    "phone",
    r"^[0-9]{3,}$",
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

text_field!(
    /// An email address in `local@domain` form.
    Email,
    "email",
    r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    "Emails should be of the format local-part@domain. The local-part should only contain \
     alphanumeric characters separated by single '+', '_', '.' or '-'; the domain is made of \
     labels separated by periods and must end with a label at least 2 characters long"
);

text_field!(
    /// A postal address.
    Address,
    "address",
    r"(?s)^\S.*$",
    "Addresses can take any values, and it should not be blank"
);

text_field!(
    /// Free-form property type, e.g. `hdb 4-room flat`.
    PropertyType,
    "property type",
    r"(?s)^\S.*$",
    "Property type can take any values, and it should not be blank"
);

text_field!(
    Tag,
    "tag",
    r"^[A-Za-z0-9]+$",
    "Tags names should be alphanumeric"
);

impl Name {
    /// Identity comparison used by name-based deletion: exact full name, ignoring case.
    pub fn matches_ignore_case(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

/// Asking or rental price. Digits with optional thousands commas and up to two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price(String);

impl Price {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Price should only contain digits, commas, \
         and an optional decimal point (up to 2 decimal places), and it should not be blank";

    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(FieldError::constraint("price", Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn is_valid(test: &str) -> bool {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        compiled(&PATTERN, r"^[0-9,]+(?:\.[0-9]{1,2})?$").is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value with commas stripped. `None` only when the digits overflow `Decimal`.
    pub fn amount(&self) -> Option<Decimal> {
        Decimal::from_str(&self.0.replace(',', "")).ok()
    }

    /// Numeric ordering; falls back to digit count then text for out-of-range values.
    pub fn cmp_amount(&self, other: &Price) -> Ordering {
        match (self.amount(), other.amount()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => {
                let a = self.0.replace(',', "");
                let b = other.0.replace(',', "");
                let a = a.trim_start_matches('0');
                let b = b.trim_start_matches('0');
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Price {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// What the contact wants to do with the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intention {
    Sell,
    Rent,
}

impl Intention {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Intention must be 'sell' or 'rent'";

    pub fn as_str(&self) -> &'static str {
        match self {
            Intention::Sell => "sell",
            Intention::Rent => "rent",
        }
    }
}

impl FromStr for Intention {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sell" => Ok(Intention::Sell),
            "rent" => Ok(Intention::Rent),
            _ => Err(FieldError::constraint(
                "intention",
                Self::MESSAGE_CONSTRAINTS,
            )),
        }
    }
}

impl fmt::Display for Intention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_str())
    }
}
