//! `add` arguments.

use crate::command::tokenizer::{
    tokenize, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_INTENTION, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_PRICE, PREFIX_PROPERTY_TYPE, PREFIX_TAG,
};
use crate::error::ParseError;
use crate::model::{Address, Email, Intention, Name, Person, Phone, Price, PropertyType, Tag};

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book. \
     Parameters: intent=INTENTION(sell|rent) name=NAME phone=PHONE email=EMAIL address=ADDRESS \
     type=PROPERTY TYPE price=PRICE [tag=TAG]...\n\
     Example: add intent=sell name=John Doe phone=98765432 email=johnd@example.com \
     address=311, Clementi Ave 2, #02-25 type=hdb 3-room flat price=450000 tag=friends tag=owesMoney";

const REQUIRED: [Prefix; 7] = [
    PREFIX_INTENTION,
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_PROPERTY_TYPE,
    PREFIX_PRICE,
];

fn invalid_format() -> ParseError {
    ParseError::InvalidFormat {
        usage: USAGE.to_string(),
    }
}

pub fn parse(args: &str) -> Result<Person, ParseError> {
    // intent= must lead
    if !args.trim_start().starts_with(PREFIX_INTENTION.as_str()) {
        return Err(invalid_format());
    }

    let map = tokenize(
        args,
        &[
            PREFIX_INTENTION,
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_PROPERTY_TYPE,
            PREFIX_PRICE,
            PREFIX_TAG,
        ],
    );
    if !REQUIRED.iter().all(|p| map.is_present(*p)) || !map.preamble().is_empty() {
        return Err(invalid_format());
    }
    map.verify_no_duplicate_prefixes_for(&REQUIRED)?;

    let value = |prefix: Prefix| map.value(prefix).unwrap_or_default();
    Ok(Person {
        intention: value(PREFIX_INTENTION).parse::<Intention>()?,
        name: Name::new(value(PREFIX_NAME))?,
        phone: Phone::new(value(PREFIX_PHONE))?,
        email: Email::new(value(PREFIX_EMAIL))?,
        address: Address::new(value(PREFIX_ADDRESS))?,
        property_type: PropertyType::new(value(PREFIX_PROPERTY_TYPE))?,
        price: Price::new(value(PREFIX_PRICE))?,
        tags: map
            .all_values(PREFIX_TAG)
            .into_iter()
            .map(Tag::new)
            .collect::<Result<_, _>>()?,
    })
}
