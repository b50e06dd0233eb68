//! `find` arguments.

use crate::command::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_INTENTION, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_PRICE, PREFIX_PROPERTY_TYPE, PREFIX_TAG,
};
use crate::error::ParseError;
use crate::model::predicate::split_normalize_dedup;
use crate::model::KeywordPredicate;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all persons whose fields contain any of the given keywords \
     (case-insensitive) and displays them as a list with index numbers.\n\
     Parameters: [name=KEYWORDS] [phone=KEYWORDS] [email=KEYWORDS] [address=KEYWORDS] \
     [tag=KEYWORDS] [price=KEYWORDS] [type=KEYWORDS] [intent=KEYWORDS]\n\
     Example: find name=alice bob tag=friends";

pub fn parse(args: &str) -> Result<KeywordPredicate, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
            PREFIX_PRICE,
            PREFIX_PROPERTY_TYPE,
            PREFIX_INTENTION,
        ],
    );

    let predicate = KeywordPredicate {
        names: split_normalize_dedup(map.all_values(PREFIX_NAME)),
        phones: split_normalize_dedup(map.all_values(PREFIX_PHONE)),
        emails: split_normalize_dedup(map.all_values(PREFIX_EMAIL)),
        addresses: split_normalize_dedup(map.all_values(PREFIX_ADDRESS)),
        tags: split_normalize_dedup(map.all_values(PREFIX_TAG)),
        prices: split_normalize_dedup(map.all_values(PREFIX_PRICE)),
        property_types: split_normalize_dedup(map.all_values(PREFIX_PROPERTY_TYPE)),
        intentions: split_normalize_dedup(map.all_values(PREFIX_INTENTION)),
    };

    if predicate.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: USAGE.to_string(),
        });
    }
    Ok(predicate)
}
