//! Sample contacts loaded at start-up when `book.sample_data` is enabled.

use crate::model::book::AddressBook;
use crate::model::fields::{Address, Email, Intention, Name, Phone, Price, PropertyType, Tag};
use crate::model::person::Person;

// (name, phone, email, address, property type, price, intention, tags)
const SAMPLES: [(&str, &str, &str, &str, &str, &str, Intention, &[&str]); 6] = [
    (
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        "hdb 4-room flat",
        "550,000",
        Intention::Sell,
        &["friends"],
    ),
    (
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        "condominium",
        "3,800",
        Intention::Rent,
        &["colleagues", "friends"],
    ),
    (
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        "hdb 5-room flat",
        "720,000",
        Intention::Sell,
        &["neighbours"],
    ),
    (
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        "hdb 3-room flat",
        "2,400",
        Intention::Rent,
        &["family"],
    ),
    (
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
        "landed terrace",
        "2,150,000",
        Intention::Sell,
        &["classmates"],
    ),
    (
        "Roy Balakrishnan",
        "92624417",
        "royb@example.com",
        "Blk 45 Aljunied Street 85, #11-31",
        "executive condominium",
        "4,200.50",
        Intention::Rent,
        &["colleagues"],
    ),
];

/// The fixed sample persons, in insertion order.
pub fn sample_persons() -> Vec<Person> {
    SAMPLES
        .iter()
        .map(
            |(name, phone, email, address, property_type, price, intention, tags)| Person {
                name: Name::new(*name).expect("sample name is valid"),
                phone: Phone::new(*phone).expect("sample phone is valid"),
                email: Email::new(*email).expect("sample email is valid"),
                address: Address::new(*address).expect("sample address is valid"),
                property_type: PropertyType::new(*property_type)
                    .expect("sample property type is valid"),
                price: Price::new(*price).expect("sample price is valid"),
                intention: *intention,
                tags: tags
                    .iter()
                    .map(|t| Tag::new(*t).expect("sample tag is valid"))
                    .collect(),
            },
        )
        .collect()
}

/// A book pre-populated with [`sample_persons`].
pub fn sample_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in sample_persons() {
        book.add(person);
    }
    book
}
