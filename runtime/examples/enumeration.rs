//! Reverse lookup on an enum-style variant.

use match_variant::{variant, Enumeration, Maybe};

variant! {
    name: HttpStatus,
    value: u16,
    tags {
        ok() = 200;
        not_found() = 404;
    }
}

fn main() {
    for value in [200, 404, 600] {
        match HttpStatus::from_value(value) {
            Maybe::just(HttpStatus::ok()) => println!("Request was successful"),
            Maybe::just(HttpStatus::not_found()) => println!("Request was not found"),
            Maybe::nothing() => println!("No idea what we got here: {}", value),
        }
    }
}
