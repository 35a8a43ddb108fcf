//! Working with optional values through Maybe.

use match_variant::Maybe;

fn lookup(guesses: &[(u32, i64)], key: u32) -> Maybe<i64> {
    guesses
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .into()
}

fn main() {
    let guesses = [(1, 17), (3, 64)];

    for key in [1, 2, 3] {
        let maybe_value = lookup(&guesses, key);

        match maybe_value {
            Maybe::nothing() => println!("I don't feel like guessing"),
            Maybe::just(value) => println!("I guess {}", value),
        }

        println!("with default: {}", maybe_value.clone().unwrap_or(-1));

        match maybe_value.apply(|d| d * d).apply(|d| d + 2) {
            Maybe::just(value) => println!("Squared plus two: {}", value),
            Maybe::nothing() => println!("got nothing to math on"),
        }
    }
}
