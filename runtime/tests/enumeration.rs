//! Enumeration tests: scalar-value lookup for enum-style variants.

use match_variant::{variant, Enumeration, Maybe, Variant};

variant! {
    name: HttpStatus,
    value: u16,
    tags {
        ok() = 200;
        not_found() = 404;
    }
}

variant! {
    name: MyEnum,
    value: i64,
    tags {
        a() = 1;
        b() = 2;
        c(i64);
    }
}

variant! {
    name: Method,
    value: String,
    tags {
        get() = "GET";
        post() = "POST";
    }
}

#[test]
fn from_value_round_trip() {
    assert_eq!(HttpStatus::from_value(200), Maybe::just(HttpStatus::ok()));
    assert_eq!(
        HttpStatus::from_value(404),
        Maybe::just(HttpStatus::not_found())
    );
}

#[test]
fn from_value_unknown_scalar_is_nothing() {
    assert_eq!(HttpStatus::from_value(999), Maybe::nothing());
    assert_eq!(MyEnum::from_value(99), Maybe::nothing());
}

#[test]
fn from_value_total_over_the_scalar_domain() {
    for raw in 0..=u16::MAX {
        // Never panics; unknown scalars answer nothing().
        let _ = HttpStatus::from_value(raw);
    }
}

#[test]
fn string_valued_lookup() {
    assert_eq!(
        Method::from_value("GET".to_string()),
        Maybe::just(Method::get())
    );
    assert_eq!(
        Method::from_value("POST".to_string()),
        Maybe::just(Method::post())
    );
    assert_eq!(Method::from_value("PATCH".to_string()), Maybe::nothing());
}

#[test]
fn string_valued_value_answers_owned_scalar() {
    assert_eq!(Method::get().value(), Maybe::just("GET".to_string()));
    assert_eq!(Method::post().value(), Maybe::just("POST".to_string()));
}

#[test]
fn value_reports_the_declared_default() {
    assert_eq!(HttpStatus::ok().value(), Maybe::just(200));
    assert_eq!(HttpStatus::not_found().value(), Maybe::just(404));
}

#[test]
fn mixed_enum_lookup_skips_payload_tags() {
    assert_eq!(MyEnum::from_value(1).unwrap(), MyEnum::a());
    assert_eq!(MyEnum::from_value(2).unwrap(), MyEnum::b());

    // c carries a payload and no default: it never comes back from the
    // lookup and reports no value of its own.
    assert_eq!(MyEnum::c(7).value(), Maybe::nothing());
}

#[test]
fn enum_style_variants_still_match_structurally() {
    match HttpStatus::from_value(200) {
        Maybe::just(HttpStatus::ok()) => {},
        Maybe::just(other) => panic!("unexpected status {}", other),
        Maybe::nothing() => panic!("200 is a known status"),
    }

    assert_eq!(HttpStatus::TAGS, ["ok", "not_found"]);
    assert_eq!(HttpStatus::ok().tag(), "ok");
}
