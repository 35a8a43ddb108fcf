//! Core synthesis tests: construction, match capture, equality, hashing,
//! rendering and the exhaust marker.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use match_variant::{variant, Variant};

variant! {
    name: TestVariant,
    tags {
        option0();
        option1(String);
        option2(String, i64);
        option_list(Vec<String>);
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn construction_preserves_payload_order() {
    match TestVariant::option2("boo".to_string(), 2) {
        TestVariant::option2(first, second) => {
            assert_eq!(first, "boo");
            assert_eq!(second, 2);
        },
        other => panic!("should be option2, got {}", other),
    }
}

#[test]
fn match_no_args() {
    match TestVariant::option0() {
        TestVariant::option0() => {},
        other => panic!("should be option0, got {}", other),
    }
}

#[test]
fn match_one_arg() {
    match TestVariant::option1("boo".to_string()) {
        TestVariant::option1(val) => assert_eq!(val, "boo"),
        other => panic!("should be option1, got {}", other),
    }
}

#[test]
fn tags_in_declaration_order() {
    assert_eq!(
        TestVariant::TAGS,
        ["option0", "option1", "option2", "option_list"]
    );
}

#[test]
fn tag_names_instances() {
    assert_eq!(TestVariant::option0().tag(), "option0");
    assert_eq!(TestVariant::option1("one".to_string()).tag(), "option1");
    assert_eq!(
        TestVariant::option2("one".to_string(), 2).tag(),
        "option2"
    );
}

#[test]
fn display_renders_qualified_tag() {
    assert_eq!(TestVariant::option0().to_string(), "TestVariant::option0()");
    assert_eq!(
        TestVariant::option1("one".to_string()).to_string(),
        "TestVariant::option1(\"one\")"
    );
    assert_eq!(
        TestVariant::option2("one".to_string(), 2).to_string(),
        "TestVariant::option2(\"one\", 2)"
    );
}

#[test]
fn equal_same_tag_same_payload() {
    assert_eq!(TestVariant::option0(), TestVariant::option0());
    assert_eq!(
        TestVariant::option_list(vec![]),
        TestVariant::option_list(vec![])
    );
    assert_eq!(
        TestVariant::option2("one".to_string(), 2),
        TestVariant::option2("one".to_string(), 2)
    );
}

#[test]
fn unequal_same_tag_different_payload() {
    assert_ne!(
        TestVariant::option_list(vec![]),
        TestVariant::option_list(vec!["something".to_string()])
    );
}

#[test]
fn unequal_different_tags() {
    assert_ne!(
        TestVariant::option_list(vec![]),
        TestVariant::option0()
    );
    assert_ne!(
        TestVariant::option0(),
        TestVariant::option_list(vec![])
    );
}

#[test]
fn hash_follows_equality() {
    assert_eq!(
        hash_of(&TestVariant::option1("something".to_string())),
        hash_of(&TestVariant::option1("something".to_string()))
    );
    assert_eq!(
        hash_of(&TestVariant::option0()),
        hash_of(&TestVariant::option0())
    );
    assert_ne!(
        hash_of(&TestVariant::option1("one".to_string())),
        hash_of(&TestVariant::option1("two".to_string()))
    );
}

#[test]
#[should_panic(expected = "unsupported match arm")]
fn exhaust_always_panics() {
    TestVariant::exhaust(TestVariant::option0());
}

#[test]
#[should_panic(expected = "unsupported match arm")]
fn exhaust_panics_for_arbitrary_values() {
    TestVariant::exhaust("anything at all");
}

#[test]
fn instances_work_as_map_keys() {
    use std::collections::HashMap;

    let mut names = HashMap::new();
    names.insert(TestVariant::option1("key".to_string()), 1);
    names.insert(TestVariant::option0(), 2);

    assert_eq!(
        names.get(&TestVariant::option1("key".to_string())),
        Some(&1)
    );
    assert_eq!(names.get(&TestVariant::option0()), Some(&2));
}
