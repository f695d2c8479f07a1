//! End-to-end conversion tests for the facade.
//!
//! Each test exercises: raw input -> dispatch -> converter -> TypedValue.
//! These tests use `create_value()` for the generic path and the fixed-tag
//! constructors for the convenience path.

use pretty_assertions::assert_eq;
use propval::{ALL_TAGS, Error, Raw, TypeTag, ValueFactory};

fn factory() -> ValueFactory {
    ValueFactory::with_default_namespaces("session-1")
}

/// One valid sample input per tag.
fn sample_for(tag: TypeTag) -> Raw {
    match tag {
        TypeTag::Undefined => Raw::from("anything"),
        TypeTag::String => Raw::from(42i64),
        TypeTag::Binary => Raw::from("blob"),
        TypeTag::Long => Raw::from("42"),
        TypeTag::Double => Raw::from(1.5),
        TypeTag::Date => Raw::from("2024-01-02T03:04:05Z"),
        TypeTag::Boolean => Raw::from(true),
        TypeTag::Name => Raw::from("mix:referenceable"),
        TypeTag::Path => Raw::from("/docs/readme"),
        TypeTag::Reference => Raw::from("node-key-1"),
        TypeTag::WeakReference => Raw::from("node-key-2"),
        TypeTag::Uri => Raw::from("https://example.org/a"),
        TypeTag::Decimal => Raw::from("12.50"),
        TypeTag::SimpleReference => Raw::from("node-key-3"),
    }
}

// ============================================================================
// 1. Every tag converts a valid sample, and the result carries that tag
// ============================================================================

#[test]
fn test_every_tag_converts_a_sample() {
    let factory = factory();
    for tag in ALL_TAGS {
        let value = factory
            .create_value(Some(sample_for(tag)), tag)
            .unwrap_or_else(|e| panic!("{tag} sample failed: {e}"))
            .expect("present input yields a value");
        assert_eq!(value.tag(), tag);
        assert!(!value.is_cleared());
    }
}

// ============================================================================
// 2. Absent input short-circuits to "no value" for every tag
// ============================================================================

#[test]
fn test_absent_input_yields_no_value() {
    let factory = factory();
    for tag in ALL_TAGS {
        assert!(factory.create_value(None, tag).unwrap().is_none(), "{tag}");
    }
}

// ============================================================================
// 3. Batch conversion: empty, singleton equivalence, order
// ============================================================================

#[test]
fn test_empty_batch_is_empty() {
    let factory = factory();
    for tag in ALL_TAGS {
        assert!(factory.create_values(Vec::new(), tag).unwrap().is_empty(), "{tag}");
    }
}

#[test]
fn test_singleton_batch_equals_single_conversion() {
    let factory = factory();
    let single = factory.create_value(Some(Raw::from("42")), TypeTag::Long).unwrap().unwrap();
    let batch = factory.create_values(vec![Raw::from("42")], TypeTag::Long).unwrap();
    assert_eq!(batch, vec![single]);
}

#[test]
fn test_batch_preserves_input_order() {
    let factory = factory();
    let values = factory
        .create_values(vec![Raw::from("3"), Raw::from("1"), Raw::from("2")], TypeTag::Long)
        .unwrap();
    let longs: Vec<i64> = values.iter().map(|v| v.as_long().unwrap()).collect();
    assert_eq!(longs, vec![3, 1, 2]);
}

// ============================================================================
// 4. Batch conversion stops on the first bad element, no partial output
// ============================================================================

#[test]
fn test_batch_aborts_on_first_failure() {
    let factory = factory();
    // Elements before and after the bad one would individually succeed.
    let result = factory.create_values(
        vec![Raw::from("1"), Raw::from("oops"), Raw::from("3")],
        TypeTag::Long,
    );
    match result {
        Err(Error::ValueFormat { tag, input, .. }) => {
            assert_eq!(tag, TypeTag::Long);
            assert_eq!(input, "oops");
        }
        other => panic!("expected ValueFormat, got {other:?}"),
    }
}

// ============================================================================
// 5. Format errors name the tag and the offending input
// ============================================================================

#[test]
fn test_format_error_names_tag_and_input() {
    let factory = factory();
    let err = factory.create_value(Some(Raw::from("maybe")), TypeTag::Boolean).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("BOOLEAN"), "message: {msg}");
    assert!(msg.contains("maybe"), "message: {msg}");
}

// ============================================================================
// 6. Fixed-tag constructors agree with the dispatch path
// ============================================================================

#[test]
fn test_fixed_tag_matches_dispatch() {
    let factory = factory();

    let direct = factory.create_boolean(true);
    let dispatched =
        factory.create_value(Some(Raw::from(true)), TypeTag::Boolean).unwrap().unwrap();
    assert_eq!(direct, dispatched);

    let direct = factory.create_long(42);
    let dispatched = factory.create_value(Some(Raw::from(42i64)), TypeTag::Long).unwrap().unwrap();
    assert_eq!(direct, dispatched);

    let direct = factory.create_string("hi");
    let dispatched = factory.create_value(Some(Raw::from("hi")), TypeTag::String).unwrap().unwrap();
    assert_eq!(direct, dispatched);
}

// ============================================================================
// 7. Names resolve through the registry
// ============================================================================

#[test]
fn test_name_construction() {
    let factory = factory();
    assert_eq!(factory.create_name("title").unwrap(), "title");
    assert_eq!(
        factory.create_name_in("urn:example", "title").unwrap(),
        "{urn:example}title"
    );
    assert!(matches!(factory.create_name("a/b"), Err(Error::InvalidName(_))));
}

// ============================================================================
// 8. Binary: bytes, stream, hint
// ============================================================================

#[test]
fn test_binary_paths() {
    let factory = factory();

    let binary = factory.create_binary(b"payload".to_vec());
    assert_eq!(binary.data().as_ref(), b"payload");
    assert_eq!(binary.media_type(), None);

    let value = factory.create_binary_value(binary);
    assert_eq!(value.tag(), TypeTag::Binary);

    let streamed = factory
        .create_binary_from_stream(&b"stream contents"[..], Some("text/markdown"))
        .unwrap();
    assert_eq!(streamed.data().as_ref(), b"stream contents");
    assert_eq!(streamed.media_type(), Some("text/markdown"));

    // No hint: content sniffing fills in what it can.
    let sniffed = factory.create_binary_from_stream(&b"plain text"[..], None).unwrap();
    assert_eq!(sniffed.media_type(), Some("text/plain"));
}

// ============================================================================
// 9. Unknown external tag codes fail loudly
// ============================================================================

#[test]
fn test_external_tag_code_rejected() {
    match TypeTag::from_code(77) {
        Err(Error::UnsupportedTypeTag(77)) => {}
        other => panic!("expected UnsupportedTypeTag(77), got {other:?}"),
    }
}

// ============================================================================
// Property-based: text forms of integers always convert back
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn long_text_form_roundtrips(n in any::<i64>()) {
            let factory = factory();
            let value = factory
                .create_value(Some(Raw::from(n.to_string())), TypeTag::Long)
                .unwrap()
                .unwrap();
            prop_assert_eq!(value.as_long(), Some(n));
        }

        #[test]
        fn string_conversion_never_fails_for_longs(n in any::<i64>()) {
            let factory = factory();
            let value = factory
                .create_value(Some(Raw::from(n)), TypeTag::String)
                .unwrap()
                .unwrap();
            let expected = n.to_string();
            prop_assert_eq!(value.as_str(), Some(expected.as_str()));
        }
    }
}
