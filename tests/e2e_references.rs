//! End-to-end reference resolution tests.
//!
//! Each test exercises: node handle -> validation protocol -> reference
//! identifier -> TypedValue. `MemoryNode` plays the store-owned handle; a
//! local `OpaqueNode` fake plays a handle kind the value layer does not
//! understand.

use propval::node::{NodeHandle, Referent};
use propval::{
    Error, MemoryNode, NodeKey, ReferenceFamily, ReferenceIdentifier, TypeTag, ValueFactory,
};

const CTX: &str = "session-1";

fn factory() -> ValueFactory {
    ValueFactory::with_default_namespaces(CTX)
}

fn referenceable(factory: &ValueFactory, key: &str, ctx: &str) -> MemoryNode {
    MemoryNode::new(key, ctx)
        .with_path(format!("/nodes/{key}"))
        .with_capability(factory.namespaces().referenceable_capability())
}

/// A handle that carries capabilities but cannot expose the referent set.
struct OpaqueNode {
    capabilities: Vec<String>,
}

impl NodeHandle for OpaqueNode {
    fn has_capability(&self, name: &str) -> bool {
        self.capabilities.iter().any(|c| c == name)
    }

    fn path(&self) -> String {
        "/opaque".into()
    }

    fn referent(&self) -> Option<&dyn Referent> {
        None
    }
}

// ============================================================================
// 1. Happy path, all three families
// ============================================================================

#[test]
fn test_reference_families_tag_and_key() {
    let factory = factory();
    let node = referenceable(&factory, "k1", CTX);

    let strong = factory.create_reference(Some(&node)).unwrap();
    assert_eq!(strong.tag(), TypeTag::Reference);
    assert_eq!(strong.as_reference().unwrap().key().as_str(), "k1");

    let weak = factory.create_weak_reference(Some(&node)).unwrap();
    assert_eq!(weak.tag(), TypeTag::WeakReference);
    assert!(weak.as_reference().unwrap().is_weak());

    let simple = factory.create_simple_reference(Some(&node)).unwrap();
    assert_eq!(simple.tag(), TypeTag::SimpleReference);
    assert!(simple.as_reference().unwrap().is_simple());
}

#[test]
fn test_foreign_flag_carries_through() {
    let factory = factory();
    let node = referenceable(&factory, "k2", CTX).foreign(true);
    let value = factory.create_reference(Some(&node)).unwrap();
    assert!(value.as_reference().unwrap().is_foreign());
}

// ============================================================================
// 2. Null handle clears the reference, for all three families
// ============================================================================

#[test]
fn test_null_handle_clears_reference() {
    let factory = factory();
    for (value, tag) in [
        (factory.create_reference(None).unwrap(), TypeTag::Reference),
        (factory.create_weak_reference(None).unwrap(), TypeTag::WeakReference),
        (factory.create_simple_reference(None).unwrap(), TypeTag::SimpleReference),
    ] {
        assert_eq!(value.tag(), tag);
        assert!(value.is_cleared());
    }
}

// ============================================================================
// 3. Validation order: referenceability before everything else
// ============================================================================

#[test]
fn test_non_referenceable_node_rejected() {
    let factory = factory();
    let node = MemoryNode::new("k3", CTX).with_path("/plain");
    match factory.create_reference(Some(&node)) {
        Err(Error::NotReferenceable(path)) => assert_eq!(path, "/plain"),
        other => panic!("expected NotReferenceable, got {other:?}"),
    }
}

#[test]
fn test_referenceability_checked_before_ownership() {
    let factory = factory();
    // Both non-referenceable AND cross-context: the capability failure must
    // win because it is checked first.
    let node = MemoryNode::new("k4", "other-session").with_path("/both-wrong");
    match factory.create_weak_reference(Some(&node)) {
        Err(Error::NotReferenceable(_)) => {}
        other => panic!("expected NotReferenceable, got {other:?}"),
    }
}

#[test]
fn test_referenceability_checked_before_handle_kind() {
    let factory = factory();
    let node = OpaqueNode { capabilities: Vec::new() };
    match factory.create_reference(Some(&node)) {
        Err(Error::NotReferenceable(_)) => {}
        other => panic!("expected NotReferenceable, got {other:?}"),
    }
}

// ============================================================================
// 4. Unsupported handle kinds are an integration error
// ============================================================================

#[test]
fn test_opaque_handle_kind_rejected() {
    let factory = factory();
    let node = OpaqueNode { capabilities: vec![factory.namespaces().referenceable_capability()] };
    match factory.create_simple_reference(Some(&node)) {
        Err(Error::InvalidNodeKind(path)) => assert_eq!(path, "/opaque"),
        other => panic!("expected InvalidNodeKind, got {other:?}"),
    }
}

// ============================================================================
// 5. Cross-session handles are rejected, naming the node's path
// ============================================================================

#[test]
fn test_cross_session_node_rejected() {
    let factory = factory();
    let node = referenceable(&factory, "k5", "other-session");
    match factory.create_reference(Some(&node)) {
        Err(Error::CrossSession { path }) => assert_eq!(path, "/nodes/k5"),
        other => panic!("expected CrossSession, got {other:?}"),
    }
    // The message names the path too.
    let err = factory.create_reference(Some(&node)).unwrap_err();
    assert!(err.to_string().contains("/nodes/k5"));
}

// ============================================================================
// 6. Wrapping an existing identifier follows its weak flag
// ============================================================================

#[test]
fn test_existing_identifier_weak_flag_drives_tag() {
    let factory = factory();

    let weak = ReferenceIdentifier::new(NodeKey::new("k6"), ReferenceFamily::Weak, false);
    assert_eq!(factory.create_from_reference(weak).tag(), TypeTag::WeakReference);

    let strong = ReferenceIdentifier::new(NodeKey::new("k6"), ReferenceFamily::Strong, false);
    assert_eq!(factory.create_from_reference(strong).tag(), TypeTag::Reference);

    // Simple identifiers are not weak, so they wrap as strong references.
    let simple = ReferenceIdentifier::new(NodeKey::new("k6"), ReferenceFamily::Simple, true);
    assert_eq!(factory.create_from_reference(simple).tag(), TypeTag::Reference);
}

// ============================================================================
// 7. A minted reference survives the dispatch path unchanged
// ============================================================================

#[test]
fn test_minted_reference_through_dispatch() {
    let factory = factory();
    let node = referenceable(&factory, "k7", CTX);
    let minted = factory.create_reference(Some(&node)).unwrap();
    let reference = minted.as_reference().unwrap().clone();

    let redispatched = factory
        .create_value(Some(reference.into()), TypeTag::Reference)
        .unwrap()
        .unwrap();
    assert_eq!(redispatched, minted);
}
