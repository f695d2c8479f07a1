//! The conversion facade and reference resolver.
//!
//! `ValueFactory` is the public surface: raw inputs go in, immutable
//! [`TypedValue`]s come out. It owns the converter set and the namespace
//! registry handle, plus the execution-context id used for the reference
//! ownership check. The factory itself is stateless — every method takes
//! `&self`, and concurrent calls with different inputs are safe because the
//! only shared state (converter set, registry) is read-only here.

use std::io::Read;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, trace};
use url::Url;

use crate::convert::{ConverterSet, read_binary};
use crate::model::{
    Binary, Payload, Raw, ReferenceFamily, ReferenceIdentifier, TypeTag, TypedValue,
};
use crate::namespace::NamespaceRegistry;
use crate::node::{NodeHandle, Referent};
use crate::{Error, Result};

/// Converts untyped inputs into typed values and resolves node handles into
/// portable references.
pub struct ValueFactory {
    converters: ConverterSet,
    namespaces: Arc<NamespaceRegistry>,
    /// Identifier of the logical session that owns this factory. Node
    /// handles from a different context are rejected during reference
    /// validation.
    context_id: String,
}

impl ValueFactory {
    pub fn new(namespaces: Arc<NamespaceRegistry>, context_id: impl Into<String>) -> Self {
        Self {
            converters: ConverterSet::new(Arc::clone(&namespaces)),
            namespaces,
            context_id: context_id.into(),
        }
    }

    /// Factory over a fresh registry with only the built-in bindings.
    pub fn with_default_namespaces(context_id: impl Into<String>) -> Self {
        Self::new(Arc::new(NamespaceRegistry::new()), context_id)
    }

    pub fn context_id(&self) -> &str {
        &self.context_id
    }

    pub fn namespaces(&self) -> &Arc<NamespaceRegistry> {
        &self.namespaces
    }

    // ========================================================================
    // Generic conversion
    // ========================================================================

    /// Convert one input to the given tag.
    ///
    /// `None` in, `Ok(None)` out — an absent input means "no value" and is
    /// not a conversion failure. A converter failure becomes
    /// [`Error::ValueFormat`] naming the tag and the offending input.
    pub fn create_value(&self, raw: Option<Raw>, tag: TypeTag) -> Result<Option<TypedValue>> {
        match raw {
            None => Ok(None),
            Some(raw) => Ok(Some(self.convert(&raw, tag)?)),
        }
    }

    /// Batch conversion, preserving input order.
    ///
    /// Empty input yields an empty vector. The first failing element aborts
    /// the whole batch — no partial results.
    pub fn create_values(&self, raws: Vec<Raw>, tag: TypeTag) -> Result<Vec<TypedValue>> {
        raws.iter().map(|raw| self.convert(raw, tag)).collect()
    }

    fn convert(&self, raw: &Raw, tag: TypeTag) -> Result<TypedValue> {
        trace!(%tag, input = %raw.type_name(), "converting value");
        let payload = self.converters.converter_for(tag).create(raw).map_err(|e| {
            debug!(%tag, input = %e.input, reason = %e.reason, "value format failure");
            Error::ValueFormat { tag, input: e.input, reason: e.reason }
        })?;
        Ok(TypedValue::new(tag, payload))
    }

    // ========================================================================
    // Fixed-tag conveniences (skip dispatch)
    // ========================================================================

    pub fn create_boolean(&self, value: bool) -> TypedValue {
        TypedValue::new(TypeTag::Boolean, Payload::Boolean(value))
    }

    pub fn create_long(&self, value: i64) -> TypedValue {
        TypedValue::new(TypeTag::Long, Payload::Long(value))
    }

    pub fn create_double(&self, value: f64) -> TypedValue {
        TypedValue::new(TypeTag::Double, Payload::Double(value))
    }

    pub fn create_string(&self, value: impl Into<String>) -> TypedValue {
        TypedValue::new(TypeTag::String, Payload::String(value.into()))
    }

    pub fn create_decimal(&self, value: Decimal) -> TypedValue {
        TypedValue::new(TypeTag::Decimal, Payload::Decimal(value))
    }

    pub fn create_date(&self, value: DateTime<Utc>) -> TypedValue {
        TypedValue::new(TypeTag::Date, Payload::Date(value))
    }

    pub fn create_uri(&self, value: Url) -> TypedValue {
        TypedValue::new(TypeTag::Uri, Payload::Uri(value))
    }

    // ========================================================================
    // Binary
    // ========================================================================

    /// Wrap bytes as a binary payload (no media type).
    pub fn create_binary(&self, data: impl Into<bytes::Bytes>) -> Binary {
        Binary::new(data)
    }

    /// Drain a caller-supplied stream into a binary payload.
    ///
    /// The stream is consumed fully and synchronously. `hint` names the
    /// media type; when absent the content is sniffed.
    pub fn create_binary_from_stream(
        &self,
        reader: impl Read,
        hint: Option<&str>,
    ) -> Result<Binary> {
        read_binary(reader, hint)
    }

    /// Wrap an existing binary payload as a binary-tagged value.
    pub fn create_binary_value(&self, binary: Binary) -> TypedValue {
        TypedValue::new(TypeTag::Binary, Payload::Binary(binary))
    }

    // ========================================================================
    // Names
    // ========================================================================

    /// Resolve a bare local name and return its canonical string form.
    pub fn create_name(&self, local: &str) -> Result<String> {
        Ok(self.namespaces.resolve_name(None, local)?.to_expanded())
    }

    /// Resolve a namespaced local name and return its canonical string form.
    pub fn create_name_in(&self, namespace_uri: &str, local: &str) -> Result<String> {
        Ok(self.namespaces.resolve_name(Some(namespace_uri), local)?.to_expanded())
    }

    // ========================================================================
    // References
    // ========================================================================

    /// Strong reference to a node. `None` clears the reference.
    pub fn create_reference(&self, node: Option<&dyn NodeHandle>) -> Result<TypedValue> {
        self.node_reference(node, ReferenceFamily::Strong)
    }

    /// Weak reference to a node. `None` clears the reference.
    pub fn create_weak_reference(&self, node: Option<&dyn NodeHandle>) -> Result<TypedValue> {
        self.node_reference(node, ReferenceFamily::Weak)
    }

    /// Simple reference to a node. `None` clears the reference.
    pub fn create_simple_reference(&self, node: Option<&dyn NodeHandle>) -> Result<TypedValue> {
        self.node_reference(node, ReferenceFamily::Simple)
    }

    /// Wrap an already-validated identifier; the tag follows the
    /// identifier's own weak flag. No node validation happens here — it
    /// happened when the identifier was minted.
    pub fn create_from_reference(&self, reference: ReferenceIdentifier) -> TypedValue {
        let tag = if reference.is_weak() { TypeTag::WeakReference } else { TypeTag::Reference };
        TypedValue::new(tag, Payload::Reference(reference))
    }

    fn node_reference(
        &self,
        node: Option<&dyn NodeHandle>,
        family: ReferenceFamily,
    ) -> Result<TypedValue> {
        let tag = family.tag();
        let Some(node) = node else {
            return Ok(TypedValue::cleared_reference(tag));
        };
        let referent = self.validate_referenceable(node)?;
        let reference =
            self.converters.reference_converter(family).mint(referent.key(), referent.is_foreign());
        Ok(TypedValue::new(tag, Payload::Reference(reference)))
    }

    /// The validation protocol, in fixed order: referenceability first, then
    /// handle kind, then ownership. Error messages deterministically reflect
    /// the first violated precondition.
    fn validate_referenceable<'a>(&self, node: &'a dyn NodeHandle) -> Result<&'a dyn Referent> {
        let capability = self.namespaces.referenceable_capability();
        if !node.has_capability(&capability) {
            debug!(path = %node.path(), "node is not referenceable");
            return Err(Error::NotReferenceable(node.path()));
        }
        let Some(referent) = node.referent() else {
            debug!(path = %node.path(), "node handle kind not supported");
            return Err(Error::InvalidNodeKind(node.path()));
        };
        if referent.context_id() != self.context_id {
            debug!(
                path = %node.path(),
                node_context = %referent.context_id(),
                factory_context = %self.context_id,
                "node belongs to a different session"
            );
            return Err(Error::CrossSession { path: node.path() });
        }
        Ok(referent)
    }
}
