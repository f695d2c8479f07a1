//! Untyped inputs and strongly-typed value objects.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Binary, QualifiedName, ReferenceIdentifier, TypeTag};

// ============================================================================
// Raw — the untyped input side
// ============================================================================

/// An untyped input handed to the conversion facade.
///
/// Covers everything a caller can throw at a property: primitives, text,
/// temporal and decimal values, URIs, byte blobs, and already-validated
/// node references. Conversion borrows a `Raw`; it is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Raw {
    Bool(bool),
    Long(i64),
    Double(f64),
    Decimal(Decimal),
    Text(String),
    Date(DateTime<Utc>),
    Uri(Url),
    Bytes(bytes::Bytes),
    Reference(ReferenceIdentifier),
}

impl Raw {
    pub fn type_name(&self) -> &'static str {
        match self {
            Raw::Bool(_) => "BOOL",
            Raw::Long(_) => "LONG",
            Raw::Double(_) => "DOUBLE",
            Raw::Decimal(_) => "DECIMAL",
            Raw::Text(_) => "TEXT",
            Raw::Date(_) => "DATE",
            Raw::Uri(_) => "URI",
            Raw::Bytes(_) => "BYTES",
            Raw::Reference(_) => "REFERENCE",
        }
    }
}

/// Canonical string rendering, used for string conversion and error
/// messages. Bytes render as a length placeholder, not their contents.
impl std::fmt::Display for Raw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Raw::Bool(b) => write!(f, "{b}"),
            Raw::Long(i) => write!(f, "{i}"),
            Raw::Double(v) => write!(f, "{v}"),
            Raw::Decimal(d) => write!(f, "{d}"),
            Raw::Text(s) => f.write_str(s),
            Raw::Date(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Raw::Uri(u) => f.write_str(u.as_str()),
            Raw::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            Raw::Reference(r) => write!(f, "{r}"),
        }
    }
}

impl From<bool> for Raw {
    fn from(v: bool) -> Self {
        Raw::Bool(v)
    }
}
impl From<i32> for Raw {
    fn from(v: i32) -> Self {
        Raw::Long(v as i64)
    }
}
impl From<i64> for Raw {
    fn from(v: i64) -> Self {
        Raw::Long(v)
    }
}
impl From<f64> for Raw {
    fn from(v: f64) -> Self {
        Raw::Double(v)
    }
}
impl From<Decimal> for Raw {
    fn from(v: Decimal) -> Self {
        Raw::Decimal(v)
    }
}
impl From<&str> for Raw {
    fn from(v: &str) -> Self {
        Raw::Text(v.to_owned())
    }
}
impl From<String> for Raw {
    fn from(v: String) -> Self {
        Raw::Text(v)
    }
}
impl From<DateTime<Utc>> for Raw {
    fn from(v: DateTime<Utc>) -> Self {
        Raw::Date(v)
    }
}
impl From<Url> for Raw {
    fn from(v: Url) -> Self {
        Raw::Uri(v)
    }
}
impl From<Vec<u8>> for Raw {
    fn from(v: Vec<u8>) -> Self {
        Raw::Bytes(v.into())
    }
}
impl From<bytes::Bytes> for Raw {
    fn from(v: bytes::Bytes) -> Self {
        Raw::Bytes(v)
    }
}
impl From<ReferenceIdentifier> for Raw {
    fn from(v: ReferenceIdentifier) -> Self {
        Raw::Reference(v)
    }
}

// ============================================================================
// Payload — a converter's typed output
// ============================================================================

/// The typed payload carried by a [`TypedValue`].
///
/// One variant per payload family. Reference-family values may instead carry
/// an *absent* payload at the `TypedValue` level ("clear this reference");
/// there is deliberately no `Null` variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Payload {
    Boolean(bool),
    Long(i64),
    Double(f64),
    Decimal(Decimal),
    String(String),
    Name(QualifiedName),
    Path(String),
    Date(DateTime<Utc>),
    Uri(Url),
    Binary(Binary),
    Reference(ReferenceIdentifier),
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Boolean(b) => write!(f, "{b}"),
            Payload::Long(i) => write!(f, "{i}"),
            Payload::Double(v) => write!(f, "{v}"),
            Payload::Decimal(d) => write!(f, "{d}"),
            Payload::String(s) => f.write_str(s),
            Payload::Name(n) => write!(f, "{n}"),
            Payload::Path(p) => f.write_str(p),
            Payload::Date(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Payload::Uri(u) => f.write_str(u.as_str()),
            Payload::Binary(b) => write!(f, "{b}"),
            Payload::Reference(r) => write!(f, "{r}"),
        }
    }
}

// ============================================================================
// TypedValue — the immutable (tag, payload) pair
// ============================================================================

/// An immutable, strongly-typed value: a [`TypeTag`] plus its payload.
///
/// Constructed once by the conversion facade and never mutated. The payload
/// is absent only for reference-family tags, where it means "no reference";
/// construction paths all live inside this crate, so the invariant is
/// enforced with a debug assertion rather than a runtime error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    tag: TypeTag,
    payload: Option<Payload>,
}

impl TypedValue {
    pub(crate) fn new(tag: TypeTag, payload: Payload) -> Self {
        Self { tag, payload: Some(payload) }
    }

    /// A reference-family value with no target ("clear this reference").
    pub(crate) fn cleared_reference(tag: TypeTag) -> Self {
        debug_assert!(tag.is_reference_family());
        Self { tag, payload: None }
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// True for a reference-family value carrying no target.
    pub fn is_cleared(&self) -> bool {
        self.payload.is_none()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Some(Payload::Boolean(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self.payload {
            Some(Payload::Long(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self.payload {
            Some(Payload::Double(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self.payload {
            Some(Payload::Decimal(d)) => Some(d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::String(s)) => Some(s),
            Some(Payload::Path(p)) => Some(p),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&QualifiedName> {
        match &self.payload {
            Some(Payload::Name(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self.payload {
            Some(Payload::Date(dt)) => Some(dt),
            _ => None,
        }
    }

    pub fn as_uri(&self) -> Option<&Url> {
        match &self.payload {
            Some(Payload::Uri(u)) => Some(u),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&Binary> {
        match &self.payload {
            Some(Payload::Binary(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&ReferenceIdentifier> {
        match &self.payload {
            Some(Payload::Reference(r)) => Some(r),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.payload {
            Some(p) => write!(f, "{}({p})", self.tag),
            None => write!(f, "{}(<cleared>)", self.tag),
        }
    }
}
