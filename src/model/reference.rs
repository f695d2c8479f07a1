//! Opaque, process-portable node references.

use serde::{Deserialize, Serialize};

use super::TypeTag;

/// Opaque node key.
///
/// Minted by whatever owns the node; this crate never inspects the contents,
/// it only carries the key across process boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey(pub String);

impl NodeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey(s.to_owned())
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        NodeKey(s)
    }
}

/// The three reference strengths, one per reference tag.
///
/// Strong references participate in referential integrity, weak references
/// do not, and simple references carry no back-pointer bookkeeping at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceFamily {
    Strong,
    Weak,
    Simple,
}

impl ReferenceFamily {
    pub fn tag(self) -> TypeTag {
        match self {
            ReferenceFamily::Strong => TypeTag::Reference,
            ReferenceFamily::Weak => TypeTag::WeakReference,
            ReferenceFamily::Simple => TypeTag::SimpleReference,
        }
    }
}

/// A validated reference to a node: its opaque key, the reference strength,
/// and whether the target lives outside the current persistent unit of work.
///
/// Built only from a node handle that already passed the validation protocol
/// (or deserialized from storage, where validation happened at write time).
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceIdentifier {
    key: NodeKey,
    family: ReferenceFamily,
    foreign: bool,
}

impl ReferenceIdentifier {
    pub fn new(key: NodeKey, family: ReferenceFamily, foreign: bool) -> Self {
        Self { key, family, foreign }
    }

    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    pub fn family(&self) -> ReferenceFamily {
        self.family
    }

    pub fn is_weak(&self) -> bool {
        self.family == ReferenceFamily::Weak
    }

    pub fn is_simple(&self) -> bool {
        self.family == ReferenceFamily::Simple
    }

    /// True if the referenced node lives outside the owning unit of work.
    pub fn is_foreign(&self) -> bool {
        self.foreign
    }

    /// Same key and foreign flag, different strength.
    pub fn with_family(&self, family: ReferenceFamily) -> Self {
        Self { key: self.key.clone(), family, foreign: self.foreign }
    }
}

impl std::fmt::Display for ReferenceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key.as_str())
    }
}
