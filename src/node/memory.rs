//! In-memory node handle.
//!
//! This is the reference implementation of `NodeHandle` + `Referent`.
//! It holds everything by value and does no I/O.
//!
//! Use it for:
//! - Testing reference resolution end to end without a content store
//! - Embedding the value layer in applications whose nodes live in memory

use smallvec::SmallVec;

use super::{NodeHandle, Referent};
use crate::model::NodeKey;

/// A self-contained node handle.
///
/// Builder-style constructors mirror how stores assemble nodes: start from
/// `new(key, context_id)`, then layer on capabilities, a path, and the
/// foreign flag.
#[derive(Debug, Clone)]
pub struct MemoryNode {
    key: NodeKey,
    context_id: String,
    path: String,
    // Nodes rarely carry more than a handful of capability markers.
    capabilities: SmallVec<[String; 4]>,
    foreign: bool,
}

impl MemoryNode {
    pub fn new(key: impl Into<NodeKey>, context_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            context_id: context_id.into(),
            path: "/".to_owned(),
            capabilities: SmallVec::new(),
            foreign: false,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Add a capability marker in expanded `{uri}local` form.
    pub fn with_capability(mut self, name: impl Into<String>) -> Self {
        self.capabilities.push(name.into());
        self
    }

    pub fn foreign(mut self, foreign: bool) -> Self {
        self.foreign = foreign;
        self
    }
}

impl NodeHandle for MemoryNode {
    fn has_capability(&self, name: &str) -> bool {
        self.capabilities.iter().any(|c| c == name)
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn referent(&self) -> Option<&dyn Referent> {
        Some(self)
    }
}

impl Referent for MemoryNode {
    fn key(&self) -> NodeKey {
        self.key.clone()
    }

    fn is_foreign(&self) -> bool {
        self.foreign
    }

    fn context_id(&self) -> &str {
        &self.context_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let node = MemoryNode::new("key-1", "ctx-a")
            .with_path("/docs/readme")
            .with_capability("{urn:propval:mix}referenceable")
            .foreign(true);

        assert!(node.has_capability("{urn:propval:mix}referenceable"));
        assert!(!node.has_capability("{urn:propval:mix}lockable"));
        assert_eq!(node.path(), "/docs/readme");

        let referent = node.referent().unwrap();
        assert_eq!(referent.key().as_str(), "key-1");
        assert_eq!(referent.context_id(), "ctx-a");
        assert!(referent.is_foreign());
    }
}
