//! # Node Handle Contract
//!
//! This is the contract between the value layer and whatever owns live
//! content nodes. The value layer never manages node lifecycle — it borrows a
//! handle for the duration of one validation call, inspects it, and lets go.
//!
//! Two capability sets:
//!
//! | Trait | Capability |
//! |-------|------------|
//! | `NodeHandle` | any node: capability query + path for diagnostics |
//! | `Referent` | nodes that can be turned into portable references |
//!
//! A handle that cannot expose the `Referent` set (an arbitrary external
//! node implementation) is rejected during reference validation with an
//! illegal-argument error, not a data error. Test fakes substitute freely by
//! implementing both traits — no concrete-type downcast anywhere.

pub mod memory;

pub use memory::MemoryNode;

use crate::model::NodeKey;

/// A live content node, owned and lifetime-managed outside this crate.
pub trait NodeHandle: Send + Sync {
    /// Does this node carry the named capability marker (expanded
    /// `{uri}local` form)?
    fn has_capability(&self, name: &str) -> bool;

    /// The node's path, for error messages only.
    fn path(&self) -> String;

    /// The referent capability set, if this handle can produce portable
    /// references. `None` marks a handle kind the value layer does not
    /// understand.
    fn referent(&self) -> Option<&dyn Referent>;
}

/// The capability set needed to mint a [`crate::ReferenceIdentifier`].
pub trait Referent {
    /// Opaque, process-portable key of this node.
    fn key(&self) -> NodeKey;

    /// True if the node lives outside the current persistent unit of work.
    fn is_foreign(&self) -> bool;

    /// Identifier of the execution context that owns this node.
    fn context_id(&self) -> &str;
}
