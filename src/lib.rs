//! # propval — Typed Property Values for Content Stores
//!
//! A value-conversion and reference-resolution layer for hierarchical
//! content stores: untyped inputs go in, immutable strongly-typed values
//! come out, and live node handles become opaque, process-portable
//! references.
//!
//! ## Design Principles
//!
//! 1. **Exhaustive dispatch**: every [`TypeTag`] maps to exactly one
//!    converter through a closed match — no runtime fallback arm
//! 2. **Clean DTOs**: `TypedValue`, `ReferenceIdentifier`, `QualifiedName`
//!    cross all boundaries; the model layer is pure data
//! 3. **Capability-based node contract**: reference validation checks what a
//!    handle can do, never what concrete type it is
//! 4. **Stateless facade**: `ValueFactory` only reads from its
//!    collaborators; every conversion call is independently reentrant
//!
//! ## Quick Start
//!
//! ```rust
//! use propval::{Raw, TypeTag, ValueFactory};
//!
//! # fn example() -> propval::Result<()> {
//! let factory = ValueFactory::with_default_namespaces("session-1");
//!
//! // Dispatch on a type tag...
//! let value = factory.create_value(Some(Raw::from("42")), TypeTag::Long)?;
//! assert_eq!(value.unwrap().as_long(), Some(42));
//!
//! // ...or construct with a fixed tag directly.
//! let flag = factory.create_boolean(true);
//! assert_eq!(flag.tag(), TypeTag::Boolean);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Node References
//!
//! Reference creation validates the handle in a fixed order — capability,
//! handle kind, session ownership — before minting an identifier. See
//! [`node::NodeHandle`] for the contract and [`node::MemoryNode`] for the
//! in-memory reference implementation.

// ============================================================================
// Modules
// ============================================================================

pub mod convert;
pub mod factory;
pub mod model;
pub mod namespace;
pub mod node;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    ALL_TAGS, Binary, NodeKey, Payload, QualifiedName, Raw, ReferenceFamily, ReferenceIdentifier,
    TypeTag, TypedValue,
};

// ============================================================================
// Re-exports: Facade & collaborators
// ============================================================================

pub use factory::ValueFactory;
pub use namespace::{NamespaceRegistry, well_known};
pub use node::{MemoryNode, NodeHandle, Referent};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be interpreted as the requested tag. Recoverable:
    /// the caller chose the wrong tag or passed malformed data.
    #[error("cannot convert '{input}' to {tag}: {reason}")]
    ValueFormat {
        tag: TypeTag,
        input: String,
        reason: String,
    },

    /// The node lacks the referenceable capability.
    #[error("node {0} is not referenceable")]
    NotReferenceable(String),

    /// The node belongs to a different execution context. Handles must not
    /// cross session boundaries.
    #[error("node {path} is not in the same session")]
    CrossSession { path: String },

    /// The node handle is not a supported kind — an integration error, not a
    /// data error.
    #[error("invalid node handle kind for node {0}")]
    InvalidNodeKind(String),

    /// A type-tag code outside the supported set. Internal-consistency
    /// failure: never silently defaulted.
    #[error("unsupported type tag code {0}")]
    UnsupportedTypeTag(i32),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
