//! Namespace registry and name resolution.
//!
//! Names in the property system are namespace-qualified. The registry maps
//! short prefixes to namespace URIs and resolves (uri, local) pairs into
//! [`QualifiedName`]s. It also phrases the well-known capability names the
//! reference resolver checks against.
//!
//! The registry is read-mostly: built-in bindings are installed at
//! construction, embedders may add their own, and conversion paths only read.

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::QualifiedName;
use crate::{Error, Result};

/// Characters that may not appear in a local name.
const ILLEGAL_NAME_CHARS: &[char] = &['/', ':', '[', ']', '|', '*'];

// ============================================================================
// Well-known namespaces
// ============================================================================

/// Built-in namespace bindings and capability names.
pub mod well_known {
    /// Namespace for node capability markers (mixins).
    pub const MIX_URI: &str = "urn:propval:mix";
    pub const MIX_PREFIX: &str = "mix";

    /// Namespace for built-in property and node-type names.
    pub const SYS_URI: &str = "urn:propval:sys";
    pub const SYS_PREFIX: &str = "sys";

    /// Local name of the capability marking a node as a valid reference
    /// target.
    pub const REFERENCEABLE: &str = "referenceable";
}

// ============================================================================
// NamespaceRegistry
// ============================================================================

/// Prefix ↔ namespace-URI registry plus name resolver.
pub struct NamespaceRegistry {
    by_prefix: RwLock<HashMap<String, String>>,
}

impl NamespaceRegistry {
    /// Registry with the built-in bindings installed.
    pub fn new() -> Self {
        let mut by_prefix = HashMap::new();
        by_prefix.insert(well_known::MIX_PREFIX.to_owned(), well_known::MIX_URI.to_owned());
        by_prefix.insert(well_known::SYS_PREFIX.to_owned(), well_known::SYS_URI.to_owned());
        Self { by_prefix: RwLock::new(by_prefix) }
    }

    /// Bind a prefix to a namespace URI, replacing any previous binding.
    pub fn register(&self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.by_prefix.write().insert(prefix.into(), uri.into());
    }

    pub fn uri_for_prefix(&self, prefix: &str) -> Option<String> {
        self.by_prefix.read().get(prefix).cloned()
    }

    /// The qualified, expanded form of the referenceable capability, used by
    /// the reference resolver to phrase its first validation check.
    pub fn referenceable_capability(&self) -> String {
        QualifiedName::new(
            Some(well_known::MIX_URI.to_owned()),
            well_known::REFERENCEABLE.to_owned(),
        )
        .to_expanded()
    }

    // ========================================================================
    // Name resolution
    // ========================================================================

    /// Resolve a (namespace URI, local name) pair into a [`QualifiedName`].
    ///
    /// The local name must be non-empty and free of the reserved characters
    /// `/ : [ ] | *`. No caching: every call re-validates.
    pub fn resolve_name(&self, namespace_uri: Option<&str>, local: &str) -> Result<QualifiedName> {
        Self::check_local(local)?;
        Ok(QualifiedName::new(namespace_uri.map(str::to_owned), local.to_owned()))
    }

    /// Resolve a possibly-prefixed name (`prefix:local` or bare `local`).
    ///
    /// An unbound prefix is an [`Error::InvalidName`].
    pub fn resolve_prefixed(&self, name: &str) -> Result<QualifiedName> {
        match name.split_once(':') {
            Some((prefix, local)) => {
                let uri = self.uri_for_prefix(prefix).ok_or_else(|| {
                    Error::InvalidName(format!("unbound namespace prefix '{prefix}' in '{name}'"))
                })?;
                Self::check_local(local)?;
                Ok(QualifiedName::new(Some(uri), local.to_owned()))
            }
            None => self.resolve_name(None, name),
        }
    }

    fn check_local(local: &str) -> Result<()> {
        if local.is_empty() {
            return Err(Error::InvalidName("local name is empty".into()));
        }
        if let Some(c) = local.chars().find(|c| ILLEGAL_NAME_CHARS.contains(c)) {
            return Err(Error::InvalidName(format!(
                "local name '{local}' contains reserved character '{c}'"
            )));
        }
        Ok(())
    }
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
