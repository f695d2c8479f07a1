//! Namespace-qualified names.

use serde::{Deserialize, Serialize};

/// A resolved, fully-qualified name.
///
/// Canonical string form is the expanded `{namespace-uri}local` notation, or
/// the bare local name when no namespace applies. Produced only by the
/// registry's name resolver, which validates the local part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    namespace_uri: Option<String>,
    local: String,
}

impl QualifiedName {
    pub(crate) fn new(namespace_uri: Option<String>, local: String) -> Self {
        Self { namespace_uri, local }
    }

    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace_uri.as_deref()
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    /// Expanded string form: `{uri}local`, or `local` without a namespace.
    pub fn to_expanded(&self) -> String {
        match &self.namespace_uri {
            Some(uri) => format!("{{{uri}}}{}", self.local),
            None => self.local.clone(),
        }
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace_uri {
            Some(uri) => write!(f, "{{{uri}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_form() {
        let qn = QualifiedName::new(Some("urn:example".into()), "title".into());
        assert_eq!(qn.to_expanded(), "{urn:example}title");

        let bare = QualifiedName::new(None, "title".into());
        assert_eq!(bare.to_expanded(), "title");
    }
}
