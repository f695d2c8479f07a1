//! Name and path converters.
//!
//! Both delegate to the namespace registry's resolver; neither caches.
//! A path is a `/`-separated sequence of name segments. Segments resolve
//! individually (prefixes expand through the registry) and `.` / `..`
//! segments pass through untouched — path normalization belongs to the
//! store above, not the value layer.

use std::sync::Arc;

use super::{Converter, ConvertResult, FormatError};
use crate::model::{Payload, Raw};
use crate::namespace::NamespaceRegistry;

// ============================================================================
// Name
// ============================================================================

pub struct NameConverter {
    registry: Arc<NamespaceRegistry>,
}

impl NameConverter {
    pub fn new(registry: Arc<NamespaceRegistry>) -> Self {
        Self { registry }
    }
}

impl Converter for NameConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Text(s) => self
                .registry
                .resolve_prefixed(s.trim())
                .map(Payload::Name)
                .map_err(|e| FormatError::new(raw, e.to_string())),
            other => Err(FormatError::wrong_kind(other, "NAME")),
        }
    }
}

// ============================================================================
// Path
// ============================================================================

pub struct PathConverter {
    registry: Arc<NamespaceRegistry>,
}

impl PathConverter {
    pub fn new(registry: Arc<NamespaceRegistry>) -> Self {
        Self { registry }
    }

    fn convert_text(&self, raw: &Raw, text: &str) -> ConvertResult {
        let text = text.trim();
        if text.is_empty() {
            return Err(FormatError::new(raw, "path is empty"));
        }
        if text == "/" {
            return Ok(Payload::Path("/".to_owned()));
        }

        let absolute = text.starts_with('/');
        let trimmed = text.trim_matches('/');

        let mut segments = Vec::new();
        for segment in trimmed.split('/') {
            if segment.is_empty() {
                return Err(FormatError::new(raw, "path contains an empty segment"));
            }
            if segment == "." || segment == ".." {
                segments.push(segment.to_owned());
                continue;
            }
            // A segment may carry a same-name-sibling index: `name[3]`.
            let (name_part, index) = match segment.strip_suffix(']').and_then(|s| s.split_once('['))
            {
                Some((name, idx)) if idx.chars().all(|c| c.is_ascii_digit()) && !idx.is_empty() => {
                    (name, Some(idx))
                }
                _ => (segment, None),
            };
            self.registry
                .resolve_prefixed(name_part)
                .map_err(|e| FormatError::new(raw, format!("segment '{segment}': {e}")))?;
            match index {
                Some(idx) => segments.push(format!("{name_part}[{idx}]")),
                None => segments.push(name_part.to_owned()),
            }
        }

        let joined = segments.join("/");
        let path = if absolute { format!("/{joined}") } else { joined };
        Ok(Payload::Path(path))
    }
}

impl Converter for PathConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Text(s) => self.convert_text(raw, s),
            other => Err(FormatError::wrong_kind(other, "PATH")),
        }
    }
}
