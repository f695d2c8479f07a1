//! Reference converters, one per reference family.
//!
//! Two entry points: the generic [`Converter`] path (dispatch on the
//! reference tags) and [`ReferenceConverter::mint`], which the reference
//! resolver calls with a key and foreign flag it obtained from a node that
//! already passed validation.

use super::{Converter, ConvertResult, FormatError};
use crate::model::{NodeKey, Payload, Raw, ReferenceFamily, ReferenceIdentifier};

pub struct ReferenceConverter {
    family: ReferenceFamily,
}

impl ReferenceConverter {
    pub fn new(family: ReferenceFamily) -> Self {
        Self { family }
    }

    pub fn family(&self) -> ReferenceFamily {
        self.family
    }

    /// Build an identifier from a validated node's key and foreign flag.
    pub fn mint(&self, key: NodeKey, foreign: bool) -> ReferenceIdentifier {
        ReferenceIdentifier::new(key, self.family, foreign)
    }
}

impl Converter for ReferenceConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            // An existing identifier re-tags to the requested family; key
            // and foreign flag carry over.
            Raw::Reference(r) => Ok(Payload::Reference(r.with_family(self.family))),
            // Text is taken as a bare node key; such references are local.
            Raw::Text(s) if !s.trim().is_empty() => {
                Ok(Payload::Reference(self.mint(s.trim().into(), false)))
            }
            Raw::Text(_) => Err(FormatError::new(raw, "node key is empty")),
            other => Err(FormatError::wrong_kind(other, "REFERENCE")),
        }
    }
}
