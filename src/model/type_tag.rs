//! Property type tags.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Storage type of a property value.
///
/// The set is closed: every tag maps to exactly one converter, and the
/// mapping is an exhaustive match so the compiler rejects a missing arm.
/// Tags arriving as raw integers (stored data, wire frames) must go through
/// [`TypeTag::from_code`], which rejects unknown codes instead of defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Undefined,
    String,
    Binary,
    Long,
    Double,
    Date,
    Boolean,
    Name,
    Path,
    Reference,
    WeakReference,
    Uri,
    Decimal,
    SimpleReference,
}

/// Every supported tag, in code order. Handy for exhaustive iteration in
/// tests and schema introspection.
pub const ALL_TAGS: [TypeTag; 14] = [
    TypeTag::Undefined,
    TypeTag::String,
    TypeTag::Binary,
    TypeTag::Long,
    TypeTag::Double,
    TypeTag::Date,
    TypeTag::Boolean,
    TypeTag::Name,
    TypeTag::Path,
    TypeTag::Reference,
    TypeTag::WeakReference,
    TypeTag::Uri,
    TypeTag::Decimal,
    TypeTag::SimpleReference,
];

impl TypeTag {
    /// Stable numeric code for storage and wire interop.
    pub fn code(self) -> i32 {
        match self {
            TypeTag::Undefined => 0,
            TypeTag::String => 1,
            TypeTag::Binary => 2,
            TypeTag::Long => 3,
            TypeTag::Double => 4,
            TypeTag::Date => 5,
            TypeTag::Boolean => 6,
            TypeTag::Name => 7,
            TypeTag::Path => 8,
            TypeTag::Reference => 9,
            TypeTag::WeakReference => 10,
            TypeTag::Uri => 11,
            TypeTag::Decimal => 12,
            TypeTag::SimpleReference => 13,
        }
    }

    /// Parse an externally-stored numeric code.
    ///
    /// An unknown code is an internal-consistency failure
    /// ([`Error::UnsupportedTypeTag`]), never a silent default.
    pub fn from_code(code: i32) -> Result<Self> {
        Ok(match code {
            0 => TypeTag::Undefined,
            1 => TypeTag::String,
            2 => TypeTag::Binary,
            3 => TypeTag::Long,
            4 => TypeTag::Double,
            5 => TypeTag::Date,
            6 => TypeTag::Boolean,
            7 => TypeTag::Name,
            8 => TypeTag::Path,
            9 => TypeTag::Reference,
            10 => TypeTag::WeakReference,
            11 => TypeTag::Uri,
            12 => TypeTag::Decimal,
            13 => TypeTag::SimpleReference,
            other => return Err(Error::UnsupportedTypeTag(other)),
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Undefined => "UNDEFINED",
            TypeTag::String => "STRING",
            TypeTag::Binary => "BINARY",
            TypeTag::Long => "LONG",
            TypeTag::Double => "DOUBLE",
            TypeTag::Date => "DATE",
            TypeTag::Boolean => "BOOLEAN",
            TypeTag::Name => "NAME",
            TypeTag::Path => "PATH",
            TypeTag::Reference => "REFERENCE",
            TypeTag::WeakReference => "WEAK_REFERENCE",
            TypeTag::Uri => "URI",
            TypeTag::Decimal => "DECIMAL",
            TypeTag::SimpleReference => "SIMPLE_REFERENCE",
        }
    }

    /// True for the three reference tags. Only these may carry an absent
    /// payload ("clear this reference").
    pub fn is_reference_family(self) -> bool {
        matches!(
            self,
            TypeTag::Reference | TypeTag::WeakReference | TypeTag::SimpleReference
        )
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
