//! Binary payloads.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An immutable binary payload, optionally tagged with a media type.
///
/// The media type comes from a caller-supplied hint or from content sniffing
/// at creation time; it is advisory and never re-derived after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binary {
    data: Bytes,
    media_type: Option<String>,
}

impl Binary {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into(), media_type: None }
    }

    pub fn with_media_type(data: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self { data: data.into(), media_type: Some(media_type.into()) }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

impl std::fmt::Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.media_type {
            Some(mt) => write!(f, "<binary[{}] {mt}>", self.data.len()),
            None => write!(f, "<binary[{}]>", self.data.len()),
        }
    }
}

impl From<Vec<u8>> for Binary {
    fn from(v: Vec<u8>) -> Self {
        Binary::new(v)
    }
}

impl From<Bytes> for Binary {
    fn from(b: Bytes) -> Self {
        Binary::new(b)
    }
}
