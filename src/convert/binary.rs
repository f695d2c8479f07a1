//! Binary conversion and stream intake.
//!
//! The converter itself accepts anything — the canonical string form's UTF-8
//! bytes, or byte input as-is. Stream intake lives here too: the caller's
//! reader is drained fully and synchronously, with no buffering or retry on
//! this side. Bounding binary size or time is the stream supplier's job.

use std::io::Read;

use tracing::trace;

use super::{Converter, ConvertResult};
use crate::Result;
use crate::model::{Binary, Payload, Raw};

pub struct BinaryConverter;

impl Converter for BinaryConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        let binary = match raw {
            Raw::Bytes(b) => Binary::new(b.clone()),
            other => Binary::new(other.to_string().into_bytes()),
        };
        Ok(Payload::Binary(binary))
    }
}

/// Drain a reader into a [`Binary`].
///
/// `hint` names the media type when the caller knows it; when absent the
/// content is sniffed. Sniffing is best-effort — an unrecognized payload
/// simply gets no media type.
pub fn read_binary(mut reader: impl Read, hint: Option<&str>) -> Result<Binary> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    trace!(len = data.len(), hint, "binary stream drained");

    let media_type = match hint {
        Some(h) => Some(h.to_owned()),
        None => sniff_media_type(&data).map(str::to_owned),
    };
    Ok(match media_type {
        Some(mt) => Binary::with_media_type(data, mt),
        None => Binary::new(data),
    })
}

/// Recognize a handful of common formats by magic bytes, falling back to
/// `text/plain` for valid UTF-8.
fn sniff_media_type(data: &[u8]) -> Option<&'static str> {
    match data {
        [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, ..] => Some("image/png"),
        [0xff, 0xd8, 0xff, ..] => Some("image/jpeg"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'%', b'P', b'D', b'F', b'-', ..] => Some("application/pdf"),
        [b'P', b'K', 0x03, 0x04, ..] => Some("application/zip"),
        [0x1f, 0x8b, ..] => Some("application/gzip"),
        _ if !data.is_empty() && std::str::from_utf8(data).is_ok() => Some("text/plain"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_accepts_anything() {
        let c = BinaryConverter;
        match c.create(&Raw::from("hello")).unwrap() {
            Payload::Binary(b) => assert_eq!(b.data().as_ref(), b"hello"),
            other => panic!("expected BINARY payload, got {other:?}"),
        }
        match c.create(&Raw::from(42i64)).unwrap() {
            Payload::Binary(b) => assert_eq!(b.data().as_ref(), b"42"),
            other => panic!("expected BINARY payload, got {other:?}"),
        }
    }

    #[test]
    fn test_read_binary_hint_wins_over_sniffing() {
        let data: &[u8] = b"%PDF-1.7 ...";
        let b = read_binary(data, Some("application/x-custom")).unwrap();
        assert_eq!(b.media_type(), Some("application/x-custom"));
    }

    #[test]
    fn test_read_binary_sniffs_when_hint_absent() {
        let png: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0];
        assert_eq!(read_binary(png, None).unwrap().media_type(), Some("image/png"));

        let text: &[u8] = b"plain old text";
        assert_eq!(read_binary(text, None).unwrap().media_type(), Some("text/plain"));

        let opaque: &[u8] = &[0x00, 0xff, 0x13, 0x37];
        assert_eq!(read_binary(opaque, None).unwrap().media_type(), None);
    }

    #[test]
    fn test_read_binary_drains_fully() {
        let data = vec![7u8; 70_000];
        let b = read_binary(data.as_slice(), None).unwrap();
        assert_eq!(b.len(), 70_000);
    }
}
