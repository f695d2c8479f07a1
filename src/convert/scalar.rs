//! Scalar converters: boolean, long, double, decimal, date, URI, string,
//! and the accept-anything object converter.
//!
//! Cross-type rules follow the conventions of hierarchical content stores:
//! text forms are canonical (booleans are `true`/`false`, dates are
//! RFC 3339), dates convert to numbers as epoch milliseconds, and a double
//! only narrows to a long when it has no fractional part.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use url::Url;

use super::{Converter, ConvertResult, FormatError};
use crate::model::{Payload, Raw};

// ============================================================================
// Boolean
// ============================================================================

pub struct BooleanConverter;

impl BooleanConverter {
    fn from_text(raw: &Raw, s: &str) -> ConvertResult {
        if s.eq_ignore_ascii_case("true") {
            Ok(Payload::Boolean(true))
        } else if s.eq_ignore_ascii_case("false") {
            Ok(Payload::Boolean(false))
        } else {
            Err(FormatError::new(raw, "expected 'true' or 'false'"))
        }
    }
}

impl Converter for BooleanConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Bool(b) => Ok(Payload::Boolean(*b)),
            Raw::Text(s) => Self::from_text(raw, s),
            Raw::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => Self::from_text(raw, s),
                Err(_) => Err(FormatError::new(raw, "binary is not UTF-8 text")),
            },
            other => Err(FormatError::wrong_kind(other, "BOOLEAN")),
        }
    }
}

// ============================================================================
// Long
// ============================================================================

pub struct LongConverter;

impl Converter for LongConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Long(i) => Ok(Payload::Long(*i)),
            Raw::Double(f) if f.fract() == 0.0 && f.is_finite() => {
                if *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Ok(Payload::Long(*f as i64))
                } else {
                    Err(FormatError::new(raw, "double out of LONG range"))
                }
            }
            Raw::Double(_) => Err(FormatError::new(raw, "double has a fractional part")),
            Raw::Decimal(d) => d
                .to_i64()
                .map(Payload::Long)
                .ok_or_else(|| FormatError::new(raw, "decimal out of LONG range")),
            Raw::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(Payload::Long)
                .map_err(|e| FormatError::new(raw, e.to_string())),
            Raw::Date(dt) => Ok(Payload::Long(dt.timestamp_millis())),
            other => Err(FormatError::wrong_kind(other, "LONG")),
        }
    }
}

// ============================================================================
// Double
// ============================================================================

pub struct DoubleConverter;

impl Converter for DoubleConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Double(f) => Ok(Payload::Double(*f)),
            Raw::Long(i) => Ok(Payload::Double(*i as f64)),
            Raw::Decimal(d) => d
                .to_f64()
                .map(Payload::Double)
                .ok_or_else(|| FormatError::new(raw, "decimal out of DOUBLE range")),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Payload::Double)
                .map_err(|e| FormatError::new(raw, e.to_string())),
            Raw::Date(dt) => Ok(Payload::Double(dt.timestamp_millis() as f64)),
            other => Err(FormatError::wrong_kind(other, "DOUBLE")),
        }
    }
}

// ============================================================================
// Decimal
// ============================================================================

pub struct DecimalConverter;

impl Converter for DecimalConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Decimal(d) => Ok(Payload::Decimal(*d)),
            Raw::Long(i) => Ok(Payload::Decimal(Decimal::from(*i))),
            Raw::Double(f) => Decimal::from_f64(*f)
                .map(Payload::Decimal)
                .ok_or_else(|| FormatError::new(raw, "double not representable as DECIMAL")),
            Raw::Text(s) => s
                .trim()
                .parse::<Decimal>()
                .map(Payload::Decimal)
                .map_err(|e| FormatError::new(raw, e.to_string())),
            Raw::Date(dt) => Ok(Payload::Decimal(Decimal::from(dt.timestamp_millis()))),
            other => Err(FormatError::wrong_kind(other, "DECIMAL")),
        }
    }
}

// ============================================================================
// Date
// ============================================================================

pub struct DateConverter;

impl DateConverter {
    fn from_text(raw: &Raw, s: &str) -> ConvertResult {
        DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| Payload::Date(dt.with_timezone(&Utc)))
            .map_err(|e| FormatError::new(raw, e.to_string()))
    }
}

impl Converter for DateConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Date(dt) => Ok(Payload::Date(*dt)),
            Raw::Long(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .map(Payload::Date)
                .ok_or_else(|| FormatError::new(raw, "milliseconds out of DATE range")),
            Raw::Text(s) => Self::from_text(raw, s),
            Raw::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => Self::from_text(raw, s),
                Err(_) => Err(FormatError::new(raw, "binary is not UTF-8 text")),
            },
            other => Err(FormatError::wrong_kind(other, "DATE")),
        }
    }
}

// ============================================================================
// URI
// ============================================================================

pub struct UriConverter;

impl Converter for UriConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Uri(u) => Ok(Payload::Uri(u.clone())),
            Raw::Text(s) => Url::parse(s.trim())
                .map(Payload::Uri)
                .map_err(|e| FormatError::new(raw, e.to_string())),
            other => Err(FormatError::wrong_kind(other, "URI")),
        }
    }
}

// ============================================================================
// String — the catch-all
// ============================================================================

/// Everything has a canonical string form, so this converter only fails on
/// binary input that is not valid UTF-8.
pub struct StringConverter;

impl Converter for StringConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        match raw {
            Raw::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => Ok(Payload::String(s.to_owned())),
                Err(_) => Err(FormatError::new(raw, "binary is not UTF-8 text")),
            },
            other => Ok(Payload::String(other.to_string())),
        }
    }
}

// ============================================================================
// Object — the identity converter for UNDEFINED
// ============================================================================

/// Accepts any input and keeps its natural payload form. Used for the
/// `Undefined` tag, where the caller wants the value stored as-is.
pub struct ObjectConverter;

impl Converter for ObjectConverter {
    fn create(&self, raw: &Raw) -> ConvertResult {
        Ok(match raw {
            Raw::Bool(b) => Payload::Boolean(*b),
            Raw::Long(i) => Payload::Long(*i),
            Raw::Double(f) => Payload::Double(*f),
            Raw::Decimal(d) => Payload::Decimal(*d),
            Raw::Text(s) => Payload::String(s.clone()),
            Raw::Date(dt) => Payload::Date(*dt),
            Raw::Uri(u) => Payload::Uri(u.clone()),
            Raw::Bytes(b) => Payload::Binary(crate::model::Binary::new(b.clone())),
            Raw::Reference(r) => Payload::Reference(r.clone()),
        })
    }
}
