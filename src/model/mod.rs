//! # Value Model
//!
//! Clean DTOs for the typed property-value system. These types cross every
//! boundary: conversion ↔ reference resolution ↔ the property store above.
//!
//! Design rule: this module is pure data — no I/O, no locks, no collaborator
//! handles. Conversion logic lives in `convert`, resolution in `factory`.

pub mod binary;
pub mod name;
pub mod reference;
pub mod type_tag;
pub mod value;

pub use binary::Binary;
pub use name::QualifiedName;
pub use reference::{NodeKey, ReferenceFamily, ReferenceIdentifier};
pub use type_tag::{ALL_TAGS, TypeTag};
pub use value::{Payload, Raw, TypedValue};
