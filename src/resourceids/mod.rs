//! Resource ID codec
//!
//! An identifier type is described by an ordered list of [`Segment`]s. The
//! same list drives the [`Parser`] (string to captured values) and the
//! formatter (values to canonical string), so a formatted ID always parses
//! back to the values it was built from.
//!
//! Identifiers coming from users are parsed strictly. Identifiers coming back
//! from the Azure APIs, which are inconsistent about casing, can be parsed
//! with [`ResourceId::parse_insensitively`] or normalized through the
//! [`IdRegistry`](crate::registry::IdRegistry).

pub mod error;
pub mod formatter;
pub mod id;
mod macros;
pub mod parser;
pub mod segment;
pub mod validate;

pub use error::{ParseError, ParseErrorKind, ValidationError};
pub use formatter::{format_from_values, format_segments};
pub use id::ResourceId;
pub use parser::{ParseResult, Parser};
pub use segment::{Segment, SegmentKind, example_id};
pub use validate::{validate_value, validate_value_with};
