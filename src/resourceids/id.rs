use serde_json::Value;

use super::error::{ParseError, ParseErrorKind, ValidationError};
use super::formatter::format_segments;
use super::parser::{ParseResult, Parser};
use super::segment::{Segment, example_id};
use super::validate::validate_value;

/// A typed resource identifier backed by a static segment list.
///
/// Implementations are normally generated with [`resource_id!`](crate::resource_id),
/// which supplies the first four items; everything else is provided.
pub trait ResourceId: Sized {
    /// Human readable type name used in error messages, e.g. `Project`
    const ID_TYPE: &'static str;

    /// The ordered segment list describing this identifier
    fn segments() -> &'static [Segment];

    /// Build the identifier from captured segment values
    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseErrorKind>;

    /// The value held for a capturing segment
    fn segment_value(&self, label: &str) -> Option<&str>;

    /// Render the canonical ID string
    fn id(&self) -> String {
        format_segments(Self::segments(), |segment| self.segment_value(&segment.label))
    }

    /// Parse an ID, matching static segments exactly
    fn parse(input: &str) -> Result<Self, ParseError> {
        parse_with::<Self>(input, false)
    }

    /// Parse an ID returned by the API, ignoring the casing of static segments
    fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        parse_with::<Self>(input, true)
    }

    /// Validate a configuration value, returning warnings and errors
    fn validate(input: &Value, key: &str) -> (Vec<String>, Vec<ValidationError>) {
        validate_value(Self::ID_TYPE, Self::segments(), input, key)
    }

    /// An example ID built from each segment's example value
    fn example() -> String {
        example_id(Self::segments())
    }
}

fn parse_with<T: ResourceId>(input: &str, insensitively: bool) -> Result<T, ParseError> {
    let result = Parser::new(T::ID_TYPE, T::segments()).parse(input, insensitively)?;

    T::from_parse_result(&result).map_err(|kind| ParseError::new(T::ID_TYPE, input, kind))
}
