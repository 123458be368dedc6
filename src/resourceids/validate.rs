//! Configuration-time validation of resource ID values

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use super::error::ValidationError;
use super::parser::Parser;
use super::segment::{Segment, SegmentKind};

lazy_static! {
    // Azure resource group names: up to 90 of letters, digits, `_-.()`
    static ref RESOURCE_GROUP_NAME: Regex =
        Regex::new(r"^[-\w._()]{1,90}$").expect("Invalid resource group name regex");
}

/// Whether `value` is a GUID in the canonical hyphenated form
pub fn is_guid(value: &str) -> bool {
    value.len() == 36 && Uuid::parse_str(value).is_ok()
}

/// Whether `value` is a valid resource group name
pub fn is_resource_group_name(value: &str) -> bool {
    RESOURCE_GROUP_NAME.is_match(value) && !value.ends_with('.')
}

/// Validate a configuration value against a segment list.
///
/// Never panics: a non-string value or a parse failure becomes an error
/// naming `key`. Subscription IDs that aren't GUIDs produce a warning, since
/// some sovereign clouds and test fixtures use other forms.
pub fn validate_value(
    id_type: &str,
    segments: &[Segment],
    input: &Value,
    key: &str,
) -> (Vec<String>, Vec<ValidationError>) {
    validate_value_with(id_type, segments, input, key, false)
}

/// Like [`validate_value`], optionally ignoring the casing of static segments
pub fn validate_value_with(
    id_type: &str,
    segments: &[Segment],
    input: &Value,
    key: &str,
    insensitively: bool,
) -> (Vec<String>, Vec<ValidationError>) {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let Some(value) = input.as_str() else {
        errors.push(ValidationError::new(
            key,
            format!("expected {} to be a string", key),
        ));
        return (warnings, errors);
    };

    let result = match Parser::new(id_type, segments).parse(value, insensitively) {
        Ok(result) => result,
        Err(err) => {
            errors.push((key, err).into());
            return (warnings, errors);
        }
    };

    for segment in segments {
        let Some(captured) = result.get(&segment.label) else {
            continue;
        };

        match segment.kind {
            SegmentKind::Subscription if !is_guid(captured) => {
                warnings.push(format!(
                    "{}: the subscription ID {:?} is not a GUID",
                    key, captured
                ));
            }
            SegmentKind::ResourceGroup if !is_resource_group_name(captured) => {
                errors.push(ValidationError::new(
                    key,
                    format!(
                        "{:?} is not a valid resource group name: it may contain up to 90 letters, digits, underscores, hyphens, periods and parentheses, and must not end in a period",
                        captured
                    ),
                ));
            }
            _ => {}
        }
    }

    (warnings, errors)
}
