use std::collections::BTreeMap;

use super::error::ParseErrorKind;
use super::parser::split_base_uri;
use super::segment::{Segment, SegmentKind};

/// Render a resource ID from a segment list.
///
/// Static and provider segments always emit their canonical literal.
/// `value_for` supplies the value of every other segment; a missing value
/// renders as an empty component, so callers holding user input should use
/// [`format_from_values`] instead.
pub fn format_segments<'a, F>(segments: &'a [Segment], mut value_for: F) -> String
where
    F: FnMut(&'a Segment) -> Option<&'a str>,
{
    let mut out = String::new();

    for segment in segments {
        match segment.kind {
            SegmentKind::Static | SegmentKind::ResourceProvider => {
                out.push('/');
                out.push_str(segment.literal());
            }
            SegmentKind::DataPlaneBaseUri => {
                out.push_str(value_for(segment).unwrap_or("").trim_end_matches('/'));
            }
            SegmentKind::Scope => {
                out.push('/');
                out.push_str(value_for(segment).unwrap_or("").trim_matches('/'));
            }
            _ => {
                out.push('/');
                out.push_str(value_for(segment).unwrap_or(""));
            }
        }
    }

    out
}

/// Render a resource ID from a label to value map.
///
/// Every value is checked the way a strict parse would check it, so the
/// result always parses back: constants must be one of their possible values
/// (re-cased to the canonical member), single-component values must not
/// contain `/`, and a base URI must be a bare absolute URL.
pub fn format_from_values(
    segments: &[Segment],
    values: &BTreeMap<String, String>,
) -> Result<String, ParseErrorKind> {
    let mut resolved = BTreeMap::new();

    for segment in segments.iter().filter(|s| s.kind.captures_value()) {
        let value = values
            .get(&*segment.label)
            .map(|v| v.as_str())
            .filter(|v| !v.trim_matches('/').is_empty())
            .ok_or_else(|| ParseErrorKind::SegmentNotSpecified {
                label: segment.label.to_string(),
            })?;

        resolved.insert(segment.label.to_string(), resolve_value(segment, value)?);
    }

    Ok(format_segments(segments, |segment| {
        resolved.get(&*segment.label).map(|v| v.as_str())
    }))
}

fn resolve_value(segment: &Segment, value: &str) -> Result<String, ParseErrorKind> {
    let invalid = |reason: &str| ParseErrorKind::InvalidSegmentValue {
        label: segment.label.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match segment.kind {
        SegmentKind::Constant => segment
            .possible_values
            .iter()
            .find(|v| v.eq_ignore_ascii_case(value))
            .map(|v| v.to_string())
            .ok_or_else(|| ParseErrorKind::InvalidConstant {
                label: segment.label.to_string(),
                actual: value.to_string(),
                possible_values: segment
                    .possible_values
                    .iter()
                    .map(|v| v.to_string())
                    .collect(),
            }),
        SegmentKind::DataPlaneBaseUri => {
            let (base_uri, path) =
                split_base_uri(value).map_err(|reason| ParseErrorKind::InvalidBaseUri {
                    label: segment.label.to_string(),
                    reason,
                })?;
            if !path.trim_matches('/').is_empty() {
                return Err(ParseErrorKind::InvalidBaseUri {
                    label: segment.label.to_string(),
                    reason: format!("unexpected path {:?}", path),
                });
            }
            Ok(base_uri)
        }
        SegmentKind::Scope => {
            if value.trim_matches('/').split('/').any(|c| c.is_empty()) {
                return Err(invalid("the scope contains an empty path component"));
            }
            Ok(value.to_string())
        }
        _ if value.contains('/') => Err(invalid("the value must not contain '/'")),
        _ => Ok(value.to_string()),
    }
}
