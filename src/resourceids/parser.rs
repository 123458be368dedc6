use std::collections::BTreeMap;

use tracing::trace;

use super::error::{ParseError, ParseErrorKind};
use super::segment::{Segment, SegmentKind};

/// Values captured while parsing a resource ID, keyed by segment label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub parsed: BTreeMap<String, String>,
    pub raw_input: String,
}

impl ParseResult {
    /// Get a captured value by segment label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.parsed.get(label).map(|v| v.as_str())
    }

    /// Get a captured value, failing if the segment wasn't captured
    pub fn required(&self, label: &str) -> Result<String, ParseErrorKind> {
        match self.parsed.get(label) {
            Some(value) if !value.is_empty() => Ok(value.clone()),
            _ => Err(ParseErrorKind::SegmentNotSpecified {
                label: label.to_string(),
            }),
        }
    }
}

/// Matches input strings against an ordered segment list
pub struct Parser<'a> {
    id_type: &'a str,
    segments: &'a [Segment],
}

impl<'a> Parser<'a> {
    pub fn new(id_type: &'a str, segments: &'a [Segment]) -> Self {
        Self { id_type, segments }
    }

    pub fn id_type(&self) -> &str {
        self.id_type
    }

    pub fn segments(&self) -> &[Segment] {
        self.segments
    }

    /// Parse `input` against the segment list.
    ///
    /// Static segments are compared case-sensitively unless `insensitively`
    /// is set; provider namespaces always compare case-insensitively and are
    /// captured in their canonical casing.
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ParseError> {
        trace!(id_type = self.id_type, input, insensitively, "parsing resource id");

        let parsed = self
            .parse_values(input, insensitively)
            .map_err(|kind| ParseError::new(self.id_type, input, kind))?;

        Ok(ParseResult {
            parsed,
            raw_input: input.to_string(),
        })
    }

    fn parse_values(
        &self,
        input: &str,
        insensitively: bool,
    ) -> Result<BTreeMap<String, String>, ParseErrorKind> {
        if input.trim().is_empty() {
            return Err(ParseErrorKind::EmptyInput);
        }

        let mut parsed = BTreeMap::new();

        let (segments, path) = match self.segments.split_first() {
            Some((first, rest)) if first.kind == SegmentKind::DataPlaneBaseUri => {
                let (base_uri, path) =
                    split_base_uri(input).map_err(|reason| ParseErrorKind::InvalidBaseUri {
                        label: first.label.to_string(),
                        reason,
                    })?;
                parsed.insert(first.label.to_string(), base_uri);
                (rest, path)
            }
            _ => (self.segments, input.to_string()),
        };

        let components = split_path(&path);
        walk_segments(segments, &components, insensitively, &mut parsed)?;

        Ok(parsed)
    }
}

/// Split a path on `/`, dropping one leading and one trailing separator
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed.split('/').collect()
}

/// Split an absolute URL into its `scheme://host[:port]` root and its path
pub(crate) fn split_base_uri(input: &str) -> Result<(String, String), String> {
    let url = url::Url::parse(input).map_err(|e| e.to_string())?;

    let host = url
        .host_str()
        .ok_or_else(|| "the URI has no host".to_string())?;

    let base_uri = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };

    Ok((base_uri, url.path().to_string()))
}

fn literal_matches(actual: &str, expected: &str, insensitively: bool) -> bool {
    if insensitively {
        actual.eq_ignore_ascii_case(expected)
    } else {
        actual == expected
    }
}

fn walk_segments(
    segments: &[Segment],
    components: &[&str],
    insensitively: bool,
    parsed: &mut BTreeMap<String, String>,
) -> Result<(), ParseErrorKind> {
    let count_error = || ParseErrorKind::SegmentCount {
        expected: segments.len(),
        actual: components.len(),
    };

    let mut position = 0;

    for (index, segment) in segments.iter().enumerate() {
        if segment.kind == SegmentKind::Scope {
            // the scope takes everything but the fixed-length suffix after it
            let suffix = segments.len() - index - 1;
            if components.len() < position + suffix + 1 {
                return Err(ParseErrorKind::SegmentNotSpecified {
                    label: segment.label.to_string(),
                });
            }

            let end = components.len() - suffix;
            let scope = &components[position..end];
            if scope.iter().any(|c| c.is_empty()) {
                return Err(ParseErrorKind::SegmentNotSpecified {
                    label: segment.label.to_string(),
                });
            }

            parsed.insert(segment.label.to_string(), format!("/{}", scope.join("/")));
            position = end;
            continue;
        }

        let Some(component) = components.get(position).copied() else {
            if segment.kind.captures_value() {
                return Err(ParseErrorKind::SegmentNotSpecified {
                    label: segment.label.to_string(),
                });
            }
            return Err(count_error());
        };

        match segment.kind {
            SegmentKind::Static => {
                if !literal_matches(component, segment.literal(), insensitively) {
                    return Err(ParseErrorKind::SegmentMismatch {
                        label: segment.label.to_string(),
                        expected: segment.literal().to_string(),
                        actual: component.to_string(),
                    });
                }
            }
            SegmentKind::ResourceProvider => {
                if !component.eq_ignore_ascii_case(segment.literal()) {
                    return Err(ParseErrorKind::SegmentMismatch {
                        label: segment.label.to_string(),
                        expected: segment.literal().to_string(),
                        actual: component.to_string(),
                    });
                }
            }
            SegmentKind::Constant => {
                let value = segment
                    .possible_values
                    .iter()
                    .find(|v| literal_matches(component, v, insensitively))
                    .ok_or_else(|| ParseErrorKind::InvalidConstant {
                        label: segment.label.to_string(),
                        actual: component.to_string(),
                        possible_values: segment
                            .possible_values
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    })?;
                parsed.insert(segment.label.to_string(), value.to_string());
            }
            SegmentKind::DataPlaneBaseUri => {
                return Err(ParseErrorKind::InvalidBaseUri {
                    label: segment.label.to_string(),
                    reason: "a base URI must be the first segment".to_string(),
                });
            }
            SegmentKind::Subscription
            | SegmentKind::ResourceGroup
            | SegmentKind::UserSpecified
            | SegmentKind::Scope => {
                if component.is_empty() {
                    return Err(ParseErrorKind::SegmentNotSpecified {
                        label: segment.label.to_string(),
                    });
                }
                parsed.insert(segment.label.to_string(), component.to_string());
            }
        }

        position += 1;
    }

    if position != components.len() {
        return Err(count_error());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    const SERVICE: &[Segment] = &[
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftDataMigration", "Microsoft.DataMigration"),
        Segment::static_segment("staticServices", "services"),
        Segment::user_specified("serviceName", "serviceValue"),
    ];

    const LINKER: &[Segment] = &[
        Segment::scope("resourceUri"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftServiceLinker", "Microsoft.ServiceLinker"),
        Segment::static_segment("staticLinkers", "linkers"),
        Segment::user_specified("linkerName", "linkerValue"),
    ];

    const COLLECTIONS: &[Cow<'static, str>] = &[Cow::Borrowed("keys"), Cow::Borrowed("secrets")];

    const NESTED: &[Segment] = &[
        Segment::data_plane_base_uri("baseUri"),
        Segment::constant("collection", COLLECTIONS, "secrets"),
        Segment::user_specified("name", "example"),
    ];

    const SERVICE_ID: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.DataMigration/services/service1";

    #[test]
    fn test_parse_captures_values() {
        let parser = Parser::new("Service", SERVICE);
        let result = parser.parse(SERVICE_ID, false).unwrap();

        assert_eq!(
            result.get("subscriptionId"),
            Some("00000000-0000-0000-0000-000000000000")
        );
        assert_eq!(result.get("resourceGroupName"), Some("resGroup1"));
        assert_eq!(result.get("serviceName"), Some("service1"));
        assert_eq!(result.raw_input, SERVICE_ID);
    }

    #[test]
    fn test_parse_tolerates_trailing_slash() {
        let parser = Parser::new("Service", SERVICE);
        let input = format!("{}/", SERVICE_ID);
        assert!(parser.parse(&input, false).is_ok());
    }

    #[test]
    fn test_parse_empty_input() {
        let parser = Parser::new("Service", SERVICE);
        let err = parser.parse("  ", false).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyInput);
        assert_eq!(err.id_type, "Service");
    }

    #[test]
    fn test_parse_missing_trailing_name() {
        let parser = Parser::new("Service", SERVICE);
        let input = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.DataMigration/services";
        let err = parser.parse(input, false).unwrap_err();

        assert_eq!(
            err.kind,
            ParseErrorKind::SegmentNotSpecified {
                label: "serviceName".to_string()
            }
        );
    }

    #[test]
    fn test_parse_too_many_components() {
        let parser = Parser::new("Service", SERVICE);
        let input = format!("{}/projects/project1", SERVICE_ID);
        let err = parser.parse(&input, false).unwrap_err();

        assert_eq!(
            err.kind,
            ParseErrorKind::SegmentCount {
                expected: 8,
                actual: 10
            }
        );
        assert!(err.kind.is_structural());
    }

    #[test]
    fn test_parse_static_casing() {
        let parser = Parser::new("Service", SERVICE);
        let input = SERVICE_ID.replace("/services/", "/Services/");

        let err = parser.parse(&input, false).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::SegmentMismatch { .. }));

        let result = parser.parse(&input, true).unwrap();
        assert_eq!(result.get("serviceName"), Some("service1"));
    }

    #[test]
    fn test_parse_provider_is_always_insensitive() {
        let parser = Parser::new("Service", SERVICE);
        let input = SERVICE_ID.replace("Microsoft.DataMigration", "microsoft.datamigration");
        assert!(parser.parse(&input, false).is_ok());
    }

    #[test]
    fn test_parse_wrong_provider() {
        let parser = Parser::new("Service", SERVICE);
        let input = SERVICE_ID.replace("Microsoft.DataMigration", "Microsoft.Compute");
        let err = parser.parse(&input, true).unwrap_err();

        match err.kind {
            ParseErrorKind::SegmentMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, "Microsoft.DataMigration");
                assert_eq!(actual, "Microsoft.Compute");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_user_value() {
        let parser = Parser::new("Service", SERVICE);
        let input = SERVICE_ID.replace("/resGroup1/", "//");
        let err = parser.parse(&input, false).unwrap_err();

        assert_eq!(
            err.kind,
            ParseErrorKind::SegmentNotSpecified {
                label: "resourceGroupName".to_string()
            }
        );
    }

    #[test]
    fn test_parse_scope_captures_nested_resource() {
        let parser = Parser::new("ScopedLinker", LINKER);
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/rg1/providers/Microsoft.Web/sites/site1/providers/Microsoft.ServiceLinker/linkers/linker1";
        let result = parser.parse(input, false).unwrap();

        assert_eq!(
            result.get("resourceUri"),
            Some("/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/rg1/providers/Microsoft.Web/sites/site1")
        );
        assert_eq!(result.get("linkerName"), Some("linker1"));
    }

    #[test]
    fn test_parse_scope_requires_a_component() {
        let parser = Parser::new("ScopedLinker", LINKER);
        let err = parser
            .parse("/providers/Microsoft.ServiceLinker/linkers/linker1", false)
            .unwrap_err();

        assert_eq!(
            err.kind,
            ParseErrorKind::SegmentNotSpecified {
                label: "resourceUri".to_string()
            }
        );
    }

    #[test]
    fn test_parse_data_plane() {
        let parser = Parser::new("NestedItem", NESTED);
        let result = parser
            .parse("https://my-vault.vault.azure.net/secrets/password", false)
            .unwrap();

        assert_eq!(result.get("baseUri"), Some("https://my-vault.vault.azure.net"));
        assert_eq!(result.get("collection"), Some("secrets"));
        assert_eq!(result.get("name"), Some("password"));
    }

    #[test]
    fn test_parse_data_plane_constant() {
        let parser = Parser::new("NestedItem", NESTED);
        let input = "https://my-vault.vault.azure.net/Secrets/password";

        let err = parser.parse(input, false).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::InvalidConstant { .. }));

        let result = parser.parse(input, true).unwrap();
        assert_eq!(result.get("collection"), Some("secrets"));
    }

    #[test]
    fn test_parse_data_plane_requires_url() {
        let parser = Parser::new("NestedItem", NESTED);
        let err = parser.parse("/secrets/password", false).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::InvalidBaseUri { .. }));
    }

    #[test]
    fn test_required_missing_label() {
        let result = ParseResult::default();
        assert_eq!(
            result.required("name"),
            Err(ParseErrorKind::SegmentNotSpecified {
                label: "name".to_string()
            })
        );
    }
}
