use std::fmt;

/// The reason a resource ID could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input was empty or only whitespace
    EmptyInput,

    /// The number of path components didn't match the segment list
    SegmentCount { expected: usize, actual: usize },

    /// A value-carrying segment was missing or empty
    SegmentNotSpecified { label: String },

    /// A static or provider segment didn't match the expected literal
    SegmentMismatch {
        label: String,
        expected: String,
        actual: String,
    },

    /// A constant segment held a value outside its allowed set
    InvalidConstant {
        label: String,
        actual: String,
        possible_values: Vec<String>,
    },

    /// The data-plane base URI was not an absolute URL
    InvalidBaseUri { label: String, reason: String },

    /// A value would not survive as the path component(s) it renders to
    InvalidSegmentValue {
        label: String,
        value: String,
        reason: String,
    },
}

impl ParseErrorKind {
    /// Whether the failure is about the shape of the ID rather than a value
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ParseErrorKind::EmptyInput
                | ParseErrorKind::SegmentCount { .. }
                | ParseErrorKind::SegmentNotSpecified { .. }
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::EmptyInput => write!(f, "input was empty"),
            ParseErrorKind::SegmentCount { expected, actual } => {
                write!(
                    f,
                    "expected {} path segments but got {}",
                    expected, actual
                )
            }
            ParseErrorKind::SegmentNotSpecified { label } => {
                write!(f, "the segment '{}' was not specified", label)
            }
            ParseErrorKind::SegmentMismatch {
                label,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "the segment '{}' should be '{}' but got '{}'",
                    label, expected, actual
                )
            }
            ParseErrorKind::InvalidConstant {
                label,
                actual,
                possible_values,
            } => {
                write!(
                    f,
                    "the segment '{}' should be one of [{}] but got '{}'",
                    label,
                    possible_values.join(", "),
                    actual
                )
            }
            ParseErrorKind::InvalidBaseUri { label, reason } => {
                write!(f, "the segment '{}' is not a valid base URI: {}", label, reason)
            }
            ParseErrorKind::InvalidSegmentValue {
                label,
                value,
                reason,
            } => {
                write!(f, "the segment '{}' cannot hold '{}': {}", label, value, reason)
            }
        }
    }
}

/// Error returned when parsing a resource ID fails.
///
/// Carries the identifier type being parsed and the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub id_type: String,
    pub input: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(id_type: impl Into<String>, input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            id_type: id_type.into(),
            input: input.into(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parsing {} ID {:?}: {}",
            self.id_type, self.input, self.kind
        )
    }
}

impl std::error::Error for ParseError {}

/// User-facing validation error for a configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<(&str, ParseError)> for ValidationError {
    fn from((key, err): (&str, ParseError)) -> Self {
        ValidationError::new(key, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_names_type_and_input() {
        let err = ParseError::new(
            "Project",
            "/subscriptions",
            ParseErrorKind::SegmentNotSpecified {
                label: "subscriptionId".to_string(),
            },
        );

        let message = err.to_string();
        assert!(message.contains("Project"));
        assert!(message.contains("\"/subscriptions\""));
        assert!(message.contains("'subscriptionId' was not specified"));
    }

    #[test]
    fn test_segment_mismatch_display() {
        let kind = ParseErrorKind::SegmentMismatch {
            label: "staticServices".to_string(),
            expected: "services".to_string(),
            actual: "Services".to_string(),
        };

        assert_eq!(
            kind.to_string(),
            "the segment 'staticServices' should be 'services' but got 'Services'"
        );
        assert!(!kind.is_structural());
    }

    #[test]
    fn test_validation_error_from_parse_error() {
        let err = ParseError::new("Service", "", ParseErrorKind::EmptyInput);
        let validation: ValidationError = ("service_id", err).into();

        assert_eq!(validation.key, "service_id");
        assert!(validation.to_string().starts_with("service_id: parsing Service ID"));
    }
}
