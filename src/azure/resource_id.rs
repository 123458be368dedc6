//! Untyped Azure Resource Manager IDs
//!
//! Older resources read IDs as a flat list of key/value pairs rather than a
//! typed segment list: `/subscriptions/{sub}/resourceGroups/{rg}/providers/{ns}/{type}/{name}/...`.

use std::fmt;

use serde_json::Value;

use crate::resourceids::ValidationError;
use crate::resourceids::validate::is_guid;

/// Error types for untyped ARM ID parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArmIdError {
    /// The ID doesn't start with `/`
    NotAbsolute(String),

    /// The path doesn't split into key/value pairs
    OddSegmentCount(String),

    /// A key or value in the path is empty
    EmptySegment { key: String, value: String },

    /// The path has no `subscriptions` pair
    MissingSubscription(String),

    /// A requested path key isn't present
    MissingSegment { key: String, id: String },
}

impl fmt::Display for ArmIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmIdError::NotAbsolute(id) => {
                write!(f, "resource ID {:?} must start with '/'", id)
            }
            ArmIdError::OddSegmentCount(id) => {
                write!(f, "the number of path segments is not divisible by 2 in {:?}", id)
            }
            ArmIdError::EmptySegment { key, value } => {
                write!(
                    f,
                    "key/value cannot be empty strings. Key: '{}', Value: '{}'",
                    key, value
                )
            }
            ArmIdError::MissingSubscription(id) => {
                write!(f, "no subscription ID found in {:?}", id)
            }
            ArmIdError::MissingSegment { key, id } => {
                write!(f, "ID was missing the '{}' element in {:?}", key, id)
            }
        }
    }
}

impl std::error::Error for ArmIdError {}

/// Result type for untyped ARM ID operations
pub type ArmIdResult<T> = Result<T, ArmIdError>;

/// A parsed ARM ID with its remaining path kept in order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArmResourceId {
    pub subscription_id: String,
    pub resource_group: Option<String>,
    pub provider: Option<String>,
    pub path: Vec<(String, String)>,
}

impl ArmResourceId {
    /// Parse an ARM ID of key/value pairs.
    ///
    /// The first `subscriptions`, `resourceGroups` and `providers` keys are
    /// lifted into their own fields, matched in any casing since some APIs
    /// return `resourcegroups`. Everything else stays in `path`.
    pub fn parse(input: &str) -> ArmIdResult<Self> {
        if !input.starts_with('/') {
            return Err(ArmIdError::NotAbsolute(input.to_string()));
        }

        let trimmed = input.trim_start_matches('/').trim_end_matches('/');
        let components: Vec<&str> = trimmed.split('/').collect();

        if components.len() % 2 != 0 {
            return Err(ArmIdError::OddSegmentCount(input.to_string()));
        }

        let mut id = ArmResourceId::default();
        let mut subscription_id = None;

        for pair in components.chunks(2) {
            let (key, value) = (pair[0], pair[1]);

            if key.is_empty() || value.is_empty() {
                return Err(ArmIdError::EmptySegment {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }

            if key.eq_ignore_ascii_case("subscriptions") && subscription_id.is_none() {
                subscription_id = Some(value.to_string());
            } else if key.eq_ignore_ascii_case("providers") && id.provider.is_none() {
                id.provider = Some(value.to_string());
            } else if key.eq_ignore_ascii_case("resourceGroups") && id.resource_group.is_none() {
                id.resource_group = Some(value.to_string());
            } else {
                id.path.push((key.to_string(), value.to_string()));
            }
        }

        id.subscription_id =
            subscription_id.ok_or_else(|| ArmIdError::MissingSubscription(input.to_string()))?;

        Ok(id)
    }

    /// Validate a configuration value holding any ARM resource ID.
    ///
    /// Never panics: a non-string value or a parse failure becomes an error
    /// naming `key`. A subscription ID that isn't a GUID produces a warning.
    pub fn validate(input: &Value, key: &str) -> (Vec<String>, Vec<ValidationError>) {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        let Some(value) = input.as_str() else {
            errors.push(ValidationError::new(
                key,
                format!("expected {} to be a string", key),
            ));
            return (warnings, errors);
        };

        match ArmResourceId::parse(value) {
            Ok(id) if !is_guid(&id.subscription_id) => {
                warnings.push(format!(
                    "{}: the subscription ID {:?} is not a GUID",
                    key, id.subscription_id
                ));
            }
            Ok(_) => {}
            Err(err) => {
                errors.push(ValidationError::new(
                    key,
                    format!("cannot parse {:?} as a resource ID: {}", value, err),
                ));
            }
        }

        (warnings, errors)
    }

    /// Like [`ArmResourceId::validate`], but an empty string is accepted
    pub fn validate_or_empty(input: &Value, key: &str) -> (Vec<String>, Vec<ValidationError>) {
        if input.as_str() == Some("") {
            return (Vec::new(), Vec::new());
        }

        Self::validate(input, key)
    }

    /// Look up a path value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.path
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a path value, failing when the key is absent
    pub fn segment(&self, key: &str) -> ArmIdResult<&str> {
        self.get(key).ok_or_else(|| ArmIdError::MissingSegment {
            key: key.to_string(),
            id: self.id(),
        })
    }

    /// Whether the ID addresses a resource below a provider namespace
    pub fn is_resource(&self) -> bool {
        self.provider.is_some() && !self.path.is_empty()
    }

    /// Render the ID back to its string form
    pub fn id(&self) -> String {
        let mut out = format!("/subscriptions/{}", self.subscription_id);

        if let Some(resource_group) = &self.resource_group {
            out.push_str(&format!("/resourceGroups/{}", resource_group));
        }

        if let Some(provider) = &self.provider {
            out.push_str(&format!("/providers/{}", provider));
        }

        for (key, value) in &self.path {
            out.push_str(&format!("/{}/{}", key, value));
        }

        out
    }
}

impl fmt::Display for ArmResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
