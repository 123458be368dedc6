//! Key Vault data-plane object identifiers
//!
//! Nested items (certificates, keys, secrets, managed storage accounts) are
//! addressed relative to the vault's base URL rather than the ARM hierarchy:
//!
//! ```text
//! https://{vault}.vault.azure.net/{collection}/{name}[/{version}]
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::resourceids::{
    ParseError, ParseErrorKind, ParseResult, Parser, Segment, ValidationError, validate_value,
};

const ID_TYPE: &str = "Key Vault Nested Item";

const COLLECTIONS: &[Cow<'static, str>] = &[
    Cow::Borrowed("certificates"),
    Cow::Borrowed("keys"),
    Cow::Borrowed("secrets"),
    Cow::Borrowed("storage"),
];

pub const VERSIONED: &[Segment] = &[
    Segment::data_plane_base_uri("keyVaultBaseUrl"),
    Segment::constant("nestedItemType", COLLECTIONS, "secrets"),
    Segment::user_specified("name", "nameValue"),
    Segment::user_specified("version", "0123456789abcdef0123456789abcdef"),
];

pub const VERSIONLESS: &[Segment] = &[
    Segment::data_plane_base_uri("keyVaultBaseUrl"),
    Segment::constant("nestedItemType", COLLECTIONS, "secrets"),
    Segment::user_specified("name", "nameValue"),
];

/// The collection a nested item lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestedItemType {
    Certificate,
    Key,
    Secret,
    StorageAccount,
}

impl NestedItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NestedItemType::Certificate => "certificates",
            NestedItemType::Key => "keys",
            NestedItemType::Secret => "secrets",
            NestedItemType::StorageAccount => "storage",
        }
    }
}

impl fmt::Display for NestedItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NestedItemType {
    type Err = ParseErrorKind;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "certificates" => Ok(NestedItemType::Certificate),
            "keys" => Ok(NestedItemType::Key),
            "secrets" => Ok(NestedItemType::Secret),
            "storage" => Ok(NestedItemType::StorageAccount),
            _ => Err(ParseErrorKind::InvalidConstant {
                label: "nestedItemType".to_string(),
                actual: input.to_string(),
                possible_values: COLLECTIONS.iter().map(|c| c.to_string()).collect(),
            }),
        }
    }
}

/// Identifier of an object stored in a Key Vault
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestedItemId {
    pub key_vault_base_url: String,
    pub nested_item_type: NestedItemType,
    pub name: String,
    pub version: Option<String>,
}

impl NestedItemId {
    /// Build an identifier, normalising the base URL to `scheme://host[:port]`
    pub fn new(
        key_vault_base_url: &str,
        nested_item_type: NestedItemType,
        name: impl Into<String>,
        version: Option<String>,
    ) -> Result<Self, ParseError> {
        let result = Parser::new(ID_TYPE, &VERSIONED[..1]).parse(key_vault_base_url, false)?;

        Ok(Self {
            key_vault_base_url: result
                .required("keyVaultBaseUrl")
                .map_err(|kind| ParseError::new(ID_TYPE, key_vault_base_url, kind))?,
            nested_item_type,
            name: name.into(),
            version: version.filter(|v| !v.is_empty()),
        })
    }

    /// Render the ID, including the version when one is set
    pub fn id(&self) -> String {
        match &self.version {
            Some(version) => format!("{}/{}", self.versionless_id(), version),
            None => self.versionless_id(),
        }
    }

    /// Render the ID without its version
    pub fn versionless_id(&self) -> String {
        format!(
            "{}/{}/{}",
            self.key_vault_base_url.trim_end_matches('/'),
            self.nested_item_type,
            self.name
        )
    }

    /// Parse an ID which must include a version
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, false)
    }

    /// Parse an ID which must include a version, ignoring the casing of the
    /// collection
    pub fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, true)
    }

    /// Parse an ID which may or may not include a version
    pub fn parse_optionally_versioned(input: &str) -> Result<Self, ParseError> {
        Self::parse_optionally_versioned_with(input, false)
    }

    /// Parse an ID which may or may not include a version, ignoring the
    /// casing of the collection
    pub fn parse_optionally_versioned_insensitively(input: &str) -> Result<Self, ParseError> {
        Self::parse_optionally_versioned_with(input, true)
    }

    fn parse_with(input: &str, insensitively: bool) -> Result<Self, ParseError> {
        let result = Parser::new(ID_TYPE, VERSIONED).parse(input, insensitively)?;
        Self::from_parse_result(input, &result)
    }

    fn parse_optionally_versioned_with(input: &str, insensitively: bool) -> Result<Self, ParseError> {
        match Parser::new(ID_TYPE, VERSIONED).parse(input, insensitively) {
            Ok(result) => Self::from_parse_result(input, &result),
            Err(ParseError {
                kind: ParseErrorKind::SegmentNotSpecified { label },
                ..
            }) if label == "version" => {
                let result = Parser::new(ID_TYPE, VERSIONLESS).parse(input, insensitively)?;
                Self::from_parse_result(input, &result)
            }
            Err(err) => Err(err),
        }
    }

    /// Validate a configuration value holding a versioned nested item ID
    pub fn validate(input: &Value, key: &str) -> (Vec<String>, Vec<ValidationError>) {
        validate_value(ID_TYPE, VERSIONED, input, key)
    }

    fn from_parse_result(input: &str, result: &ParseResult) -> Result<Self, ParseError> {
        let wrap = |kind| ParseError::new(ID_TYPE, input, kind);

        Ok(Self {
            key_vault_base_url: result.required("keyVaultBaseUrl").map_err(wrap)?,
            nested_item_type: result
                .required("nestedItemType")
                .and_then(|t| t.parse())
                .map_err(wrap)?,
            name: result.required("name").map_err(wrap)?,
            version: result.get("version").map(|v| v.to_string()),
        })
    }
}

impl fmt::Display for NestedItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_versioned_secret() {
        let input = "https://my-vault.vault.azure.net/secrets/db-password/0123456789abcdef";
        let id = NestedItemId::parse(input).unwrap();

        assert_eq!(id.key_vault_base_url, "https://my-vault.vault.azure.net");
        assert_eq!(id.nested_item_type, NestedItemType::Secret);
        assert_eq!(id.name, "db-password");
        assert_eq!(id.version.as_deref(), Some("0123456789abcdef"));
        assert_eq!(id.id(), input);
    }

    #[test]
    fn test_parse_requires_version() {
        let err = NestedItemId::parse("https://my-vault.vault.azure.net/keys/key1").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::SegmentNotSpecified {
                label: "version".to_string()
            }
        );
    }

    #[test]
    fn test_parse_optionally_versioned() {
        let id =
            NestedItemId::parse_optionally_versioned("https://my-vault.vault.azure.net/keys/key1/")
                .unwrap();
        assert_eq!(id.nested_item_type, NestedItemType::Key);
        assert_eq!(id.version, None);
        assert_eq!(id.id(), "https://my-vault.vault.azure.net/keys/key1");

        let versioned = NestedItemId::parse_optionally_versioned(
            "https://my-vault.vault.azure.net/certificates/cert1/abc",
        )
        .unwrap();
        assert_eq!(versioned.version.as_deref(), Some("abc"));
        assert_eq!(
            versioned.versionless_id(),
            "https://my-vault.vault.azure.net/certificates/cert1"
        );
    }

    #[test]
    fn test_parse_insensitively() {
        let input = "https://v.vault.azure.net/Secrets/s/v1";

        let err = NestedItemId::parse(input).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::InvalidConstant { .. }));

        let id = NestedItemId::parse_insensitively(input).unwrap();
        assert_eq!(id.nested_item_type, NestedItemType::Secret);
        assert_eq!(id.id(), "https://v.vault.azure.net/secrets/s/v1");
    }

    #[test]
    fn test_parse_optionally_versioned_insensitively() {
        let input = "https://v.vault.azure.net/KEYS/k1";

        assert!(NestedItemId::parse_optionally_versioned(input).is_err());

        let id = NestedItemId::parse_optionally_versioned_insensitively(input).unwrap();
        assert_eq!(id.nested_item_type, NestedItemType::Key);
        assert_eq!(id.version, None);

        let versioned =
            NestedItemId::parse_optionally_versioned_insensitively(&format!("{}/v2", input))
                .unwrap();
        assert_eq!(versioned.version.as_deref(), Some("v2"));
    }

    #[test]
    fn test_parse_unknown_collection() {
        let err = NestedItemId::parse_optionally_versioned("https://my-vault.vault.azure.net/blobs/b1")
            .unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::InvalidConstant { .. }));
    }

    #[test]
    fn test_parse_keeps_custom_port() {
        let id = NestedItemId::parse("https://localhost:8443/secrets/s1/v1").unwrap();
        assert_eq!(id.key_vault_base_url, "https://localhost:8443");
    }

    #[test]
    fn test_new_normalises_base_url() {
        let id = NestedItemId::new(
            "https://my-vault.vault.azure.net/",
            NestedItemType::Certificate,
            "cert1",
            Some(String::new()),
        )
        .unwrap();

        assert_eq!(id.version, None);
        assert_eq!(id.id(), "https://my-vault.vault.azure.net/certificates/cert1");

        assert!(NestedItemId::new("not a url", NestedItemType::Key, "k", None).is_err());
    }

    #[test]
    fn test_validate() {
        let (_, errors) = NestedItemId::validate(&json!(["a"]), "secret_id");
        assert_eq!(errors.len(), 1);

        let (_, errors) = NestedItemId::validate(
            &json!("https://my-vault.vault.azure.net/secrets/s1/v1"),
            "secret_id",
        );
        assert!(errors.is_empty());
    }
}
