//! Named identifier definitions
//!
//! The CLI addresses identifier types by name (`armid parse ProjectId ...`),
//! and configuration files can add their own. The registry is built once at
//! start-up and then only read, so it carries no locking.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::azure::ArmResourceId;
use crate::ids;
use crate::resourceids::{
    ParseError, ParseErrorKind, ParseResult, Parser, ResourceId, Segment, ValidationError,
    example_id, format_from_values, validate_value_with,
};

/// Validator name accepting any ARM resource ID rather than one fixed shape
pub const ANY_RESOURCE_ID: &str = "ResourceId";

/// Like [`ANY_RESOURCE_ID`], but an empty value is accepted
pub const ANY_RESOURCE_ID_OR_EMPTY: &str = "ResourceIdOrEmpty";

/// A named segment list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdDefinition {
    pub name: String,
    pub description: String,
    pub segments: Vec<Segment>,
}

impl IdDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            segments,
        }
    }

    /// Definition for a typed identifier, described by its ID type
    pub fn of<T: ResourceId>(name: &str) -> Self {
        Self::new(name, T::ID_TYPE, T::segments().to_vec())
    }

    /// An example ID for this definition
    pub fn example(&self) -> String {
        example_id(&self.segments)
    }

    /// Labels of the segments which capture a value
    pub fn labels(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.kind.captures_value())
            .map(|s| &*s.label)
            .collect()
    }
}

/// Errors raised by registry lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No definition registered under the name
    UnknownType(String),

    /// The input didn't parse against the definition
    Parse(ParseError),

    /// Formatting was missing a value
    Format { name: String, kind: ParseErrorKind },

    /// No definition matches the input
    NoMatch(String),

    /// More than one definition matches and none was named
    Ambiguous { input: String, candidates: Vec<String> },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownType(name) => write!(f, "Unknown ID type: {}", name),
            RegistryError::Parse(err) => write!(f, "{}", err),
            RegistryError::Format { name, kind } => {
                write!(f, "formatting {} ID: {}", name, kind)
            }
            RegistryError::NoMatch(input) => {
                write!(f, "{:?} does not match any known ID type", input)
            }
            RegistryError::Ambiguous { input, candidates } => write!(
                f,
                "{:?} matches several ID types ({}); pass the type explicitly",
                input,
                candidates.join(", ")
            ),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for RegistryError {
    fn from(err: ParseError) -> Self {
        RegistryError::Parse(err)
    }
}

/// Identifier definitions keyed by name
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    definitions: BTreeMap<String, IdDefinition>,
}

impl IdRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in identifier type
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(IdDefinition::of::<ids::SubscriptionId>("SubscriptionId"));
        registry.register(IdDefinition::of::<ids::ResourceGroupId>("ResourceGroupId"));
        registry.register(IdDefinition::of::<ids::ManagementGroupId>("ManagementGroupId"));
        registry.register(IdDefinition::of::<ids::KeyVaultId>("KeyVaultId"));
        registry.register(IdDefinition::of::<ids::StorageAccountId>("StorageAccountId"));
        registry.register(IdDefinition::of::<ids::SubnetId>("SubnetId"));
        registry.register(IdDefinition::of::<ids::AppServicePlanId>("AppServicePlanId"));
        registry.register(IdDefinition::of::<ids::UserAssignedIdentityId>(
            "UserAssignedIdentityId",
        ));
        registry.register(IdDefinition::of::<ids::KubernetesClusterId>("KubernetesClusterId"));
        registry.register(IdDefinition::of::<ids::VirtualMachineId>("VirtualMachineId"));
        registry.register(IdDefinition::of::<ids::ServiceId>("ServiceId"));
        registry.register(IdDefinition::of::<ids::ProjectId>("ProjectId"));
        registry.register(IdDefinition::of::<ids::TaskId>("TaskId"));
        registry.register(IdDefinition::of::<ids::RegistryId>("RegistryId"));
        registry.register(IdDefinition::of::<ids::RegistryTaskId>("RegistryTaskId"));
        registry.register(IdDefinition::of::<ids::ProtectedItemId>("ProtectedItemId"));
        registry.register(IdDefinition::of::<ids::ScopedLinkerId>("ScopedLinkerId"));
        registry.register(IdDefinition::new(
            "NestedItemId",
            "Key Vault Nested Item",
            ids::keyvault::VERSIONED.to_vec(),
        ));
        registry.register(IdDefinition::new(
            "VersionlessNestedItemId",
            "Key Vault Nested Item (versionless)",
            ids::keyvault::VERSIONLESS.to_vec(),
        ));

        registry
    }

    /// Register a definition, replacing any existing one with the same name
    pub fn register(&mut self, definition: IdDefinition) {
        if self.definitions.contains_key(&definition.name) {
            debug!(name = %definition.name, "overriding ID definition");
        }
        self.definitions.insert(definition.name.clone(), definition);
    }

    /// Get a definition by name
    pub fn get(&self, name: &str) -> Result<&IdDefinition, RegistryError> {
        self.definitions
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_string()))
    }

    /// Check if a definition is registered
    pub fn has(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// List all registered definitions, sorted by name
    pub fn list(&self) -> Vec<&IdDefinition> {
        self.definitions.values().collect()
    }

    /// Parse `input` with the named definition
    pub fn parse(
        &self,
        name: &str,
        input: &str,
        insensitively: bool,
    ) -> Result<ParseResult, RegistryError> {
        let definition = self.get(name)?;
        Ok(Parser::new(&definition.name, &definition.segments).parse(input, insensitively)?)
    }

    /// Render the canonical ID for the named definition from segment values
    pub fn format(
        &self,
        name: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<String, RegistryError> {
        let definition = self.get(name)?;
        format_from_values(&definition.segments, values).map_err(|kind| RegistryError::Format {
            name: name.to_string(),
            kind,
        })
    }

    /// Validate a configuration value against the named definition.
    ///
    /// [`ANY_RESOURCE_ID`] and [`ANY_RESOURCE_ID_OR_EMPTY`] check the value as
    /// an untyped ARM ID unless a definition was registered under that name.
    pub fn validate(
        &self,
        name: &str,
        input: &Value,
        key: &str,
        insensitively: bool,
    ) -> Result<(Vec<String>, Vec<ValidationError>), RegistryError> {
        if !self.has(name) {
            match name {
                ANY_RESOURCE_ID => return Ok(ArmResourceId::validate(input, key)),
                ANY_RESOURCE_ID_OR_EMPTY => return Ok(ArmResourceId::validate_or_empty(input, key)),
                _ => {}
            }
        }

        let definition = self.get(name)?;
        Ok(validate_value_with(
            &definition.name,
            &definition.segments,
            input,
            key,
            insensitively,
        ))
    }

    /// Names of every definition the input parses against, ignoring casing
    pub fn detect(&self, input: &str) -> Vec<&str> {
        let matches: Vec<&str> = self
            .definitions
            .values()
            .filter(|d| {
                Parser::new(&d.name, &d.segments)
                    .parse(input, true)
                    .is_ok()
            })
            .map(|d| d.name.as_str())
            .collect();

        debug!(input, matches = ?matches, "detected ID types");
        matches
    }

    /// Re-render an ID in canonical casing.
    ///
    /// Without a type name the input must match exactly one definition.
    pub fn normalize(&self, input: &str, name: Option<&str>) -> Result<String, RegistryError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => {
                let candidates = self.detect(input);
                match candidates.as_slice() {
                    [] => return Err(RegistryError::NoMatch(input.to_string())),
                    [single] => single.to_string(),
                    _ => {
                        return Err(RegistryError::Ambiguous {
                            input: input.to_string(),
                            candidates: candidates.iter().map(|c| c.to_string()).collect(),
                        });
                    }
                }
            }
        };

        let result = self.parse(&name, input, true)?;
        self.format(&name, &result.parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::SegmentKind;
    use serde_json::json;

    const PROJECT: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.DataMigration/services/service1/projects/project1";

    fn widget() -> IdDefinition {
        IdDefinition::new(
            "WidgetId",
            "Widget",
            vec![
                Segment::static_segment("staticSubscriptions", "subscriptions"),
                Segment::subscription_id("subscriptionId"),
                Segment::static_segment("staticProviders", "providers"),
                Segment::resource_provider("staticContosoWidgets", "Contoso.Widgets"),
                Segment::static_segment("staticWidgets", "widgets"),
                Segment::user_specified("widgetName", "widgetValue"),
            ],
        )
    }

    #[test]
    fn test_register_and_get_definition() {
        let mut registry = IdRegistry::new();
        registry.register(widget());

        let definition = registry.get("WidgetId").unwrap();
        assert_eq!(definition.description, "Widget");
        assert_eq!(definition.labels(), vec!["subscriptionId", "widgetName"]);
    }

    #[test]
    fn test_get_unknown_definition() {
        let registry = IdRegistry::new();
        let result = registry.get("unknown");
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown ID type"));
        }
    }

    #[test]
    fn test_has_definition() {
        let mut registry = IdRegistry::new();
        assert!(!registry.has("WidgetId"));

        registry.register(widget());
        assert!(registry.has("WidgetId"));
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = IdRegistry::with_builtins();
        let mut replacement = widget();
        replacement.name = "ProjectId".to_string();
        registry.register(replacement);

        assert_eq!(registry.get("ProjectId").unwrap().description, "Widget");
    }

    #[test]
    fn test_list_is_sorted() {
        let registry = IdRegistry::with_builtins();
        let names: Vec<&str> = registry.list().iter().map(|d| d.name.as_str()).collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"ProjectId"));
        assert!(names.contains(&"NestedItemId"));
    }

    #[test]
    fn test_builtin_examples_parse() {
        let registry = IdRegistry::with_builtins();

        for definition in registry.list() {
            let example = definition.example();
            assert!(
                registry.parse(&definition.name, &example, false).is_ok(),
                "{} example {:?} should parse",
                definition.name,
                example
            );
        }
    }

    #[test]
    fn test_parse_and_format() {
        let registry = IdRegistry::with_builtins();
        let result = registry.parse("ProjectId", PROJECT, false).unwrap();

        assert_eq!(result.get("projectName"), Some("project1"));
        assert_eq!(registry.format("ProjectId", &result.parsed).unwrap(), PROJECT);
    }

    #[test]
    fn test_format_missing_value() {
        let registry = IdRegistry::with_builtins();
        let err = registry.format("ProjectId", &BTreeMap::new()).unwrap_err();

        assert!(matches!(
            err,
            RegistryError::Format {
                kind: ParseErrorKind::SegmentNotSpecified { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_detect() {
        let registry = IdRegistry::with_builtins();

        assert_eq!(registry.detect(PROJECT), vec!["ProjectId"]);
        assert_eq!(
            registry.detect("/subscriptions/00000000-0000-0000-0000-000000000000"),
            vec!["SubscriptionId"]
        );
        assert!(registry.detect("/tenants/abc").is_empty());
    }

    #[test]
    fn test_normalize_recases_static_segments() {
        let registry = IdRegistry::with_builtins();
        let input = PROJECT
            .replace("resourceGroups", "resourcegroups")
            .replace("Microsoft.DataMigration", "microsoft.datamigration");

        assert_eq!(registry.normalize(&input, None).unwrap(), PROJECT);
        assert_eq!(registry.normalize(&input, Some("ProjectId")).unwrap(), PROJECT);
    }

    #[test]
    fn test_normalize_no_match() {
        let registry = IdRegistry::with_builtins();
        assert!(matches!(
            registry.normalize("/tenants/abc", None),
            Err(RegistryError::NoMatch(_))
        ));
    }

    #[test]
    fn test_normalize_ambiguous() {
        let mut registry = IdRegistry::new();
        registry.register(widget());
        let mut twin = widget();
        twin.name = "TwinId".to_string();
        registry.register(twin);

        let err = registry
            .normalize(
                "/subscriptions/sub1/providers/Contoso.Widgets/widgets/w1",
                None,
            )
            .unwrap_err();
        assert!(err.to_string().contains("WidgetId, TwinId") || err.to_string().contains("TwinId, WidgetId"));
    }

    #[test]
    fn test_validate_through_registry() {
        let registry = IdRegistry::with_builtins();

        let (warnings, errors) = registry
            .validate("ResourceGroupId", &json!("/subscriptions/sub1/resourceGroups/rg1"), "scope", false)
            .unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(errors.is_empty());

        assert!(registry.validate("Nope", &json!("x"), "scope", false).is_err());
    }

    #[test]
    fn test_validate_any_resource_id() {
        let registry = IdRegistry::with_builtins();

        let (_, errors) = registry
            .validate(
                ANY_RESOURCE_ID,
                &json!("/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Web/sites/s1"),
                "target_resource_id",
                false,
            )
            .unwrap();
        assert!(errors.is_empty());

        let (_, errors) = registry
            .validate(ANY_RESOURCE_ID, &json!(""), "target_resource_id", false)
            .unwrap();
        assert_eq!(errors.len(), 1);

        let (_, errors) = registry
            .validate(ANY_RESOURCE_ID_OR_EMPTY, &json!(""), "target_resource_id", false)
            .unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_registered_definition_shadows_any_resource_id() {
        let mut registry = IdRegistry::new();
        let mut shadow = widget();
        shadow.name = ANY_RESOURCE_ID.to_string();
        registry.register(shadow);

        let (_, errors) = registry
            .validate(
                ANY_RESOURCE_ID,
                &json!("/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1"),
                "id",
                false,
            )
            .unwrap();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_nested_item_definitions_use_base_uri() {
        let registry = IdRegistry::with_builtins();
        let definition = registry.get("VersionlessNestedItemId").unwrap();
        assert_eq!(definition.segments[0].kind, SegmentKind::DataPlaneBaseUri);

        let normalized = registry
            .normalize("https://my-vault.vault.azure.net/SECRETS/s1", Some("VersionlessNestedItemId"))
            .unwrap();
        assert_eq!(normalized, "https://my-vault.vault.azure.net/secrets/s1");
    }
}
