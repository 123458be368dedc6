use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// The kind of a single path segment within a resource ID template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A fixed literal, e.g. `resourceGroups`
    Static,
    /// The subscription ID value
    Subscription,
    /// The resource group name value
    ResourceGroup,
    /// A resource provider namespace, e.g. `Microsoft.Compute`
    ResourceProvider,
    /// A name chosen by the user, e.g. a virtual machine name
    UserSpecified,
    /// An arbitrary ARM scope spanning any number of components
    Scope,
    /// The `scheme://host` root of a data-plane identifier
    DataPlaneBaseUri,
    /// One of a closed set of values
    Constant,
}

impl SegmentKind {
    /// Whether the segment captures a value when parsed
    pub fn captures_value(&self) -> bool {
        !matches!(self, SegmentKind::Static | SegmentKind::ResourceProvider)
    }

    /// Name used in configuration files and CLI output
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Static => "static",
            SegmentKind::Subscription => "subscription",
            SegmentKind::ResourceGroup => "resourceGroup",
            SegmentKind::ResourceProvider => "provider",
            SegmentKind::UserSpecified => "userSpecified",
            SegmentKind::Scope => "scope",
            SegmentKind::DataPlaneBaseUri => "baseUri",
            SegmentKind::Constant => "constant",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SegmentKind {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "static" => Ok(SegmentKind::Static),
            "subscription" => Ok(SegmentKind::Subscription),
            "resourceGroup" => Ok(SegmentKind::ResourceGroup),
            "provider" => Ok(SegmentKind::ResourceProvider),
            "userSpecified" => Ok(SegmentKind::UserSpecified),
            "scope" => Ok(SegmentKind::Scope),
            "baseUri" => Ok(SegmentKind::DataPlaneBaseUri),
            "constant" => Ok(SegmentKind::Constant),
            _ => Err(format!(
                "unknown segment kind {:?} (expected static, subscription, resourceGroup, provider, userSpecified, scope, baseUri or constant)",
                input
            )),
        }
    }
}

/// One step in a resource ID's path template.
///
/// Built-in identifier types declare their segments as `&'static [Segment]`
/// using the `const fn` constructors below; user-defined types from the
/// configuration file use owned values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub kind: SegmentKind,
    pub label: Cow<'static, str>,
    pub fixed_value: Option<Cow<'static, str>>,
    pub possible_values: Cow<'static, [Cow<'static, str>]>,
    pub example_value: Cow<'static, str>,
}

const NO_VALUES: &[Cow<'static, str>] = &[];

impl Segment {
    const fn build(
        kind: SegmentKind,
        label: &'static str,
        fixed_value: Option<&'static str>,
        example_value: &'static str,
    ) -> Self {
        let fixed_value = match fixed_value {
            Some(value) => Some(Cow::Borrowed(value)),
            None => None,
        };

        Self {
            kind,
            label: Cow::Borrowed(label),
            fixed_value,
            possible_values: Cow::Borrowed(NO_VALUES),
            example_value: Cow::Borrowed(example_value),
        }
    }

    pub const fn static_segment(label: &'static str, value: &'static str) -> Self {
        Self::build(SegmentKind::Static, label, Some(value), value)
    }

    pub const fn resource_provider(label: &'static str, namespace: &'static str) -> Self {
        Self::build(SegmentKind::ResourceProvider, label, Some(namespace), namespace)
    }

    pub const fn subscription_id(label: &'static str) -> Self {
        Self::build(
            SegmentKind::Subscription,
            label,
            None,
            "12345678-1234-9876-4563-123456789012",
        )
    }

    pub const fn resource_group(label: &'static str) -> Self {
        Self::build(SegmentKind::ResourceGroup, label, None, "example-resource-group")
    }

    pub const fn user_specified(label: &'static str, example: &'static str) -> Self {
        Self::build(SegmentKind::UserSpecified, label, None, example)
    }

    pub const fn scope(label: &'static str) -> Self {
        Self::build(
            SegmentKind::Scope,
            label,
            None,
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/some-resource-group",
        )
    }

    pub const fn data_plane_base_uri(label: &'static str) -> Self {
        Self::build(
            SegmentKind::DataPlaneBaseUri,
            label,
            None,
            "https://example-keyvault.vault.azure.net",
        )
    }

    pub const fn constant(
        label: &'static str,
        possible_values: &'static [Cow<'static, str>],
        example: &'static str,
    ) -> Self {
        Self {
            kind: SegmentKind::Constant,
            label: Cow::Borrowed(label),
            fixed_value: None,
            possible_values: Cow::Borrowed(possible_values),
            example_value: Cow::Borrowed(example),
        }
    }

    /// Build a segment from owned values (configuration-defined types)
    pub fn owned(
        kind: SegmentKind,
        label: String,
        fixed_value: Option<String>,
        possible_values: Vec<String>,
        example_value: String,
    ) -> Self {
        Self {
            kind,
            label: Cow::Owned(label),
            fixed_value: fixed_value.map(Cow::Owned),
            possible_values: Cow::Owned(possible_values.into_iter().map(Cow::Owned).collect()),
            example_value: Cow::Owned(example_value),
        }
    }

    /// The literal for static and provider segments
    pub fn literal(&self) -> &str {
        self.fixed_value.as_deref().unwrap_or("")
    }
}

/// Render an example ID for a segment list using each segment's example value
pub fn example_id(segments: &[Segment]) -> String {
    super::formatter::format_segments(segments, |segment| Some(&*segment.example_value))
}
