//! armid configuration file
//!
//! ```yaml
//! apiVersion: armid.io/v1
//! kind: Config
//! spec:
//!   insensitive: false
//!   output: text
//!   types:
//!     - name: WidgetId
//!       segments:
//!         - { kind: static, value: subscriptions }
//!         - { kind: subscription, label: subscriptionId }
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::registry::{IdDefinition, IdRegistry};
use crate::resourceids::{Segment, SegmentKind};
use crate::traits::FileSystem;

pub const API_VERSION: &str = "armid.io/v1";
pub const KIND: &str = "Config";

const LOCAL_CONFIG_FILE: &str = ".armid.yaml";
const ARMID_DIR: &str = ".armid";
const USER_CONFIG_FILE: &str = "config.yaml";

/// How commands print their results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Config file resource (Kubernetes-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResource {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub spec: ConfigSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSpec {
    /// Default parse mode for `parse` and `validate`
    #[serde(default)]
    pub insensitive: bool,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub types: Vec<TypeConfig>,
}

/// A user-defined identifier type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub segments: Vec<SegmentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Literal for `static` and `provider` segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Allowed values for `constant` segments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl SegmentConfig {
    fn to_segment(&self, type_name: &str) -> Result<Segment> {
        let kind: SegmentKind = self
            .kind
            .parse()
            .map_err(|e: String| anyhow::anyhow!("type {}: {}", type_name, e))?;

        let segment = match kind {
            SegmentKind::Static | SegmentKind::ResourceProvider => {
                let Some(value) = self.value.clone().filter(|v| !v.is_empty()) else {
                    bail!("type {}: {} segments need a value", type_name, kind);
                };
                let label = self
                    .label
                    .clone()
                    .unwrap_or_else(|| default_static_label(&value));
                Segment::owned(kind, label, Some(value.clone()), Vec::new(), value)
            }
            SegmentKind::Constant => {
                if self.values.is_empty() {
                    bail!("type {}: constant segments need at least one value", type_name);
                }
                let label = self.required_label(type_name, kind)?;
                let example = self.example.clone().unwrap_or_else(|| self.values[0].clone());
                Segment::owned(kind, label, None, self.values.clone(), example)
            }
            _ => {
                let mut segment = match kind {
                    SegmentKind::Subscription => Segment::subscription_id("subscriptionId"),
                    SegmentKind::ResourceGroup => Segment::resource_group("resourceGroupName"),
                    SegmentKind::Scope => Segment::scope("scope"),
                    SegmentKind::DataPlaneBaseUri => Segment::data_plane_base_uri("baseUri"),
                    _ => Segment::user_specified("name", ""),
                };

                if let Some(label) = &self.label {
                    segment.label = Cow::Owned(label.clone());
                } else if kind == SegmentKind::UserSpecified {
                    bail!("type {}: userSpecified segments need a label", type_name);
                }

                match &self.example {
                    Some(example) => segment.example_value = Cow::Owned(example.clone()),
                    None if kind == SegmentKind::UserSpecified => {
                        segment.example_value = Cow::Owned(format!("{}Value", segment.label));
                    }
                    None => {}
                }

                segment
            }
        };

        Ok(segment)
    }

    fn required_label(&self, type_name: &str, kind: SegmentKind) -> Result<String> {
        self.label
            .clone()
            .filter(|l| !l.is_empty())
            .with_context(|| format!("type {}: {} segments need a label", type_name, kind))
    }
}

/// `subscriptions` becomes `staticSubscriptions`, `Microsoft.Compute` becomes `staticMicrosoftCompute`
fn default_static_label(value: &str) -> String {
    let mut label = String::from("static");
    let mut upper = true;

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if upper {
                label.push(c.to_ascii_uppercase());
                upper = false;
            } else {
                label.push(c);
            }
        } else {
            upper = true;
        }
    }

    label
}

impl TypeConfig {
    /// Build and check the definition for this type
    pub fn to_definition(&self) -> Result<IdDefinition> {
        if self.name.trim().is_empty() {
            bail!("configured types need a name");
        }
        if self.segments.is_empty() {
            bail!("type {}: no segments", self.name);
        }

        let segments = self
            .segments
            .iter()
            .map(|s| s.to_segment(&self.name))
            .collect::<Result<Vec<_>>>()?;

        let mut labels = HashSet::new();
        for (index, segment) in segments.iter().enumerate() {
            if !labels.insert(segment.label.to_string()) {
                bail!("type {}: duplicate segment label {}", self.name, segment.label);
            }
            if segment.kind == SegmentKind::DataPlaneBaseUri && index != 0 {
                bail!("type {}: a baseUri segment must come first", self.name);
            }
        }

        if segments.iter().filter(|s| s.kind == SegmentKind::Scope).count() > 1 {
            bail!("type {}: at most one scope segment is allowed", self.name);
        }

        Ok(IdDefinition::new(
            self.name.clone(),
            self.description.clone().unwrap_or_else(|| self.name.clone()),
            segments,
        ))
    }
}

/// Loaded configuration, with the file it came from
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: Option<PathBuf>,
    pub spec: ConfigSpec,
}

impl Config {
    /// Files checked when no config path is given, in order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(ARMID_DIR).join(USER_CONFIG_FILE));
        }
        paths
    }

    /// Load the config from `explicit`, or the first default path that exists
    pub fn load(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !fs.is_file(path) {
                bail!("Config file not found: {:?}", path);
            }
            return Self::load_from(fs, path);
        }

        Self::load_first(fs, &Self::default_paths())
    }

    /// Load the first existing file in `paths`; defaults when none exists
    pub fn load_first(fs: &dyn FileSystem, paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if fs.is_file(path) {
                return Self::load_from(fs, path);
            }
            debug!(path = ?path, "no config file");
        }

        debug!("using default configuration");
        Ok(Self::default())
    }

    fn load_from(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let content = fs.read_to_string(path)?;
        let resource: ConfigResource = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        if resource.api_version != API_VERSION {
            bail!(
                "Unsupported apiVersion {:?} in {:?} (expected {})",
                resource.api_version,
                path,
                API_VERSION
            );
        }
        if resource.kind != KIND {
            bail!("Unexpected kind {:?} in {:?} (expected {})", resource.kind, path, KIND);
        }

        debug!(path = ?path, types = resource.spec.types.len(), "loaded config");

        Ok(Self {
            source: Some(path.to_path_buf()),
            spec: resource.spec,
        })
    }

    /// The built-in types plus those configured, which take precedence
    pub fn registry(&self) -> Result<IdRegistry> {
        let mut registry = IdRegistry::with_builtins();

        for type_config in &self.spec.types {
            registry.register(type_config.to_definition()?);
        }

        Ok(registry)
    }
}
