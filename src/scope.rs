//! Classification of ARM scopes
//!
//! Scoped operations (policy remediations, role assignments, service
//! connectors) can target a management group, a subscription, a resource
//! group or a single resource. The shapes are checked in that order: a
//! management group path isn't a valid subscription path and would otherwise
//! surface a confusing lower-level error.

use std::fmt;

use tracing::debug;

use crate::azure::ArmResourceId;
use crate::ids::common::{ManagementGroupId, ResourceGroupId, SubscriptionId};
use crate::resourceids::ResourceId;

/// Which kind of scope an ID addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeType {
    AtManagementGroup,
    AtSubscription,
    AtResourceGroup,
    AtResource,
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScopeType::AtManagementGroup => "AtManagementGroup",
            ScopeType::AtSubscription => "AtSubscription",
            ScopeType::AtResourceGroup => "AtResourceGroup",
            ScopeType::AtResource => "AtResource",
        };
        write!(f, "{}", name)
    }
}

/// A classified scope with the identifiers of the matching shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningScope {
    AtManagementGroup(ManagementGroupId),
    AtSubscription(SubscriptionId),
    AtResourceGroup(ResourceGroupId),
    AtResource(ArmResourceId),
}

impl ProvisioningScope {
    pub fn scope_type(&self) -> ScopeType {
        match self {
            ProvisioningScope::AtManagementGroup(_) => ScopeType::AtManagementGroup,
            ProvisioningScope::AtSubscription(_) => ScopeType::AtSubscription,
            ProvisioningScope::AtResourceGroup(_) => ScopeType::AtResourceGroup,
            ProvisioningScope::AtResource(_) => ScopeType::AtResource,
        }
    }

    /// The subscription, for every shape except a management group
    pub fn subscription_id(&self) -> Option<&str> {
        match self {
            ProvisioningScope::AtManagementGroup(_) => None,
            ProvisioningScope::AtSubscription(id) => Some(&id.subscription_id),
            ProvisioningScope::AtResourceGroup(id) => Some(&id.subscription_id),
            ProvisioningScope::AtResource(id) => Some(&id.subscription_id),
        }
    }

    /// The resource group, for resource group and resource scopes
    pub fn resource_group(&self) -> Option<&str> {
        match self {
            ProvisioningScope::AtResourceGroup(id) => Some(&id.resource_group_name),
            ProvisioningScope::AtResource(id) => id.resource_group.as_deref(),
            _ => None,
        }
    }

    pub fn management_group_id(&self) -> Option<&str> {
        match self {
            ProvisioningScope::AtManagementGroup(id) => Some(&id.group_id),
            _ => None,
        }
    }

    /// Render the canonical scope ID
    pub fn id(&self) -> String {
        match self {
            ProvisioningScope::AtManagementGroup(id) => id.id(),
            ProvisioningScope::AtSubscription(id) => id.id(),
            ProvisioningScope::AtResourceGroup(id) => id.id(),
            ProvisioningScope::AtResource(id) => id.id(),
        }
    }
}

/// Error returned when an ID matches none of the known scope shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeError {
    pub input: String,
    pub reason: String,
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a management group, subscription, resource group or resource ID: {}",
            self.input, self.reason
        )
    }
}

impl std::error::Error for ScopeError {}

/// Classify `input` as a management group, subscription, resource group or resource scope
pub fn classify_scope(input: &str) -> Result<ProvisioningScope, ScopeError> {
    if let Ok(id) = ManagementGroupId::parse_insensitively(input) {
        debug!(input, "classified scope as management group");
        return Ok(ProvisioningScope::AtManagementGroup(id));
    }

    if let Ok(id) = SubscriptionId::parse_insensitively(input) {
        debug!(input, "classified scope as subscription");
        return Ok(ProvisioningScope::AtSubscription(id));
    }

    let id = ArmResourceId::parse(input).map_err(|e| ScopeError {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    match (&id.resource_group, id.is_resource()) {
        (_, true) => {
            debug!(input, "classified scope as resource");
            Ok(ProvisioningScope::AtResource(id))
        }
        (Some(resource_group), false) if id.provider.is_none() && id.path.is_empty() => {
            debug!(input, "classified scope as resource group");
            Ok(ProvisioningScope::AtResourceGroup(ResourceGroupId::new(
                id.subscription_id.clone(),
                resource_group.clone(),
            )))
        }
        _ => Err(ScopeError {
            input: input.to_string(),
            reason: "the path neither ends at a resource group nor names a resource".to_string(),
        }),
    }
}
