//! Container Registry identifiers

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// RegistryId is a struct representing the Resource ID for a Container Registry
    pub struct RegistryId("Registry") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        registry_name => "registryName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftContainerRegistry", "Microsoft.ContainerRegistry"),
        Segment::static_segment("staticRegistries", "registries"),
        Segment::user_specified("registryName", "registryValue"),
    ]
}

resource_id! {
    /// RegistryTaskId is a struct representing the Resource ID for a Container Registry Task
    pub struct RegistryTaskId("Registry Task") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        registry_name => "registryName",
        task_name => "taskName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftContainerRegistry", "Microsoft.ContainerRegistry"),
        Segment::static_segment("staticRegistries", "registries"),
        Segment::user_specified("registryName", "registryValue"),
        Segment::static_segment("staticTasks", "tasks"),
        Segment::user_specified("taskName", "taskValue"),
    ]
}

impl RegistryTaskId {
    pub fn registry(&self) -> RegistryId {
        RegistryId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.registry_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::ResourceId;

    #[test]
    fn test_registry_task_round_trip() {
        let id = RegistryTaskId::new("12345678-1234-9876-4563-123456789012", "rg1", "acr1", "build");
        let parsed = RegistryTaskId::parse(&id.id()).unwrap();

        assert_eq!(parsed, id);
        assert_eq!(parsed.registry().registry_name, "acr1");
    }

    #[test]
    fn test_registry_id_provider_casing_is_canonicalised() {
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/rg1/providers/microsoft.containerregistry/registries/acr1";
        let id = RegistryId::parse(input).unwrap();

        assert!(id.id().contains("/providers/Microsoft.ContainerRegistry/"));
    }
}
