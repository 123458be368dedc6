//! Recovery Services (backup) identifiers

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// ProtectedItemId is a struct representing the Resource ID for a Backup Protected Item
    pub struct ProtectedItemId("Protected Item") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        vault_name => "vaultName",
        backup_fabric_name => "backupFabricName",
        protection_container_name => "protectionContainerName",
        protected_item_name => "protectedItemName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftRecoveryServices", "Microsoft.RecoveryServices"),
        Segment::static_segment("staticVaults", "vaults"),
        Segment::user_specified("vaultName", "vaultValue"),
        Segment::static_segment("staticBackupFabrics", "backupFabrics"),
        Segment::user_specified("backupFabricName", "backupFabricValue"),
        Segment::static_segment("staticProtectionContainers", "protectionContainers"),
        Segment::user_specified("protectionContainerName", "protectionContainerValue"),
        Segment::static_segment("staticProtectedItems", "protectedItems"),
        Segment::user_specified("protectedItemName", "protectedItemValue"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::ResourceId;

    #[test]
    fn test_protected_item_with_semicolons_in_names() {
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/rg1/providers/Microsoft.RecoveryServices/vaults/vault1/backupFabrics/Azure/protectionContainers/iaasvmcontainer;iaasvmcontainerv2;rg1;vm1/protectedItems/vm;iaasvmcontainerv2;rg1;vm1";
        let id = ProtectedItemId::parse(input).unwrap();

        assert_eq!(id.backup_fabric_name, "Azure");
        assert_eq!(id.protection_container_name, "iaasvmcontainer;iaasvmcontainerv2;rg1;vm1");
        assert_eq!(id.protected_item_name, "vm;iaasvmcontainerv2;rg1;vm1");
        assert_eq!(id.id(), input);
    }

    #[test]
    fn test_protected_item_lowercase_from_api() {
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourcegroups/rg1/providers/Microsoft.RecoveryServices/vaults/vault1/backupFabrics/Azure/protectionContainers/c1/protecteditems/i1";

        assert!(ProtectedItemId::parse(input).is_err());
        assert_eq!(
            ProtectedItemId::parse_insensitively(input).unwrap().protected_item_name,
            "i1"
        );
    }
}
