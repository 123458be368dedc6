//! Identifiers shared across many Azure services

use crate::resource_id;
use crate::resourceids::Segment;

resource_id! {
    /// SubscriptionId is a struct representing the Resource ID for a Subscription
    pub struct SubscriptionId("Subscription") {
        subscription_id => "subscriptionId",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
    ]
}

resource_id! {
    /// ResourceGroupId is a struct representing the Resource ID for a Resource Group
    pub struct ResourceGroupId("Resource Group") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
    ]
}

resource_id! {
    /// ManagementGroupId is a struct representing the Resource ID for a Management Group
    pub struct ManagementGroupId("Management Group") {
        group_id => "groupId",
    }
    segments: [
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftManagement", "Microsoft.Management"),
        Segment::static_segment("staticManagementGroups", "managementGroups"),
        Segment::user_specified("groupId", "groupIdValue"),
    ]
}

resource_id! {
    /// KeyVaultId is a struct representing the Resource ID for a Key Vault
    pub struct KeyVaultId("Key Vault") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        vault_name => "vaultName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
        Segment::static_segment("staticVaults", "vaults"),
        Segment::user_specified("vaultName", "vaultValue"),
    ]
}

resource_id! {
    /// StorageAccountId is a struct representing the Resource ID for a Storage Account
    pub struct StorageAccountId("Storage Account") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        storage_account_name => "storageAccountName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftStorage", "Microsoft.Storage"),
        Segment::static_segment("staticStorageAccounts", "storageAccounts"),
        Segment::user_specified("storageAccountName", "storageAccountValue"),
    ]
}

resource_id! {
    /// SubnetId is a struct representing the Resource ID for a Subnet
    pub struct SubnetId("Subnet") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        virtual_network_name => "virtualNetworkName",
        subnet_name => "subnetName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftNetwork", "Microsoft.Network"),
        Segment::static_segment("staticVirtualNetworks", "virtualNetworks"),
        Segment::user_specified("virtualNetworkName", "virtualNetworkValue"),
        Segment::static_segment("staticSubnets", "subnets"),
        Segment::user_specified("subnetName", "subnetValue"),
    ]
}

resource_id! {
    /// AppServicePlanId is a struct representing the Resource ID for an App Service Plan
    pub struct AppServicePlanId("App Service Plan") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        server_farm_name => "serverFarmName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftWeb", "Microsoft.Web"),
        Segment::static_segment("staticServerFarms", "serverFarms"),
        Segment::user_specified("serverFarmName", "serverFarmValue"),
    ]
}

resource_id! {
    /// UserAssignedIdentityId is a struct representing the Resource ID for a User Assigned Identity
    pub struct UserAssignedIdentityId("User Assigned Identity") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        user_assigned_identity_name => "userAssignedIdentityName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftManagedIdentity", "Microsoft.ManagedIdentity"),
        Segment::static_segment("staticUserAssignedIdentities", "userAssignedIdentities"),
        Segment::user_specified("userAssignedIdentityName", "userAssignedIdentityValue"),
    ]
}

resource_id! {
    /// KubernetesClusterId is a struct representing the Resource ID for a Kubernetes Cluster
    pub struct KubernetesClusterId("Kubernetes Cluster") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        managed_cluster_name => "managedClusterName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftContainerService", "Microsoft.ContainerService"),
        Segment::static_segment("staticManagedClusters", "managedClusters"),
        Segment::user_specified("managedClusterName", "managedClusterValue"),
    ]
}

resource_id! {
    /// VirtualMachineId is a struct representing the Resource ID for a Virtual Machine
    pub struct VirtualMachineId("Virtual Machine") {
        subscription_id => "subscriptionId",
        resource_group_name => "resourceGroupName",
        virtual_machine_name => "virtualMachineName",
    }
    segments: [
        Segment::static_segment("staticSubscriptions", "subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::static_segment("staticResourceGroups", "resourceGroups"),
        Segment::resource_group("resourceGroupName"),
        Segment::static_segment("staticProviders", "providers"),
        Segment::resource_provider("staticMicrosoftCompute", "Microsoft.Compute"),
        Segment::static_segment("staticVirtualMachines", "virtualMachines"),
        Segment::user_specified("virtualMachineName", "virtualMachineValue"),
    ]
}

impl ResourceGroupId {
    /// The subscription containing this resource group
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}

impl SubnetId {
    /// The virtual network containing this subnet, as an ARM ID
    pub fn virtual_network_id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/virtualNetworks/{}",
            self.subscription_id, self.resource_group_name, self.virtual_network_name
        )
    }
}
