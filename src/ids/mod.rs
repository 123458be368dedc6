//! Built-in identifier types
//!
//! Each submodule mirrors one Azure service; the types are thin wrappers
//! generated by [`resource_id!`](crate::resource_id) over the shared codec.

pub mod common;
pub mod containerregistry;
pub mod datamigration;
pub mod keyvault;
pub mod recoveryservices;
pub mod servicelinker;

pub use common::{
    AppServicePlanId, KeyVaultId, KubernetesClusterId, ManagementGroupId, ResourceGroupId,
    StorageAccountId, SubnetId, SubscriptionId, UserAssignedIdentityId, VirtualMachineId,
};
pub use containerregistry::{RegistryId, RegistryTaskId};
pub use datamigration::{ProjectId, ServiceId, TaskId};
pub use keyvault::{NestedItemId, NestedItemType};
pub use recoveryservices::ProtectedItemId;
pub use servicelinker::ScopedLinkerId;
