//! Recovery Services backup protected items

use serde::{Deserialize, Serialize};

use crate::constants::{HealthStatus, ProtectionState};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureFileShareProtectedItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_state: Option<ProtectionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
}

/// Shared by the IaaS, classic compute and compute virtual machine items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IaasVmProtectedItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_machine_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_state: Option<ProtectionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_backup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
}

polymorphic! {
    /// A backed-up item, keyed on `protectedItemType`
    pub enum ProtectedItem("protectedItemType") {
        AzureFileShare(AzureFileShareProtectedItem) => "AzureFileShareProtectedItem",
        AzureIaasVm(IaasVmProtectedItem) => "AzureIaaSVMProtectedItem",
        ClassicComputeVm(IaasVmProtectedItem) => "Microsoft.ClassicCompute/virtualMachines",
        ComputeVm(IaasVmProtectedItem) => "Microsoft.Compute/virtualMachines",
    }
}

impl ProtectedItem {
    pub fn protection_state(&self) -> Option<ProtectionState> {
        match self {
            ProtectedItem::AzureFileShare(item) => item.protection_state.clone(),
            ProtectedItem::AzureIaasVm(item)
            | ProtectedItem::ClassicComputeVm(item)
            | ProtectedItem::ComputeVm(item) => item.protection_state.clone(),
            ProtectedItem::Unknown(raw) => raw
                .values
                .get("protectionState")
                .and_then(|v| v.as_str())
                .map(ProtectionState::from),
        }
    }

    /// ID of the resource being backed up
    pub fn source_resource_id(&self) -> Option<&str> {
        match self {
            ProtectedItem::AzureFileShare(item) => item.source_resource_id.as_deref(),
            ProtectedItem::AzureIaasVm(item)
            | ProtectedItem::ClassicComputeVm(item)
            | ProtectedItem::ComputeVm(item) => item.source_resource_id.as_deref(),
            ProtectedItem::Unknown(raw) => raw.values.get("sourceResourceId").and_then(|v| v.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymorphic::Polymorphic;
    use serde_json::json;

    #[test]
    fn test_decode_compute_vm() {
        let item = ProtectedItem::decode(
            r#"{
                "protectedItemType": "Microsoft.Compute/virtualMachines",
                "friendlyName": "vm1",
                "protectionState": "protected",
                "healthStatus": "Passed",
                "sourceResourceId": "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Compute/virtualMachines/vm1"
            }"#,
        )
        .unwrap()
        .unwrap();

        let ProtectedItem::ComputeVm(vm) = &item else {
            panic!("expected a compute VM, got {:?}", item);
        };
        assert_eq!(vm.health_status, Some(HealthStatus::Passed));
        assert_eq!(item.protection_state(), Some(ProtectionState::Protected));
        assert!(item.source_resource_id().unwrap().ends_with("/vm1"));
    }

    #[test]
    fn test_decode_distinguishes_vm_shapes() {
        let classic = ProtectedItem::decode(
            r#"{"protectedItemType": "microsoft.classiccompute/virtualmachines"}"#,
        )
        .unwrap()
        .unwrap();
        assert!(matches!(classic, ProtectedItem::ClassicComputeVm(_)));

        let iaas = ProtectedItem::decode(r#"{"protectedItemType": "AzureIaaSVMProtectedItem"}"#)
            .unwrap()
            .unwrap();
        assert!(matches!(iaas, ProtectedItem::AzureIaasVm(_)));
    }

    #[test]
    fn test_serialize_file_share_reinserts_discriminator() {
        let item = ProtectedItem::AzureFileShare(AzureFileShareProtectedItem {
            friendly_name: Some("share1".to_string()),
            protection_state: Some(ProtectionState::IrPending),
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "protectedItemType": "AzureFileShareProtectedItem",
                "friendlyName": "share1",
                "protectionState": "IRPending"
            })
        );
    }

    #[test]
    fn test_decode_unknown_item() {
        let item = ProtectedItem::decode(
            r#"{"protectedItemType": "AzureVmWorkloadSQLDatabase", "protectionState": "ProtectionStopped"}"#,
        )
        .unwrap()
        .unwrap();

        assert!(matches!(item, ProtectedItem::Unknown(_)));
        assert_eq!(item.protection_state(), Some(ProtectionState::ProtectionStopped));
        assert_eq!(item.source_resource_id(), None);
    }
}
