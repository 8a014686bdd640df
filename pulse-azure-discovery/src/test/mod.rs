// pulse - bitdrift's observability proxy
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use crate::compute::{
  InstanceViewStatus,
  NetworkInterfaceReference,
  NetworkProfile,
  OsDisk,
  StatusLevel,
  StorageProfile,
  Tags,
  VirtualMachine,
  VirtualMachineInstanceView,
  VirtualMachineProperties,
  VirtualMachineScaleSetVm,
  VirtualMachineScaleSetVmInstanceView,
  VirtualMachineScaleSetVmProperties,
};
use crate::vm::{PowerState, VmInfo};

pub const PROVISIONING_SUCCEEDED: &str = "ProvisioningState/succeeded";

#[must_use]
pub fn make_status(code: &str) -> InstanceViewStatus {
  InstanceViewStatus {
    code: Some(code.to_string()),
    level: Some(StatusLevel::Info),
    display_status: Some(format!("display {code}")),
    message: None,
  }
}

#[must_use]
pub fn make_statuses(codes: &[&str]) -> Vec<InstanceViewStatus> {
  codes.iter().map(|code| make_status(code)).collect()
}

#[must_use]
pub fn make_storage_profile(os_type: &str) -> StorageProfile {
  StorageProfile {
    os_disk: Some(OsDisk {
      name: None,
      os_type: Some(os_type.to_string()),
    }),
  }
}

#[must_use]
pub fn make_network_profile(nic_ids: &[&str]) -> NetworkProfile {
  NetworkProfile {
    network_interfaces: Some(
      nic_ids
        .iter()
        .map(|id| NetworkInterfaceReference {
          id: Some((*id).to_string()),
          properties: None,
        })
        .collect(),
    ),
  }
}

/// A Linux VM in westeurope with no network interfaces.
#[must_use]
pub fn make_vm(tags: Option<Tags>, statuses: Option<Vec<InstanceViewStatus>>) -> VirtualMachine {
  VirtualMachine {
    id: Some("test".to_string()),
    name: Some("name".to_string()),
    resource_type: Some("type".to_string()),
    location: Some("westeurope".to_string()),
    tags,
    properties: Some(VirtualMachineProperties {
      storage_profile: Some(make_storage_profile("Linux")),
      network_profile: Some(make_network_profile(&[])),
      instance_view: Some(VirtualMachineInstanceView {
        statuses,
        ..Default::default()
      }),
      ..Default::default()
    }),
  }
}

/// The scale set counterpart of `make_vm`.
#[must_use]
pub fn make_scale_set_vm(
  tags: Option<Tags>,
  statuses: Option<Vec<InstanceViewStatus>>,
) -> VirtualMachineScaleSetVm {
  VirtualMachineScaleSetVm {
    id: Some("test".to_string()),
    name: Some("name".to_string()),
    resource_type: Some("type".to_string()),
    location: Some("westeurope".to_string()),
    tags,
    properties: Some(VirtualMachineScaleSetVmProperties {
      storage_profile: Some(make_storage_profile("Linux")),
      network_profile: Some(make_network_profile(&[])),
      instance_view: Some(VirtualMachineScaleSetVmInstanceView {
        statuses,
        ..Default::default()
      }),
      ..Default::default()
    }),
    ..Default::default()
  }
}

/// The record expected from `make_vm` or `make_scale_set_vm`.
#[must_use]
pub fn make_vm_info(tags: Tags, scale_set: &str, power_state: PowerState) -> VmInfo {
  VmInfo {
    id: "test".to_string(),
    name: "name".to_string(),
    vm_type: "type".to_string(),
    location: "westeurope".to_string(),
    os_type: "Linux".to_string(),
    tags,
    network_interfaces: Vec::new(),
    scale_set: scale_set.to_string(),
    power_state,
  }
}
