// pulse - bitdrift's observability proxy
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./vm_test.rs"]
mod vm_test;

use crate::compute::{
  self,
  InstanceViewStatus,
  NetworkProfile,
  StorageProfile,
  Tags,
  VirtualMachineScaleSet,
  VirtualMachineScaleSetVm,
};
use crate::resource::{AzureResource, ResourceIdError};
use serde::Serialize;
use std::fmt;

const POWER_STATE_PREFIX: &str = "PowerState/";

//
// PowerState
//

#[derive(Serialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
  Starting,
  Running,
  Stopping,
  Stopped,
  Deallocating,
  Deallocated,
  Unknown,
}

impl PowerState {
  fn from_code_suffix(suffix: &str) -> Option<Self> {
    match suffix {
      "starting" => Some(Self::Starting),
      "running" => Some(Self::Running),
      "stopping" => Some(Self::Stopping),
      "stopped" => Some(Self::Stopped),
      "deallocating" => Some(Self::Deallocating),
      "deallocated" => Some(Self::Deallocated),
      "unknown" => Some(Self::Unknown),
      _ => None,
    }
  }
}

impl From<&PowerState> for &str {
  fn from(state: &PowerState) -> Self {
    match state {
      PowerState::Starting => "starting",
      PowerState::Running => "running",
      PowerState::Stopping => "stopping",
      PowerState::Stopped => "stopped",
      PowerState::Deallocating => "deallocating",
      PowerState::Deallocated => "deallocated",
      PowerState::Unknown => "unknown",
    }
  }
}

impl fmt::Display for PowerState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s: &str = self.into();
    write!(f, "{s}")
  }
}

/// Derives the power state from an instance view status list. The first status with a
/// `PowerState/` code wins regardless of its position; all other codes are ignored.
#[must_use]
pub fn power_state(statuses: Option<&[InstanceViewStatus]>) -> PowerState {
  let Some(statuses) = statuses else {
    return PowerState::Unknown;
  };

  let Some(suffix) = statuses.iter().find_map(|status| {
    status
      .code
      .as_deref()
      .and_then(|code| code.strip_prefix(POWER_STATE_PREFIX))
  }) else {
    return PowerState::Unknown;
  };

  PowerState::from_code_suffix(suffix).unwrap_or_else(|| {
    log::debug!("unrecognized power state '{suffix}', treating as unknown");
    PowerState::Unknown
  })
}

//
// VmDescriptor
//

/// The fields shared by standalone and scale set VM descriptors.
pub trait VmDescriptor {
  fn id(&self) -> Option<&str>;
  fn name(&self) -> Option<&str>;
  fn resource_type(&self) -> Option<&str>;
  fn location(&self) -> Option<&str>;
  fn tags(&self) -> Option<&Tags>;
  fn storage_profile(&self) -> Option<&StorageProfile>;
  fn network_profile(&self) -> Option<&NetworkProfile>;
  fn statuses(&self) -> Option<&[InstanceViewStatus]>;
}

impl VmDescriptor for compute::VirtualMachine {
  fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  fn resource_type(&self) -> Option<&str> {
    self.resource_type.as_deref()
  }

  fn location(&self) -> Option<&str> {
    self.location.as_deref()
  }

  fn tags(&self) -> Option<&Tags> {
    self.tags.as_ref()
  }

  fn storage_profile(&self) -> Option<&StorageProfile> {
    self.properties.as_ref()?.storage_profile.as_ref()
  }

  fn network_profile(&self) -> Option<&NetworkProfile> {
    self.properties.as_ref()?.network_profile.as_ref()
  }

  fn statuses(&self) -> Option<&[InstanceViewStatus]> {
    self
      .properties
      .as_ref()?
      .instance_view
      .as_ref()?
      .statuses
      .as_deref()
  }
}

impl VmDescriptor for VirtualMachineScaleSetVm {
  fn id(&self) -> Option<&str> {
    self.id.as_deref()
  }

  fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  fn resource_type(&self) -> Option<&str> {
    self.resource_type.as_deref()
  }

  fn location(&self) -> Option<&str> {
    self.location.as_deref()
  }

  fn tags(&self) -> Option<&Tags> {
    self.tags.as_ref()
  }

  fn storage_profile(&self) -> Option<&StorageProfile> {
    self.properties.as_ref()?.storage_profile.as_ref()
  }

  fn network_profile(&self) -> Option<&NetworkProfile> {
    self.properties.as_ref()?.network_profile.as_ref()
  }

  fn statuses(&self) -> Option<&[InstanceViewStatus]> {
    self
      .properties
      .as_ref()?
      .instance_view
      .as_ref()?
      .statuses
      .as_deref()
  }
}

//
// VmInfo
//

/// A normalized VM as handed to target discovery. Built fresh from a descriptor snapshot; absent
/// source data is defaulted so every field is always populated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VmInfo {
  pub id: String,
  pub name: String,
  #[serde(rename = "type")]
  pub vm_type: String,
  pub location: String,
  pub os_type: String,
  pub tags: Tags,
  pub network_interfaces: Vec<String>,
  /// Empty unless the VM is a scale set member.
  pub scale_set: String,
  pub power_state: PowerState,
}

impl VmInfo {
  #[must_use]
  pub fn from_vm(vm: &compute::VirtualMachine) -> Self {
    Self::from_descriptor(vm, String::new())
  }

  #[must_use]
  pub fn from_scale_set_vm(vm: &VirtualMachineScaleSetVm, scale_set: &str) -> Self {
    Self::from_descriptor(vm, scale_set.to_string())
  }

  /// Normalizes every instance of a scale set, tagging each with the scale set's name.
  #[must_use]
  pub fn from_scale_set_members(
    scale_set: &VirtualMachineScaleSet,
    vms: &[VirtualMachineScaleSetVm],
  ) -> Vec<Self> {
    let scale_set_name = scale_set.name.as_deref().unwrap_or_else(|| {
      log::trace!("scale set has no name");
      ""
    });
    vms
      .iter()
      .map(|vm| Self::from_scale_set_vm(vm, scale_set_name))
      .collect()
  }

  fn from_descriptor(descriptor: &impl VmDescriptor, scale_set: String) -> Self {
    let name = descriptor.name().unwrap_or_default().to_string();

    let os_type = descriptor
      .storage_profile()
      .and_then(|profile| profile.os_disk.as_ref())
      .and_then(|disk| disk.os_type.clone())
      .unwrap_or_default();

    let network_interfaces = descriptor
      .network_profile()
      .and_then(|profile| profile.network_interfaces.as_ref())
      .map_or(&[][..], Vec::as_slice)
      .iter()
      .filter_map(|nic| {
        if nic.id.is_none() {
          log::trace!("skipping network interface without id on vm '{name}'");
        }
        nic.id.clone()
      })
      .collect();

    Self {
      id: required_field(descriptor.id(), "id", &name),
      vm_type: required_field(descriptor.resource_type(), "type", &name),
      location: required_field(descriptor.location(), "location", &name),
      os_type,
      tags: descriptor.tags().cloned().unwrap_or_default(),
      network_interfaces,
      scale_set,
      power_state: power_state(descriptor.statuses()),
      name,
    }
  }

  #[must_use]
  pub fn is_scale_set_member(&self) -> bool {
    !self.scale_set.is_empty()
  }

  /// Parses the resource group and name out of the VM's resource ID.
  pub fn resource(&self) -> Result<AzureResource, ResourceIdError> {
    AzureResource::from_id(&self.id)
  }
}

fn required_field(value: Option<&str>, field: &str, vm_name: &str) -> String {
  value.map_or_else(
    || {
      log::trace!("vm '{vm_name}' has no {field}, defaulting to empty");
      String::new()
    },
    ToString::to_string,
  )
}
